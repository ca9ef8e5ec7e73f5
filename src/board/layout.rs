//! The Klondike board: every pile, dealt from one 52-card deck.
//!
//! ## Invariant
//!
//! Every one of the 52 cards is in exactly one pile exactly once, at all
//! times. Card moves go through [`Board::transfer`], which removes from one
//! pile and appends to another in a single step, so nothing is ever
//! duplicated or dropped. [`Board::validate`] checks the invariant along
//! with pile orientation rules.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::{Card, DECK_SIZE, RANKS_PER_SUIT};
use crate::core::error::InvariantError;
use crate::core::rng::GameRng;
use crate::piles::{Pile, PileId, PileKind, NUM_FOUNDATIONS, NUM_TABLEAU};

/// All piles of one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    stock: Pile,
    waste: Pile,
    foundations: [Pile; NUM_FOUNDATIONS],
    tableau: [Pile; NUM_TABLEAU],
    /// Cards of the most recent draw still on top of the waste.
    fan: usize,
}

impl Board {
    /// Deal a deck in the standard layout.
    ///
    /// Cards are taken from the end of `deck` (its top). Tableau column `i`
    /// receives `i + 1` cards with only the last one face-up; the rest form
    /// the stock, face-down, in their original order.
    ///
    /// Fails unless `deck` holds each of the 52 cards exactly once.
    pub fn deal(deck: Vec<Card>) -> Result<Self, InvariantError> {
        if deck.len() != DECK_SIZE {
            return Err(InvariantError::WrongCount(deck.len()));
        }
        let board = Self::lay_out(deck);
        board.validate()?;
        Ok(board)
    }

    /// Shuffle a standard deck with `rng` and deal it.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        Self::lay_out(rng.shuffled_deck())
    }

    fn lay_out(mut deck: Vec<Card>) -> Self {
        let tableau = std::array::from_fn(|i| {
            let mut column = Pile::new(PileKind::Tableau);
            for _ in 0..=i {
                if let Some(mut card) = deck.pop() {
                    card.set_face_up(false);
                    column.push(card);
                }
            }
            column.reveal_top();
            column
        });

        for card in deck.iter_mut() {
            card.set_face_up(false);
        }

        Self {
            stock: Pile::from_cards(PileKind::Stock, deck),
            waste: Pile::new(PileKind::Waste),
            foundations: std::array::from_fn(|_| Pile::new(PileKind::Foundation)),
            tableau,
            fan: 0,
        }
    }

    /// Build a board from explicit piles. Used to set up specific positions.
    ///
    /// The fan is set to the top card of a non-empty waste. Call
    /// [`Board::validate`] to check the result.
    #[must_use]
    pub fn from_piles(
        stock: Vec<Card>,
        waste: Vec<Card>,
        foundations: [Vec<Card>; NUM_FOUNDATIONS],
        tableau: [Vec<Card>; NUM_TABLEAU],
    ) -> Self {
        let fan = usize::from(!waste.is_empty());
        Self {
            stock: Pile::from_cards(PileKind::Stock, stock),
            waste: Pile::from_cards(PileKind::Waste, waste),
            foundations: foundations.map(|f| Pile::from_cards(PileKind::Foundation, f)),
            tableau: tableau.map(|t| Pile::from_cards(PileKind::Tableau, t)),
            fan,
        }
    }

    /// Get a pile by id. `None` if the index is out of range.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        match id {
            PileId::Stock => Some(&self.stock),
            PileId::Waste => Some(&self.waste),
            PileId::Foundation(i) => self.foundations.get(i as usize),
            PileId::Tableau(i) => self.tableau.get(i as usize),
        }
    }

    pub(crate) fn pile_mut(&mut self, id: PileId) -> Option<&mut Pile> {
        match id {
            PileId::Stock => Some(&mut self.stock),
            PileId::Waste => Some(&mut self.waste),
            PileId::Foundation(i) => self.foundations.get_mut(i as usize),
            PileId::Tableau(i) => self.tableau.get_mut(i as usize),
        }
    }

    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    #[must_use]
    pub fn foundations(&self) -> &[Pile; NUM_FOUNDATIONS] {
        &self.foundations
    }

    #[must_use]
    pub fn tableau(&self) -> &[Pile; NUM_TABLEAU] {
        &self.tableau
    }

    /// The visible part of the waste: the most recent draw, bottom to top.
    pub fn waste_fan(&self) -> impl Iterator<Item = &Card> + '_ {
        self.waste.top_cards(self.fan)
    }

    /// Total number of cards across all piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        PileId::all()
            .filter_map(|id| self.pile(id))
            .map(Pile::len)
            .sum()
    }

    /// True iff every foundation holds a full suit.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(|f| f.len() == RANKS_PER_SUIT)
    }

    /// Check the card-conservation invariant and pile orientation.
    pub fn validate(&self) -> Result<(), InvariantError> {
        let count = self.card_count();
        if count != DECK_SIZE {
            return Err(InvariantError::WrongCount(count));
        }

        let mut seen = FxHashSet::default();
        for id in PileId::all() {
            let Some(pile) = self.pile(id) else { continue };
            for &card in pile.iter() {
                if !seen.insert(card) {
                    return Err(InvariantError::Duplicate(card));
                }
            }
            Self::check_orientation(id, pile)?;
        }
        Ok(())
    }

    fn check_orientation(id: PileId, pile: &Pile) -> Result<(), InvariantError> {
        let misplaced = match pile.kind() {
            PileKind::Stock => pile.iter().find(|c| c.is_face_up()),
            PileKind::Waste | PileKind::Foundation => pile.iter().find(|c| !c.is_face_up()),
            // Face-down cards only below face-up ones, and a face-up top.
            PileKind::Tableau => {
                let hidden = pile.len() - pile.face_up_count();
                pile.iter()
                    .take(hidden)
                    .find(|c| c.is_face_up())
                    .or_else(|| pile.iter().last().filter(|c| !c.is_face_up()))
            }
        };
        match misplaced {
            Some(&card) => Err(InvariantError::Orientation { card, pile: id }),
            None => Ok(()),
        }
    }

    // === Mutation (crate-internal; the game validates before calling) ===

    /// Move the top `count` cards from one pile onto another, in order.
    pub(crate) fn transfer(&mut self, from: PileId, to: PileId, count: usize) {
        if self.pile(to).is_none() {
            return;
        }
        let moved = match self.pile_mut(from) {
            Some(pile) => pile.take_top(count),
            None => return,
        };
        if from == PileId::Waste {
            self.fan = self.fan.saturating_sub(moved.len());
            if self.fan == 0 && !self.waste.is_empty() {
                self.fan = 1;
            }
        }
        if let Some(pile) = self.pile_mut(to) {
            pile.put(moved);
        }
    }

    /// Turn up to `count` cards from the stock onto the waste.
    pub(crate) fn turn_stock(&mut self, count: usize) -> SmallVec<[Card; 3]> {
        let mut drawn = SmallVec::new();
        // Stock top first, so the last card turned ends up on top of the waste.
        for _ in 0..count {
            let Some(mut card) = self.stock.pop() else { break };
            card.set_face_up(true);
            self.waste.push(card);
            drawn.push(card);
        }
        self.fan = drawn.len();
        drawn
    }

    /// Turn the waste over to form a new stock.
    ///
    /// The waste's top becomes the stock's bottom, so cards come out again
    /// in the order they were first drawn.
    pub(crate) fn recycle_waste(&mut self) -> usize {
        let mut cards = self.waste.clear();
        let count = cards.len();
        while let Some(mut card) = cards.pop_back() {
            card.set_face_up(false);
            self.stock.push(card);
        }
        self.fan = 0;
        count
    }

    /// Reveal the top card of a tableau column if it is face-down.
    pub(crate) fn reveal(&mut self, id: PileId) -> Option<Card> {
        match id {
            PileId::Tableau(_) => self.pile_mut(id)?.reveal_top(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::shuffled(&mut GameRng::new(42))
    }

    #[test]
    fn test_deal_layout() {
        let board = board();

        for (i, column) in board.tableau().iter().enumerate() {
            assert_eq!(column.len(), i + 1);
            assert_eq!(column.face_up_count(), 1);
        }
        assert_eq!(board.stock().len(), 24);
        assert!(board.stock().iter().all(|c| !c.is_face_up()));
        assert!(board.waste().is_empty());
        assert!(board.foundations().iter().all(Pile::is_empty));
        assert_eq!(board.card_count(), DECK_SIZE);
        assert_eq!(board.validate(), Ok(()));
    }

    #[test]
    fn test_deal_is_deterministic() {
        let a = board();
        let b = board();
        let names = |b: &Board| -> Vec<String> { b.stock().iter().map(|c| c.name()).collect() };
        assert_eq!(names(&a), names(&b));

        let c = Board::shuffled(&mut GameRng::new(43));
        assert_ne!(names(&a), names(&c));
    }

    #[test]
    fn test_deal_takes_from_top_of_deck() {
        let deck = Card::standard_deck();
        let last = *deck.last().unwrap();
        let board = Board::deal(deck).unwrap();
        assert_eq!(board.tableau()[0].top(), Some(last));
    }

    #[test]
    fn test_deal_rejects_bad_decks() {
        let mut short = Card::standard_deck();
        short.pop();
        assert_eq!(Board::deal(short).err(), Some(InvariantError::WrongCount(51)));

        let mut doubled = Card::standard_deck();
        doubled[1] = doubled[0];
        assert_eq!(
            Board::deal(doubled).err(),
            Some(InvariantError::Duplicate(Card::standard_deck()[0]))
        );
    }

    #[test]
    fn test_turn_stock_and_recycle() {
        let mut board = board();
        let stock_before: Vec<String> = board.stock().iter().map(|c| c.name()).collect();

        let drawn = board.turn_stock(3);
        assert_eq!(drawn.len(), 3);
        assert!(drawn.iter().all(|c| c.is_face_up()));
        assert_eq!(board.waste().top(), Some(drawn[2]));
        assert_eq!(board.waste_fan().count(), 3);

        while !board.stock().is_empty() {
            board.turn_stock(3);
        }
        assert_eq!(board.recycle_waste(), 24);
        assert!(board.waste().is_empty());
        assert!(board.stock().iter().all(|c| !c.is_face_up()));

        let stock_after: Vec<String> = board.stock().iter().map(|c| c.name()).collect();
        assert_eq!(stock_before, stock_after);
        assert_eq!(board.validate(), Ok(()));
    }

    #[test]
    fn test_validate_detects_count() {
        let mut board = board();
        board.stock.pop();
        assert_eq!(board.validate(), Err(InvariantError::WrongCount(51)));
    }

    #[test]
    fn test_validate_detects_duplicate() {
        let mut board = board();
        let card = board.stock.pop().unwrap();
        let dup = board.tableau[6].iter().next().copied().unwrap();
        board.stock.push(dup);
        assert_ne!(card, dup);
        assert_eq!(board.validate(), Err(InvariantError::Duplicate(dup)));
    }

    #[test]
    fn test_validate_detects_orientation() {
        let mut board = board();
        board.stock.reveal_top();
        assert!(matches!(
            board.validate(),
            Err(InvariantError::Orientation { pile: PileId::Stock, .. })
        ));
    }

    #[test]
    fn test_waste_fan_shrinks_as_cards_leave() {
        let mut board = board();
        board.turn_stock(3);
        board.transfer(PileId::Waste, PileId::Foundation(0), 1);
        assert_eq!(board.waste_fan().count(), 2);
        board.transfer(PileId::Waste, PileId::Foundation(0), 1);
        board.transfer(PileId::Waste, PileId::Foundation(0), 1);
        assert_eq!(board.waste_fan().count(), 0);

        board.turn_stock(3);
        board.turn_stock(3);
        board.transfer(PileId::Waste, PileId::Foundation(1), 1);
        board.transfer(PileId::Waste, PileId::Foundation(1), 1);
        board.transfer(PileId::Waste, PileId::Foundation(1), 1);
        // Earlier draws resurface one at a time.
        assert_eq!(board.waste_fan().count(), 1);
    }

    #[test]
    fn test_serde_round_trip_keeps_layout() {
        let board = board();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back.card_count(), DECK_SIZE);
        assert_eq!(back.validate(), Ok(()));
        assert_eq!(back.tableau()[6].top(), board.tableau()[6].top());
    }
}
