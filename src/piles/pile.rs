//! Piles and pile addressing.
//!
//! Cards are stored bottom-first: index 0 is the bottom card, the last
//! element is the top. Storage is an `im::Vector`, so cloning a pile (and
//! therefore a whole board) shares structure instead of copying cards.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::card::Card;

/// Number of foundation piles.
pub const NUM_FOUNDATIONS: usize = 4;

/// Number of tableau columns.
pub const NUM_TABLEAU: usize = 7;

/// The four kinds of pile on a Klondike board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    /// Face-down draw source.
    Stock,
    /// Drawn cards, face-up, top accessible.
    Waste,
    /// Single-suit ascending A→K.
    Foundation,
    /// Working column of face-down cards under a face-up run.
    Tableau,
}

/// Address of a single pile on the board.
///
/// Foundation and tableau indices are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileId {
    Stock,
    Waste,
    Foundation(u8),
    Tableau(u8),
}

impl PileId {
    /// The kind of pile this id refers to.
    #[must_use]
    pub const fn kind(self) -> PileKind {
        match self {
            PileId::Stock => PileKind::Stock,
            PileId::Waste => PileKind::Waste,
            PileId::Foundation(_) => PileKind::Foundation,
            PileId::Tableau(_) => PileKind::Tableau,
        }
    }

    /// True if the index is within the board's bounds.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        match self {
            PileId::Stock | PileId::Waste => true,
            PileId::Foundation(i) => (i as usize) < NUM_FOUNDATIONS,
            PileId::Tableau(i) => (i as usize) < NUM_TABLEAU,
        }
    }

    /// All foundation ids, in order.
    pub fn foundations() -> impl Iterator<Item = PileId> {
        (0..NUM_FOUNDATIONS as u8).map(PileId::Foundation)
    }

    /// All tableau ids, in order.
    pub fn tableaus() -> impl Iterator<Item = PileId> {
        (0..NUM_TABLEAU as u8).map(PileId::Tableau)
    }

    /// Every pile on the board: stock, waste, foundations, tableau.
    pub fn all() -> impl Iterator<Item = PileId> {
        [PileId::Stock, PileId::Waste]
            .into_iter()
            .chain(Self::foundations())
            .chain(Self::tableaus())
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileId::Stock => write!(f, "the stock"),
            PileId::Waste => write!(f, "the waste"),
            PileId::Foundation(i) => write!(f, "F{}", i),
            PileId::Tableau(i) => write!(f, "T{}", i),
        }
    }
}

/// An ordered sequence of cards, tagged with its kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pile {
    kind: PileKind,
    cards: Vector<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new(kind: PileKind) -> Self {
        Self {
            kind,
            cards: Vector::new(),
        }
    }

    /// Create a pile holding `cards`, bottom first.
    pub fn from_cards(kind: PileKind, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            kind,
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PileKind {
        self.kind
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// The card `depth` positions below the top (0 = top).
    #[must_use]
    pub fn peek(&self, depth: usize) -> Option<Card> {
        let len = self.cards.len();
        if depth < len {
            self.cards.get(len - 1 - depth).copied()
        } else {
            None
        }
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> + ExactSizeIterator + '_ {
        self.cards.iter()
    }

    /// The top `count` cards, bottom to top. Clamped to the pile size.
    pub fn top_cards(&self, count: usize) -> impl Iterator<Item = &Card> + '_ {
        let skip = self.cards.len().saturating_sub(count);
        self.cards.iter().skip(skip)
    }

    /// Number of consecutive face-up cards at the top of the pile.
    #[must_use]
    pub fn face_up_count(&self) -> usize {
        self.cards.iter().rev().take_while(|c| c.is_face_up()).count()
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Remove the top `count` cards, keeping their order.
    ///
    /// Removes everything if `count` exceeds the pile size.
    pub fn take_top(&mut self, count: usize) -> Vector<Card> {
        let at = self.cards.len().saturating_sub(count);
        self.cards.split_off(at)
    }

    /// Place `cards` on top, keeping their order.
    pub fn put(&mut self, cards: Vector<Card>) {
        self.cards.append(cards);
    }

    /// Remove every card.
    pub fn clear(&mut self) -> Vector<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Turn the top card face-up if it is face-down.
    ///
    /// Returns the card if it was flipped.
    pub fn reveal_top(&mut self) -> Option<Card> {
        let last = self.cards.len().checked_sub(1)?;
        let card = self.cards.get_mut(last)?;
        if card.is_face_up() {
            return None;
        }
        card.set_face_up(true);
        Some(*card)
    }
}
