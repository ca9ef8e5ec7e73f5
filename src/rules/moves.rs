//! Move representation, validation and enumeration.
//!
//! A card transfer is validated against the board without touching it:
//! [`check_transfer`] either accepts the move or explains why not, so the
//! game can apply a move only once it is known to be legal.

use serde::{Deserialize, Serialize};

use super::table::{check_placement, is_run};
use crate::board::Board;
use crate::core::error::IllegalMove;
use crate::piles::{PileId, PileKind};

/// A single player move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Draw from the stock (or recycle the waste when the stock is empty).
    Draw,
    /// Move the top `count` cards of `from` onto `to`.
    Transfer { from: PileId, to: PileId, count: usize },
}

impl Move {
    /// Shorthand for a transfer.
    #[must_use]
    pub const fn transfer(from: PileId, to: PileId, count: usize) -> Self {
        Move::Transfer { from, to, count }
    }

    /// True if this move sends a card to a foundation.
    #[must_use]
    pub fn is_to_foundation(&self) -> bool {
        matches!(self, Move::Transfer { to: PileId::Foundation(_), .. })
    }

    /// True if the move can make progress rather than shuffle cards back and
    /// forth.
    ///
    /// Not progress: pulling a card back off a foundation, sliding a column
    /// that has nothing face-down under it onto an empty column, and
    /// splitting a tableau run when the card left behind cannot go to a
    /// foundation. Such moves are still legal; this only ranks hints.
    #[must_use]
    pub fn is_productive(&self, board: &Board) -> bool {
        let Move::Transfer { from, to, count } = *self else {
            return true;
        };
        match from.kind() {
            PileKind::Foundation => false,
            PileKind::Tableau if to.kind() == PileKind::Tableau => {
                let Some(pile) = board.pile(from) else { return false };
                let to_empty = board.pile(to).map_or(false, |p| p.is_empty());
                if count == pile.len() {
                    !to_empty
                } else if count == pile.face_up_count() {
                    true
                } else {
                    pile.peek(count).map_or(false, |exposed| {
                        PileId::foundations().any(|f| {
                            board
                                .pile(f)
                                .map_or(false, |fp| check_placement(f, fp.top(), exposed).is_ok())
                        })
                    })
                }
            }
            _ => true,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Draw => write!(f, "draw"),
            Move::Transfer { from, to, count: 1 } => write!(f, "move {} to {}", from, to),
            Move::Transfer { from, to, count } => write!(f, "move {} cards from {} to {}", count, from, to),
        }
    }
}

/// Check a card transfer against the board.
///
/// Validates, in order: pile existence, source/destination kinds, the
/// count, that the moved cards form a legal unit, and that the destination
/// accepts the unit's bottom card.
pub fn check_transfer(board: &Board, from: PileId, to: PileId, count: usize) -> Result<(), IllegalMove> {
    if from == to {
        return Err(IllegalMove::SamePile(from));
    }
    let source = board.pile(from).ok_or(IllegalMove::NoSuchPile(from))?;
    let dest = board.pile(to).ok_or(IllegalMove::NoSuchPile(to))?;

    if from.kind() == PileKind::Stock {
        return Err(IllegalMove::InvalidSource(from));
    }
    if matches!(to.kind(), PileKind::Stock | PileKind::Waste) {
        return Err(IllegalMove::InvalidDestination(to));
    }
    if count == 0 {
        return Err(IllegalMove::ZeroCount);
    }
    if source.is_empty() {
        return Err(IllegalMove::EmptySource(from));
    }
    if count > 1 {
        if matches!(from.kind(), PileKind::Waste | PileKind::Foundation) {
            return Err(IllegalMove::SingleCardOnly(from));
        }
        if to.kind() == PileKind::Foundation {
            return Err(IllegalMove::SingleCardOnly(to));
        }
    }

    let available = source.face_up_count();
    if count > available {
        return Err(IllegalMove::NotEnoughCards {
            pile: from,
            available,
            requested: count,
        });
    }
    if !is_run(source.top_cards(count)) {
        return Err(IllegalMove::NotARun);
    }

    let bottom = source.peek(count - 1).ok_or(IllegalMove::EmptySource(from))?;
    check_placement(to, dest.top(), bottom)
}

/// Every legal card transfer on the board, foundation moves first.
#[must_use]
pub fn legal_transfers(board: &Board) -> Vec<Move> {
    let sources = std::iter::once(PileId::Waste)
        .chain(PileId::tableaus())
        .chain(PileId::foundations());

    let mut to_foundation = Vec::new();
    let mut to_tableau = Vec::new();

    for from in sources {
        let Some(pile) = board.pile(from) else { continue };
        let max = match from.kind() {
            PileKind::Tableau => pile.face_up_count(),
            _ => pile.len().min(1),
        };
        for count in 1..=max {
            for to in PileId::foundations().chain(PileId::tableaus()) {
                if check_transfer(board, from, to, count).is_ok() {
                    let mv = Move::transfer(from, to, count);
                    if mv.is_to_foundation() {
                        to_foundation.push(mv);
                    } else {
                        to_tableau.push(mv);
                    }
                }
            }
        }
    }

    to_foundation.extend(to_tableau);
    to_foundation
}
