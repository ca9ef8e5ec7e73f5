//! Error types.
//!
//! `IllegalMove` is the single engine-level failure: every rejected draw or
//! move reports one, and the board is left untouched. Running out of passes
//! is not an error; it shows up as `GameStatus::Stuck`.

use thiserror::Error;

use super::card::Card;
use crate::piles::PileId;

/// Why a move was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("there is no pile {0}")]
    NoSuchPile(PileId),

    #[error("{0} is empty")]
    EmptySource(PileId),

    #[error("the stock and waste are both empty")]
    EmptyStock,

    #[error("source and destination are the same pile ({0})")]
    SamePile(PileId),

    #[error("cannot move cards out of {0}")]
    InvalidSource(PileId),

    #[error("cannot move cards onto {0}")]
    InvalidDestination(PileId),

    #[error("must move at least one card")]
    ZeroCount,

    #[error("{pile} has only {available} face-up card(s), cannot move {requested}")]
    NotEnoughCards {
        pile: PileId,
        available: usize,
        requested: usize,
    },

    #[error("only one card at a time may move from or to {0}")]
    SingleCardOnly(PileId),

    #[error("the selected cards are not a descending alternating-color run")]
    NotARun,

    #[error("{card} cannot be placed on {onto} in a foundation")]
    FoundationRejects { card: Card, onto: FoundationTop },

    #[error("{card} cannot be placed on {onto} in the tableau")]
    TableauRejects { card: Card, onto: TableauTop },

    #[error("auto-complete needs an empty stock and waste and no face-down cards")]
    CannotAutoComplete,
}

/// What a rejected foundation move tried to land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoundationTop {
    Empty,
    Card(Card),
}

impl std::fmt::Display for FoundationTop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FoundationTop::Empty => write!(f, "an empty foundation (only aces start one)"),
            FoundationTop::Card(card) => write!(f, "{}", card.name()),
        }
    }
}

/// What a rejected tableau move tried to land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableauTop {
    Empty,
    Card(Card),
}

impl std::fmt::Display for TableauTop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableauTop::Empty => write!(f, "an empty column (only kings go there)"),
            TableauTop::Card(card) => write!(f, "{}", card.name()),
        }
    }
}

/// A broken board invariant. Only produced by `Board::validate`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("board holds {0} cards, expected 52")]
    WrongCount(usize),

    #[error("{0} appears more than once")]
    Duplicate(Card),

    #[error("{card} in {pile} has the wrong orientation")]
    Orientation { card: Card, pile: PileId },
}

/// Invalid game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("draw-pile size must be at least 1")]
    ZeroDrawSize,
}
