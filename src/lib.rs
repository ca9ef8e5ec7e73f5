//! # klondike-engine
//!
//! Klondike solitaire: the card and board model, the move-legality rules,
//! and a terminal front end.
//!
//! ## Design Principles
//!
//! 1. **Validated Mutation**: The board changes only through `Game`
//!    operations, and an operation either applies completely or returns an
//!    `IllegalMove` and leaves the board untouched.
//!
//! 2. **Explicit Rule Table**: Destination acceptance is one function over
//!    `(PileKind, top card, moved card)`, not scattered through the engine.
//!
//! 3. **Configuration Over Convention**: Draw-pile size, pass limit and the
//!    deal seed come from `GameConfig`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Piles are `im::Vector`s, so cloning a
//!   board for save/restore or look-ahead is cheap.
//!
//! - **Deterministic Deals**: Shuffles use a seeded ChaCha8 RNG; the same
//!   seed and config always deal the same game.
//!
//! - **Every Card Once**: `Board::validate` checks that the 52 cards each
//!   appear in exactly one pile with a legal orientation.
//!
//! ## Modules
//!
//! - `core`: Cards, RNG, configuration, error types
//! - `piles`: Pile kinds, pile addresses and the pile container
//! - `board`: The dealt layout and its rendering snapshot
//! - `rules`: Acceptance rule table, runs, move enumeration
//! - `game`: The engine facade (`draw`, `move_cards`, `is_won`, `is_stuck`, ...)
//! - `cli`: Flags, command parsing, rendering and the play loop

pub mod core;
pub mod piles;
pub mod board;
pub mod rules;
pub mod game;
pub mod cli;

// Re-export commonly used types
pub use crate::core::{
    Card, Color, Rank, Suit, DECK_SIZE,
    GameRng,
    GameConfig,
    ConfigError, IllegalMove, InvariantError,
};

pub use crate::piles::{Pile, PileId, PileKind, NUM_FOUNDATIONS, NUM_TABLEAU};

pub use crate::board::{Board, BoardView};

pub use crate::rules::{accepts, is_run, Move};

pub use crate::game::{DrawOutcome, Game, GameStatus, MoveReport, Snapshot};
