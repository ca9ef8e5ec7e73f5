//! Core types: cards, RNG, configuration, errors.
//!
//! Everything here is independent of pile layout and move rules.

pub mod card;
pub mod rng;
pub mod config;
pub mod error;

pub use card::{Card, Color, Rank, Suit, DECK_SIZE, RANKS_PER_SUIT};
pub use rng::GameRng;
pub use config::{GameConfig, DEFAULT_DRAW_SIZE};
pub use error::{ConfigError, FoundationTop, IllegalMove, InvariantError, TableauTop};
