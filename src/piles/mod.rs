//! Pile system for card locations.
//!
//! A Klondike board has a fixed layout: one stock, one waste, four
//! foundations and seven tableau columns. Each pile is tagged with its
//! `PileKind`; `PileId` addresses a specific pile.

pub mod pile;

pub use pile::{Pile, PileId, PileKind, NUM_FOUNDATIONS, NUM_TABLEAU};
