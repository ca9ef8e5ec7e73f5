//! Game engine facade.
//!
//! `Game` owns the board, the pass counter and a save slot, and exposes the
//! operations the interaction loop calls: draw, move, status queries, hints,
//! auto-complete, save and restore.

pub mod engine;

pub use engine::{DrawOutcome, Game, GameStatus, MoveReport, Snapshot};
