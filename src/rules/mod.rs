//! Klondike move rules.
//!
//! - `table`: which pile accepts which card, and what counts as a movable run
//! - `moves`: the `Move` type, transfer validation and legal-move enumeration
//!
//! Rules are pure functions of the board. The game calls into them before
//! mutating anything.

pub mod table;
pub mod moves;

pub use table::{accepts, check_placement, is_run};
pub use moves::{check_transfer, legal_transfers, Move};
