//! Rendering data: a read-only snapshot of what the player can see.

use serde::{Deserialize, Serialize};

use super::layout::Board;
use crate::core::card::Card;

/// Everything the interaction loop needs to draw the board.
///
/// Cards keep their face-up flag; face-down cards must be shown hidden.
/// Two views are equal only if every card also matches in orientation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardView {
    /// Top card of each foundation.
    pub foundations: Vec<Option<Card>>,
    /// Each tableau column, bottom to top.
    pub tableau: Vec<Vec<Card>>,
    /// Cards left in the stock.
    pub stock_len: usize,
    /// Cards in the waste, including those hidden under the fan.
    pub waste_len: usize,
    /// Visible waste cards, bottom to top; the last one is playable.
    pub waste_fan: Vec<Card>,
    /// Passes made through the stock so far.
    pub passes: u32,
    /// Pass limit, `None` for unlimited.
    pub max_loops: Option<u32>,
}

impl BoardView {
    /// Capture the visible state of `board`.
    #[must_use]
    pub fn capture(board: &Board, passes: u32, max_loops: Option<u32>) -> Self {
        Self {
            foundations: board.foundations().iter().map(|f| f.top()).collect(),
            tableau: board
                .tableau()
                .iter()
                .map(|column| column.iter().copied().collect())
                .collect(),
            stock_len: board.stock().len(),
            waste_len: board.waste().len(),
            waste_fan: board.waste_fan().copied().collect(),
            passes,
            max_loops,
        }
    }

    /// Height of the tallest tableau column.
    #[must_use]
    pub fn tallest_column(&self) -> usize {
        self.tableau.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl PartialEq for BoardView {
    fn eq(&self, other: &Self) -> bool {
        fn same_cards(a: &[Card], b: &[Card]) -> bool {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_face(*y))
        }

        self.stock_len == other.stock_len
            && self.waste_len == other.waste_len
            && self.passes == other.passes
            && self.max_loops == other.max_loops
            && same_cards(&self.waste_fan, &other.waste_fan)
            && self.foundations.len() == other.foundations.len()
            && self.foundations.iter().zip(&other.foundations).all(|pair| match pair {
                (Some(a), Some(b)) => a.same_face(*b),
                (None, None) => true,
                _ => false,
            })
            && self.tableau.len() == other.tableau.len()
            && self
                .tableau
                .iter()
                .zip(&other.tableau)
                .all(|(a, b)| same_cards(a, b))
    }
}
