//! Text rendering of a [`BoardView`].

use colored::Colorize;

use crate::board::BoardView;
use crate::core::card::{Card, Color};

const CELL: usize = 4;

/// Turns board views into text, optionally with colored suits.
#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Renderer without escape codes.
    #[must_use]
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Render the whole board.
    ///
    /// ```text
    ///     F0  F1  F2  F3
    ///     AH  --  --  --
    ///
    /// Stock: 21  Waste (3): 4C 7D QS  Passes: 0/unlimited
    ///
    ///     T0  T1  T2  T3  T4  T5  T6
    ///     KS  ??  ??  ??  ??  ??  ??
    ///         5H  ??  ??  ??  ??  ??
    /// ```
    #[must_use]
    pub fn render(&self, view: &BoardView) -> String {
        let mut lines = Vec::new();

        lines.push(header("F", view.foundations.len()));
        lines.push(row(view.foundations.iter().map(|top| match top {
            Some(card) => self.cell(*card),
            None => pad("--"),
        })));
        lines.push(String::new());

        let fan: Vec<String> = view.waste_fan.iter().map(|c| self.paint(*c, c.to_string())).collect();
        let limit = view
            .max_loops
            .map_or_else(|| "unlimited".to_string(), |n| n.to_string());
        lines.push(format!(
            "Stock: {}  Waste ({}): {}  Passes: {}/{}",
            view.stock_len,
            view.waste_len,
            if fan.is_empty() { "--".to_string() } else { fan.join(" ") },
            view.passes,
            limit
        ));
        lines.push(String::new());

        lines.push(header("T", view.tableau.len()));
        for depth in 0..view.tallest_column() {
            lines.push(row(view.tableau.iter().map(|column| match column.get(depth) {
                Some(card) => self.cell(*card),
                None => pad(""),
            })));
        }

        lines
            .iter()
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn cell(&self, card: Card) -> String {
        self.paint(card, pad(&card.to_string()))
    }

    fn paint(&self, card: Card, text: String) -> String {
        if !self.color || !card.is_face_up() {
            return text;
        }
        match card.color() {
            Color::Red => text.red().to_string(),
            Color::Black => text.blue().to_string(),
        }
    }
}

fn pad(text: &str) -> String {
    format!("{:>width$}", text, width = CELL)
}

fn header(prefix: &str, count: usize) -> String {
    row((0..count).map(|i| pad(&format!("{prefix}{i}"))))
}

fn row(cells: impl Iterator<Item = String>) -> String {
    let mut line = String::from("  ");
    for cell in cells {
        line.push_str(&cell);
    }
    line
}
