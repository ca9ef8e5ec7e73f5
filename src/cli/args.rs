//! Command-line flags for the `klondike` binary.

use clap::Parser;

use crate::core::config::{GameConfig, DEFAULT_DRAW_SIZE};

/// Klondike solitaire in the terminal.
#[derive(Debug, Parser)]
#[command(name = "klondike", version, about)]
pub struct Args {
    /// Cards turned from the stock per draw.
    #[arg(long, default_value_t = DEFAULT_DRAW_SIZE)]
    pub draw_pile_size: usize,

    /// Times the waste may be turned back into the stock (default: unlimited).
    #[arg(long)]
    pub max_loops: Option<u32>,

    /// Seed for the shuffle; replays the same deal.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print suits without color.
    #[arg(long)]
    pub no_color: bool,

    /// Log engine activity at debug level.
    #[arg(short = 'g', long)]
    pub debug: bool,
}

impl Args {
    /// The game configuration these flags describe.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        let config = GameConfig::new()
            .with_draw_size(self.draw_pile_size)
            .with_loop_limit(self.max_loops);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    #[must_use]
    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}
