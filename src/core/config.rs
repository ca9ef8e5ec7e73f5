//! Game configuration.
//!
//! A game is configured at startup by:
//! - the draw-pile size (how many cards one draw turns over)
//! - the maximum number of passes through the stock (`None` = unlimited)
//! - an optional deal seed (random when absent)

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default number of cards turned over per draw.
pub const DEFAULT_DRAW_SIZE: usize = 3;

/// Complete game configuration.
///
/// ```
/// use klondike_engine::core::GameConfig;
///
/// let config = GameConfig::new().with_draw_size(1).with_max_loops(2);
/// assert_eq!(config.draw_size, 1);
/// assert_eq!(config.max_loops, Some(2));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards moved from stock to waste per draw.
    pub draw_size: usize,

    /// Maximum number of waste-to-stock recycles. `None` for unlimited.
    pub max_loops: Option<u32>,

    /// Deal seed. `None` picks a random one when the game starts.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            draw_size: DEFAULT_DRAW_SIZE,
            max_loops: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration (draw 3, unlimited passes).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the draw-pile size.
    #[must_use]
    pub fn with_draw_size(mut self, size: usize) -> Self {
        self.draw_size = size;
        self
    }

    /// Limit the number of passes through the stock.
    #[must_use]
    pub fn with_max_loops(mut self, loops: u32) -> Self {
        self.max_loops = Some(loops);
        self
    }

    /// Set or clear the pass limit.
    #[must_use]
    pub fn with_loop_limit(mut self, loops: Option<u32>) -> Self {
        self.max_loops = loops;
        self
    }

    /// Fix the deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.draw_size == 0 {
            return Err(ConfigError::ZeroDrawSize);
        }
        Ok(())
    }

    /// True if one more recycle is allowed after `passes` recycles.
    #[must_use]
    pub fn allows_pass(&self, passes: u32) -> bool {
        self.max_loops.map_or(true, |max| passes < max)
    }
}
