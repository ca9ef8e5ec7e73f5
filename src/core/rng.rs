//! Deterministic, seedable shuffling.
//!
//! Every deal is reproducible from its seed: the same seed always produces
//! the same deck order. A game started without a seed draws one from the
//! OS entropy source and remembers it so the deal can be replayed.
//!
//! ```
//! use klondike_engine::core::GameRng;
//!
//! let a = GameRng::new(7).shuffled_deck();
//! let b = GameRng::new(7).shuffled_deck();
//! assert_eq!(a, b);
//! assert_eq!(a.len(), 52);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::card::Card;

/// Deterministic RNG used for dealing.
///
/// ChaCha8 keeps shuffles identical across platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh random seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// A standard 52-card deck in shuffled order, face-down.
    #[must_use]
    pub fn shuffled_deck(&mut self) -> Vec<Card> {
        let mut deck = Card::standard_deck();
        self.shuffle(&mut deck);
        deck
    }
}
