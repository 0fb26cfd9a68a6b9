//! The episode's single source of chance.
//!
//! Deck shuffles, reshuffles, the random policy's picks and discard-phase
//! selection all draw from one `GameRng` owned by the game. A seed fully
//! determines an episode.
//!
//! ```
//! use bang_sim::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.pick_index(80), b.pick_index(80));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 generator.
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

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index into a collection of `len` items.
    ///
    /// Panics if `len` is 0.
    pub fn pick_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot pick from an empty collection");
        self.inner.gen_range(0..len)
    }

    /// Shuffle a pile in place.
    pub fn shuffle<T>(&mut self, pile: &mut [T]) {
        pile.shuffle(&mut self.inner);
    }

    /// `amount` distinct indices from `0..len`, uniformly at random.
    ///
    /// Panics if `amount > len`.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.inner, len, amount).into_vec()
    }
}
