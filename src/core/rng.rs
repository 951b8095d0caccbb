//! Deterministic random number generation.
//!
//! Randomness enters a match in three places: home-region placement at
//! setup, the Easy AI, and the timeout fallback. All of them draw from a
//! `GameRng` derived from the match seed, so a seed replays a whole match.
//!
//! ```
//! use rps_tactics::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut ai_rng = rng.fork();
//!
//! let mut again = GameRng::new(42);
//! let mut ai_again = again.fork();
//! assert_eq!(ai_rng.gen_range_usize(0..100), ai_again.gen_range_usize(0..100));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 RNG with deterministic forking.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent generator.
    ///
    /// The n-th fork of a given seed is always the same stream, and forking
    /// does not disturb this generator's own sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Uniformly pick an element, `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
