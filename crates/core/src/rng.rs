//! RNG module - tile placement and tile value selection
//!
//! Wraps a seedable ChaCha generator so games are reproducible from a single
//! `u64` seed. Games without an explicit seed draw one from OS entropy, which
//! keeps the seed available for logging and replays.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{BASE_TILE, FOUR_TILE_PERCENT, RARE_TILE};

/// Random source for spawning tiles.
#[derive(Debug, Clone)]
pub struct TileRng {
    seed: u64,
    inner: ChaCha8Rng,
}

impl TileRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `[0, len)`.
    ///
    /// `len` must be non-zero.
    pub fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.inner.gen_range(0..len)
    }

    /// Value for a newly spawned tile: 2 with 90%, 4 with 10% probability.
    pub fn tile_value(&mut self) -> u64 {
        if self.inner.gen_range(0..100) < FOUR_TILE_PERCENT {
            RARE_TILE
        } else {
            BASE_TILE
        }
    }
}

impl Default for TileRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
