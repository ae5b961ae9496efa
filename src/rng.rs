//! Randomness for mine placement and relocation.
//!
//! A thin wrapper over `SmallRng` so boards run from OS entropy in normal
//! play and from a fixed seed in tests and replays.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[derive(Clone)]
pub struct BoardRng {
    inner: SmallRng,
}

impl BoardRng {
    /// An RNG seeded from the operating system.
    pub fn new() -> Self {
        Self {
            inner: SmallRng::from_os_rng(),
        }
    }

    /// A deterministic RNG; the same seed yields the same picks forever.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Choose `count` distinct values from `candidates`, uniformly at random.
    ///
    /// # Panics
    ///
    /// Panics if `count > candidates.len()`.
    pub fn pick(&mut self, mut candidates: Vec<usize>, count: usize) -> Vec<usize> {
        assert!(
            count <= candidates.len(),
            "cannot pick {} cells from {} candidates",
            count,
            candidates.len()
        );
        candidates.shuffle(&mut self.inner);
        candidates.truncate(count);
        candidates
    }
}

impl Default for BoardRng {
    fn default() -> Self {
        Self::new()
    }
}
