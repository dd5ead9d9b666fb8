//! # Random Source
//!
//! Seeded stream of uniform unit-interval floats.
//!
//! Backed by ChaCha8, which is portable and reproducible across platforms
//! and releases, unlike `StdRng`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::noise::CaveSeed;

/// Reproducible source of `f64` values in `[0, 1)`.
///
/// State is local to one generation call; independent sources never
/// share anything.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Creates a source from a seed.
    #[must_use]
    pub fn new(seed: CaveSeed) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed.value()),
        }
    }

    /// Next uniform float in `[0, 1)`.
    #[inline]
    pub fn next_float(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
