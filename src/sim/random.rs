//! Seeded random number generation
//!
//! The simulation owns exactly one generator, seeded once at construction and
//! advanced only by simulation calls, so a seed plus an input sequence fully
//! determines a run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

#[derive(Debug, Clone)]
pub struct Random {
    seed: u64,
    rng: Pcg32,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// The seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform float in [0, 1)
    pub fn float(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Uniform float between `a` and `b` (inclusive). Order of bounds does not matter.
    pub fn range(&mut self, a: f32, b: f32) -> f32 {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        self.rng.random_range(lo..=hi)
    }

    /// Uniform index in [0, len). `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        assert!(len > 0, "Random::index called with empty range");
        self.rng.random_range(0..len)
    }

    /// Pick one of two values with equal probability
    pub fn choose<T>(&mut self, a: T, b: T) -> T {
        if self.rng.random_bool(0.5) { a } else { b }
    }

    /// Pick a random element from a slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.index(items.len())])
        }
    }
}
