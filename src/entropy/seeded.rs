use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::entropy::BitSource;
use crate::io::configuration::COIN_THRESHOLD;
use crate::io::error::Result;

/// Bit source backed by a seeded general-purpose PRNG
///
/// Each decision is a uniform draw compared against one half, so a source
/// replays identically for the same integer seed.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Create a deterministic source from an integer seed
    pub fn new(seed: i64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed as u64),
        }
    }
}

impl BitSource for SeededSource {
    fn next_bit(&mut self) -> bool {
        self.rng.random::<f64>() > COIN_THRESHOLD
    }

    // Non-negative 63-bit draw; advances the generator like any other decision
    fn seed_value(&mut self) -> Result<i64> {
        Ok(self.rng.random_range(0..=i64::MAX))
    }
}
