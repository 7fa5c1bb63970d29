use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::HarnessConfig;

/// Generator for the harness's random arrays. The seed is kept so a report
/// can name it and a run can be repeated.
pub struct InputGenerator {
    rng: StdRng,
    seed: u64,
    size: usize,
    max_value: i64,
}

impl InputGenerator {
    pub fn new(config: &HarnessConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            size: config.size,
            max_value: config.max_value,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// `size` values drawn uniformly from `1..=max_value`.
    pub fn array(&mut self) -> Vec<i64> {
        let max_value = self.max_value;
        (0..self.size).map(|_| self.rng.gen_range(1..=max_value)).collect()
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick<T: Copy>(&mut self, values: &[T]) -> Option<T> {
        if values.is_empty() {
            return None;
        }
        Some(values[self.rng.gen_range(0..values.len())])
    }
}
