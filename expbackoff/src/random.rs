use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

/// Uniform sampler backing the jitter window.
///
/// Implementations must return a value in the closed interval `[low, high]`
/// and accept the degenerate case `low == high`.
pub trait UniformSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

/// Production default, backed by the thread-local generator.
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl UniformSource for ThreadRngSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        thread_rng().gen_range(low..=high)
    }
}

/// Deterministic source for reproducible runs and tests.
#[derive(Debug)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl UniformSource for SeededSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.rng.gen_range(low..=high)
    }
}
