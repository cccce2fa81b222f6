// crates/infra/src/random.rs
use feedjoin_ports::RandomSource;
use rand::Rng;

/// [`RandomSource`] backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn number_in_range(&self, min: usize, max: usize) -> usize {
        if min >= max {
            return min;
        }
        rand::rng().random_range(min..=max)
    }
}
