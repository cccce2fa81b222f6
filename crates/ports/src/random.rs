// crates/ports/src/random.rs

pub trait RandomSource: Send + Sync {
    /// Uniform integer in `min..=max`.
    fn number_in_range(&self, min: usize, max: usize) -> usize;
}
