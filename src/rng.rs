//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for an
//! optimization run. Each run owns its own instance, seeded exactly once, either
//! from an explicit seed or from system entropy. There is no process-wide random
//! state, so independent runs never interfere with each other.
//!
//! ## Example
//!
//! ```rust
//! use bwo::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let random_numbers = rng.fetch_uniform(-5.0, 5.0, 3);
//!
//! for number in random_numbers {
//!     assert!((-5.0..=5.0).contains(&number));
//! }
//! ```

use rand::{
    distributions::uniform::{SampleRange, SampleUniform},
    rngs::StdRng,
    Rng, SeedableRng,
};
use std::collections::VecDeque;

/// A wrapper around the `rand` crate's `StdRng` that provides the draws the
/// optimizer needs.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// Two generators built from the same seed produce the same sequence, which
    /// makes whole optimization runs reproducible.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates `num` values drawn uniformly from the closed interval `[from, to]`.
    ///
    /// `from == to` is allowed and yields `num` copies of that value.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`. Callers validate bounds beforehand.
    pub fn fetch_uniform(&mut self, from: f64, to: f64, num: usize) -> VecDeque<f64> {
        let mut uniform_numbers = VecDeque::with_capacity(num);
        uniform_numbers.extend((0..num).map(|_| self.rng.gen_range(from..=to)));
        uniform_numbers
    }

    /// Generates a random number in the given range.
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.rng.gen_range(range)
    }

    /// Picks an index uniformly from `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Returns `true` with probability `p`.
    ///
    /// `p` must lie in `[0, 1]`.
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_uniform_with_symmetric_range() {
        let mut rng = RandomNumberGenerator::new();
        let result = rng.fetch_uniform(-5.0, 5.0, 50);

        assert_eq!(result.len(), 50);
        for &num in result.iter() {
            assert!((-5.0..=5.0).contains(&num));
        }
    }

    #[test]
    fn test_fetch_uniform_with_degenerate_range() {
        let mut rng = RandomNumberGenerator::new();
        let result = rng.fetch_uniform(0.0, 0.0, 4);

        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|&num| num == 0.0));
    }

    #[test]
    fn test_fetch_uniform_with_empty_result() {
        let mut rng = RandomNumberGenerator::new();
        let result = rng.fetch_uniform(1.0, 2.0, 0);

        assert!(result.is_empty());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut rng1 = RandomNumberGenerator::from_seed(42);
        let mut rng2 = RandomNumberGenerator::from_seed(42);

        assert_eq!(rng1.fetch_uniform(0.0, 1.0, 5), rng2.fetch_uniform(0.0, 1.0, 5));
        assert_eq!(rng1.gen_index(100), rng2.gen_index(100));
    }

    #[test]
    fn test_clone() {
        let mut rng1 = RandomNumberGenerator::from_seed(42);
        let mut rng2 = rng1.clone();

        // Both RNGs should generate the same sequence after cloning
        let nums1 = rng1.fetch_uniform(0.0, 1.0, 5);
        let nums2 = rng2.fetch_uniform(0.0, 1.0, 5);

        assert_eq!(nums1, nums2);
    }

    #[test]
    fn test_gen_index_in_range() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        for _ in 0..100 {
            assert!(rng.gen_index(4) < 4);
        }
    }

    #[test]
    fn test_gen_bool_extremes() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        for _ in 0..100 {
            assert!(!rng.gen_bool(0.0));
            assert!(rng.gen_bool(1.0));
        }
    }
}
