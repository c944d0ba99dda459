use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator that will generate `num` random values in `0..max`.
/// The same seed always produces the same sequence
pub struct RandomGenerator {
    remaining: usize,
    max: i64,
    rng: Pcg64,
}

impl RandomGenerator {
    pub fn new(num: usize, max: i64, seed: u64) -> RandomGenerator {
        assert!(max > 0, "Invalid max {}: must be positive", max);
        RandomGenerator {
            remaining: num,
            max,
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for RandomGenerator {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.rng.gen_range(0, self.max))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for RandomGenerator {}

impl ExactSizeIterator for RandomGenerator {}
