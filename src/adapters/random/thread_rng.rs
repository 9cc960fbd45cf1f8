//! RandomSource backed by the thread-local RNG of `rand`.

use rand::Rng;

use crate::ports::RandomSource;

/// Production entropy. Holds no state; each draw uses the calling thread's RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl ThreadRngSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRngSource {
    fn uniform_inclusive(&self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        rand::rng().random_range(low..=high)
    }

    fn unit(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_inclusive_stays_within_bounds() {
        let source = ThreadRngSource::new();
        for _ in 0..500 {
            let value = source.uniform_inclusive(1, 8);
            assert!((1..=8).contains(&value));
        }
    }

    #[test]
    fn uniform_inclusive_hits_both_ends() {
        let source = ThreadRngSource::new();
        let draws: Vec<u32> = (0..1000).map(|_| source.uniform_inclusive(1, 2)).collect();
        assert!(draws.contains(&1));
        assert!(draws.contains(&2));
    }

    #[test]
    fn degenerate_range_returns_low() {
        assert_eq!(ThreadRngSource::new().uniform_inclusive(1, 1), 1);
    }

    #[test]
    fn unit_is_half_open() {
        let source = ThreadRngSource::new();
        for _ in 0..500 {
            let value = source.unit();
            assert!((0.0..1.0).contains(&value));
        }
    }
}
