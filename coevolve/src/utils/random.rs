#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::index::sample;
use rand_distr::Normal;
use std::sync::{Mutex, PoisonError};

/// Provides the way to use randomized values in generic way.
pub trait Random: Send + Sync {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: f64, max: f64) -> f64;

    /// Flips a coin and returns true if it is "heads", false otherwise.
    fn is_head_not_tails(&self) -> bool;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: f64) -> bool;

    /// Returns an index from collected with probability weight.
    /// Uses exponential distribution where the weights are the rate of the distribution (lambda)
    /// and selects the smallest sampled value.
    fn weighted(&self, weights: &[usize]) -> usize;

    /// Returns `amount` distinct indices from `[0, length)` range in random order.
    fn sample_indices(&self, length: usize, amount: usize) -> Vec<usize>;

    /// Produces a normally distributed value with given mean and standard deviation.
    fn normal(&self, mean: f64, std_dev: f64) -> f64;
}

/// A default random implementation backed by a small, fast RNG. Repeatable when created
/// with a seed: the same sequence of calls produces the same values.
pub struct DefaultRandom {
    rng: Mutex<SmallRng>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` which produces a repeatable sequence.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { rng: Mutex::new(SmallRng::seed_from_u64(seed)) }
    }

    fn with_rng<R>(&self, action: impl FnOnce(&mut SmallRng) -> R) -> R {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        action(&mut rng)
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Mutex::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.with_rng(|rng| rng.gen_range(min..=max))
    }

    fn uniform_real(&self, min: f64, max: f64) -> f64 {
        if (min - max).abs() < f64::EPSILON {
            return min;
        }

        assert!(min < max);
        self.with_rng(|rng| rng.gen_range(min..max))
    }

    fn is_head_not_tails(&self) -> bool {
        self.with_rng(|rng| rng.gen_bool(0.5))
    }

    fn is_hit(&self, probability: f64) -> bool {
        self.with_rng(|rng| rng.gen_bool(probability.clamp(0., 1.)))
    }

    fn weighted(&self, weights: &[usize]) -> usize {
        weights
            .iter()
            .zip(0_usize..)
            .filter(|(weight, _)| **weight > 0)
            .map(|(&weight, index)| (-self.uniform_real(0., 1.).ln() / weight as f64, index))
            .min_by(|a, b| super::compare_floats(a.0, b.0))
            .map_or(0, |(_, index)| index)
    }

    fn sample_indices(&self, length: usize, amount: usize) -> Vec<usize> {
        self.with_rng(|rng| sample(rng, length, amount.min(length)).into_vec())
    }

    fn normal(&self, mean: f64, std_dev: f64) -> f64 {
        match Normal::new(mean, std_dev.abs()) {
            Ok(distribution) => self.with_rng(|rng| distribution.sample(rng)),
            Err(_) => mean,
        }
    }
}
