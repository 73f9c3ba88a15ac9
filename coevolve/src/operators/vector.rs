#[cfg(test)]
#[path = "../../tests/unit/operators/vector_test.rs"]
mod vector_test;

use super::*;

/// Creates real vectors of fixed length with components uniformly distributed in the given range.
pub struct FloatVectorFactory {
    length: usize,
    min: f64,
    max: f64,
}

impl FloatVectorFactory {
    /// Creates a new instance of `FloatVectorFactory`.
    pub fn new(length: usize, min: f64, max: f64) -> Self {
        Self { length, min, max }
    }
}

impl Factory<Vec<f64>> for FloatVectorFactory {
    fn build(&self, amount: usize, random: &dyn Random) -> Vec<Vec<f64>> {
        (0..amount).map(|_| (0..self.length).map(|_| random.uniform_real(self.min, self.max)).collect()).collect()
    }
}

/// Adds gaussian noise to every component with given probability. Produces one child.
pub struct GaussianMutation {
    std_dev: f64,
    probability: f64,
    bounds: Option<(f64, f64)>,
}

impl GaussianMutation {
    /// Creates a new instance of `GaussianMutation` which mutates every component.
    pub fn new(std_dev: f64) -> Self {
        Self { std_dev, probability: 1., bounds: None }
    }

    /// Sets the probability to mutate a single component.
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Clamps mutated components to the given range.
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = Some((min, max));
        self
    }
}

impl GeneticOperator<Vec<f64>> for GaussianMutation {
    fn arity(&self) -> usize {
        1
    }

    fn apply(&self, parents: &[&Vec<f64>], random: &dyn Random) -> Vec<Vec<f64>> {
        parents
            .first()
            .map(|parent| {
                parent
                    .iter()
                    .map(|&value| {
                        if !random.is_hit(self.probability) {
                            return value;
                        }

                        let value = value + random.normal(0., self.std_dev);
                        match self.bounds {
                            Some((min, max)) => value.clamp(min, max),
                            None => value,
                        }
                    })
                    .collect()
            })
            .into_iter()
            .collect()
    }
}

/// Exchanges components of two parents with equal probability. Produces two children.
#[derive(Default)]
pub struct UniformCrossover;

impl GeneticOperator<Vec<f64>> for UniformCrossover {
    fn arity(&self) -> usize {
        2
    }

    fn apply(&self, parents: &[&Vec<f64>], random: &dyn Random) -> Vec<Vec<f64>> {
        let (left, right) = match parents {
            [left, right, ..] => (*left, *right),
            _ => return parents.iter().map(|&parent| parent.clone()).collect(),
        };

        let (first, second): (Vec<_>, Vec<_>) = left
            .iter()
            .zip(right.iter())
            .map(|(&a, &b)| if random.is_head_not_tails() { (a, b) } else { (b, a) })
            .unzip();

        vec![first, second]
    }
}
