#[cfg(test)]
#[path = "../../tests/unit/termination/max_iterations_test.rs"]
mod max_iterations_test;

use super::*;

/// A termination criteria which is in terminated state when maximum amount of iterations is reached.
pub struct MaxIterations {
    limit: usize,
}

impl MaxIterations {
    /// Creates a new instance of `MaxIterations`.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Termination for MaxIterations {
    fn is_termination(&self, state: &dyn SolverState) -> bool {
        state.iterations() >= self.limit
    }

    fn estimate(&self, state: &dyn SolverState) -> f64 {
        if self.limit == 0 { 1. } else { (state.iterations() as f64 / self.limit as f64).min(1.) }
    }
}
