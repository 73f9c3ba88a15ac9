use super::*;

/// A termination criteria which is in terminated state when the budget of quality evaluations
/// is exhausted.
pub struct MaxEvaluations {
    limit: usize,
}

impl MaxEvaluations {
    /// Creates a new instance of `MaxEvaluations`.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Termination for MaxEvaluations {
    fn is_termination(&self, state: &dyn SolverState) -> bool {
        state.quality_evaluations() >= self.limit
    }

    fn estimate(&self, state: &dyn SolverState) -> f64 {
        if self.limit == 0 { 1. } else { (state.quality_evaluations() as f64 / self.limit as f64).min(1.) }
    }
}
