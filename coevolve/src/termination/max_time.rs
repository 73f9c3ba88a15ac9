use super::*;

/// A termination criteria which is in terminated state when max time elapsed. Time is measured
/// by the solver state, so the criteria itself is stateless.
pub struct MaxTime {
    limit_in_millis: f64,
}

impl MaxTime {
    /// Creates a new instance of `MaxTime`.
    pub fn new(limit_in_secs: f64) -> Self {
        Self { limit_in_millis: limit_in_secs * 1000. }
    }
}

impl Termination for MaxTime {
    fn is_termination(&self, state: &dyn SolverState) -> bool {
        state.elapsed_millis() as f64 > self.limit_in_millis
    }

    fn estimate(&self, state: &dyn SolverState) -> f64 {
        if self.limit_in_millis > 0. { (state.elapsed_millis() as f64 / self.limit_in_millis).min(1.) } else { 1. }
    }
}
