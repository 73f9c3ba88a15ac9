//! The termination module contains logic which defines termination criteria for iterative solvers.

use crate::solver::SolverState;
use crate::utils::{InfoLogger, compare_floats_refs};

mod max_evaluations;
pub use self::max_evaluations::MaxEvaluations;

mod max_iterations;
pub use self::max_iterations::MaxIterations;

mod max_time;
pub use self::max_time::MaxTime;

/// A trait which specifies criteria when a solver should stop searching for improved solution.
pub trait Termination: Send + Sync {
    /// Returns true if termination condition is met.
    fn is_termination(&self, state: &dyn SolverState) -> bool;

    /// Returns a relative estimation till termination. Value is in the `[0, 1]` range.
    fn estimate(&self, state: &dyn SolverState) -> f64;
}

/// Encapsulates multiple termination criteria: terminates when any of them is met.
pub struct CompositeTermination {
    terminations: Vec<Box<dyn Termination>>,
}

impl CompositeTermination {
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<Box<dyn Termination>>) -> Self {
        Self { terminations }
    }
}

impl Termination for CompositeTermination {
    fn is_termination(&self, state: &dyn SolverState) -> bool {
        self.terminations.iter().any(|t| t.is_termination(state))
    }

    fn estimate(&self, state: &dyn SolverState) -> f64 {
        self.terminations.iter().map(|t| t.estimate(state)).max_by(compare_floats_refs).unwrap_or(0.)
    }
}

/// Default amount of iterations used when no other termination criteria is specified.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Creates a termination from optional limits. When no limit is set, the default max iterations
/// criteria is used.
pub fn create_termination(
    max_iterations: Option<usize>,
    max_evaluations: Option<usize>,
    max_time: Option<f64>,
    logger: &InfoLogger,
) -> Box<dyn Termination> {
    let mut terminations: Vec<Box<dyn Termination>> = Vec::default();

    if let Some(limit) = max_iterations {
        (logger)(&format!("configured to use max-iterations: {limit}"));
        terminations.push(Box::new(MaxIterations::new(limit)));
    }

    if let Some(limit) = max_evaluations {
        (logger)(&format!("configured to use max-evaluations: {limit}"));
        terminations.push(Box::new(MaxEvaluations::new(limit)));
    }

    if let Some(limit) = max_time {
        (logger)(&format!("configured to use max-time: {limit}s"));
        terminations.push(Box::new(MaxTime::new(limit)));
    }

    if terminations.is_empty() {
        (logger)(&format!("configured to use default max-iterations ({DEFAULT_MAX_ITERATIONS})"));
        terminations.push(Box::new(MaxIterations::new(DEFAULT_MAX_ITERATIONS)));
    }

    if terminations.len() == 1 {
        terminations.swap_remove(0)
    } else {
        Box::new(CompositeTermination::new(terminations))
    }
}
