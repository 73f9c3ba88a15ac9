//! Specifies problems: a quality function over solutions and an order over qualities.

#[cfg(test)]
#[path = "../tests/unit/problem_test.rs"]
mod problem_test;

use crate::order::{PartialComparator, TotalComparator, partial_from_total};
use crate::utils::{Executor, SolverResult};
use std::sync::Arc;

/// A quality function which can fail with evaluation error.
pub type QualityFn<S, Q> = Arc<dyn Fn(&S) -> SolverResult<Q> + Send + Sync>;

/// A problem defined by a quality function and a partial order over qualities.
pub trait Problem: Send + Sync {
    /// A solution type.
    type Solution;
    /// A quality type.
    type Quality;

    /// Computes the quality of given solution.
    fn quality(&self, solution: &Self::Solution) -> SolverResult<Self::Quality>;

    /// Returns a (possibly partial) order over qualities: `Some(Less)` means better.
    fn quality_comparator(&self) -> PartialComparator<Self::Quality>;

    /// Computes qualities of a batch of solutions using the executor. Qualities are returned in
    /// the order of solutions, the first failed evaluation fails the whole batch.
    fn qualities(&self, solutions: &[Self::Solution], executor: &Executor) -> SolverResult<Vec<Self::Quality>>
    where
        Self::Solution: Send + Sync,
        Self::Quality: Send,
    {
        executor.try_map_collect(solutions, |solution| self.quality(solution))
    }
}

/// A problem which qualities can be totally ordered.
pub trait TotalOrderProblem: Problem {
    /// Returns a total order over qualities: `Less` means better.
    fn total_order_comparator(&self) -> TotalComparator<Self::Quality>;
}

/// A problem built from a quality function and a partial comparator, e.g. a multi-objective one.
pub struct QualityProblem<S, Q> {
    quality_fn: QualityFn<S, Q>,
    comparator: PartialComparator<Q>,
}

impl<S, Q> QualityProblem<S, Q> {
    /// Creates a new instance of `QualityProblem`.
    pub fn new(quality_fn: QualityFn<S, Q>, comparator: PartialComparator<Q>) -> Self {
        Self { quality_fn, comparator }
    }
}

impl<S, Q> Problem for QualityProblem<S, Q> {
    type Solution = S;
    type Quality = Q;

    fn quality(&self, solution: &Self::Solution) -> SolverResult<Self::Quality> {
        (self.quality_fn)(solution)
    }

    fn quality_comparator(&self) -> PartialComparator<Self::Quality> {
        self.comparator.clone()
    }
}

/// A problem built from a quality function and a total comparator.
pub struct TotalOrderQualityProblem<S, Q> {
    quality_fn: QualityFn<S, Q>,
    comparator: TotalComparator<Q>,
}

impl<S: 'static, Q: 'static> TotalOrderQualityProblem<S, Q> {
    /// Creates a new instance of `TotalOrderQualityProblem`.
    pub fn new(quality_fn: QualityFn<S, Q>, comparator: TotalComparator<Q>) -> Self {
        Self { quality_fn, comparator }
    }
}

impl<S: 'static, Q: 'static> Problem for TotalOrderQualityProblem<S, Q> {
    type Solution = S;
    type Quality = Q;

    fn quality(&self, solution: &Self::Solution) -> SolverResult<Self::Quality> {
        (self.quality_fn)(solution)
    }

    fn quality_comparator(&self) -> PartialComparator<Self::Quality> {
        partial_from_total(self.comparator.clone())
    }
}

impl<S: 'static, Q: 'static> TotalOrderProblem for TotalOrderQualityProblem<S, Q> {
    fn total_order_comparator(&self) -> TotalComparator<Self::Quality> {
        self.comparator.clone()
    }
}
