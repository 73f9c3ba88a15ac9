#[cfg(test)]
#[path = "../../tests/unit/coevolution/derived_test.rs"]
mod derived_test;

use super::QualityAggregator;
use crate::individual::CompositeIndividual;
use crate::order::PartialComparator;
use crate::problem::Problem;
use crate::utils::{Executor, SolverResult};
use std::sync::{Arc, Mutex, PoisonError};

/// Combines a candidate of one population with a collaborator of another one.
pub(crate) type Combiner<X, Y, S> = Arc<dyn Fn(&X, &Y) -> S + Send + Sync>;

/// A single objective problem derived from the joint problem for one side of the cooperation:
/// the quality of a candidate is the aggregated quality of its combinations with collaborators.
/// Every evaluated combination is recorded as a composite individual.
pub(crate) struct DerivedProblem<'a, P: ?Sized, X, Y, S, Q> {
    problem: &'a P,
    collaborators: Vec<Y>,
    combiner: Combiner<X, Y, S>,
    aggregator: QualityAggregator<Q>,
    comparator: PartialComparator<Q>,
    executor: &'a Executor,
    evaluated: &'a Mutex<Vec<CompositeIndividual<S, Q>>>,
    iteration: usize,
}

impl<'a, P, X, Y, S, Q> DerivedProblem<'a, P, X, Y, S, Q>
where
    P: Problem<Solution = S, Quality = Q> + ?Sized,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        problem: &'a P,
        collaborators: Vec<Y>,
        combiner: Combiner<X, Y, S>,
        aggregator: QualityAggregator<Q>,
        comparator: PartialComparator<Q>,
        executor: &'a Executor,
        evaluated: &'a Mutex<Vec<CompositeIndividual<S, Q>>>,
        iteration: usize,
    ) -> Self {
        Self { problem, collaborators, combiner, aggregator, comparator, executor, evaluated, iteration }
    }
}

impl<P, X, Y, S, Q> DerivedProblem<'_, P, X, Y, S, Q>
where
    P: ?Sized,
    Q: Clone,
{
    fn record(&self, solutions: Vec<S>, qualities: &[Q]) {
        self.evaluated.lock().unwrap_or_else(PoisonError::into_inner).extend(
            solutions
                .into_iter()
                .zip(qualities.iter().cloned())
                .map(|(solution, quality)| CompositeIndividual::composite(solution, quality, self.iteration)),
        );
    }
}

impl<P, X, Y, S, Q> Problem for DerivedProblem<'_, P, X, Y, S, Q>
where
    P: Problem<Solution = S, Quality = Q> + ?Sized,
    X: Send + Sync,
    Y: Send + Sync,
    S: Send + Sync,
    Q: Clone + Send + Sync,
{
    type Solution = X;
    type Quality = Q;

    fn quality(&self, candidate: &Self::Solution) -> SolverResult<Self::Quality> {
        let solutions =
            self.collaborators.iter().map(|collaborator| (self.combiner)(candidate, collaborator)).collect::<Vec<_>>();
        let qualities = self.executor.try_map_collect(&solutions, |solution| self.problem.quality(solution))?;

        self.record(solutions, qualities.as_slice());

        (self.aggregator)(qualities.as_slice())
    }

    fn qualities(&self, candidates: &[Self::Solution], executor: &Executor) -> SolverResult<Vec<Self::Quality>>
    where
        Self::Solution: Send + Sync,
        Self::Quality: Send,
    {
        if self.collaborators.is_empty() {
            return candidates.iter().map(|_| (self.aggregator)(&[])).collect();
        }

        // candidates are combined with all collaborators and evaluated as a single batch
        let solutions = candidates
            .iter()
            .flat_map(|candidate| {
                self.collaborators.iter().map(move |collaborator| (self.combiner)(candidate, collaborator))
            })
            .collect::<Vec<_>>();
        let qualities = executor.try_map_collect(&solutions, |solution| self.problem.quality(solution))?;

        self.record(solutions, qualities.as_slice());

        qualities.chunks(self.collaborators.len()).map(|chunk| (self.aggregator)(chunk)).collect()
    }

    fn quality_comparator(&self) -> PartialComparator<Self::Quality> {
        self.comparator.clone()
    }
}
