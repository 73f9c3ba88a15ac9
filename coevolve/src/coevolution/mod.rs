//! This module contains a cooperative coevolution solver: two sub-solvers evolve parts of a joint
//! solution and are coupled through collaborators, i.e. representatives of the other population
//! used to evaluate own candidates against the joint problem.

#[cfg(test)]
#[path = "../../tests/unit/coevolution/cooperative_test.rs"]
mod cooperative_test;

use crate::individual::{CompositeIndividual, Individual};
use crate::order::{
    DagPartiallyOrderedCollection, PartiallyOrderedCollection, TotalComparator, TotallyOrderedCollection,
    partial_from_total,
};
use crate::problem::{Problem, TotalOrderProblem};
use crate::solver::{IterativeSolver, PopulationSolver, PopulationState, SolverState, individual_comparator};
use crate::termination::Termination;
use crate::utils::{Environment, Executor, Random, SolverError, SolverResult, distinct};
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, PoisonError};

mod aggregation;
pub use self::aggregation::*;

mod config;
pub use self::config::CooperativeSolverBuilder;

mod derived;
use self::derived::DerivedProblem;

mod selector;
pub use self::selector::{CollaboratorSelector, FirstsSelector, RandomSelector};

mod state;
pub use self::state::CooperativeState;

/// A problem as seen by a sub-solver of the cooperative solver.
pub type SideProblem<'a, S, Q> = dyn Problem<Solution = S, Quality = Q> + 'a;

/// Specifies what happens when concurrent evaluation fails while extracting final solutions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExtractionFailurePolicy {
    /// The failure is returned to the caller.
    #[default]
    Propagate,
    /// The failure is logged and no solutions are returned.
    Empty,
}

/// A cooperative coevolution solver. Every iteration, it selects collaborators of both
/// populations, derives a single objective problem for every sub-solver and advances each of them
/// by one iteration. All joint evaluations made during the iteration form the joint population.
pub struct CooperativeSolver<SV1, SV2, C1, C2, G1, G2, S1, S2, S, Q> {
    solver1: SV1,
    solver2: SV2,
    selector1: C1,
    selector2: C2,
    solution_aggregator: SolutionAggregator<S1, S2, S>,
    quality_aggregator: QualityAggregator<Q>,
    termination: Box<dyn Termination>,
    failure_policy: ExtractionFailurePolicy,
    _marker: PhantomData<fn() -> (G1, G2)>,
}

impl<SV1, SV2, C1, C2, G1, G2, S1, S2, S, Q> CooperativeSolver<SV1, SV2, C1, C2, G1, G2, S1, S2, S, Q> {
    /// Creates a new instance of `CooperativeSolver`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        solvers: (SV1, SV2),
        selectors: (C1, C2),
        solution_aggregator: SolutionAggregator<S1, S2, S>,
        quality_aggregator: QualityAggregator<Q>,
        termination: Box<dyn Termination>,
        failure_policy: ExtractionFailurePolicy,
    ) -> Self {
        Self {
            solver1: solvers.0,
            solver2: solvers.1,
            selector1: selectors.0,
            selector2: selectors.1,
            solution_aggregator,
            quality_aggregator,
            termination,
            failure_policy,
            _marker: PhantomData,
        }
    }
}

impl<SV1, SV2, C1, C2, G1, G2, S1, S2, S, Q> CooperativeSolver<SV1, SV2, C1, C2, G1, G2, S1, S2, S, Q>
where
    S1: Send + Sync + 'static,
    S2: Send + Sync + 'static,
    S: Send + Sync + 'static,
    Q: Clone + Send + Sync + 'static,
{
    fn derive_first<'a, P>(
        &self,
        problem: &'a P,
        collaborators: Vec<S2>,
        executor: &'a Executor,
        evaluated: &'a Mutex<Vec<CompositeIndividual<S, Q>>>,
        iteration: usize,
    ) -> DerivedProblem<'a, P, S1, S2, S, Q>
    where
        P: TotalOrderProblem<Solution = S, Quality = Q> + ?Sized,
    {
        DerivedProblem::new(
            problem,
            collaborators,
            self.solution_aggregator.clone(),
            self.quality_aggregator.clone(),
            partial_from_total(problem.total_order_comparator()),
            executor,
            evaluated,
            iteration,
        )
    }

    fn derive_second<'a, P>(
        &self,
        problem: &'a P,
        collaborators: Vec<S1>,
        executor: &'a Executor,
        evaluated: &'a Mutex<Vec<CompositeIndividual<S, Q>>>,
        iteration: usize,
    ) -> DerivedProblem<'a, P, S2, S1, S, Q>
    where
        P: TotalOrderProblem<Solution = S, Quality = Q> + ?Sized,
    {
        let aggregator = self.solution_aggregator.clone();

        DerivedProblem::new(
            problem,
            collaborators,
            Arc::new(move |second: &S2, first: &S1| aggregator(first, second)),
            self.quality_aggregator.clone(),
            partial_from_total(problem.total_order_comparator()),
            executor,
            evaluated,
            iteration,
        )
    }

    /// Builds the joint population from composite individuals evaluated concurrently: they are
    /// sorted by the total order first, so the result does not depend on completion order.
    fn joint_population<P>(
        &self,
        problem: &P,
        evaluated: Mutex<Vec<CompositeIndividual<S, Q>>>,
    ) -> DagPartiallyOrderedCollection<CompositeIndividual<S, Q>>
    where
        P: TotalOrderProblem<Solution = S, Quality = Q> + ?Sized,
    {
        let mut composites = evaluated.into_inner().unwrap_or_else(PoisonError::into_inner);
        let total = problem.total_order_comparator();
        composites.sort_by(|a, b| total(a.quality(), b.quality()));

        DagPartiallyOrderedCollection::new(composites, individual_comparator(problem.quality_comparator()))
    }
}

impl<P, SV1, SV2, C1, C2, G1, G2, S1, S2, S, Q> IterativeSolver<P>
    for CooperativeSolver<SV1, SV2, C1, C2, G1, G2, S1, S2, S, Q>
where
    P: TotalOrderProblem<Solution = S, Quality = Q> + ?Sized,
    SV1: for<'p> PopulationSolver<SideProblem<'p, S1, Q>, State = PopulationState<G1, S1, Q>, Solution = S1>,
    SV2: for<'p> PopulationSolver<SideProblem<'p, S2, Q>, State = PopulationState<G2, S2, Q>, Solution = S2>,
    C1: CollaboratorSelector<Individual<G1, S1, Q>> + CollaboratorSelector<S1>,
    C2: CollaboratorSelector<Individual<G2, S2, Q>> + CollaboratorSelector<S2>,
    G1: Clone + 'static,
    G2: Clone + 'static,
    S1: Clone + PartialEq + Send + Sync + 'static,
    S2: Clone + PartialEq + Send + Sync + 'static,
    S: Clone + PartialEq + Send + Sync + 'static,
    Q: Clone + Send + Sync + 'static,
{
    type State = CooperativeState<G1, G2, S1, S2, S, Q>;
    type Solution = S;

    fn init(&self, problem: &P, environment: &Environment) -> SolverResult<Self::State> {
        let random = environment.random.as_ref();

        // bootstrap: no evaluated population exists yet, so collaborators are picked from fresh samples
        let samples1 = <SV1 as PopulationSolver<SideProblem<'static, S1, Q>>>::sample_solutions(&self.solver1, environment)?;
        let samples2 = <SV2 as PopulationSolver<SideProblem<'static, S2, Q>>>::sample_solutions(&self.solver2, environment)?;

        let collaborators1 = select_from_samples(&self.selector1, samples1.as_slice(), random);
        let collaborators2 = select_from_samples(&self.selector2, samples2.as_slice(), random);

        let evaluated = Mutex::new(Vec::default());
        let executor = environment.executor.as_ref();
        let problem1 = self.derive_first(problem, collaborators2, executor, &evaluated, 0);
        let problem2 = self.derive_second(problem, collaborators1, executor, &evaluated, 0);

        let first = <SV1 as IterativeSolver<SideProblem<'_, S1, Q>>>::init(&self.solver1, &problem1, environment)?;
        let second = <SV2 as IterativeSolver<SideProblem<'_, S2, Q>>>::init(&self.solver2, &problem2, environment)?;

        let state = CooperativeState::new(first, second, self.joint_population(problem, evaluated));

        (environment.logger)(&format!(
            "cooperative solver is initialized: populations: ({}, {}), joint evaluations: {}",
            state.first().population_size(),
            state.second().population_size(),
            state.quality_evaluations()
        ));

        Ok(state)
    }

    fn update(&self, problem: &P, environment: &Environment, state: &mut Self::State) -> SolverResult<()> {
        let random = environment.random.as_ref();
        let total = problem.total_order_comparator();
        // composites are tagged with the iteration being completed, before its increment
        let iteration = state.iterations();

        let collaborators1 = select_from_population(&self.selector1, state.first().population(), &total, random);
        let collaborators2 = select_from_population(&self.selector2, state.second().population(), &total, random);

        let evaluated = Mutex::new(Vec::default());
        let executor = environment.executor.as_ref();
        let problem1 = self.derive_first(problem, collaborators2, executor, &evaluated, iteration);
        let problem2 = self.derive_second(problem, collaborators1, executor, &evaluated, iteration);

        let (first, second) = state.sub_states_mut();
        <SV1 as IterativeSolver<SideProblem<'_, S1, Q>>>::update(&self.solver1, &problem1, environment, first)?;
        <SV2 as IterativeSolver<SideProblem<'_, S2, Q>>>::update(&self.solver2, &problem2, environment, second)?;

        state.complete_iteration(self.joint_population(problem, evaluated));

        Ok(())
    }

    fn is_terminated(&self, state: &Self::State) -> bool {
        self.termination.is_termination(state)
    }

    fn extract_solutions(
        &self,
        problem: &P,
        environment: &Environment,
        state: &Self::State,
    ) -> SolverResult<Vec<Self::Solution>> {
        let solutions1 = distinct(state.first().population().all().map(|individual| individual.solution().clone()));
        let solutions2 = distinct(state.second().population().all().map(|individual| individual.solution().clone()));

        let candidates = distinct(solutions1.iter().flat_map(|first| {
            solutions2.iter().map(move |second| (self.solution_aggregator)(first, second))
        }));

        let individuals = match environment.executor.map_collect(&candidates, |candidate| problem.quality(candidate)) {
            Ok(qualities) => candidates
                .into_iter()
                .zip(qualities)
                .map(|(solution, quality)| {
                    quality.map(|quality| CompositeIndividual::composite(solution, quality, state.iterations()))
                })
                .collect::<SolverResult<Vec<_>>>()?,
            Err(err @ SolverError::Concurrency(_)) if self.failure_policy == ExtractionFailurePolicy::Empty => {
                (environment.logger)(&format!("cannot extract solutions, returning none: {err}"));
                Vec::default()
            }
            Err(err) => return Err(err),
        };

        let front = DagPartiallyOrderedCollection::new(individuals, individual_comparator(problem.quality_comparator()));

        Ok(distinct(front.firsts().map(|individual| individual.solution().clone())))
    }
}

fn select_from_samples<C, X>(selector: &C, samples: &[X], random: &dyn Random) -> Vec<X>
where
    C: CollaboratorSelector<X>,
    X: Clone,
{
    selector.select(&TotallyOrderedCollection::unranked(samples.iter()), random).into_iter().cloned().collect()
}

fn select_from_population<C, G, X, Q>(
    selector: &C,
    population: &DagPartiallyOrderedCollection<Individual<G, X, Q>>,
    total: &TotalComparator<Q>,
    random: &dyn Random,
) -> Vec<X>
where
    C: CollaboratorSelector<Individual<G, X, Q>>,
    X: Clone,
{
    let view = TotallyOrderedCollection::from(population, |a: &Individual<G, X, Q>, b: &Individual<G, X, Q>| {
        total(a.quality(), b.quality())
    });

    selector.select(&view, random).into_iter().map(|individual| individual.solution().clone()).collect()
}
