use crate::individual::{CompositeIndividual, Individual};
use crate::order::{DagPartiallyOrderedCollection, PartiallyOrderedCollection};
use crate::solver::{PopulationState, SolverState};
use crate::utils::Timer;

/// A state of the cooperative solver: states of both sub-solvers and a joint population of
/// composite individuals evaluated during the last iteration.
#[derive(Clone)]
pub struct CooperativeState<G1, G2, S1, S2, S, Q> {
    first: PopulationState<G1, S1, Q>,
    second: PopulationState<G2, S2, Q>,
    population: DagPartiallyOrderedCollection<CompositeIndividual<S, Q>>,
    timer: Timer,
    iterations: usize,
    quality_evaluations: usize,
    elapsed_millis: u128,
}

impl<G1, G2, S1, S2, S, Q> CooperativeState<G1, G2, S1, S2, S, Q> {
    pub(crate) fn new(
        first: PopulationState<G1, S1, Q>,
        second: PopulationState<G2, S2, Q>,
        population: DagPartiallyOrderedCollection<CompositeIndividual<S, Q>>,
    ) -> Self {
        let quality_evaluations = population.size();
        let mut state =
            Self { first, second, population, timer: Timer::start(), iterations: 0, quality_evaluations, elapsed_millis: 0 };
        state.update_elapsed();

        state
    }

    /// Returns the state of the first sub-solver.
    pub fn first(&self) -> &PopulationState<G1, S1, Q> {
        &self.first
    }

    /// Returns the state of the second sub-solver.
    pub fn second(&self) -> &PopulationState<G2, S2, Q> {
        &self.second
    }

    /// Returns the first non-dominated individual of the first sub-population.
    pub fn best_first(&self) -> Option<&Individual<G1, S1, Q>> {
        self.first.population().firsts().next()
    }

    /// Returns the first non-dominated individual of the second sub-population.
    pub fn best_second(&self) -> Option<&Individual<G2, S2, Q>> {
        self.second.population().firsts().next()
    }

    /// Returns the joint population.
    pub fn population(&self) -> &DagPartiallyOrderedCollection<CompositeIndividual<S, Q>> {
        &self.population
    }

    pub(crate) fn sub_states_mut(&mut self) -> (&mut PopulationState<G1, S1, Q>, &mut PopulationState<G2, S2, Q>) {
        (&mut self.first, &mut self.second)
    }

    pub(crate) fn complete_iteration(&mut self, population: DagPartiallyOrderedCollection<CompositeIndividual<S, Q>>) {
        self.quality_evaluations += population.size();
        self.population = population;
        self.iterations += 1;
        self.update_elapsed();
    }

    fn update_elapsed(&mut self) {
        self.elapsed_millis = self.elapsed_millis.max(self.timer.elapsed_millis());
    }
}

impl<G1, G2, S1, S2, S, Q> SolverState for CooperativeState<G1, G2, S1, S2, S, Q> {
    fn iterations(&self) -> usize {
        self.iterations
    }

    fn births(&self) -> usize {
        self.first.births() + self.second.births()
    }

    fn quality_evaluations(&self) -> usize {
        self.quality_evaluations
    }

    fn elapsed_millis(&self) -> u128 {
        self.elapsed_millis
    }

    fn population_size(&self) -> usize {
        self.population.size()
    }

    fn front_size(&self) -> usize {
        self.population.firsts().count()
    }
}
