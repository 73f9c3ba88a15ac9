#[cfg(test)]
#[path = "../../tests/unit/solver/state_test.rs"]
mod state_test;

use crate::individual::Individual;
use crate::order::{DagPartiallyOrderedCollection, PartiallyOrderedCollection};
use crate::utils::Timer;
use std::time::SystemTime;

/// Provides access to the counters of the solver state.
pub trait SolverState {
    /// Returns amount of completed iterations.
    fn iterations(&self) -> usize;

    /// Returns amount of individuals created so far, including the initial population.
    fn births(&self) -> usize;

    /// Returns amount of quality evaluations made so far.
    fn quality_evaluations(&self) -> usize;

    /// Returns milliseconds elapsed since the solver was initialized.
    fn elapsed_millis(&self) -> u128;

    /// Returns amount of individuals in the population.
    fn population_size(&self) -> usize;

    /// Returns amount of non-dominated individuals in the population.
    fn front_size(&self) -> usize;
}

/// A state of a population based solver. Counters can only grow.
#[derive(Clone)]
pub struct PopulationState<G, S, Q> {
    population: DagPartiallyOrderedCollection<Individual<G, S, Q>>,
    timer: Timer,
    iterations: usize,
    births: usize,
    quality_evaluations: usize,
    elapsed_millis: u128,
}

impl<G, S, Q> PopulationState<G, S, Q> {
    /// Creates a new instance of `PopulationState` with zero counters and a started timer.
    pub fn new(population: DagPartiallyOrderedCollection<Individual<G, S, Q>>) -> Self {
        Self { population, timer: Timer::start(), iterations: 0, births: 0, quality_evaluations: 0, elapsed_millis: 0 }
    }

    /// Returns the population.
    pub fn population(&self) -> &DagPartiallyOrderedCollection<Individual<G, S, Q>> {
        &self.population
    }

    /// Replaces the population wholesale.
    pub fn set_population(&mut self, population: DagPartiallyOrderedCollection<Individual<G, S, Q>>) {
        self.population = population;
    }

    /// Returns time when the state was created.
    pub fn started_at(&self) -> SystemTime {
        self.timer.started_at()
    }

    /// Increments iterations counter.
    pub fn inc_iterations(&mut self) {
        self.iterations += 1;
    }

    /// Adds given amount to births counter.
    pub fn add_births(&mut self, amount: usize) {
        self.births += amount;
    }

    /// Adds given amount to quality evaluations counter.
    pub fn add_quality_evaluations(&mut self, amount: usize) {
        self.quality_evaluations += amount;
    }

    /// Refreshes elapsed time.
    pub fn update_elapsed(&mut self) {
        self.elapsed_millis = self.elapsed_millis.max(self.timer.elapsed_millis());
    }

    /// Returns a copy of the state with refreshed elapsed time.
    pub fn snapshot(&self) -> Self
    where
        G: Clone,
        S: Clone,
        Q: Clone,
    {
        let mut snapshot = self.clone();
        snapshot.update_elapsed();

        snapshot
    }
}

impl<G, S, Q> SolverState for PopulationState<G, S, Q> {
    fn iterations(&self) -> usize {
        self.iterations
    }

    fn births(&self) -> usize {
        self.births
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
