//! This module contains listeners which report the progress of a solver through the info logger.

#[cfg(test)]
#[path = "../tests/unit/telemetry_test.rs"]
mod telemetry_test;

use crate::individual::Individual;
use crate::order::{DagPartiallyOrderedCollection, PartiallyOrderedCollection};
use crate::solver::{PopulationState, SolverState};
use crate::utils::{InfoLogger, SolverResult, distinct, size_of};
use std::any::Any;
use std::fmt::{Display, Formatter};

/// Logs solver counters every `log_every` iterations.
pub struct ProgressLogger {
    logger: InfoLogger,
    log_every: usize,
}

impl ProgressLogger {
    /// Creates a new instance of `ProgressLogger`.
    pub fn new(logger: InfoLogger, log_every: usize) -> Self {
        Self { logger, log_every: log_every.max(1) }
    }

    /// Reports the state if its iteration should be logged.
    pub fn on_state(&self, state: &dyn SolverState) {
        if state.iterations() % self.log_every != 0 {
            return;
        }

        (self.logger)(&format!(
            "[{}ms] iteration {}: births: {}, evaluations: {}, population: {}, front: {}",
            state.elapsed_millis(),
            state.iterations(),
            state.births(),
            state.quality_evaluations(),
            state.population_size(),
            state.front_size()
        ));
    }

    /// Logs sizes of the non-dominated solutions. Fails when size of the solution type is unknown.
    pub fn on_front_sizes<G, S, Q>(&self, state: &PopulationState<G, S, Q>) -> SolverResult<()>
    where
        S: Any,
    {
        let sizes = state
            .population()
            .firsts()
            .map(|individual| size_of(individual.solution()))
            .collect::<SolverResult<Vec<_>>>()?;

        (self.logger)(&format!("iteration {}: front solution sizes: {sizes:?}", state.iterations()));

        Ok(())
    }
}

/// Describes diversity of a population as ratios of distinct values to population size.
#[derive(Clone, Debug, PartialEq)]
pub struct Diversity {
    /// A ratio of distinct genotypes. Individuals without genotype are counted as one value.
    pub genotypes: f64,
    /// A ratio of distinct solutions.
    pub solutions: f64,
    /// A ratio of distinct qualities.
    pub qualities: f64,
}

impl Diversity {
    /// Estimates diversity of the population. An empty population has zero diversity.
    pub fn of<G, S, Q>(population: &DagPartiallyOrderedCollection<Individual<G, S, Q>>) -> Self
    where
        G: PartialEq,
        S: PartialEq,
        Q: PartialEq,
    {
        let size = population.size();
        if size == 0 {
            return Self { genotypes: 0., solutions: 0., qualities: 0. };
        }

        let ratio = |amount: usize| amount as f64 / size as f64;

        Self {
            genotypes: ratio(distinct(population.all().map(|individual| individual.genotype())).len()),
            solutions: ratio(distinct(population.all().map(|individual| individual.solution())).len()),
            qualities: ratio(distinct(population.all().map(|individual| individual.quality())).len()),
        }
    }
}

impl Display for Diversity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "genotypes: {:.3}, solutions: {:.3}, qualities: {:.3}", self.genotypes, self.solutions, self.qualities)
    }
}
