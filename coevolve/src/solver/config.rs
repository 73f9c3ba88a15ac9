#[cfg(test)]
#[path = "../../tests/unit/solver/config_test.rs"]
mod config_test;

use super::StandardEvolver;
use crate::operators::{Factory, GeneticOperator, Mapper, Tournament};
use crate::termination::{Termination, create_termination};
use crate::utils::{InfoLogger, SolverError, SolverResult};
use std::sync::Arc;

/// Provides configurable way to build `StandardEvolver` using fluent interface style.
pub struct StandardEvolverBuilder<G, S, Q> {
    factory: Option<Arc<dyn Factory<G>>>,
    mapper: Option<Mapper<G, S>>,
    operators: Vec<(Arc<dyn GeneticOperator<G>>, usize)>,
    population_size: usize,
    offspring_size: Option<usize>,
    tournament_size: usize,
    is_overlapping: bool,
    max_iterations: Option<usize>,
    max_evaluations: Option<usize>,
    max_time: Option<f64>,
    termination: Option<Box<dyn Termination>>,
    logger: InfoLogger,
    _marker: std::marker::PhantomData<fn() -> Q>,
}

impl<G, S, Q> Default for StandardEvolverBuilder<G, S, Q> {
    fn default() -> Self {
        Self {
            factory: None,
            mapper: None,
            operators: vec![],
            population_size: 32,
            offspring_size: None,
            tournament_size: 2,
            is_overlapping: true,
            max_iterations: None,
            max_evaluations: None,
            max_time: None,
            termination: None,
            logger: Arc::new(|_| {}),
            _marker: Default::default(),
        }
    }
}

impl<G, S, Q> StandardEvolverBuilder<G, S, Q> {
    /// Sets a factory of the initial genotypes.
    pub fn with_factory(mut self, factory: Arc<dyn Factory<G>>) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Sets a genotype to solution mapping.
    pub fn with_mapper(mut self, mapper: Mapper<G, S>) -> Self {
        self.mapper = Some(mapper);
        self
    }

    /// Adds a genetic operator with its selection weight.
    pub fn with_operator(mut self, operator: Arc<dyn GeneticOperator<G>>, weight: usize) -> Self {
        self.operators.push((operator, weight));
        self
    }

    /// Sets population size. Default is 32.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets amount of children produced per iteration. Default is the population size.
    pub fn with_offspring_size(mut self, size: usize) -> Self {
        self.offspring_size = Some(size);
        self
    }

    /// Sets tournament size used to select parents. Default is 2.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Sets whether parents compete with children for survival. Default is true.
    pub fn with_overlapping(mut self, is_overlapping: bool) -> Self {
        self.is_overlapping = is_overlapping;
        self
    }

    /// Sets max iterations.
    pub fn with_max_iterations(mut self, limit: Option<usize>) -> Self {
        self.max_iterations = limit;
        self
    }

    /// Sets max amount of quality evaluations.
    pub fn with_max_evaluations(mut self, limit: Option<usize>) -> Self {
        self.max_evaluations = limit;
        self
    }

    /// Sets max running time in seconds.
    pub fn with_max_time(mut self, limit: Option<f64>) -> Self {
        self.max_time = limit;
        self
    }

    /// Sets a custom termination which replaces limits.
    pub fn with_termination(mut self, termination: Box<dyn Termination>) -> Self {
        self.termination = Some(termination);
        self
    }

    /// Sets a logger used to report configuration.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Builds the solver.
    pub fn build(self) -> SolverResult<StandardEvolver<G, S, Q>> {
        let factory = self.factory.ok_or_else(|| SolverError::Configuration("missing genotype factory".to_string()))?;
        let mapper = self.mapper.ok_or_else(|| SolverError::Configuration("missing genotype mapper".to_string()))?;

        if self.operators.is_empty() {
            return Err(SolverError::Configuration("missing genetic operators".to_string()));
        }

        if self.operators.iter().all(|(_, weight)| *weight == 0) {
            return Err(SolverError::Configuration("at least one operator should have positive weight".to_string()));
        }

        if self.population_size == 0 {
            return Err(SolverError::Configuration("population size should be positive".to_string()));
        }

        let offspring_size = self.offspring_size.unwrap_or(self.population_size);
        if offspring_size == 0 {
            return Err(SolverError::Configuration("offspring size should be positive".to_string()));
        }

        if !self.is_overlapping && offspring_size < self.population_size {
            return Err(SolverError::Configuration(format!(
                "offspring size ({offspring_size}) cannot be less than population size ({}) without overlapping",
                self.population_size
            )));
        }

        let termination = if let Some(termination) = self.termination {
            (self.logger)("configured to use a custom termination");
            termination
        } else {
            create_termination(self.max_iterations, self.max_evaluations, self.max_time, &self.logger)
        };

        (self.logger)(&format!(
            "configured to use population size: {}, offspring size: {offspring_size}, overlapping: {}",
            self.population_size, self.is_overlapping
        ));

        Ok(StandardEvolver::new(
            factory,
            mapper,
            self.operators,
            Tournament::new(self.tournament_size),
            self.population_size,
            offspring_size,
            self.is_overlapping,
            termination,
        ))
    }
}

impl<G: Clone + 'static, Q> StandardEvolverBuilder<G, G, Q> {
    /// Uses genotypes as solutions.
    pub fn with_identity_mapper(self) -> Self {
        self.with_mapper(Arc::new(|genotype: &G| genotype.clone()))
    }
}
