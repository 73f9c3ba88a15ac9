use super::{CooperativeSolver, ExtractionFailurePolicy, QualityAggregator, SolutionAggregator};
use crate::termination::{Termination, create_termination};
use crate::utils::{InfoLogger, SolverError, SolverResult};
use std::sync::Arc;

/// Provides configurable way to build `CooperativeSolver` using fluent interface style.
pub struct CooperativeSolverBuilder<SV1, SV2, C1, C2, G1, G2, S1, S2, S, Q> {
    solvers: Option<(SV1, SV2)>,
    selectors: Option<(C1, C2)>,
    solution_aggregator: Option<SolutionAggregator<S1, S2, S>>,
    quality_aggregator: Option<QualityAggregator<Q>>,
    max_iterations: Option<usize>,
    max_evaluations: Option<usize>,
    max_time: Option<f64>,
    termination: Option<Box<dyn Termination>>,
    failure_policy: ExtractionFailurePolicy,
    logger: InfoLogger,
    _marker: std::marker::PhantomData<fn() -> (G1, G2)>,
}

impl<SV1, SV2, C1, C2, G1, G2, S1, S2, S, Q> Default for CooperativeSolverBuilder<SV1, SV2, C1, C2, G1, G2, S1, S2, S, Q> {
    fn default() -> Self {
        Self {
            solvers: None,
            selectors: None,
            solution_aggregator: None,
            quality_aggregator: None,
            max_iterations: None,
            max_evaluations: None,
            max_time: None,
            termination: None,
            failure_policy: ExtractionFailurePolicy::default(),
            logger: Arc::new(|_| {}),
            _marker: Default::default(),
        }
    }
}

impl<SV1, SV2, C1, C2, G1, G2, S1, S2, S, Q> CooperativeSolverBuilder<SV1, SV2, C1, C2, G1, G2, S1, S2, S, Q> {
    /// Sets sub-solvers of both populations.
    pub fn with_solvers(mut self, first: SV1, second: SV2) -> Self {
        self.solvers = Some((first, second));
        self
    }

    /// Sets collaborator selectors of both populations.
    pub fn with_selectors(mut self, first: C1, second: C2) -> Self {
        self.selectors = Some((first, second));
        self
    }

    /// Sets a function which combines solutions of both populations into a joint one.
    pub fn with_solution_aggregator(mut self, aggregator: SolutionAggregator<S1, S2, S>) -> Self {
        self.solution_aggregator = Some(aggregator);
        self
    }

    /// Sets a function which folds qualities of joint solutions into a quality of a candidate.
    pub fn with_quality_aggregator(mut self, aggregator: QualityAggregator<Q>) -> Self {
        self.quality_aggregator = Some(aggregator);
        self
    }

    /// Sets max iterations.
    pub fn with_max_iterations(mut self, limit: Option<usize>) -> Self {
        self.max_iterations = limit;
        self
    }

    /// Sets max amount of joint quality evaluations.
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

    /// Sets a policy for concurrency failures during solution extraction. Default is `Propagate`.
    pub fn with_failure_policy(mut self, policy: ExtractionFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Sets a logger used to report configuration.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Builds the solver.
    pub fn build(self) -> SolverResult<CooperativeSolver<SV1, SV2, C1, C2, G1, G2, S1, S2, S, Q>> {
        let solvers = self.solvers.ok_or_else(|| SolverError::Configuration("missing sub-solvers".to_string()))?;
        let selectors =
            self.selectors.ok_or_else(|| SolverError::Configuration("missing collaborator selectors".to_string()))?;
        let solution_aggregator = self
            .solution_aggregator
            .ok_or_else(|| SolverError::Configuration("missing solution aggregator".to_string()))?;
        let quality_aggregator = self
            .quality_aggregator
            .ok_or_else(|| SolverError::Configuration("missing quality aggregator".to_string()))?;

        let termination = if let Some(termination) = self.termination {
            (self.logger)("configured to use a custom termination");
            termination
        } else {
            create_termination(self.max_iterations, self.max_evaluations, self.max_time, &self.logger)
        };

        (self.logger)(&format!("configured to use extraction failure policy: {:?}", self.failure_policy));

        Ok(CooperativeSolver::new(
            solvers,
            selectors,
            solution_aggregator,
            quality_aggregator,
            termination,
            self.failure_policy,
        ))
    }
}
