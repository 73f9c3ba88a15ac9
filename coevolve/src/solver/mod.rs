//! This module contains a generic iterative solver abstraction and its state machine.

#[cfg(test)]
#[path = "../../tests/unit/solver/run_test.rs"]
mod run_test;

use crate::utils::{Environment, SolverError, SolverResult};
use std::mem;

mod config;
pub use self::config::StandardEvolverBuilder;

mod standard;
pub use self::standard::StandardEvolver;
pub(crate) use self::standard::individual_comparator;

mod state;
pub use self::state::{PopulationState, SolverState};

/// An iterative solver: `init` builds the first state, `update` advances it by exactly one
/// iteration, the stop predicate decides termination and `extract_solutions` maps the final state
/// to solutions.
pub trait IterativeSolver<P: ?Sized> {
    /// A state type.
    type State: SolverState + Clone;
    /// A solution type.
    type Solution;

    /// Builds the first state.
    fn init(&self, problem: &P, environment: &Environment) -> SolverResult<Self::State>;

    /// Advances the state by one iteration.
    fn update(&self, problem: &P, environment: &Environment, state: &mut Self::State) -> SolverResult<()>;

    /// Returns true if the solver should stop.
    fn is_terminated(&self, state: &Self::State) -> bool;

    /// Maps the state to output solutions.
    fn extract_solutions(
        &self,
        problem: &P,
        environment: &Environment,
        state: &Self::State,
    ) -> SolverResult<Vec<Self::Solution>>;

    /// Runs the solver till termination. The listener receives a state after initialization and
    /// after every iteration.
    fn solve(
        &self,
        problem: &P,
        environment: &Environment,
        listener: &mut dyn FnMut(&Self::State),
    ) -> SolverResult<Vec<Self::Solution>>
    where
        Self: Sized,
    {
        let mut run = SolverRun::new(self, problem, environment);

        while !run.is_finished() {
            let state = run.step()?;
            listener(state);
        }

        run.solutions()
    }
}

/// A solver which maintains a population and can sample its initial solutions without
/// evaluating them.
pub trait PopulationSolver<P: ?Sized>: IterativeSolver<P> {
    /// Returns fresh, not evaluated solutions as they would appear in the initial population.
    fn sample_solutions(&self, environment: &Environment) -> SolverResult<Vec<Self::Solution>>;
}

/// Specifies a phase of a solver run.
pub enum SolverPhase<St> {
    /// The solver is not initialized yet.
    Uninitialized,
    /// The solver has a state which can be advanced.
    Running(St),
    /// The stop predicate is satisfied: the state is final.
    Terminated(St),
    /// Some step has failed: no solutions can be reported.
    Failed(SolverError),
}

/// Drives an iterative solver through its phases: `Uninitialized -> Running -> Terminated`.
pub struct SolverRun<'a, P: ?Sized, SV: IterativeSolver<P>> {
    solver: &'a SV,
    problem: &'a P,
    environment: &'a Environment,
    phase: SolverPhase<SV::State>,
}

impl<'a, P: ?Sized, SV: IterativeSolver<P>> SolverRun<'a, P, SV> {
    /// Creates a new instance of `SolverRun`.
    pub fn new(solver: &'a SV, problem: &'a P, environment: &'a Environment) -> Self {
        Self { solver, problem, environment, phase: SolverPhase::Uninitialized }
    }

    /// Returns current phase.
    pub fn phase(&self) -> &SolverPhase<SV::State> {
        &self.phase
    }

    /// Returns current state, if the solver is initialized.
    pub fn state(&self) -> Option<&SV::State> {
        match &self.phase {
            SolverPhase::Running(state) | SolverPhase::Terminated(state) => Some(state),
            SolverPhase::Uninitialized | SolverPhase::Failed(_) => None,
        }
    }

    /// Returns true if no more steps can be done.
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, SolverPhase::Terminated(_) | SolverPhase::Failed(_))
    }

    /// Makes one step: initializes the solver or advances its state by one iteration.
    pub fn step(&mut self) -> SolverResult<&SV::State> {
        let next = match mem::replace(&mut self.phase, SolverPhase::Uninitialized) {
            SolverPhase::Uninitialized => {
                self.solver.init(self.problem, self.environment).map(|state| self.classify(state))
            }
            SolverPhase::Running(mut state) => self
                .solver
                .update(self.problem, self.environment, &mut state)
                .map(|_| self.classify(state)),
            SolverPhase::Terminated(state) => Ok(SolverPhase::Terminated(state)),
            SolverPhase::Failed(err) => Err(err),
        };

        match next {
            Ok(phase) => self.phase = phase,
            Err(err) => {
                (self.environment.logger)(&format!("solver has failed: {err}"));
                self.phase = SolverPhase::Failed(err.clone());
                return Err(err);
            }
        }

        self.state().ok_or_else(|| SolverError::Configuration("solver has no state".to_string()))
    }

    /// Returns solutions of the terminated run.
    pub fn solutions(&self) -> SolverResult<Vec<SV::Solution>> {
        match &self.phase {
            SolverPhase::Terminated(state) => self.solver.extract_solutions(self.problem, self.environment, state),
            SolverPhase::Failed(err) => Err(err.clone()),
            SolverPhase::Uninitialized | SolverPhase::Running(_) => {
                Err(SolverError::Configuration("cannot extract solutions: solver is not terminated".to_string()))
            }
        }
    }

    fn classify(&self, state: SV::State) -> SolverPhase<SV::State> {
        if self.solver.is_terminated(&state) {
            (self.environment.logger)(&format!(
                "solver is terminated: iterations: {}, births: {}, evaluations: {}, elapsed: {}ms",
                state.iterations(),
                state.births(),
                state.quality_evaluations(),
                state.elapsed_millis()
            ));
            SolverPhase::Terminated(state)
        } else {
            SolverPhase::Running(state)
        }
    }
}
