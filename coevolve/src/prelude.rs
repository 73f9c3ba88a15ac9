//! This module reimports a common used types.

pub use crate::individual::{CompositeIndividual, Individual};

pub use crate::order::{
    DagPartiallyOrderedCollection, PartialComparator, PartiallyOrderedCollection, TotalComparator,
    TotallyOrderedCollection,
};

pub use crate::problem::{Problem, QualityProblem, TotalOrderProblem, TotalOrderQualityProblem};

pub use crate::solver::{
    IterativeSolver, PopulationSolver, PopulationState, SolverPhase, SolverRun, SolverState, StandardEvolver,
    StandardEvolverBuilder,
};

pub use crate::coevolution::{
    CollaboratorSelector, CooperativeSolver, CooperativeSolverBuilder, CooperativeState, ExtractionFailurePolicy,
    FirstsSelector, RandomSelector,
};

pub use crate::termination::Termination;

pub use crate::utils::compare_floats;
pub use crate::utils::{DefaultRandom, Random};
pub use crate::utils::{Environment, InfoLogger};
pub use crate::utils::{Executor, SolverError, SolverResult};
