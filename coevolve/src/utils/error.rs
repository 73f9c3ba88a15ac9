/// Specifies errors which can be raised while configuring or running a solver.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SolverError {
    /// Strategies are wired in an inconsistent way, e.g. mismatched lengths or missing parts.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Quality computation of some candidate has failed.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// A worker pool cannot be created or some of its tasks did not complete.
    #[error("concurrency failure: {0}")]
    Concurrency(String),

    /// A runtime typed helper was called with a type it cannot handle.
    #[error("unsupported type: {type_name}")]
    UnsupportedType {
        /// A name of the rejected type.
        type_name: String,
    },
}

/// A type alias for result type with `SolverError`.
pub type SolverResult<T> = Result<T, SolverError>;
