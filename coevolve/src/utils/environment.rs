use super::{DefaultRandom, Executor, Random};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences the solver behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random>,

    /// An executor used to evaluate candidates concurrently.
    pub executor: Arc<Executor>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, executor: Arc<Executor>, logger: InfoLogger) -> Self {
        Self { random, executor, logger }
    }

    /// Creates an environment with repeatable random and sequential executor which logs nothing.
    pub fn new_repeatable(seed: u64) -> Self {
        Self::new(Arc::new(DefaultRandom::new_repeatable(seed)), Arc::new(Executor::Sequential), Arc::new(|_| {}))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(
            Arc::new(DefaultRandom::default()),
            Arc::new(Executor::default()),
            Arc::new(|msg| println!("{msg}")),
        )
    }
}

/// Returns amount of CPUs.
#[cfg(not(target_arch = "wasm32"))]
pub fn get_cpus() -> usize {
    num_cpus::get()
}

/// Returns amount of CPUs.
#[cfg(target_arch = "wasm32")]
pub fn get_cpus() -> usize {
    1
}
