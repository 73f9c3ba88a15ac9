#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

pub use self::actual::ThreadPool;
pub use self::actual::parallel_collect;

use super::{SolverError, SolverResult};
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// A task scheduling capability used to evaluate batches of independent, pure tasks.
/// Every call blocks until all submitted tasks are completed.
pub enum Executor {
    /// Runs tasks one by one on the calling thread.
    Sequential,
    /// Runs tasks on a dedicated thread pool.
    Parallel(ThreadPool),
}

impl Executor {
    /// Creates an executor which uses a thread pool with given amount of threads.
    pub fn parallel(num_threads: usize) -> SolverResult<Self> {
        ThreadPool::new(num_threads).map(Executor::Parallel)
    }

    /// Returns true if tasks are run on the calling thread.
    pub fn is_sequential(&self) -> bool {
        matches!(self, Executor::Sequential)
    }

    /// Maps every item of the source and collects results preserving the source order.
    /// A task which panics makes the whole batch fail with `SolverError::Concurrency`.
    pub fn map_collect<T, F, R>(&self, source: &[T], map_op: F) -> SolverResult<Vec<R>>
    where
        T: Send + Sync,
        F: Fn(&T) -> R + Sync + Send,
        R: Send,
    {
        catch_unwind(AssertUnwindSafe(|| match self {
            Executor::Sequential => source.iter().map(&map_op).collect(),
            Executor::Parallel(pool) => pool.execute(|| parallel_collect(source, &map_op)),
        }))
        .map_err(|payload| SolverError::Concurrency(format!("evaluation task has failed: {}", describe(payload))))
    }

    /// Same as `map_collect`, but for fallible tasks: the first task error is returned.
    pub fn try_map_collect<T, F, R>(&self, source: &[T], map_op: F) -> SolverResult<Vec<R>>
    where
        T: Send + Sync,
        F: Fn(&T) -> SolverResult<R> + Sync + Send,
        R: Send,
    {
        self.map_collect(source, map_op)?.into_iter().collect()
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::parallel(super::get_cpus()).unwrap_or(Executor::Sequential)
    }
}

fn describe(payload: Box<dyn Any + Send>) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|msg| msg.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown reason".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
mod actual {
    extern crate rayon;
    use self::rayon::{ThreadPool as RayonThreadPool, ThreadPoolBuilder};
    use super::{SolverError, SolverResult};
    use rayon::prelude::*;

    /// Represents a thread pool wrapper.
    pub struct ThreadPool {
        inner: RayonThreadPool,
    }

    impl ThreadPool {
        /// Creates a new instance of `ThreadPool`.
        pub fn new(num_threads: usize) -> SolverResult<Self> {
            ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .map(|inner| Self { inner })
                .map_err(|err| SolverError::Concurrency(format!("cannot build a thread pool: {err}")))
        }

        /// Executes given operation on thread pool.
        pub fn execute<OP, R>(&self, op: OP) -> R
        where
            OP: FnOnce() -> R + Send,
            R: Send,
        {
            self.inner.install(op)
        }
    }

    /// Maps collection and collects results into vector in parallel.
    pub fn parallel_collect<T, F, R>(source: &[T], map_op: F) -> Vec<R>
    where
        T: Send + Sync,
        F: Fn(&T) -> R + Sync + Send,
        R: Send,
    {
        source.par_iter().map(map_op).collect()
    }
}

#[cfg(target_arch = "wasm32")]
mod actual {
    use super::SolverResult;

    /// Represents a thread pool wrapper.
    pub struct ThreadPool;

    impl ThreadPool {
        /// Creates a new instance of `ThreadPool`.
        pub fn new(_num_threads: usize) -> SolverResult<Self> {
            Ok(Self {})
        }

        /// Executes given operation on thread pool (dummy).
        pub fn execute<OP, R>(&self, op: OP) -> R
        where
            OP: FnOnce() -> R + Send,
            R: Send,
        {
            op()
        }
    }

    /// Map collections and collects results into vector synchronously.
    pub fn parallel_collect<T, F, R>(source: &[T], map_op: F) -> Vec<R>
    where
        T: Send + Sync,
        F: Fn(&T) -> R + Sync + Send,
        R: Send,
    {
        source.iter().map(map_op).collect()
    }
}
