//! This crate exposes building blocks for population based iterative solvers: a population kept
//! under a partial order (e.g. Pareto dominance), a generic solver state machine and a cooperative
//! coevolution solver which couples two sub-solvers through concurrent collaborator evaluation.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod coevolution;
pub mod individual;
pub mod operators;
pub mod order;
pub mod prelude;
pub mod problem;
pub mod solver;
pub mod telemetry;
pub mod termination;
pub mod utils;
