//! This module contains pluggable variation strategies used by population solvers: genotype
//! factories, genetic operators and parent selection.

use crate::utils::Random;
use std::sync::Arc;

mod selection;
pub use self::selection::Tournament;

mod vector;
pub use self::vector::{FloatVectorFactory, GaussianMutation, UniformCrossover};

/// Creates genotypes of the initial population.
pub trait Factory<G>: Send + Sync {
    /// Creates given amount of random genotypes.
    fn build(&self, amount: usize, random: &dyn Random) -> Vec<G>;
}

/// Maps a genotype to the solution (phenotype) it encodes.
pub type Mapper<G, S> = Arc<dyn Fn(&G) -> S + Send + Sync>;

/// A genetic operator which produces children from a fixed amount of parents.
pub trait GeneticOperator<G>: Send + Sync {
    /// Returns amount of parents required by the operator.
    fn arity(&self) -> usize;

    /// Produces children from parents. The amount of parents is equal to the arity.
    fn apply(&self, parents: &[&G], random: &dyn Random) -> Vec<G>;
}
