//! Specifies an individual: an immutable record of a genotype, its decoded solution and quality.

#[cfg(test)]
#[path = "../tests/unit/individual_test.rs"]
mod individual_test;

/// An individual of a population. Once created, it is never changed.
#[derive(Clone, Debug, PartialEq)]
pub struct Individual<G, S, Q> {
    genotype: Option<G>,
    solution: S,
    quality: Q,
    birth_iteration: usize,
    eval_iteration: usize,
}

/// An individual which represents a combination of two solutions coming from different
/// populations: it has no atomic genotype of its own.
pub type CompositeIndividual<S, Q> = Individual<(), S, Q>;

impl<G, S, Q> Individual<G, S, Q> {
    /// Creates a new instance of `Individual` which has a genotype.
    pub fn new(genotype: G, solution: S, quality: Q, birth_iteration: usize, eval_iteration: usize) -> Self {
        Self { genotype: Some(genotype), solution, quality, birth_iteration, eval_iteration }
    }

    /// Returns genotype if the individual has one.
    pub fn genotype(&self) -> Option<&G> {
        self.genotype.as_ref()
    }

    /// Returns the solution (phenotype).
    pub fn solution(&self) -> &S {
        &self.solution
    }

    /// Returns the quality.
    pub fn quality(&self) -> &Q {
        &self.quality
    }

    /// Returns an iteration when the individual was born.
    pub fn birth_iteration(&self) -> usize {
        self.birth_iteration
    }

    /// Returns an iteration when the individual's quality was evaluated.
    pub fn eval_iteration(&self) -> usize {
        self.eval_iteration
    }

    /// Consumes the individual and returns its solution.
    pub fn into_solution(self) -> S {
        self.solution
    }
}

impl<S, Q> CompositeIndividual<S, Q> {
    /// Creates an individual without genotype, evaluated in the same iteration it was born.
    pub fn composite(solution: S, quality: Q, iteration: usize) -> Self {
        Self { genotype: None, solution, quality, birth_iteration: iteration, eval_iteration: iteration }
    }
}
