#[cfg(test)]
#[path = "../../tests/unit/solver/standard_test.rs"]
mod standard_test;

use super::{IterativeSolver, PopulationSolver, PopulationState, SolverState};
use crate::individual::Individual;
use crate::operators::{Factory, GeneticOperator, Mapper, Tournament};
use crate::order::{DagPartiallyOrderedCollection, PartialComparator, PartiallyOrderedCollection, partial_by_key};
use crate::problem::Problem;
use crate::termination::Termination;
use crate::utils::{Environment, Random, SolverError, SolverResult, distinct};
use std::marker::PhantomData;
use std::sync::Arc;

/// A population solver which applies weighted genetic operators to tournament selected parents
/// and keeps the best individuals according to their dominance fronts.
///
/// With overlapping generations, parents and children compete for survival: (μ+λ) strategy.
/// Otherwise, children replace parents: generational strategy.
pub struct StandardEvolver<G, S, Q> {
    factory: Arc<dyn Factory<G>>,
    mapper: Mapper<G, S>,
    operators: Vec<(Arc<dyn GeneticOperator<G>>, usize)>,
    tournament: Tournament,
    population_size: usize,
    offspring_size: usize,
    is_overlapping: bool,
    termination: Box<dyn Termination>,
    _marker: PhantomData<fn() -> Q>,
}

impl<G, S, Q> StandardEvolver<G, S, Q> {
    /// Creates a new instance of `StandardEvolver`. Use `StandardEvolverBuilder` to get validated
    /// parameters with defaults.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        factory: Arc<dyn Factory<G>>,
        mapper: Mapper<G, S>,
        operators: Vec<(Arc<dyn GeneticOperator<G>>, usize)>,
        tournament: Tournament,
        population_size: usize,
        offspring_size: usize,
        is_overlapping: bool,
        termination: Box<dyn Termination>,
    ) -> Self {
        Self {
            factory,
            mapper,
            operators,
            tournament,
            population_size,
            offspring_size,
            is_overlapping,
            termination,
            _marker: PhantomData,
        }
    }

    /// Returns the size of the population.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Returns amount of children produced per iteration.
    pub fn offspring_size(&self) -> usize {
        self.offspring_size
    }
}

impl<G, S, Q> StandardEvolver<G, S, Q>
where
    G: Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
    Q: Clone + Send + Sync + 'static,
{
    fn evaluate<P>(
        &self,
        problem: &P,
        environment: &Environment,
        genotypes: Vec<G>,
        iteration: usize,
    ) -> SolverResult<Vec<Individual<G, S, Q>>>
    where
        P: Problem<Solution = S, Quality = Q> + ?Sized,
    {
        let solutions = genotypes.iter().map(|genotype| (self.mapper)(genotype)).collect::<Vec<_>>();
        let qualities = problem.qualities(solutions.as_slice(), environment.executor.as_ref())?;

        Ok(genotypes
            .into_iter()
            .zip(solutions)
            .zip(qualities)
            .map(|((genotype, solution), quality)| Individual::new(genotype, solution, quality, iteration, iteration))
            .collect())
    }

    fn create_offspring(
        &self,
        population: &DagPartiallyOrderedCollection<Individual<G, S, Q>>,
        random: &dyn Random,
    ) -> SolverResult<Vec<G>> {
        if self.operators.is_empty() {
            return Err(SolverError::Configuration("at least one genetic operator is required".to_string()));
        }

        let weights = self.operators.iter().map(|(_, weight)| *weight).collect::<Vec<_>>();
        let mut offspring = Vec::with_capacity(self.offspring_size);

        while offspring.len() < self.offspring_size {
            let (operator, _) = &self.operators[random.weighted(weights.as_slice())];

            let parents = (0..operator.arity())
                .filter_map(|_| self.tournament.select(population, random))
                .map(|individual| {
                    individual.genotype().ok_or_else(|| {
                        SolverError::Configuration("cannot select a parent without genotype".to_string())
                    })
                })
                .collect::<SolverResult<Vec<_>>>()?;

            if parents.len() < operator.arity() {
                break;
            }

            let children = operator.apply(parents.as_slice(), random);
            if children.is_empty() {
                break;
            }

            offspring.extend(children);
        }

        offspring.truncate(self.offspring_size);

        Ok(offspring)
    }

    fn survive(
        &self,
        candidates: Vec<Individual<G, S, Q>>,
        comparator: PartialComparator<Individual<G, S, Q>>,
    ) -> DagPartiallyOrderedCollection<Individual<G, S, Q>> {
        let candidates = DagPartiallyOrderedCollection::new(candidates, comparator);
        if candidates.size() <= self.population_size {
            return candidates;
        }

        let survivors =
            candidates.ranked_fronts().into_iter().flatten().take(self.population_size).cloned().collect::<Vec<_>>();

        DagPartiallyOrderedCollection::new(survivors, candidates.comparator().clone())
    }
}

/// Lifts problem's quality comparator to individuals.
pub(crate) fn individual_comparator<G, S, Q>(comparator: PartialComparator<Q>) -> PartialComparator<Individual<G, S, Q>>
where
    G: 'static,
    S: 'static,
    Q: 'static,
{
    partial_by_key(comparator, Individual::<G, S, Q>::quality)
}

impl<G, S, Q, P> IterativeSolver<P> for StandardEvolver<G, S, Q>
where
    P: Problem<Solution = S, Quality = Q> + ?Sized,
    G: Clone + Send + Sync + 'static,
    S: Clone + PartialEq + Send + Sync + 'static,
    Q: Clone + Send + Sync + 'static,
{
    type State = PopulationState<G, S, Q>;
    type Solution = S;

    fn init(&self, problem: &P, environment: &Environment) -> SolverResult<Self::State> {
        let genotypes = self.factory.build(self.population_size, environment.random.as_ref());
        let individuals = self.evaluate(problem, environment, genotypes, 0)?;
        let amount = individuals.len();

        let comparator = individual_comparator(problem.quality_comparator());
        let mut state = PopulationState::new(DagPartiallyOrderedCollection::new(individuals, comparator));
        state.add_births(amount);
        state.add_quality_evaluations(amount);
        state.update_elapsed();

        Ok(state)
    }

    fn update(&self, problem: &P, environment: &Environment, state: &mut Self::State) -> SolverResult<()> {
        let iteration = state.iterations() + 1;

        let genotypes = self.create_offspring(state.population(), environment.random.as_ref())?;
        let offspring = self.evaluate(problem, environment, genotypes, iteration)?;
        let amount = offspring.len();

        let candidates: Vec<_> = if self.is_overlapping {
            state.population().all().cloned().chain(offspring).collect()
        } else {
            offspring
        };

        let comparator = individual_comparator(problem.quality_comparator());
        state.set_population(self.survive(candidates, comparator));
        state.add_births(amount);
        state.add_quality_evaluations(amount);
        state.inc_iterations();
        state.update_elapsed();

        Ok(())
    }

    fn is_terminated(&self, state: &Self::State) -> bool {
        self.termination.is_termination(state)
    }

    fn extract_solutions(&self, _: &P, _: &Environment, state: &Self::State) -> SolverResult<Vec<Self::Solution>> {
        Ok(distinct(state.population().firsts().map(|individual| individual.solution().clone())))
    }
}

impl<G, S, Q, P> PopulationSolver<P> for StandardEvolver<G, S, Q>
where
    P: Problem<Solution = S, Quality = Q> + ?Sized,
    G: Clone + Send + Sync + 'static,
    S: Clone + PartialEq + Send + Sync + 'static,
    Q: Clone + Send + Sync + 'static,
{
    fn sample_solutions(&self, environment: &Environment) -> SolverResult<Vec<Self::Solution>> {
        Ok(self
            .factory
            .build(self.population_size, environment.random.as_ref())
            .iter()
            .map(|genotype| (self.mapper)(genotype))
            .collect())
    }
}
