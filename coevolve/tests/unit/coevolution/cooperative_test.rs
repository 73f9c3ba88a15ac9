use super::*;
use crate::helpers::problems::{CountingProblem, TwoTargetsProblem, create_target_problem};
use crate::helpers::solver::*;
use crate::helpers::utils::{create_collecting_logger, create_parallel_test_environment, create_test_environment};
use crate::order::{PartialComparator, TotalComparator, pareto_comparator};
use crate::solver::StandardEvolver;
use crate::problem::TotalOrderQualityProblem;
use std::sync::atomic::{AtomicBool, Ordering};

type TargetProblem = TotalOrderQualityProblem<f64, f64>;

/// Delegates to the target problem until it is armed, then fails every evaluation.
struct ArmedProblem {
    inner: TargetProblem,
    is_armed: AtomicBool,
    should_panic: bool,
}

impl ArmedProblem {
    fn new(should_panic: bool) -> Self {
        Self { inner: create_target_problem(3.), is_armed: AtomicBool::new(false), should_panic }
    }

    fn arm(&self) {
        self.is_armed.store(true, Ordering::SeqCst);
    }
}

impl Problem for ArmedProblem {
    type Solution = f64;
    type Quality = f64;

    fn quality(&self, solution: &f64) -> SolverResult<f64> {
        match (self.is_armed.load(Ordering::SeqCst), self.should_panic) {
            (false, _) => self.inner.quality(solution),
            (true, true) => panic!("armed problem"),
            (true, false) => Err(SolverError::Evaluation("armed problem".to_string())),
        }
    }

    fn quality_comparator(&self) -> PartialComparator<f64> {
        self.inner.quality_comparator()
    }
}

impl TotalOrderProblem for ArmedProblem {
    fn total_order_comparator(&self) -> TotalComparator<f64> {
        self.inner.total_order_comparator()
    }
}

fn create_solver(collaborators: (usize, usize), max_iterations: usize) -> FloatCooperativeSolver {
    create_sum_cooperative_solver(
        (create_float_evolver(10, 10, max_iterations), create_float_evolver(10, 10, max_iterations)),
        collaborators,
        max_iterations,
    )
}

#[test]
fn can_count_cross_evaluations() {
    let environment = create_test_environment(0);
    let problem = CountingProblem::new(create_target_problem(3.));
    let solver = create_sum_cooperative_solver((create_float_evolver(6, 4, 10), create_float_evolver(6, 4, 10)), (2, 3), 10);

    let mut state = solver.init(&problem, &environment).unwrap();

    assert_eq!(problem.count(), 6 * 3 + 6 * 2);
    assert_eq!(state.quality_evaluations(), 30);
    assert_eq!(state.population_size(), 30);
    assert_eq!(state.births(), 12);
    assert_eq!(state.iterations(), 0);
    assert!(state.population().all().all(|individual| individual.birth_iteration() == 0));

    solver.update(&problem, &environment, &mut state).unwrap();

    assert_eq!(problem.count(), 30 + 4 * 3 + 4 * 2);
    assert_eq!(state.quality_evaluations(), 50);
    assert_eq!(state.population_size(), 20);
    assert_eq!(state.births(), 20);
    assert_eq!(state.births(), state.first().births() + state.second().births());
    assert_eq!(state.iterations(), 1);
    assert!(state.population().all().all(|individual| individual.eval_iteration() == 0));

    solver.update(&problem, &environment, &mut state).unwrap();

    assert_eq!(state.iterations(), 2);
    assert!(state.population().all().all(|individual| {
        individual.birth_iteration() == 1 && individual.eval_iteration() == 1
    }));
}

#[test]
fn can_converge_to_target_sum() {
    let environment = create_test_environment(42);
    let problem = create_target_problem(3.);
    let solver = create_solver((1, 1), 50);

    let solutions = solver.solve(&problem, &environment, &mut |_| {}).unwrap();

    assert!(!solutions.is_empty());
    assert!(solutions.iter().all(|solution| problem.quality(solution).unwrap() > -0.25));
}

#[test]
fn can_keep_counters_consistent_during_solve() {
    let environment = create_test_environment(1);
    let problem = create_target_problem(3.);
    let solver = create_solver((2, 2), 5);
    let mut counters: Vec<(usize, usize, usize)> = vec![];

    solver
        .solve(&problem, &environment, &mut |state: &CooperativeState<_, _, _, _, _, _>| {
            assert_eq!(state.births(), state.first().births() + state.second().births());
            assert_eq!(state.first().iterations(), state.iterations());
            assert_eq!(state.second().iterations(), state.iterations());
            counters.push((state.iterations(), state.births(), state.quality_evaluations()));
        })
        .unwrap();

    assert_eq!(counters.len(), 6);
    assert!(counters.windows(2).all(|pair| pair[0].0 < pair[1].0 && pair[0].1 < pair[1].1 && pair[0].2 < pair[1].2));
    assert!(counters.windows(2).all(|pair| pair[1].2 - pair[0].2 == 10 * 2 + 10 * 2));
}

#[test]
fn can_extract_best_joint_solutions() {
    let environment = create_test_environment(2);
    let problem = create_target_problem(3.);
    let solver = create_solver((2, 1), 3);
    let mut state = solver.init(&problem, &environment).unwrap();
    (0..3).for_each(|_| solver.update(&problem, &environment, &mut state).unwrap());

    let solutions = solver.extract_solutions(&problem, &environment, &state).unwrap();

    let best = state
        .first()
        .population()
        .all()
        .flat_map(|first| state.second().population().all().map(move |second| first.solution()[0] + second.solution()[0]))
        .map(|solution| problem.quality(&solution).unwrap())
        .fold(f64::NEG_INFINITY, f64::max);
    assert!(!solutions.is_empty());
    assert!(solutions.iter().all(|solution| problem.quality(solution).unwrap() == best));
    assert_eq!(solutions.len(), distinct(solutions.clone()).len());
}

#[test]
fn can_produce_same_results_with_same_seed() {
    let problem = create_target_problem(3.);
    let run = |environment: Environment| {
        let solver = create_solver((2, 2), 10);
        let mut state = solver.init(&problem, &environment).unwrap();
        (0..10).for_each(|_| solver.update(&problem, &environment, &mut state).unwrap());

        let first = state.first().population().all().map(|individual| individual.solution()[0]).collect::<Vec<_>>();
        let second = state.second().population().all().map(|individual| individual.solution()[0]).collect::<Vec<_>>();
        let joint = state.population().all().map(|individual| *individual.solution()).collect::<Vec<_>>();

        (first, second, joint)
    };

    let sequential = run(create_test_environment(7));

    assert_eq!(sequential, run(create_test_environment(7)));
    assert_eq!(sequential, run(create_parallel_test_environment(7, 4)));
}

#[test]
fn can_propagate_concurrency_failure_on_extraction_by_default() {
    let environment = create_test_environment(0);
    let problem = ArmedProblem::new(true);
    let solver = create_solver((1, 1), 1);
    let state = solver.init(&problem, &environment).unwrap();

    problem.arm();
    let result = solver.extract_solutions(&problem, &environment, &state);

    assert!(matches!(result, Err(SolverError::Concurrency(_))));
}

#[test]
fn can_return_no_solutions_on_concurrency_failure_with_empty_policy() {
    let (logger, messages) = create_collecting_logger();
    let mut environment = create_test_environment(0);
    environment.logger = logger;
    let problem = ArmedProblem::new(true);
    let solver: FloatCooperativeSolver = CooperativeSolverBuilder::default()
        .with_solvers(create_float_evolver(4, 4, 1), create_float_evolver(4, 4, 1))
        .with_selectors(FirstsSelector::new(1), FirstsSelector::new(1))
        .with_solution_aggregator(Arc::new(|first: &Vec<f64>, second: &Vec<f64>| first[0] + second[0]))
        .with_quality_aggregator(mean())
        .with_failure_policy(ExtractionFailurePolicy::Empty)
        .build()
        .unwrap();
    let state = solver.init(&problem, &environment).unwrap();

    problem.arm();
    let result = solver.extract_solutions(&problem, &environment, &state);

    assert_eq!(result, Ok(vec![]));
    assert!(messages.lock().unwrap().iter().any(|msg| msg.starts_with("cannot extract solutions")));
}

#[test]
fn can_propagate_evaluation_error_on_extraction_with_any_policy() {
    let environment = create_test_environment(0);
    let problem = ArmedProblem::new(false);
    let solver: FloatCooperativeSolver = CooperativeSolverBuilder::default()
        .with_solvers(create_float_evolver(4, 4, 1), create_float_evolver(4, 4, 1))
        .with_selectors(FirstsSelector::new(1), FirstsSelector::new(1))
        .with_solution_aggregator(Arc::new(|first: &Vec<f64>, second: &Vec<f64>| first[0] + second[0]))
        .with_quality_aggregator(mean())
        .with_failure_policy(ExtractionFailurePolicy::Empty)
        .build()
        .unwrap();
    let state = solver.init(&problem, &environment).unwrap();

    problem.arm();
    let result = solver.extract_solutions(&problem, &environment, &state);

    assert_eq!(result, Err(SolverError::Evaluation("armed problem".to_string())));
}

#[test]
fn can_fail_when_sub_solver_evaluation_fails() {
    let environment = create_test_environment(0);
    let problem = ArmedProblem::new(false);
    let solver = create_solver((1, 1), 5);
    let mut state = solver.init(&problem, &environment).unwrap();

    problem.arm();
    let result = solver.update(&problem, &environment, &mut state);

    assert_eq!(result, Err(SolverError::Evaluation("armed problem".to_string())));
}

#[test]
fn can_reject_incomplete_configuration() {
    let result: SolverResult<FloatCooperativeSolver> = CooperativeSolverBuilder::default()
        .with_solvers(create_float_evolver(4, 4, 1), create_float_evolver(4, 4, 1))
        .with_selectors(FirstsSelector::new(1), FirstsSelector::new(1))
        .with_quality_aggregator(mean())
        .build();

    assert_eq!(result.err(), Some(SolverError::Configuration("missing solution aggregator".to_string())));
}

#[test]
fn can_report_best_individuals_of_both_populations() {
    let environment = create_test_environment(0);
    let problem = create_target_problem(3.);
    let solver = create_solver((1, 1), 5);

    let mut state = solver.init(&problem, &environment).unwrap();
    solver.update(&problem, &environment, &mut state).unwrap();

    let best_first = state.best_first().expect("no best individual in first population");
    let best_second = state.best_second().expect("no best individual in second population");
    assert!(state.first().population().firsts().any(|individual| std::ptr::eq(individual, best_first)));
    assert!(state.second().population().firsts().any(|individual| std::ptr::eq(individual, best_second)));
    assert!(state.first().population().all().all(|individual| individual.quality() <= best_first.quality()));
    assert!(state.second().population().all().all(|individual| individual.quality() <= best_second.quality()));
}

type VectorEvolver = StandardEvolver<Vec<f64>, Vec<f64>, Vec<f64>>;

type MultiObjectiveSolver = CooperativeSolver<
    VectorEvolver,
    VectorEvolver,
    FirstsSelector,
    FirstsSelector,
    Vec<f64>,
    Vec<f64>,
    Vec<f64>,
    Vec<f64>,
    Vec<f64>,
    Vec<f64>,
>;

fn create_multi_objective_solver(max_iterations: usize) -> MultiObjectiveSolver {
    CooperativeSolverBuilder::default()
        .with_solvers(create_vector_evolver(8, 8, max_iterations), create_vector_evolver(8, 8, max_iterations))
        .with_selectors(FirstsSelector::new(2), FirstsSelector::new(2))
        .with_solution_aggregator(concat())
        .with_quality_aggregator(element_wise_mean())
        .with_max_iterations(Some(max_iterations))
        .build()
        .expect("cannot build cooperative solver")
}

fn dominates(a: &Vec<f64>, b: &Vec<f64>) -> bool {
    (pareto_comparator())(a, b) == Some(std::cmp::Ordering::Less)
}

fn assert_non_dominated_firsts<G, S>(population: &DagPartiallyOrderedCollection<Individual<G, S, Vec<f64>>>) {
    let firsts = population.firsts().collect::<Vec<_>>();
    assert!(!firsts.is_empty());

    firsts.iter().for_each(|a| firsts.iter().for_each(|b| assert!(!dominates(a.quality(), b.quality()))));

    let non_dominated =
        population.all().filter(|a| population.all().all(|b| !dominates(b.quality(), a.quality()))).count();
    assert_eq!(non_dominated, firsts.len());
}

#[test]
fn can_keep_pareto_front_with_multi_objective_problem() {
    let environment = create_test_environment(0);
    let problem = TwoTargetsProblem;
    let solver = create_multi_objective_solver(5);

    let mut state = solver.init(&problem, &environment).unwrap();
    assert_non_dominated_firsts(state.population());

    for _ in 0..5 {
        solver.update(&problem, &environment, &mut state).unwrap();
        assert_non_dominated_firsts(state.population());
    }

    let solutions = solver.extract_solutions(&problem, &environment, &state).unwrap();
    let candidates = distinct(state.first().population().all().flat_map(|first| {
        state.second().population().all().map(move |second| [first.solution().clone(), second.solution().clone()].concat())
    }));
    let qualities = candidates.iter().map(|candidate| problem.quality(candidate).unwrap()).collect::<Vec<_>>();
    let front = candidates
        .iter()
        .zip(qualities.iter())
        .filter(|(_, quality)| qualities.iter().all(|other| !dominates(other, quality)))
        .map(|(candidate, _)| candidate.clone())
        .collect::<Vec<_>>();

    assert!(solutions.iter().all(|solution| solution.len() == 2));
    assert_same_elements!(solutions, front);
}
