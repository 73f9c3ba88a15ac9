use super::*;
use crate::helpers::problems::create_sphere_problem;
use crate::helpers::solver::create_float_evolver;
use crate::helpers::utils::{create_collecting_logger, create_test_environment};
use crate::order::{partial_from_total, pareto_comparator};
use crate::solver::{IterativeSolver, individual_comparator};

fn create_population(
    individuals: Vec<Individual<i32, Vec<f64>, f64>>,
) -> DagPartiallyOrderedCollection<Individual<i32, Vec<f64>, f64>> {
    DagPartiallyOrderedCollection::new(individuals, individual_comparator(partial_from_total(crate::order::minimize())))
}

#[test]
fn can_log_progress_every_n_iterations() {
    let (logger, messages) = create_collecting_logger();
    let environment = create_test_environment(0);
    let evolver = create_float_evolver(4, 4, 6);
    let progress = ProgressLogger::new(logger, 3);

    evolver.solve(&create_sphere_problem(), &environment, &mut |state| progress.on_state(state)).unwrap();

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 3);
    assert!(messages[0].contains("iteration 0: births: 4, evaluations: 4, population: 4"));
    assert!(messages[1].contains("iteration 3: births: 16, evaluations: 16, population: 4"));
    assert!(messages[2].contains("iteration 6:"));
}

#[test]
fn can_log_front_sizes() {
    let (logger, messages) = create_collecting_logger();
    let progress = ProgressLogger::new(logger, 1);
    let state = PopulationState::new(create_population(vec![
        Individual::new(0, vec![1., 2.], 1., 0, 0),
        Individual::new(1, vec![1., 2., 3.], 1., 0, 0),
        Individual::new(2, vec![1.], 2., 0, 0),
    ]));

    progress.on_front_sizes(&state).unwrap();

    assert_eq!(messages.lock().unwrap().as_slice(), ["iteration 0: front solution sizes: [2, 3]".to_string()]);
}

#[test]
fn can_report_unsupported_solution_type_for_sizes() {
    let (logger, _) = create_collecting_logger();
    let progress = ProgressLogger::new(logger, 1);
    let comparator = individual_comparator(pareto_comparator());
    let state = PopulationState::new(DagPartiallyOrderedCollection::new(
        vec![Individual::new((), (1_u8, 2_u8), vec![1.], 0, 0)],
        comparator,
    ));

    let result = progress.on_front_sizes(&state);

    assert_eq!(
        result,
        Err(crate::utils::SolverError::UnsupportedType { type_name: "(u8, u8)".to_string() })
    );
}

#[test]
fn can_estimate_diversity() {
    let population = create_population(vec![
        Individual::new(0, vec![1.], 1., 0, 0),
        Individual::new(0, vec![2.], 1., 0, 0),
        Individual::new(1, vec![2.], 2., 0, 0),
        Individual::new(2, vec![3.], 3., 0, 0),
    ]);

    let diversity = Diversity::of(&population);

    assert_eq!(diversity, Diversity { genotypes: 0.75, solutions: 0.75, qualities: 0.75 });
    assert_eq!(diversity.to_string(), "genotypes: 0.750, solutions: 0.750, qualities: 0.750");
}

#[test]
fn can_estimate_diversity_of_empty_population() {
    let diversity = Diversity::of(&create_population(vec![]));

    assert_eq!(diversity, Diversity { genotypes: 0., solutions: 0., qualities: 0. });
}
