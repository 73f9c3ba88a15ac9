use super::*;
use crate::order::{maximize, pareto_comparator};
use crate::utils::SolverError;
use std::cmp::Ordering;

#[test]
fn can_evaluate_quality_problem() {
    let problem = QualityProblem::new(Arc::new(|solution: &Vec<f64>| Ok(solution.clone())), pareto_comparator());

    assert_eq!(problem.quality(&vec![1., 2.]), Ok(vec![1., 2.]));
    assert_eq!((problem.quality_comparator())(&vec![1., 1.], &vec![2., 2.]), Some(Ordering::Less));
    assert_eq!((problem.quality_comparator())(&vec![1., 3.], &vec![2., 2.]), None);
}

#[test]
fn can_use_total_order_as_partial_one() {
    let problem = TotalOrderQualityProblem::new(Arc::new(|solution: &f64| Ok(*solution)), maximize());

    assert_eq!((problem.total_order_comparator())(&2., &1.), Ordering::Less);
    assert_eq!((problem.quality_comparator())(&2., &1.), Some(Ordering::Less));
    assert_eq!((problem.quality_comparator())(&1., &1.), Some(Ordering::Equal));
}

#[test]
fn can_propagate_evaluation_error() {
    let problem = TotalOrderQualityProblem::new(
        Arc::new(|_: &f64| -> SolverResult<f64> { Err(SolverError::Evaluation("broken".to_string())) }),
        maximize(),
    );

    assert_eq!(problem.quality(&1.), Err(SolverError::Evaluation("broken".to_string())));
}

#[test]
fn can_evaluate_batch_in_source_order() {
    let problem = TotalOrderQualityProblem::new(
        Arc::new(|solution: &f64| {
            if *solution < 0. { Err(SolverError::Evaluation("negative".to_string())) } else { Ok(solution * 2.) }
        }),
        maximize(),
    );
    let solutions = (0..32).map(|value| value as f64).collect::<Vec<_>>();
    let executor = Executor::parallel(4).unwrap();

    assert_eq!(problem.qualities(&solutions, &executor), Ok(solutions.iter().map(|value| value * 2.).collect()));
    assert!(problem.qualities(&[1., -1.], &Executor::Sequential).is_err());
    assert_eq!(problem.qualities(&[], &Executor::Sequential), Ok(vec![]));
}
