//! Contains functions which fold values into one: solutions of two populations into a joint one
//! and qualities of joint solutions into a single quality.

#[cfg(test)]
#[path = "../../tests/unit/coevolution/aggregation_test.rs"]
mod aggregation_test;

use crate::utils::{SolverError, SolverResult, compare_floats, pairwise};
use std::sync::Arc;

/// Combines solutions of both populations into a joint solution.
pub type SolutionAggregator<S1, S2, S> = Arc<dyn Fn(&S1, &S2) -> S + Send + Sync>;

/// Folds qualities of joint solutions into one quality.
pub type QualityAggregator<Q> = Arc<dyn Fn(&[Q]) -> SolverResult<Q> + Send + Sync>;

/// Concatenates two vectors.
pub fn concat<T: Clone + 'static>() -> SolutionAggregator<Vec<T>, Vec<T>, Vec<T>> {
    Arc::new(|first: &Vec<T>, second: &Vec<T>| first.iter().chain(second.iter()).cloned().collect())
}

/// Returns an arithmetic mean.
pub fn mean() -> QualityAggregator<f64> {
    Arc::new(|qualities: &[f64]| {
        ensure_not_empty(qualities)?;
        Ok(qualities.iter().sum::<f64>() / qualities.len() as f64)
    })
}

/// Returns a median: a mean of two middle values for even amount of qualities.
pub fn median() -> QualityAggregator<f64> {
    Arc::new(|qualities: &[f64]| {
        ensure_not_empty(qualities)?;

        let mut sorted = qualities.to_vec();
        sorted.sort_by(|a, b| compare_floats(*a, *b));

        let middle = sorted.len() / 2;
        Ok(if sorted.len() % 2 == 0 { (sorted[middle - 1] + sorted[middle]) / 2. } else { sorted[middle] })
    })
}

/// Returns a minimum.
pub fn minimum() -> QualityAggregator<f64> {
    Arc::new(|qualities: &[f64]| {
        ensure_not_empty(qualities)?;
        Ok(qualities.iter().copied().fold(f64::INFINITY, f64::min))
    })
}

/// Returns a maximum.
pub fn maximum() -> QualityAggregator<f64> {
    Arc::new(|qualities: &[f64]| {
        ensure_not_empty(qualities)?;
        Ok(qualities.iter().copied().fold(f64::NEG_INFINITY, f64::max))
    })
}

/// Returns a mean of every objective for vector qualities. All vectors must have the same length.
pub fn element_wise_mean() -> QualityAggregator<Vec<f64>> {
    Arc::new(|qualities: &[Vec<f64>]| {
        ensure_not_empty(qualities)?;

        let arrays = qualities.iter().map(|quality| quality.as_slice()).collect::<Vec<_>>();
        let amount = qualities.len() as f64;

        Ok(pairwise(arrays.as_slice())?.into_iter().map(|column| column.iter().sum::<f64>() / amount).collect())
    })
}

fn ensure_not_empty<T>(qualities: &[T]) -> SolverResult<()> {
    if qualities.is_empty() {
        Err(SolverError::Configuration("cannot aggregate an empty collection of qualities".to_string()))
    } else {
        Ok(())
    }
}
