#[cfg(test)]
#[path = "../../tests/unit/utils/math_test.rs"]
mod math_test;

use super::{SolverError, SolverResult};

/// Combines values at the same position of all given arrays: the i-th returned point holds the
/// i-th value of every array. All arrays must have the same length.
pub fn pairwise(xs: &[&[f64]]) -> SolverResult<Vec<Vec<f64>>> {
    let Some(first) = xs.first() else {
        return Ok(Vec::default());
    };

    if let Some((idx, x)) = xs.iter().enumerate().skip(1).find(|(_, x)| x.len() != first.len()) {
        return Err(SolverError::Configuration(format!(
            "invalid input arrays: {}-th length ({}) is different than 1st length ({})",
            idx + 1,
            x.len(),
            first.len()
        )));
    }

    Ok((0..first.len()).map(|idx| xs.iter().map(|x| x[idx]).collect()).collect())
}

/// Returns a cartesian product of given arrays; the first array changes fastest.
pub fn cartesian(xs: &[&[f64]]) -> Vec<Vec<f64>> {
    let total = xs.iter().map(|x| x.len()).product::<usize>();
    if xs.is_empty() || total == 0 {
        return Vec::default();
    }

    (0..total)
        .map(|idx| {
            let mut counter = idx;
            xs.iter()
                .map(|x| {
                    let value = x[counter % x.len()];
                    counter /= x.len();
                    value
                })
                .collect()
        })
        .collect()
}
