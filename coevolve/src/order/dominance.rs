#[cfg(test)]
#[path = "../../tests/unit/order/dominance_test.rs"]
mod dominance_test;

use super::{PartialComparator, TotalComparator};
use crate::utils::compare_floats;
use std::cmp::Ordering;
use std::sync::Arc;

/// Calculates dominance order of two items using ordering functions: returns `Some(Less)` when
/// `a` is at least as good as `b` according to every function and strictly better in one of them,
/// `Some(Greater)` in the opposite case, `Some(Equal)` when all functions agree on equality and
/// `None` when the items are incomparable.
pub fn dominance_order<'a, T: 'a, Order, Iter>(a: &'a T, b: &'a T, ordering_fns: Iter) -> Option<Ordering>
where
    Order: Fn(&'a T, &'a T) -> Ordering,
    Iter: IntoIterator<Item = Order>,
{
    let mut less_cnt = 0;
    let mut greater_cnt = 0;

    for ordering_fn in ordering_fns {
        match ordering_fn(a, b) {
            Ordering::Less => {
                less_cnt += 1;
            }
            Ordering::Greater => {
                greater_cnt += 1;
            }
            Ordering::Equal => {}
        }
    }

    match (less_cnt > 0, greater_cnt > 0) {
        (true, false) => Some(Ordering::Less),
        (false, true) => Some(Ordering::Greater),
        (false, false) => Some(Ordering::Equal),
        (true, true) => None,
    }
}

/// Returns a Pareto dominance comparator for vectors of objective values which are all minimized.
/// Vectors of different length are incomparable.
pub fn pareto_comparator() -> PartialComparator<Vec<f64>> {
    Arc::new(|a: &Vec<f64>, b: &Vec<f64>| {
        if a.len() != b.len() {
            return None;
        }

        dominance_order(a, b, (0..a.len()).map(|idx| move |a: &Vec<f64>, b: &Vec<f64>| compare_floats(a[idx], b[idx])))
    })
}

/// Returns a total order for minimized scalar qualities.
pub fn minimize() -> TotalComparator<f64> {
    Arc::new(|a: &f64, b: &f64| compare_floats(*a, *b))
}

/// Returns a total order for maximized scalar qualities.
pub fn maximize() -> TotalComparator<f64> {
    Arc::new(|a: &f64, b: &f64| compare_floats(*b, *a))
}
