#[cfg(test)]
#[path = "../../tests/unit/operators/selection_test.rs"]
mod selection_test;

use crate::order::{DagPartiallyOrderedCollection, PartiallyOrderedCollection};
use crate::utils::Random;
use std::cmp::Ordering;

/// Selects a parent using tournament: the best of randomly picked candidates wins. Candidates
/// which are not comparable keep the earlier pick.
pub struct Tournament {
    size: usize,
}

impl Tournament {
    /// Creates a new instance of `Tournament`.
    pub fn new(size: usize) -> Self {
        Self { size: size.max(1) }
    }

    /// Selects one element from the collection. Returns `None` if the collection is empty.
    pub fn select<'a, T>(&self, population: &'a DagPartiallyOrderedCollection<T>, random: &dyn Random) -> Option<&'a T> {
        if population.is_empty() {
            return None;
        }

        let comparator = population.comparator();
        let max_idx = population.size() as i32 - 1;

        (0..self.size).filter_map(|_| population.get(random.uniform_int(0, max_idx) as usize)).reduce(|best, candidate| {
            match comparator(candidate, best) {
                Some(Ordering::Less) => candidate,
                _ => best,
            }
        })
    }
}
