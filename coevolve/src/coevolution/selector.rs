#[cfg(test)]
#[path = "../../tests/unit/coevolution/selector_test.rs"]
mod selector_test;

use crate::order::TotallyOrderedCollection;
use crate::utils::Random;

/// Picks representatives (collaborators) of a population which are used to evaluate individuals
/// of the other population.
pub trait CollaboratorSelector<I>: Send + Sync {
    /// Selects collaborators from the view. The view can be unranked during bootstrap.
    fn select<'a>(&self, population: &TotallyOrderedCollection<'a, I>, random: &dyn Random) -> Vec<&'a I>;
}

/// Selects the best `amount` elements of the view.
#[derive(Clone, Debug)]
pub struct FirstsSelector {
    amount: usize,
}

impl FirstsSelector {
    /// Creates a new instance of `FirstsSelector`.
    pub fn new(amount: usize) -> Self {
        Self { amount }
    }
}

impl<I> CollaboratorSelector<I> for FirstsSelector {
    fn select<'a>(&self, population: &TotallyOrderedCollection<'a, I>, _: &dyn Random) -> Vec<&'a I> {
        population.ranked().take(self.amount).collect()
    }
}

/// Selects `amount` distinct elements of the view uniformly at random.
#[derive(Clone, Debug)]
pub struct RandomSelector {
    amount: usize,
}

impl RandomSelector {
    /// Creates a new instance of `RandomSelector`.
    pub fn new(amount: usize) -> Self {
        Self { amount }
    }
}

impl<I> CollaboratorSelector<I> for RandomSelector {
    fn select<'a>(&self, population: &TotallyOrderedCollection<'a, I>, random: &dyn Random) -> Vec<&'a I> {
        random.sample_indices(population.size(), self.amount).into_iter().filter_map(|idx| population.get(idx)).collect()
    }
}
