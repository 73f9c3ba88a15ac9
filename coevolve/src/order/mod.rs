//! This module contains collections which keep elements under a partial order and related
//! comparators.

use std::cmp::Ordering;
use std::sync::Arc;

mod dag;
pub use self::dag::DagPartiallyOrderedCollection;

mod dominance;
pub use self::dominance::*;

mod total;
pub use self::total::TotallyOrderedCollection;

/// A partial order: `Some(Less)` means that the first argument precedes (dominates) the second one,
/// `Some(Greater)` means the opposite, `Some(Equal)` and `None` mean that neither dominates.
/// Implementations must be pure: they can be called concurrently.
pub type PartialComparator<T> = Arc<dyn Fn(&T, &T) -> Option<Ordering> + Send + Sync>;

/// A total order: `Less` means that the first argument is better.
pub type TotalComparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// A collection of elements under a partial order.
pub trait PartiallyOrderedCollection<T> {
    /// Returns all elements in insertion order.
    fn all(&self) -> Box<dyn Iterator<Item = &'_ T> + '_>;

    /// Returns elements which are not dominated by any other element.
    fn firsts(&self) -> Box<dyn Iterator<Item = &'_ T> + '_>;

    /// Returns elements which dominate no other element.
    fn lasts(&self) -> Box<dyn Iterator<Item = &'_ T> + '_>;

    /// Returns elements which are neither firsts nor lasts.
    fn mids(&self) -> Box<dyn Iterator<Item = &'_ T> + '_>;

    /// Returns amount of elements.
    fn size(&self) -> usize;

    /// Returns true if there are no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Wraps a total comparator into a partial one.
pub fn partial_from_total<T: 'static>(comparator: TotalComparator<T>) -> PartialComparator<T> {
    Arc::new(move |a: &T, b: &T| Some(comparator(a, b)))
}

/// Lifts a comparator defined on some key to a comparator of items which have that key.
pub fn partial_by_key<T, K, F>(comparator: PartialComparator<K>, key_fn: F) -> PartialComparator<T>
where
    T: 'static,
    K: 'static,
    F: Fn(&T) -> &K + Send + Sync + 'static,
{
    Arc::new(move |a: &T, b: &T| comparator(key_fn(a), key_fn(b)))
}

/// Reverses a total order, e.g. to turn minimization into maximization.
pub fn reversed<T: 'static>(comparator: TotalComparator<T>) -> TotalComparator<T> {
    Arc::new(move |a: &T, b: &T| comparator(a, b).reverse())
}
