#[cfg(test)]
#[path = "../../tests/unit/order/total_test.rs"]
mod total_test;

use super::PartiallyOrderedCollection;
use std::cmp::Ordering;

/// A borrowed, totally ordered view on some elements: the first element is the best one.
/// Elements which are equal according to the order keep their original relative order.
pub struct TotallyOrderedCollection<'a, T> {
    ranked: Vec<&'a T>,
    is_ranked: bool,
}

impl<'a, T> TotallyOrderedCollection<'a, T> {
    /// Creates a view on all elements of the collection sorted by given total order.
    pub fn from<C, F>(collection: &'a C, comparator: F) -> Self
    where
        C: PartiallyOrderedCollection<T> + ?Sized,
        F: Fn(&T, &T) -> Ordering,
    {
        let mut ranked = collection.all().collect::<Vec<_>>();
        ranked.sort_by(|a, b| comparator(*a, *b));

        Self { ranked, is_ranked: true }
    }

    /// Creates a view which keeps elements in given order: no ranking information is available.
    pub fn unranked(items: impl IntoIterator<Item = &'a T>) -> Self {
        Self { ranked: items.into_iter().collect(), is_ranked: false }
    }

    /// Returns elements from the best to the worst.
    pub fn ranked(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.ranked.iter().copied()
    }

    /// Returns the best element.
    pub fn first(&self) -> Option<&'a T> {
        self.ranked.first().copied()
    }

    /// Returns an element at given rank position.
    pub fn get(&self, idx: usize) -> Option<&'a T> {
        self.ranked.get(idx).copied()
    }

    /// Returns amount of elements.
    pub fn size(&self) -> usize {
        self.ranked.len()
    }

    /// Returns true if the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Returns true if the view was built using an order.
    pub fn is_ranked(&self) -> bool {
        self.is_ranked
    }
}
