//! A dominance front builder which keeps elements in an index arena and dominance relations as
//! a directed acyclic graph: an edge `a -> b` exists when `a` dominates `b`.
//! Building the graph requires `O(N^2)` comparator calls, where `N` is the number of elements.

#[cfg(test)]
#[path = "../../tests/unit/order/dag_test.rs"]
mod dag_test;

use super::{PartialComparator, PartiallyOrderedCollection};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

type ElementIdx = usize;

/// A partially ordered collection which recomputes its dominance graph fully on every change.
#[derive(Clone)]
pub struct DagPartiallyOrderedCollection<T> {
    items: Vec<T>,
    comparator: PartialComparator<T>,
    dominated: Vec<Vec<ElementIdx>>,
    dominators_count: Vec<usize>,
    firsts: Vec<ElementIdx>,
    lasts: Vec<ElementIdx>,
    mids: Vec<ElementIdx>,
}

impl<T> DagPartiallyOrderedCollection<T> {
    /// Creates a new instance of `DagPartiallyOrderedCollection`.
    pub fn new(items: Vec<T>, comparator: PartialComparator<T>) -> Self {
        let mut collection = Self {
            items,
            comparator,
            dominated: Vec::default(),
            dominators_count: Vec::default(),
            firsts: Vec::default(),
            lasts: Vec::default(),
            mids: Vec::default(),
        };
        collection.rebuild();

        collection
    }

    /// Adds a new element.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
        self.rebuild();
    }

    /// Adds many elements at once.
    pub fn add_all(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.extend(items);
        self.rebuild();
    }

    /// Removes all elements matching the predicate. Returns amount of removed elements.
    pub fn remove_where<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        let size = self.items.len();
        self.items.retain(|item| !predicate(item));
        let removed = size - self.items.len();

        if removed > 0 {
            self.rebuild();
        }

        removed
    }

    /// Returns element at given index (insertion order).
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.items.get(idx)
    }

    /// Returns comparator used to build dominance relations.
    pub fn comparator(&self) -> &PartialComparator<T> {
        &self.comparator
    }

    /// Returns elements grouped by dominance fronts: the first front contains non-dominated
    /// elements, the second one contains elements dominated only by the first front, etc.
    pub fn ranked_fronts(&self) -> Vec<Vec<&T>> {
        let size = self.items.len();
        let mut domination_count = self.dominators_count.clone();
        let mut is_assigned = vec![false; size];
        let mut assigned = 0;
        let mut fronts = Vec::default();

        let mut current_front = self.firsts.clone();
        while !current_front.is_empty() {
            current_front.iter().for_each(|&idx| is_assigned[idx] = true);
            assigned += current_front.len();

            let mut next_front = Vec::default();
            for &p_idx in current_front.iter() {
                for &q_idx in self.dominated[p_idx].iter() {
                    if domination_count[q_idx] == 0 {
                        continue;
                    }

                    domination_count[q_idx] -= 1;
                    if domination_count[q_idx] == 0 && !is_assigned[q_idx] {
                        next_front.push(q_idx);
                    }
                }
            }

            // NOTE handles cycles introduced by an inconsistent comparator
            if next_front.is_empty() && assigned < size {
                next_front = least_dominated(&domination_count, |idx| !is_assigned[idx]);
            }

            next_front.sort_unstable();
            next_front.dedup();

            fronts.push(std::mem::replace(&mut current_front, next_front).into_iter().map(|idx| &self.items[idx]).collect());
        }

        fronts
    }

    fn rebuild(&mut self) {
        let size = self.items.len();

        // the indices of the elements dominated by the element
        let mut dominated: Vec<Vec<ElementIdx>> = vec![Vec::default(); size];
        // for each element, the number of elements which dominate it
        let mut dominators_count = vec![0_usize; size];

        for p_idx in 0..size {
            for q_idx in (p_idx + 1)..size {
                match (self.comparator)(&self.items[p_idx], &self.items[q_idx]) {
                    Some(Ordering::Less) => {
                        dominated[p_idx].push(q_idx);
                        dominators_count[q_idx] += 1;
                    }
                    Some(Ordering::Greater) => {
                        dominated[q_idx].push(p_idx);
                        dominators_count[p_idx] += 1;
                    }
                    Some(Ordering::Equal) | None => {}
                }
            }
        }

        let mut firsts = (0..size).filter(|&idx| dominators_count[idx] == 0).collect::<Vec<_>>();

        // non transitive relationship (A < B, B < C, C < A): the least dominated are considered first
        if firsts.is_empty() && size > 0 {
            firsts = least_dominated(&dominators_count, |_| true);
        }

        let first_ids = firsts.iter().copied().collect::<FxHashSet<_>>();
        let lasts = if first_ids.len() == size {
            firsts.clone()
        } else {
            (0..size).filter(|idx| dominated[*idx].is_empty() && !first_ids.contains(idx)).collect::<Vec<_>>()
        };

        let last_ids = lasts.iter().copied().collect::<FxHashSet<_>>();
        let mids = (0..size).filter(|idx| !first_ids.contains(idx) && !last_ids.contains(idx)).collect();

        self.dominated = dominated;
        self.dominators_count = dominators_count;
        self.firsts = firsts;
        self.lasts = lasts;
        self.mids = mids;
    }

    fn iter_indices<'a>(&'a self, indices: &'a [ElementIdx]) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        Box::new(indices.iter().map(move |&idx| &self.items[idx]))
    }
}

impl<T> PartiallyOrderedCollection<T> for DagPartiallyOrderedCollection<T> {
    fn all(&self) -> Box<dyn Iterator<Item = &'_ T> + '_> {
        Box::new(self.items.iter())
    }

    fn firsts(&self) -> Box<dyn Iterator<Item = &'_ T> + '_> {
        self.iter_indices(&self.firsts)
    }

    fn lasts(&self) -> Box<dyn Iterator<Item = &'_ T> + '_> {
        self.iter_indices(&self.lasts)
    }

    fn mids(&self) -> Box<dyn Iterator<Item = &'_ T> + '_> {
        self.iter_indices(&self.mids)
    }

    fn size(&self) -> usize {
        self.items.len()
    }
}

fn least_dominated<F>(domination_count: &[usize], filter: F) -> Vec<ElementIdx>
where
    F: Fn(ElementIdx) -> bool,
{
    let min = domination_count.iter().enumerate().filter(|(idx, _)| filter(*idx)).map(|(_, count)| *count).min();

    match min {
        Some(min) => (0..domination_count.len()).filter(|&idx| filter(idx) && domination_count[idx] == min).collect(),
        None => Vec::default(),
    }
}
