use super::*;
use crate::order::pareto_comparator;
use proptest::prelude::*;
use std::sync::Arc;

fn create_collection(points: &[(f64, f64)]) -> DagPartiallyOrderedCollection<Vec<f64>> {
    DagPartiallyOrderedCollection::new(points.iter().map(|&(x, y)| vec![x, y]).collect(), pareto_comparator())
}

fn collect<'a>(items: impl Iterator<Item = &'a Vec<f64>>) -> Vec<Vec<f64>> {
    items.cloned().collect()
}

fn points(values: &[(f64, f64)]) -> Vec<Vec<f64>> {
    values.iter().map(|&(x, y)| vec![x, y]).collect()
}

#[test]
fn can_split_pareto_scenario() {
    let collection = create_collection(&[(1., 5.), (2., 3.), (4., 4.), (5., 1.)]);

    assert_same_elements!(collect(collection.firsts()), points(&[(1., 5.), (2., 3.), (5., 1.)]));
    assert_same_elements!(collect(collection.lasts()), points(&[(4., 4.)]));
    assert!(collection.mids().next().is_none());
    assert_eq!(collect(collection.all()), points(&[(1., 5.), (2., 3.), (4., 4.), (5., 1.)]));
    assert_eq!(collection.size(), 4);
}

#[test]
fn can_move_dominated_point_to_mids_when_it_dominates_others() {
    let collection = create_collection(&[(1., 5.), (2., 3.), (4., 4.), (5., 1.), (6., 6.)]);

    assert_same_elements!(collect(collection.firsts()), points(&[(1., 5.), (2., 3.), (5., 1.)]));
    assert_same_elements!(collect(collection.mids()), points(&[(4., 4.)]));
    assert_same_elements!(collect(collection.lasts()), points(&[(6., 6.)]));
}

#[test]
fn can_split_chain() {
    let collection = create_collection(&[(3., 3.), (1., 1.), (2., 2.)]);

    assert_eq!(collect(collection.firsts()), points(&[(1., 1.)]));
    assert_eq!(collect(collection.mids()), points(&[(2., 2.)]));
    assert_eq!(collect(collection.lasts()), points(&[(3., 3.)]));
}

parameterized_test! {can_use_firsts_as_lasts_without_dominance, values, {
    let values: Vec<(f64, f64)> = values;
    let collection = create_collection(values.as_slice());

    assert_same_elements!(collect(collection.firsts()), points(values.as_slice()));
    assert_same_elements!(collect(collection.lasts()), points(values.as_slice()));
    assert!(collection.mids().next().is_none());
}}

can_use_firsts_as_lasts_without_dominance! {
    case_01_single: vec![(1., 1.)],
    case_02_incomparable: vec![(1., 3.), (2., 2.), (3., 1.)],
    case_03_equal: vec![(1., 1.), (1., 1.)],
}

#[test]
fn can_handle_empty_collection() {
    let collection = create_collection(&[]);

    assert!(collection.is_empty());
    assert!(collection.firsts().next().is_none());
    assert!(collection.lasts().next().is_none());
    assert!(collection.mids().next().is_none());
    assert!(collection.ranked_fronts().is_empty());
}

#[test]
fn can_recompute_views_on_add() {
    let mut collection = create_collection(&[(2., 2.)]);

    collection.add(vec![1., 1.]);
    assert_eq!(collect(collection.firsts()), points(&[(1., 1.)]));
    assert_eq!(collect(collection.lasts()), points(&[(2., 2.)]));

    collection.add_all(vec![vec![0., 3.], vec![3., 3.]]);
    assert_same_elements!(collect(collection.firsts()), points(&[(1., 1.), (0., 3.)]));
    assert_eq!(collect(collection.mids()), points(&[(2., 2.)]));
    assert_eq!(collect(collection.lasts()), points(&[(3., 3.)]));
}

#[test]
fn can_recompute_views_on_remove() {
    let mut collection = create_collection(&[(1., 1.), (2., 2.), (3., 3.)]);

    let removed = collection.remove_where(|item| item[0] < 1.5);

    assert_eq!(removed, 1);
    assert_eq!(collect(collection.firsts()), points(&[(2., 2.)]));
    assert_eq!(collect(collection.lasts()), points(&[(3., 3.)]));
    assert_eq!(collection.remove_where(|_| false), 0);
}

#[test]
fn can_rank_fronts() {
    let collection = create_collection(&[(1., 5.), (2., 3.), (4., 4.), (5., 1.), (6., 6.)]);

    let fronts = collection
        .ranked_fronts()
        .into_iter()
        .map(|front| front.into_iter().cloned().collect::<Vec<_>>())
        .collect::<Vec<_>>();

    assert_eq!(fronts, vec![points(&[(1., 5.), (2., 3.), (5., 1.)]), points(&[(4., 4.)]), points(&[(6., 6.)])]);
}

#[test]
fn can_handle_cyclic_comparator() {
    // rock, paper, scissors: every element is dominated exactly once
    let comparator: PartialComparator<i32> = Arc::new(|a: &i32, b: &i32| match (b - a).rem_euclid(3) {
        1 => Some(Ordering::Less),
        2 => Some(Ordering::Greater),
        _ => None,
    });

    let collection = DagPartiallyOrderedCollection::new(vec![0, 1, 2], comparator);

    assert_eq!(collection.firsts().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(collection.lasts().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert!(collection.mids().next().is_none());
    assert_eq!(collection.ranked_fronts().len(), 1);
}

#[test]
fn can_keep_comparator_calls_quadratic() {
    let calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let comparator: PartialComparator<i32> = {
        let calls = calls.clone();
        Arc::new(move |a: &i32, b: &i32| {
            calls.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            Some(a.cmp(b))
        })
    };

    DagPartiallyOrderedCollection::new((0..10).collect(), comparator);

    assert_eq!(calls.load(std::sync::atomic::Ordering::Relaxed), 45);
}

fn dominates(a: &[f64], b: &[f64]) -> bool {
    (pareto_comparator())(&a.to_vec(), &b.to_vec()) == Some(Ordering::Less)
}

/// Returns random points together with their random permutation.
fn create_shuffled_values() -> impl Strategy<Value = (Vec<(f64, f64)>, Vec<(f64, f64)>)> {
    prop::collection::vec((0..6_i32, 0..6_i32), 0..24)
        .prop_map(|values| values.into_iter().map(|(x, y)| (x as f64, y as f64)).collect::<Vec<_>>())
        .prop_flat_map(|values| (Just(values.clone()), Just(values).prop_shuffle()))
}

proptest! {
    #[test]
    fn can_build_correct_fronts(values in prop::collection::vec((0..6_i32, 0..6_i32), 0..24)) {
        let values = values.into_iter().map(|(x, y)| (x as f64, y as f64)).collect::<Vec<_>>();
        let collection = create_collection(values.as_slice());
        let all = collect(collection.all());
        let firsts = collect(collection.firsts());
        let lasts = collect(collection.lasts());
        let mids = collect(collection.mids());

        prop_assert_eq!(firsts.is_empty(), all.is_empty());
        for first in firsts.iter() {
            prop_assert!(all.iter().all(|other| !dominates(other, first)));
        }
        if firsts.len() < all.len() {
            for last in lasts.iter() {
                prop_assert!(all.iter().all(|other| !dominates(last, other)));
            }
        }
        for mid in mids.iter() {
            prop_assert!(all.iter().any(|other| dominates(mid, other)));
            prop_assert!(all.iter().any(|other| dominates(other, mid)));
        }
        prop_assert_eq!(firsts.len() + mids.len() + if firsts.len() == all.len() { 0 } else { lasts.len() }, all.len());
    }

    #[test]
    fn can_build_views_independent_from_insertion_order((values, shuffled) in create_shuffled_values()) {
        let original = create_collection(values.as_slice());
        let shuffled = create_collection(shuffled.as_slice());

        let sorted = |mut items: Vec<Vec<f64>>| {
            items.sort_by(|a, b| a.partial_cmp(b).unwrap());
            items
        };

        prop_assert_eq!(sorted(collect(original.firsts())), sorted(collect(shuffled.firsts())));
        prop_assert_eq!(sorted(collect(original.lasts())), sorted(collect(shuffled.lasts())));
        prop_assert_eq!(sorted(collect(original.mids())), sorted(collect(shuffled.mids())));
    }
}
