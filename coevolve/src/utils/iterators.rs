#[cfg(test)]
#[path = "../../tests/unit/utils/iterators_test.rs"]
mod iterators_test;

/// Collects distinct items preserving the order of their first occurrence. Only equality is
/// required, so it is suitable for types which cannot be hashed, e.g. vectors of floats.
pub fn distinct<T: PartialEq>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    items.into_iter().fold(Vec::default(), |mut acc, item| {
        if !acc.contains(&item) {
            acc.push(item);
        }
        acc
    })
}
