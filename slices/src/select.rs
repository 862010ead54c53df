//! Element selection: deduplication, filtering, last-element access.

use std::collections::HashSet;
use std::hash::Hash;

/// Returns the distinct elements of `items` in order of first occurrence.
///
/// Applying `dedupe` to its own output returns the same sequence.
#[must_use]
pub fn dedupe<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: HashSet<&T> = HashSet::with_capacity(items.len());
    let mut out = Vec::new();
    for item in items {
        if seen.insert(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Returns the elements for which `pred` returned `true`, in input order.
#[must_use]
pub fn filter<T, F>(items: &[T], mut pred: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    items.iter().filter(|&item| pred(item)).cloned().collect()
}

/// Returns the last element of `items`, or `T::default()` if it is empty.
///
/// An empty slice and a slice ending in the default value are
/// indistinguishable here; check `items.is_empty()` when that matters.
#[must_use]
pub fn last<T>(items: &[T]) -> T
where
    T: Default + Clone,
{
    items.last().cloned().unwrap_or_default()
}
