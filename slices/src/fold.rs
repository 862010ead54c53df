//! Folding a sequence into a single value or a map.

use std::collections::HashMap;
use std::hash::Hash;

/// Left fold over `items`, seeded with `A::default()`.
///
/// Callers that need a non-default seed must handle it in `f` or fold
/// themselves.
#[must_use]
pub fn reduce<T, A, F>(items: &[T], f: F) -> A
where
    A: Default,
    F: FnMut(A, &T) -> A,
{
    items.iter().fold(A::default(), f)
}

/// Builds a map from the `(key, value)` pair `f` derives for each element.
///
/// When two elements produce the same key, the later one wins.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn to_map<T, K, V, F>(items: &[T], mut f: F) -> HashMap<K, V>
where
    K: Eq + Hash,
    F: FnMut(&T) -> (K, V),
{
    let mut out = HashMap::with_capacity(items.len());
    for item in items {
        let (key, value) = f(item);
        out.insert(key, value);
    }
    out
}
