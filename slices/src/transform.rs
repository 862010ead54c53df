//! Element-wise transformation, infallible and short-circuiting.

use thiserror::Error;

/// The first failure of a [`transform_err_indexed`] call, tagged with the
/// position of the element that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("element {index} failed to transform")]
pub struct TransformError<E> {
    index: usize,
    #[source]
    source: E,
}

impl<E> TransformError<E> {
    /// Index of the failing element in the input slice.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn inner(&self) -> &E {
        &self.source
    }

    #[must_use]
    pub fn into_inner(self) -> E {
        self.source
    }
}

/// Maps every element through `f`. Output has the same length and order.
#[must_use]
pub fn transform<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items.iter().map(f).collect()
}

/// Fallible [`transform`]: all elements succeed, or nothing is returned.
///
/// Stops at the first `Err`, discards everything mapped so far, and returns
/// that error unchanged. `f` is never called on later elements.
pub fn transform_err<T, U, E, F>(items: &[T], f: F) -> Result<Vec<U>, E>
where
    F: FnMut(&T) -> Result<U, E>,
{
    transform_err_indexed(items, f).map_err(TransformError::into_inner)
}

/// Same contract as [`transform_err`], but the error carries the index of the
/// element that failed.
pub fn transform_err_indexed<T, U, E, F>(
    items: &[T],
    mut f: F,
) -> Result<Vec<U>, TransformError<E>>
where
    F: FnMut(&T) -> Result<U, E>,
{
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match f(item) {
            Ok(value) => out.push(value),
            Err(source) => {
                tracing::trace!(index, len = items.len(), "transform short-circuited");
                return Err(TransformError { index, source });
            }
        }
    }
    Ok(out)
}
