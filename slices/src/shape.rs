//! Reshaping nested sequences: flattening and truncating zip.

/// Concatenates the inner sequences of `nested` in order.
#[must_use]
pub fn flatten<T, S>(nested: &[S]) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let total = nested.iter().map(|inner| inner.as_ref().len()).sum();
    let mut out = Vec::with_capacity(total);
    for inner in nested {
        out.extend_from_slice(inner.as_ref());
    }
    out
}

/// Combines the element at each index of every input into one tuple per index.
///
/// `zip(inputs)[i][j] == inputs[j][i]`. The output stops at the shortest
/// input (truncating, never padding), and zero inputs produce an empty output.
#[must_use]
pub fn zip<T, S>(inputs: &[S]) -> Vec<Vec<T>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let Some(len) = inputs.iter().map(|input| input.as_ref().len()).min() else {
        tracing::trace!("zip called with no inputs");
        return Vec::new();
    };

    if inputs.iter().any(|input| input.as_ref().len() != len) {
        tracing::trace!(inputs = inputs.len(), len, "zip truncated to shortest input");
    }

    (0..len)
        .map(|idx| {
            inputs
                .iter()
                .map(|input| input.as_ref()[idx].clone())
                .collect()
        })
        .collect()
}
