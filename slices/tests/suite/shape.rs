//! Property tests for flatten and zip

use proptest::prelude::*;
use slices::{flatten, zip};

#[test]
fn flatten_example() {
    let nested: Vec<Vec<i32>> = vec![vec![1, 2], vec![], vec![3]];
    assert_eq!(flatten(&nested), vec![1, 2, 3]);
}

#[test]
fn zip_example() {
    let a: &[i32] = &[1, 2, 3];
    let b: &[i32] = &[10, 20];
    assert_eq!(zip(&[a, b]), vec![vec![1, 10], vec![2, 20]]);
}

#[test]
fn zip_without_inputs() {
    let none: [&[u8]; 0] = [];
    let zipped: Vec<Vec<u8>> = zip(&none);
    assert!(zipped.is_empty());
}

fn nested_strategy() -> impl Strategy<Value = Vec<Vec<u16>>> {
    prop::collection::vec(prop::collection::vec(any::<u16>(), 0..16), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: len(flatten(s)) == sum of inner lengths, order preserved
    #[test]
    fn prop_flatten_length_and_order(nested in nested_strategy()) {
        let out = flatten(&nested);
        prop_assert_eq!(out.len(), nested.iter().map(Vec::len).sum::<usize>());

        let expected: Vec<u16> = nested.iter().flatten().copied().collect();
        prop_assert_eq!(out, expected);
    }

    /// Property: zip length is the shortest input, and zip transposes
    #[test]
    fn prop_zip_transposes(inputs in nested_strategy()) {
        let out = zip(&inputs);
        let shortest = inputs.iter().map(Vec::len).min().unwrap_or(0);
        prop_assert_eq!(out.len(), shortest);

        for (i, tuple) in out.iter().enumerate() {
            prop_assert_eq!(tuple.len(), inputs.len());
            for (j, value) in tuple.iter().enumerate() {
                prop_assert_eq!(*value, inputs[j][i]);
            }
        }
    }
}
