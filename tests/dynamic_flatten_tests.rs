#![cfg(feature = "dynamic")]
//! Tests for the dynamic flattening engine.
//!
//! Irregularly nested values are generated with a recursive proptest
//! strategy, so sibling sequences nest to different depths and the declared
//! element kind of every generated sequence is `Any`.

use proptest::prelude::*;
use rstest::rstest;
use seqkit::dynamic;
use seqkit::dynamic::{
    DynamicError, DynamicSequence, DynamicValue, ElementKind, ScalarKind, flatten_deep,
    flatten_one_level, to_int_slice, to_opaque_slice, to_string_slice, try_to_int_slice,
};

// =============================================================================
// Strategies
// =============================================================================

fn leaf_strategy() -> impl Strategy<Value = DynamicValue> {
    prop_oneof![
        any::<bool>().prop_map(DynamicValue::Bool),
        any::<i64>().prop_map(DynamicValue::Int),
        "[a-z]{0,4}".prop_map(DynamicValue::Str),
    ]
}

fn nested_value_strategy() -> impl Strategy<Value = DynamicValue> {
    leaf_strategy().prop_recursive(6, 64, 6, |inner| {
        prop::collection::vec(inner, 0..6)
            .prop_map(|elements| DynamicValue::Sequence(DynamicSequence::any(elements)))
    })
}

fn nested_sequence_strategy() -> impl Strategy<Value = DynamicSequence> {
    prop::collection::vec(nested_value_strategy(), 0..8).prop_map(DynamicSequence::any)
}

fn collect_leaves(sequence: &DynamicSequence, leaves: &mut Vec<DynamicValue>) {
    for element in sequence {
        match element {
            DynamicValue::Sequence(inner) => collect_leaves(inner, leaves),
            leaf => leaves.push(leaf.clone()),
        }
    }
}

fn nesting_depth(sequence: &DynamicSequence) -> usize {
    1 + sequence
        .iter()
        .filter_map(DynamicValue::as_sequence)
        .map(nesting_depth)
        .max()
        .unwrap_or(0)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Deep flattening yields exactly the leaves in depth-first order
    #[test]
    fn prop_flatten_deep_matches_recursive_walk(sequence in nested_sequence_strategy()) {
        let mut expected = Vec::new();
        collect_leaves(&sequence, &mut expected);

        let flat = flatten_deep(&sequence);
        prop_assert_eq!(flat.as_slice(), expected.as_slice());
        prop_assert!(flat.iter().all(|element| !element.is_sequence()));
    }

    /// Deep flattening is idempotent
    #[test]
    fn prop_flatten_deep_idempotent(sequence in nested_sequence_strategy()) {
        let once = flatten_deep(&sequence);
        prop_assert_eq!(flatten_deep(&once), once);
    }

    /// One level of flattening removes exactly one level of nesting
    #[test]
    fn prop_flatten_one_level_reduces_depth(sequence in nested_sequence_strategy()) {
        let depth = nesting_depth(&sequence);
        let flattened = flatten_one_level(&sequence);
        prop_assert_eq!(nesting_depth(&flattened), depth.saturating_sub(1).max(1));
    }

    /// Flattening one level at a time eventually agrees with deep flattening
    #[test]
    fn prop_repeated_one_level_converges_to_deep(sequence in nested_sequence_strategy()) {
        let mut current = sequence.clone();
        while current.iter().any(DynamicValue::is_sequence) {
            current = flatten_one_level(&current);
        }
        let deep = flatten_deep(&sequence);
        prop_assert_eq!(current.as_slice(), deep.as_slice());
    }

    /// The flattening operations never modify their input
    #[test]
    fn prop_flatten_leaves_input_unchanged(sequence in nested_sequence_strategy()) {
        let snapshot = sequence.clone();
        let _ = flatten_one_level(&sequence);
        let _ = flatten_deep(&sequence);
        prop_assert_eq!(sequence, snapshot);
    }

    /// Typed nesting flattens to the innermost kind and to the row-major order
    #[test]
    fn prop_typed_nesting_flattens_row_major(
        rows in prop::collection::vec(prop::collection::vec(any::<i64>(), 0..5), 0..5)
    ) {
        let expected: Vec<i64> = rows.iter().flatten().copied().collect();
        let flat = flatten_deep(&DynamicSequence::from(rows));

        prop_assert_eq!(flat.element_kind(), &ElementKind::Scalar(ScalarKind::Int));
        prop_assert_eq!(to_int_slice(&flat), expected);
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
fn flatten_one_level_documented_scenario() {
    let nested = DynamicSequence::from(vec![vec![vec![1i64], vec![2]], vec![vec![3]]]);
    let once = flatten_one_level(&nested);

    assert_eq!(
        once.element_kind(),
        &ElementKind::sequence_of(ElementKind::Scalar(ScalarKind::Int))
    );
    assert_eq!(once, DynamicSequence::from(vec![vec![1i64], vec![2], vec![3]]));
}

#[rstest]
fn flatten_deep_documented_scenario() {
    let nested = DynamicSequence::from(vec![vec![vec![1i64], vec![2]], vec![vec![3]]]);
    assert_eq!(to_int_slice(&flatten_deep(&nested)), vec![1, 2, 3]);
}

#[rstest]
fn flatten_deep_irregular_strings() {
    let irregular = dynamic!(["a", ["b", ["c"]], [], [[["d"]]]])
        .into_sequence()
        .unwrap();
    assert_eq!(to_string_slice(&flatten_deep(&irregular)), vec!["a", "b", "c", "d"]);
}

#[rstest]
fn flatten_one_level_on_flat_kind_is_nil() {
    let flat = DynamicSequence::from(vec!["x", "y"]);
    let result = flatten_one_level(&flat);

    assert!(result.is_nil());
    assert_eq!(result.element_kind(), &ElementKind::Scalar(ScalarKind::Str));
    assert_eq!(to_opaque_slice(&result), None);
}

#[rstest]
fn flatten_deep_on_flat_input_copies() {
    let flat = DynamicSequence::from(vec![true, false]);
    assert_eq!(flatten_deep(&flat), flat);
}

#[rstest]
fn flatten_skips_nil_inner_sequences() {
    let with_nil = dynamic!([1, null, [2, null]]).into_sequence().unwrap();

    assert_eq!(to_int_slice(&flatten_deep(&with_nil)), vec![1, 2]);
    assert_eq!(flatten_one_level(&with_nil).len(), 3);
}

#[rstest]
fn coercion_after_flatten_reports_mixed_kinds() {
    let mixed = dynamic!([[1], ["two"]]).into_sequence().unwrap();
    let flat = flatten_deep(&mixed);

    assert_eq!(
        try_to_int_slice(&flat),
        Err(DynamicError::InvalidElementType {
            index: 1,
            expected: ElementKind::Scalar(ScalarKind::Int),
            found: ElementKind::Scalar(ScalarKind::Str),
        })
    );
}

#[rstest]
#[should_panic(expected = "invalid element type at index 1")]
fn to_int_slice_panics_on_mixed_kinds() {
    let mixed = dynamic!([[1], ["two"]]).into_sequence().unwrap();
    let _ = to_int_slice(&flatten_deep(&mixed));
}

#[rstest]
fn flatten_deep_handles_deep_nesting() {
    let mut value = DynamicValue::Int(42);
    for _ in 0..1_000 {
        value = DynamicValue::Sequence(DynamicSequence::any(vec![value]));
    }
    let sequence = value.into_sequence().unwrap();

    assert_eq!(to_int_slice(&flatten_deep(&sequence)), vec![42]);
}
