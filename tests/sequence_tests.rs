#![cfg(all(
    feature = "scan",
    feature = "transform",
    feature = "structural",
    feature = "grouping"
))]
//! Scenario tests for the static sequence operations.
//!
//! These tests exercise the public API across module boundaries with the
//! concrete examples the operations are documented by.

use rstest::rstest;
use seqkit::prelude::*;

// =============================================================================
// Documented Scenarios
// =============================================================================

#[rstest]
fn reduce_sum_scenario() {
    let mut trace = Vec::new();
    let result = reduce(
        &[1, 2, 3],
        |index, accumulator, element| {
            let next = accumulator + element;
            trace.push((index, accumulator, *element, next));
            next
        },
        0,
    );
    assert_eq!(result, 6);
    assert_eq!(trace, vec![(0, 0, 1, 1), (1, 1, 2, 3), (2, 3, 3, 6)]);
}

#[rstest]
fn chunk_scenario() {
    assert_eq!(chunk(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
}

#[rstest]
fn delete_at_scenario() {
    assert_eq!(delete_at(vec![1, 2, 3, 4, 5], 1, Some(3)), vec![1, 4, 5]);
}

#[rstest]
fn group_with_scenario() {
    let groups = group_with(&[1, 2, 3, 4], |element| element % 2 == 0);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[&true], vec![2, 4]);
    assert_eq!(groups[&false], vec![1, 3]);
}

#[rstest]
fn difference_by_parity_scenario() {
    // Parities of [2, 3, 4] are {0, 1}, so every element of [1, 2, 3] has a
    // parity that also appears in the excluded list.
    assert!(difference_by(&[1, 2, 3], &[2, 3, 4], |_, element| element % 2).is_empty());
    assert_eq!(difference_by(&[1, 2, 3], &[2, 4], |_, element| element % 2), vec![1, 3]);
}

// =============================================================================
// Absent Results and Degenerate Inputs
// =============================================================================

#[rstest]
fn find_signals_absence_without_failing() {
    let values: Vec<&str> = vec![];
    assert_eq!(find(&values, |_, _| true), None);
    assert_eq!(find_last(&["a"], |_, element| element.is_empty()), None);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(100)]
fn degenerate_inputs_yield_empty_results(#[case] size: usize) {
    let empty: Vec<i32> = vec![];
    assert!(chunk(&empty, size).is_empty());
    assert!(compact(&empty).is_empty());
    assert!(drop_first(&empty, size).is_empty());
    assert!(drop_last(&empty, size).is_empty());
    assert!(delete_at(empty.clone(), size, None).is_empty());
    assert!(repeat(1, 0).is_empty());
}

// =============================================================================
// Input Immutability
// =============================================================================

#[rstest]
fn new_sequence_operations_leave_input_unchanged() {
    let values = vec![3, 0, 1, 0, 2];
    let snapshot = values.clone();

    let _ = map(&values, |_, element| element * 2);
    let _ = filter(&values, |_, element| *element > 0);
    let _ = compact(&values);
    let _ = replace_all(&values, &0, &9);
    let tail: &[i32] = &[7];
    let _ = concat(&values, &[tail]);
    let _ = difference(&values, &[0]);
    let _ = partition_by(&values, |_, element| *element > 1);

    assert_eq!(values, snapshot);
}

#[rstest]
fn delete_at_requires_explicit_copy_to_keep_original() {
    let values = vec!['a', 'b', 'c'];
    let shortened = delete_at(values.clone(), 0, None);
    assert_eq!(values, vec!['a', 'b', 'c']);
    assert_eq!(shortened, vec!['b', 'c']);
}

// =============================================================================
// Prelude Hygiene
// =============================================================================

#[rstest]
fn prelude_keeps_std_drop_available() {
    let values = vec![1, 2, 3];
    let tail = drop_first(&values, 1).to_vec();
    drop(values);
    assert_eq!(tail, vec![2, 3]);
}

// =============================================================================
// Cross-module Pipelines
// =============================================================================

#[rstest]
fn pipeline_of_scan_transform_and_group() {
    let orders = vec![
        ("alice", 30),
        ("bob", 0),
        ("alice", 12),
        ("carol", 7),
        ("bob", 5),
    ];

    let paid = filter(&orders, |_, (_, amount)| *amount > 0);
    assert!(!contains_by(&paid, |(_, amount)| *amount == 0));

    let by_customer = group_with(&paid, |(name, _)| *name);
    let totals = map(&["alice", "bob", "carol"], |_, name| {
        reduce_by(&by_customer[name], 0, |_, (_, amount), total| total + amount)
    });
    assert_eq!(totals, vec![42, 5, 7]);

    assert!(every(&totals, |_, total| *total > 0));
    assert_eq!(count_by(&totals, |_, total| *total > 6), 2);
}

#[rstest]
fn pipeline_drop_and_chunk() {
    let log = vec!["", "", "start", "a", "b", "c", "end", ""];
    let trimmed = drop_right_while(drop_while(&log, |line| line.is_empty()), |line| line.is_empty());
    assert_eq!(trimmed, &["start", "a", "b", "c", "end"]);

    let body = drop_last(drop_first(trimmed, 1), 1);
    assert_eq!(chunk(body, 2), vec![vec!["a", "b"], vec!["c"]]);
}
