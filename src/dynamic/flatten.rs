//! Flattening of type-erased sequences.
//!
//! Both operations read the input's declared [`ElementKind`] to decide the
//! element kind of the result, then walk the elements with ordinary pattern
//! matching on [`DynamicValue::Sequence`].

use super::kind::ElementKind;
use super::value::{DynamicSequence, DynamicValue};

/// Removes one level of nesting.
///
/// Every element that is itself a sequence is replaced, in place, by its
/// own elements; any other element is copied through. The result's element
/// kind is the inner kind for a `Sequence(inner)` input and `Any` for an
/// `Any` input. Nil inner sequences contribute no elements.
///
/// # Non-nesting inputs
///
/// A sequence whose declared element kind is a scalar kind cannot contain
/// nested sequences, and flattening it is treated as a precondition miss:
/// the result is the nil sequence with the input's element kind and the
/// data is not copied. A `debug` event is emitted through `tracing` so such
/// calls can be found.
///
/// # Examples
///
/// ```rust
/// use seqkit::dynamic::{flatten_one_level, DynamicSequence};
///
/// let nested = DynamicSequence::from(vec![vec![vec![1i64], vec![2]], vec![vec![3]]]);
/// let once = flatten_one_level(&nested);
/// assert_eq!(once.to_string(), "[[1], [2], [3]]");
///
/// let flat = DynamicSequence::from(vec![1i64, 2]);
/// assert!(flatten_one_level(&flat).is_nil());
/// ```
#[must_use]
pub fn flatten_one_level(sequence: &DynamicSequence) -> DynamicSequence {
    let element_kind = match sequence.element_kind() {
        ElementKind::Sequence(inner) => inner.as_ref().clone(),
        ElementKind::Any => ElementKind::Any,
        kind @ ElementKind::Scalar(_) => {
            tracing::debug!(
                element_kind = %kind,
                length = sequence.len(),
                "flatten_one_level called on a sequence whose elements cannot nest"
            );
            return DynamicSequence::nil(kind.clone());
        }
    };

    let mut elements = Vec::with_capacity(sequence.len());
    for element in sequence {
        match element {
            DynamicValue::Sequence(inner) => elements.extend(inner.iter().cloned()),
            leaf => elements.push(leaf.clone()),
        }
    }
    DynamicSequence::from_parts(element_kind, elements)
}

/// Removes all nesting, collecting every leaf in depth-first encounter order.
///
/// The result's element kind is found first by walking the declared kind
/// through its `Sequence` layers; `Vec<Vec<Vec<i64>>>` input therefore
/// flattens to a sequence of kind `int`. Sequences held inside an `Any`
/// sequence are descended into as well, so siblings may nest to different
/// depths. Input that is already flat is copied unchanged.
///
/// The traversal keeps its own stack of pending iterators instead of
/// recursing, so nesting depth is bounded by memory rather than by the call
/// stack.
///
/// # Examples
///
/// ```rust
/// use seqkit::dynamic;
/// use seqkit::dynamic::flatten_deep;
///
/// let irregular = dynamic!([1, [2, [3, [4]]], [[5]], "six"]).into_sequence().unwrap();
/// let flat = flatten_deep(&irregular);
/// assert_eq!(flat.to_string(), r#"[1, 2, 3, 4, 5, "six"]"#);
///
/// // Flattening again changes nothing.
/// assert_eq!(flatten_deep(&flat), flat);
/// ```
#[must_use]
pub fn flatten_deep(sequence: &DynamicSequence) -> DynamicSequence {
    let leaf_kind = sequence.element_kind().innermost().clone();

    let mut leaves = Vec::with_capacity(sequence.len());
    let mut pending = vec![sequence.iter()];
    while let Some(iterator) = pending.last_mut() {
        match iterator.next() {
            Some(DynamicValue::Sequence(inner)) => pending.push(inner.iter()),
            Some(leaf) => leaves.push(leaf.clone()),
            None => {
                pending.pop();
            }
        }
    }

    tracing::trace!(
        leaf_kind = %leaf_kind,
        leaves = leaves.len(),
        "flattened dynamic sequence"
    );
    DynamicSequence::from_parts(leaf_kind, leaves)
}
