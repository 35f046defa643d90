//! Coercion of type-erased sequences back into typed vectors.
//!
//! Two families are provided. The `to_*_slice` helpers treat a mismatching
//! element as a broken precondition and panic on the spot. The `try_to_*`
//! helpers report the same condition as a [`DynamicError`] instead.

use super::error::DynamicError;
use super::kind::{ElementKind, ScalarKind};
use super::value::{DynamicSequence, DynamicValue};

/// Static types that can be extracted from a single [`DynamicValue`].
///
/// # Examples
///
/// ```rust
/// use seqkit::dynamic::{DynamicValue, FromDynamic};
///
/// assert_eq!(i64::from_dynamic(&DynamicValue::Int(3)), Some(3));
/// assert_eq!(i64::from_dynamic(&DynamicValue::Float(3.0)), None);
/// ```
pub trait FromDynamic: Sized {
    /// The kind of value this type accepts, used in error reports.
    fn expected_kind() -> ElementKind;

    /// Extracts `Self` from `value`, or returns `None` if the kinds differ.
    fn from_dynamic(value: &DynamicValue) -> Option<Self>;
}

impl FromDynamic for bool {
    fn expected_kind() -> ElementKind {
        ElementKind::Scalar(ScalarKind::Bool)
    }

    fn from_dynamic(value: &DynamicValue) -> Option<Self> {
        match value {
            DynamicValue::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl FromDynamic for i64 {
    fn expected_kind() -> ElementKind {
        ElementKind::Scalar(ScalarKind::Int)
    }

    fn from_dynamic(value: &DynamicValue) -> Option<Self> {
        match value {
            DynamicValue::Int(value) => Some(*value),
            _ => None,
        }
    }
}

impl FromDynamic for f64 {
    fn expected_kind() -> ElementKind {
        ElementKind::Scalar(ScalarKind::Float)
    }

    fn from_dynamic(value: &DynamicValue) -> Option<Self> {
        match value {
            DynamicValue::Float(value) => Some(*value),
            _ => None,
        }
    }
}

impl FromDynamic for String {
    fn expected_kind() -> ElementKind {
        ElementKind::Scalar(ScalarKind::Str)
    }

    fn from_dynamic(value: &DynamicValue) -> Option<Self> {
        match value {
            DynamicValue::Str(value) => Some(value.clone()),
            _ => None,
        }
    }
}

impl FromDynamic for DynamicValue {
    fn expected_kind() -> ElementKind {
        ElementKind::Any
    }

    fn from_dynamic(value: &DynamicValue) -> Option<Self> {
        Some(value.clone())
    }
}

/// Copies the elements of `sequence` into a vector of dynamic values.
///
/// Returns `None` for the nil sequence, and `Some` (possibly empty)
/// otherwise.
///
/// # Examples
///
/// ```rust
/// use seqkit::dynamic::{to_opaque_slice, DynamicSequence, DynamicValue, ElementKind};
///
/// let sequence = DynamicSequence::from(vec![1i64, 2]);
/// assert_eq!(
///     to_opaque_slice(&sequence),
///     Some(vec![DynamicValue::Int(1), DynamicValue::Int(2)])
/// );
/// assert_eq!(to_opaque_slice(&DynamicSequence::nil(ElementKind::Any)), None);
/// ```
#[must_use]
pub fn to_opaque_slice(sequence: &DynamicSequence) -> Option<Vec<DynamicValue>> {
    if sequence.is_nil() {
        return None;
    }
    Some(sequence.as_slice().to_vec())
}

/// Converts every element of `sequence` into `T`, stopping at the first
/// element of the wrong kind.
///
/// The nil sequence converts to an empty vector.
///
/// # Errors
///
/// Returns [`DynamicError::InvalidElementType`] naming the first element
/// that `T` cannot be extracted from.
///
/// # Examples
///
/// ```rust
/// use seqkit::dynamic::{try_to_typed_slice, DynamicSequence};
///
/// let floats = DynamicSequence::from(vec![0.5, 1.5]);
/// assert_eq!(try_to_typed_slice::<f64>(&floats), Ok(vec![0.5, 1.5]));
/// assert!(try_to_typed_slice::<bool>(&floats).is_err());
/// ```
pub fn try_to_typed_slice<T: FromDynamic>(sequence: &DynamicSequence) -> Result<Vec<T>, DynamicError> {
    sequence
        .iter()
        .enumerate()
        .map(|(index, element)| {
            T::from_dynamic(element).ok_or_else(|| DynamicError::InvalidElementType {
                index,
                expected: T::expected_kind(),
                found: element.kind(),
            })
        })
        .collect()
}

/// Converts `sequence` into strings, reporting a mismatch as an error.
///
/// # Errors
///
/// Returns [`DynamicError::InvalidElementType`] for the first non-string
/// element.
pub fn try_to_string_slice(sequence: &DynamicSequence) -> Result<Vec<String>, DynamicError> {
    try_to_typed_slice(sequence)
}

/// Converts `sequence` into integers, reporting a mismatch as an error.
///
/// # Errors
///
/// Returns [`DynamicError::InvalidElementType`] for the first non-integer
/// element.
pub fn try_to_int_slice(sequence: &DynamicSequence) -> Result<Vec<i64>, DynamicError> {
    try_to_typed_slice(sequence)
}

fn expect_typed_slice<T: FromDynamic>(sequence: &DynamicSequence) -> Vec<T> {
    match try_to_typed_slice(sequence) {
        Ok(elements) => elements,
        Err(error) => panic!("{error}"),
    }
}

/// Converts `sequence` into strings.
///
/// # Panics
///
/// Panics with an "invalid element type" message as soon as an element is
/// not a string. Use [`try_to_string_slice`] to handle that case instead.
///
/// # Examples
///
/// ```rust
/// use seqkit::dynamic::{to_string_slice, DynamicSequence};
///
/// let sequence = DynamicSequence::from(vec!["a", "b"]);
/// assert_eq!(to_string_slice(&sequence), vec!["a", "b"]);
/// ```
///
/// ```rust,should_panic
/// use seqkit::dynamic;
/// use seqkit::dynamic::to_string_slice;
///
/// let mixed = dynamic!(["a", 1]).into_sequence().unwrap();
/// let _ = to_string_slice(&mixed);
/// ```
#[must_use]
pub fn to_string_slice(sequence: &DynamicSequence) -> Vec<String> {
    expect_typed_slice(sequence)
}

/// Converts `sequence` into integers.
///
/// # Panics
///
/// Panics with an "invalid element type" message as soon as an element is
/// not an integer. Use [`try_to_int_slice`] to handle that case instead.
///
/// # Examples
///
/// ```rust
/// use seqkit::dynamic::{to_int_slice, DynamicSequence};
///
/// let sequence = DynamicSequence::from(vec![3i64, 4]);
/// assert_eq!(to_int_slice(&sequence), vec![3, 4]);
/// ```
#[must_use]
pub fn to_int_slice(sequence: &DynamicSequence) -> Vec<i64> {
    expect_typed_slice(sequence)
}

/// Converts `sequence` into floats.
///
/// # Panics
///
/// Panics as soon as an element is not a float. Integers are not widened.
#[must_use]
pub fn to_float_slice(sequence: &DynamicSequence) -> Vec<f64> {
    expect_typed_slice(sequence)
}

/// Converts `sequence` into booleans.
///
/// # Panics
///
/// Panics as soon as an element is not a boolean.
#[must_use]
pub fn to_bool_slice(sequence: &DynamicSequence) -> Vec<bool> {
    expect_typed_slice(sequence)
}
