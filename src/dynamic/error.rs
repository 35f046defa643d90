//! Error types for the dynamic boundary.
//!
//! Ordinary sequence operations cannot fail. The only recoverable failures
//! happen where untyped data crosses into typed code: building a sequence
//! with a declared element kind, and coercing a sequence back into a typed
//! vector through the `try_` helpers.

use thiserror::Error;

use super::kind::ElementKind;

/// Represents errors raised at the boundary between dynamic and static data.
///
/// # Examples
///
/// ```rust
/// use seqkit::dynamic::{DynamicError, ElementKind, ScalarKind};
///
/// let error = DynamicError::InvalidElementType {
///     index: 2,
///     expected: ElementKind::Scalar(ScalarKind::Int),
///     found: ElementKind::Scalar(ScalarKind::Str),
/// };
/// assert_eq!(
///     error.to_string(),
///     "invalid element type at index 2: expected int, found str"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DynamicError {
    /// An element does not conform to the element kind its sequence declares.
    #[error("element at index {index} has kind {found}, but the sequence declares {expected}")]
    KindMismatch {
        /// Position of the offending element.
        index: usize,
        /// The declared element kind.
        expected: ElementKind,
        /// The kind of the offending element.
        found: ElementKind,
    },

    /// An element cannot be coerced into the requested static type.
    #[error("invalid element type at index {index}: expected {expected}, found {found}")]
    InvalidElementType {
        /// Position of the offending element.
        index: usize,
        /// The kind the target type accepts.
        expected: ElementKind,
        /// The kind of the offending element.
        found: ElementKind,
    },

    /// A scalar was supplied where a sequence was required.
    #[error("expected a sequence, found {found}")]
    NotASequence {
        /// The kind of the value that was supplied.
        found: ElementKind,
    },
}
