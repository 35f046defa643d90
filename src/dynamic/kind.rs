//! Runtime type descriptors for dynamic values.

use std::fmt;

use super::value::DynamicValue;

/// The kind of a scalar (non-sequence) dynamic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// A boolean.
    Bool,
    /// A signed 64-bit integer.
    Int,
    /// A 64-bit float.
    Float,
    /// A UTF-8 string.
    Str,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
        };
        formatter.write_str(name)
    }
}

/// The declared element kind of a [`DynamicSequence`](super::DynamicSequence).
///
/// This is the runtime counterpart of a static element type: `Vec<Vec<i64>>`
/// has element kind `Sequence(Scalar(Int))`, and a heterogeneous sequence
/// built from untyped input has element kind `Any`.
///
/// # Examples
///
/// ```rust
/// use seqkit::dynamic::{ElementKind, ScalarKind};
///
/// let nested = ElementKind::sequence_of(ElementKind::sequence_of(ElementKind::Scalar(ScalarKind::Int)));
/// assert_eq!(nested.innermost(), &ElementKind::Scalar(ScalarKind::Int));
/// assert_eq!(nested.to_string(), "[[int]]");
/// assert!(nested.can_nest());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Elements are scalars of one kind.
    Scalar(ScalarKind),
    /// Elements may be anything, including sequences.
    Any,
    /// Elements are sequences whose own element kind is the boxed kind.
    Sequence(Box<ElementKind>),
}

impl ElementKind {
    /// Shorthand for `ElementKind::Sequence(Box::new(inner))`.
    #[must_use]
    pub fn sequence_of(inner: Self) -> Self {
        Self::Sequence(Box::new(inner))
    }

    /// Returns `true` if elements of this kind may themselves be sequences.
    #[must_use]
    pub const fn can_nest(&self) -> bool {
        matches!(self, Self::Any | Self::Sequence(_))
    }

    /// Walks through `Sequence` layers until a non-sequence kind is reached.
    #[must_use]
    pub fn innermost(&self) -> &Self {
        let mut kind = self;
        while let Self::Sequence(inner) = kind {
            kind = inner.as_ref();
        }
        kind
    }

    /// Returns `true` if `value` may be stored in a sequence with this
    /// element kind.
    ///
    /// `Any` admits every value. A scalar kind admits scalars of that kind.
    /// A sequence kind admits sequences declared with exactly the inner
    /// element kind.
    #[must_use]
    pub fn admits(&self, value: &DynamicValue) -> bool {
        match (self, value) {
            (Self::Any, _) => true,
            (Self::Scalar(kind), value) => value.scalar_kind() == Some(*kind),
            (Self::Sequence(inner), DynamicValue::Sequence(sequence)) => {
                **inner == *sequence.element_kind()
            }
            (Self::Sequence(_), _) => false,
        }
    }
}

impl From<ScalarKind> for ElementKind {
    fn from(kind: ScalarKind) -> Self {
        Self::Scalar(kind)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(formatter, "{kind}"),
            Self::Any => formatter.write_str("any"),
            Self::Sequence(inner) => write!(formatter, "[{inner}]"),
        }
    }
}
