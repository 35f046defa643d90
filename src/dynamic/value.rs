//! Tagged dynamic values and type-erased sequences.
//!
//! A [`DynamicValue`] is either a scalar leaf or a [`DynamicSequence`] of
//! further dynamic values, so arbitrarily deep and irregular nesting is an
//! ordinary recursive data type. A sequence also records its declared
//! [`ElementKind`], which is what the flattening operations inspect.

use std::fmt;

use super::error::DynamicError;
use super::kind::{ElementKind, ScalarKind};

/// A value whose type is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    /// A boolean leaf.
    Bool(bool),
    /// An integer leaf.
    Int(i64),
    /// A floating point leaf.
    Float(f64),
    /// A string leaf.
    Str(String),
    /// A nested sequence.
    Sequence(DynamicSequence),
}

impl DynamicValue {
    /// Returns the scalar kind of a leaf, or `None` for a sequence.
    #[must_use]
    pub const fn scalar_kind(&self) -> Option<ScalarKind> {
        match self {
            Self::Bool(_) => Some(ScalarKind::Bool),
            Self::Int(_) => Some(ScalarKind::Int),
            Self::Float(_) => Some(ScalarKind::Float),
            Self::Str(_) => Some(ScalarKind::Str),
            Self::Sequence(_) => None,
        }
    }

    /// Returns the runtime kind of this value.
    ///
    /// A sequence reports `Sequence(element_kind)` using its declared
    /// element kind.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Sequence(sequence) => ElementKind::sequence_of(sequence.element_kind().clone()),
            leaf => leaf
                .scalar_kind()
                .map_or(ElementKind::Any, ElementKind::Scalar),
        }
    }

    /// Returns `true` if this value is a sequence.
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Borrows the inner sequence, if this value is one.
    #[must_use]
    pub const fn as_sequence(&self) -> Option<&DynamicSequence> {
        match self {
            Self::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    /// Unwraps the inner sequence, if this value is one.
    #[must_use]
    pub fn into_sequence(self) -> Option<DynamicSequence> {
        match self {
            Self::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }
}

impl fmt::Display for DynamicValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value:?}"),
            Self::Str(value) => write!(formatter, "{value:?}"),
            Self::Sequence(sequence) => write!(formatter, "{sequence}"),
        }
    }
}

/// A type-erased sequence: a declared element kind plus its elements.
///
/// A sequence is either *nil* (no backing storage at all, the sentinel some
/// coercions report as absent) or holds zero or more elements. The element
/// kind describes what the sequence is allowed to hold; constructors either
/// derive it statically or validate it.
///
/// # Examples
///
/// ```rust
/// use seqkit::dynamic::{DynamicSequence, ElementKind, ScalarKind};
///
/// let nested = DynamicSequence::from(vec![vec![1i64, 2], vec![3]]);
/// assert_eq!(
///     nested.element_kind(),
///     &ElementKind::sequence_of(ElementKind::Scalar(ScalarKind::Int))
/// );
/// assert_eq!(nested.len(), 2);
/// assert_eq!(nested.to_string(), "[[1, 2], [3]]");
///
/// let nil = DynamicSequence::nil(ElementKind::Any);
/// assert!(nil.is_nil());
/// assert!(nil.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicSequence {
    element_kind: ElementKind,
    elements: Option<Vec<DynamicValue>>,
}

impl DynamicSequence {
    /// Creates the nil sequence with the given element kind.
    #[must_use]
    pub const fn nil(element_kind: ElementKind) -> Self {
        Self {
            element_kind,
            elements: None,
        }
    }

    /// Creates an empty, non-nil sequence with the given element kind.
    #[must_use]
    pub const fn empty(element_kind: ElementKind) -> Self {
        Self {
            element_kind,
            elements: Some(Vec::new()),
        }
    }

    /// Creates a sequence of element kind `Any` holding `elements`.
    #[must_use]
    pub const fn any(elements: Vec<DynamicValue>) -> Self {
        Self {
            element_kind: ElementKind::Any,
            elements: Some(elements),
        }
    }

    /// Creates a sequence with a declared element kind, checking every
    /// element against it.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicError::KindMismatch`] for the first element the kind
    /// does not admit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::dynamic::{DynamicError, DynamicSequence, DynamicValue, ElementKind, ScalarKind};
    ///
    /// let ints = ElementKind::Scalar(ScalarKind::Int);
    /// assert!(DynamicSequence::with_kind(ints.clone(), vec![DynamicValue::Int(1)]).is_ok());
    ///
    /// let error = DynamicSequence::with_kind(ints, vec![DynamicValue::from("x")]).unwrap_err();
    /// assert!(matches!(error, DynamicError::KindMismatch { index: 0, .. }));
    /// ```
    pub fn with_kind(
        element_kind: ElementKind,
        elements: Vec<DynamicValue>,
    ) -> Result<Self, DynamicError> {
        if let Some((index, element)) = elements
            .iter()
            .enumerate()
            .find(|(_, element)| !element_kind.admits(element))
        {
            return Err(DynamicError::KindMismatch {
                index,
                expected: element_kind,
                found: element.kind(),
            });
        }
        Ok(Self::from_parts(element_kind, elements))
    }

    /// Assembles a sequence whose elements are already known to conform.
    pub(crate) const fn from_parts(element_kind: ElementKind, elements: Vec<DynamicValue>) -> Self {
        Self {
            element_kind,
            elements: Some(elements),
        }
    }

    /// Returns the declared element kind.
    #[must_use]
    pub const fn element_kind(&self) -> &ElementKind {
        &self.element_kind
    }

    /// Returns `true` for the nil sentinel.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.elements.is_none()
    }

    /// Returns the number of elements. The nil sequence has none.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Returns the element at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DynamicValue> {
        self.as_slice().get(index)
    }

    /// Borrows the elements as a slice. The nil sequence yields `&[]`.
    #[must_use]
    pub fn as_slice(&self) -> &[DynamicValue] {
        self.elements.as_deref().unwrap_or(&[])
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, DynamicValue> {
        self.as_slice().iter()
    }

    /// Consumes the sequence, returning its elements or `None` when nil.
    #[must_use]
    pub fn into_elements(self) -> Option<Vec<DynamicValue>> {
        self.elements
    }
}

impl<'a> IntoIterator for &'a DynamicSequence {
    type Item = &'a DynamicValue;
    type IntoIter = std::slice::Iter<'a, DynamicValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for DynamicSequence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(elements) = &self.elements else {
            return formatter.write_str("nil");
        };
        formatter.write_str("[")?;
        for (index, element) in elements.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{element}")?;
        }
        formatter.write_str("]")
    }
}

impl TryFrom<DynamicValue> for DynamicSequence {
    type Error = DynamicError;

    fn try_from(value: DynamicValue) -> Result<Self, Self::Error> {
        match value {
            DynamicValue::Sequence(sequence) => Ok(sequence),
            leaf => Err(DynamicError::NotASequence { found: leaf.kind() }),
        }
    }
}

// =============================================================================
// Static types entering the dynamic world
// =============================================================================

/// Static Rust types that can be turned into dynamic values with a known
/// element kind.
///
/// Implemented for the scalar types, for `Vec<T>` of any implementor (giving
/// nested sequence kinds), and for [`DynamicValue`] itself (kind `Any`).
pub trait DynamicElement {
    /// The element kind a sequence of `Self` is declared with.
    fn element_kind() -> ElementKind;

    /// Converts the value into a [`DynamicValue`].
    fn into_dynamic(self) -> DynamicValue;
}

impl DynamicElement for bool {
    fn element_kind() -> ElementKind {
        ElementKind::Scalar(ScalarKind::Bool)
    }

    fn into_dynamic(self) -> DynamicValue {
        DynamicValue::Bool(self)
    }
}

impl DynamicElement for i32 {
    fn element_kind() -> ElementKind {
        ElementKind::Scalar(ScalarKind::Int)
    }

    fn into_dynamic(self) -> DynamicValue {
        DynamicValue::Int(i64::from(self))
    }
}

impl DynamicElement for i64 {
    fn element_kind() -> ElementKind {
        ElementKind::Scalar(ScalarKind::Int)
    }

    fn into_dynamic(self) -> DynamicValue {
        DynamicValue::Int(self)
    }
}

impl DynamicElement for f64 {
    fn element_kind() -> ElementKind {
        ElementKind::Scalar(ScalarKind::Float)
    }

    fn into_dynamic(self) -> DynamicValue {
        DynamicValue::Float(self)
    }
}

impl DynamicElement for String {
    fn element_kind() -> ElementKind {
        ElementKind::Scalar(ScalarKind::Str)
    }

    fn into_dynamic(self) -> DynamicValue {
        DynamicValue::Str(self)
    }
}

impl DynamicElement for &str {
    fn element_kind() -> ElementKind {
        ElementKind::Scalar(ScalarKind::Str)
    }

    fn into_dynamic(self) -> DynamicValue {
        DynamicValue::Str(self.to_owned())
    }
}

impl DynamicElement for DynamicValue {
    fn element_kind() -> ElementKind {
        ElementKind::Any
    }

    fn into_dynamic(self) -> DynamicValue {
        self
    }
}

impl<T: DynamicElement> DynamicElement for Vec<T> {
    fn element_kind() -> ElementKind {
        ElementKind::sequence_of(T::element_kind())
    }

    fn into_dynamic(self) -> DynamicValue {
        DynamicValue::Sequence(DynamicSequence::from(self))
    }
}

impl<T: DynamicElement> From<Vec<T>> for DynamicSequence {
    fn from(elements: Vec<T>) -> Self {
        Self::from_parts(
            T::element_kind(),
            elements.into_iter().map(DynamicElement::into_dynamic).collect(),
        )
    }
}

impl<T: DynamicElement> From<Vec<T>> for DynamicValue {
    fn from(elements: Vec<T>) -> Self {
        Self::Sequence(DynamicSequence::from(elements))
    }
}

impl From<DynamicSequence> for DynamicValue {
    fn from(sequence: DynamicSequence) -> Self {
        Self::Sequence(sequence)
    }
}

impl From<bool> for DynamicValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for DynamicValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for DynamicValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for DynamicValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for DynamicValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for DynamicValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

static_assertions::assert_impl_all!(DynamicValue: Send, Sync, Clone);
static_assertions::assert_impl_all!(DynamicSequence: Send, Sync, Clone);
