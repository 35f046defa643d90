//! The `dynamic!` construction macro.

/// Builds a [`DynamicValue`](crate::dynamic::DynamicValue) from a literal
/// description.
///
/// Bracketed lists become sequences of element kind `Any`, so siblings may
/// nest to different depths. `null` becomes the nil sequence. Anything else
/// is converted with `DynamicValue::from`.
///
/// Negative numbers and other multi-token expressions must be wrapped in
/// parentheses: `dynamic!([(-1), 2])`.
///
/// # Examples
///
/// ```rust
/// use seqkit::dynamic;
/// use seqkit::dynamic::{DynamicValue, ElementKind};
///
/// let value = dynamic!([1, ["two", [3.0]], null, (-4)]);
/// assert_eq!(value.to_string(), r#"[1, ["two", [3.0]], nil, -4]"#);
///
/// let sequence = value.into_sequence().unwrap();
/// assert_eq!(sequence.element_kind(), &ElementKind::Any);
/// assert_eq!(sequence.get(3), Some(&DynamicValue::Int(-4)));
/// ```
#[macro_export]
macro_rules! dynamic {
    (null) => {
        $crate::dynamic::DynamicValue::Sequence($crate::dynamic::DynamicSequence::nil(
            $crate::dynamic::ElementKind::Any,
        ))
    };
    ([ $($element:tt),* $(,)? ]) => {
        $crate::dynamic::DynamicValue::Sequence($crate::dynamic::DynamicSequence::any(
            ::std::vec![$($crate::dynamic!($element)),*],
        ))
    };
    ($value:expr) => {
        $crate::dynamic::DynamicValue::from($value)
    };
}
