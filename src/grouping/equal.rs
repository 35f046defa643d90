//! Element-wise equality.

/// Returns `true` if both slices have the same length and are pairwise equal
/// in order.
///
/// # Examples
///
/// ```rust
/// use seqkit::grouping::equal;
///
/// assert!(equal(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!equal(&[1, 2, 3], &[3, 2, 1]));
/// assert!(!equal(&[1, 2], &[1, 2, 3]));
/// ```
pub fn equal<T: PartialEq>(first: &[T], second: &[T]) -> bool {
    equal_with(first, second, |left, right| left == right)
}

/// Returns `true` if both slices have the same length and `comparator`
/// holds for every pair of elements at the same index.
///
/// The element types may differ.
///
/// # Examples
///
/// ```rust
/// use seqkit::grouping::equal_with;
///
/// let numbers = vec![1, 2, 3];
/// let labels = vec!["1", "2", "3"];
/// assert!(equal_with(&numbers, &labels, |number, label| number.to_string() == *label));
/// ```
pub fn equal_with<T, U, F>(first: &[T], second: &[U], mut comparator: F) -> bool
where
    F: FnMut(&T, &U) -> bool,
{
    first.len() == second.len()
        && first
            .iter()
            .zip(second)
            .all(|(left, right)| comparator(left, right))
}
