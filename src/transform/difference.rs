//! Order-preserving set difference.

use crate::scan::contains;

use super::map::map;

/// Keeps the elements of `sequence` that do not occur in `excluded`.
///
/// Comparison is by value equality. The result preserves input order and
/// duplicates of kept elements.
///
/// # Examples
///
/// ```rust
/// use seqkit::transform::difference;
///
/// assert_eq!(difference(&[1, 2, 2, 3, 4], &[2, 4]), vec![1, 3]);
/// assert_eq!(difference(&[1, 1], &[]), vec![1, 1]);
/// ```
pub fn difference<T>(sequence: &[T], excluded: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    sequence
        .iter()
        .filter(|element| !contains(excluded, *element))
        .cloned()
        .collect()
}

/// Keeps the elements of `sequence` whose projection does not occur among the
/// projections of `excluded`.
///
/// `projection` is applied to both slices, each with its own indices. The
/// kept elements are returned as they were, not projected.
///
/// # Examples
///
/// ```rust
/// use seqkit::transform::difference_by;
///
/// // Parities of [2, 3, 4] are {0, 1}: nothing survives.
/// assert!(difference_by(&[1, 2, 3], &[2, 3, 4], |_, element| element % 2).is_empty());
///
/// // Parities of [2, 4] are {0}: odd elements survive.
/// assert_eq!(difference_by(&[1, 2, 3], &[2, 4], |_, element| element % 2), vec![1, 3]);
/// ```
pub fn difference_by<T, U, F>(sequence: &[T], excluded: &[T], mut projection: F) -> Vec<T>
where
    T: Clone,
    U: PartialEq,
    F: FnMut(usize, &T) -> U,
{
    let projected = map(sequence, &mut projection);
    let projected_excluded = map(excluded, &mut projection);

    sequence
        .iter()
        .zip(projected.iter())
        .filter(|(_, key)| !contains(&projected_excluded, *key))
        .map(|(element, _)| element.clone())
        .collect()
}
