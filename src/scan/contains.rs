//! Membership tests.

/// Returns `true` if some element of `sequence` equals `target`.
///
/// # Examples
///
/// ```rust
/// use seqkit::scan::contains;
///
/// assert!(contains(&["a", "b"], &"b"));
/// assert!(!contains(&["a", "b"], &"c"));
/// assert!(!contains::<i32>(&[], &1));
/// ```
pub fn contains<T: PartialEq>(sequence: &[T], target: &T) -> bool {
    sequence.iter().any(|element| element == target)
}

/// Returns `true` if `predicate` holds for some element of `sequence`.
///
/// Elements are tested in ascending index order and the scan stops at the
/// first match.
///
/// # Examples
///
/// ```rust
/// use seqkit::scan::contains_by;
///
/// let words = vec!["apple", "banana", "cherry"];
/// assert!(contains_by(&words, |word| word.starts_with('b')));
/// assert!(!contains_by(&words, |word| word.is_empty()));
/// ```
pub fn contains_by<T, P>(sequence: &[T], mut predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    sequence.iter().any(|element| predicate(element))
}

/// Returns `true` if every element of `subsequence` occurs somewhere in
/// `sequence`.
///
/// This is a membership test per element, not a search for a contiguous run.
/// Duplicates are not counted: `[1, 1]` is contained in `[1]`.
///
/// # Examples
///
/// ```rust
/// use seqkit::scan::contains_subsequence;
///
/// assert!(contains_subsequence(&[1, 2, 3, 4], &[4, 1]));
/// assert!(contains_subsequence(&[1], &[1, 1]));
/// assert!(!contains_subsequence(&[1, 2], &[2, 5]));
///
/// // The empty slice is contained in anything.
/// assert!(contains_subsequence::<i32>(&[], &[]));
/// ```
pub fn contains_subsequence<T: PartialEq>(sequence: &[T], subsequence: &[T]) -> bool {
    subsequence
        .iter()
        .all(|element| contains(sequence, element))
}
