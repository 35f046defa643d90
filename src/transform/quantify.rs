//! Quantifiers and counting.

/// Returns `true` if `predicate` holds for every element.
///
/// Stops at the first element that fails. An empty sequence yields `true`.
///
/// # Examples
///
/// ```rust
/// use seqkit::transform::every;
///
/// assert!(every(&[2, 4, 6], |_, element| element % 2 == 0));
/// assert!(!every(&[2, 3, 6], |_, element| element % 2 == 0));
/// assert!(every::<i32, _>(&[], |_, _| false));
/// ```
pub fn every<T, P>(sequence: &[T], mut predicate: P) -> bool
where
    P: FnMut(usize, &T) -> bool,
{
    sequence
        .iter()
        .enumerate()
        .all(|(index, element)| predicate(index, element))
}

/// Returns `true` if `predicate` holds for no element.
///
/// An empty sequence yields `true`.
///
/// # Examples
///
/// ```rust
/// use seqkit::transform::none;
///
/// assert!(none(&[1, 3, 5], |_, element| element % 2 == 0));
/// assert!(!none(&[1, 2, 5], |_, element| element % 2 == 0));
/// ```
pub fn none<T, P>(sequence: &[T], predicate: P) -> bool
where
    P: FnMut(usize, &T) -> bool,
{
    !some(sequence, predicate)
}

/// Returns `true` if `predicate` holds for at least one element.
///
/// Stops at the first element that matches. An empty sequence yields `false`.
///
/// # Examples
///
/// ```rust
/// use seqkit::transform::some;
///
/// assert!(some(&["a", "", "c"], |_, text| text.is_empty()));
/// assert!(!some(&["a", "b"], |_, text| text.is_empty()));
/// ```
pub fn some<T, P>(sequence: &[T], mut predicate: P) -> bool
where
    P: FnMut(usize, &T) -> bool,
{
    sequence
        .iter()
        .enumerate()
        .any(|(index, element)| predicate(index, element))
}

/// Counts the elements equal to `target`.
///
/// # Examples
///
/// ```rust
/// use seqkit::transform::count;
///
/// assert_eq!(count(&[1, 2, 1, 1], &1), 3);
/// assert_eq!(count(&[1, 2, 1, 1], &9), 0);
/// ```
pub fn count<T: PartialEq>(sequence: &[T], target: &T) -> usize {
    sequence.iter().filter(|element| *element == target).count()
}

/// Counts the elements for which `predicate` holds.
///
/// # Examples
///
/// ```rust
/// use seqkit::transform::count_by;
///
/// let values = vec![5, 12, 8, 130, 44];
/// assert_eq!(count_by(&values, |_, element| *element > 10), 3);
/// ```
pub fn count_by<T, P>(sequence: &[T], mut predicate: P) -> usize
where
    P: FnMut(usize, &T) -> bool,
{
    sequence
        .iter()
        .enumerate()
        .filter(|(index, element)| predicate(*index, *element))
        .count()
}
