//! First and last match search.

/// Returns the first element satisfying `predicate`, scanning in ascending
/// index order.
///
/// The predicate receives the element's index and a reference to it.
/// `None` means no element matched; it is not an error.
///
/// # Examples
///
/// ```rust
/// use seqkit::scan::find;
///
/// let values = vec![10, 25, 30, 45];
/// assert_eq!(find(&values, |_, element| element % 15 == 0), Some(&30));
/// assert_eq!(find(&values, |index, _| index == 3), Some(&45));
/// assert_eq!(find(&values, |_, element| *element < 0), None);
/// ```
pub fn find<T, P>(sequence: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(usize, &T) -> bool,
{
    sequence
        .iter()
        .enumerate()
        .find(|(index, element)| predicate(*index, *element))
        .map(|(_, element)| element)
}

/// Returns the last element satisfying `predicate`, scanning in descending
/// index order.
///
/// The predicate is called from the end of the slice towards the start and
/// is not called again once it returns `true`.
///
/// # Examples
///
/// ```rust
/// use seqkit::scan::find_last;
///
/// let values = vec![10, 25, 30, 45];
/// assert_eq!(find_last(&values, |_, element| element % 2 == 0), Some(&30));
/// assert_eq!(find_last(&values, |_, element| *element > 100), None);
/// ```
pub fn find_last<T, P>(sequence: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(usize, &T) -> bool,
{
    sequence
        .iter()
        .enumerate()
        .rev()
        .find(|(index, element)| predicate(*index, *element))
        .map(|(_, element)| element)
}
