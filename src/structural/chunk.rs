//! Chunking, compaction, concatenation and repetition.

/// Splits `sequence` into consecutive groups of `size` elements.
///
/// The last group holds the remainder and may be shorter. A `size` of zero
/// or an empty input yields no groups.
///
/// # Examples
///
/// ```rust
/// use seqkit::structural::chunk;
///
/// assert_eq!(chunk(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert_eq!(chunk(&[1, 2, 3], 5), vec![vec![1, 2, 3]]);
/// assert!(chunk(&[1, 2, 3], 0).is_empty());
/// ```
pub fn chunk<T: Clone>(sequence: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    sequence.chunks(size).map(<[T]>::to_vec).collect()
}

/// Removes every element equal to `T::default()`, preserving order.
///
/// # Examples
///
/// ```rust
/// use seqkit::structural::compact;
///
/// assert_eq!(compact(&[0, 1, 0, 2, 3]), vec![1, 2, 3]);
/// assert_eq!(compact(&["", "a", "", "b"]), vec!["a", "b"]);
/// assert_eq!(compact(&[false, true]), vec![true]);
/// ```
pub fn compact<T>(sequence: &[T]) -> Vec<T>
where
    T: Default + PartialEq + Clone,
{
    let zero = T::default();
    sequence
        .iter()
        .filter(|element| **element != zero)
        .cloned()
        .collect()
}

/// Concatenates `sequence` with every slice in `rest`, in order.
///
/// None of the inputs is modified.
///
/// # Examples
///
/// ```rust
/// use seqkit::structural::concat;
///
/// let rest: [&[i32]; 3] = [&[3], &[], &[4, 5]];
/// assert_eq!(concat(&[1, 2], &rest), vec![1, 2, 3, 4, 5]);
/// assert_eq!(concat::<i32>(&[], &[]), Vec::<i32>::new());
/// ```
pub fn concat<T: Clone>(sequence: &[T], rest: &[&[T]]) -> Vec<T> {
    let length = sequence.len() + rest.iter().map(|slice| slice.len()).sum::<usize>();
    let mut result = Vec::with_capacity(length);
    result.extend_from_slice(sequence);
    for slice in rest {
        result.extend_from_slice(slice);
    }
    result
}

/// Builds a vector holding `count` clones of `item`.
///
/// # Examples
///
/// ```rust
/// use seqkit::structural::repeat;
///
/// assert_eq!(repeat("ab", 3), vec!["ab", "ab", "ab"]);
/// assert!(repeat(1, 0).is_empty());
/// ```
pub fn repeat<T: Clone>(item: T, count: usize) -> Vec<T> {
    vec![item; count]
}
