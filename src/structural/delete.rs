//! Range deletion and prefix/suffix dropping.
//!
//! The functions here hand back storage the caller already owns instead of
//! allocating: the drop family returns sub-slices of its input and
//! [`delete_at`] returns the vector it was given.

/// Removes the half-open index range `[start, end)` from `sequence`.
///
/// `end` defaults to `start + 1`, removing a single element. The call is a
/// no-op when `start` is out of range or `end <= start`; an `end` past the
/// last element is clamped to the length.
///
/// The vector is taken by value and its elements are shifted in place, so
/// the returned vector reuses the input's allocation. Clone beforehand if the
/// original contents are still needed.
///
/// # Examples
///
/// ```rust
/// use seqkit::structural::delete_at;
///
/// assert_eq!(delete_at(vec![1, 2, 3, 4, 5], 1, Some(3)), vec![1, 4, 5]);
/// assert_eq!(delete_at(vec![1, 2, 3], 0, None), vec![2, 3]);
/// assert_eq!(delete_at(vec![1, 2, 3], 1, Some(99)), vec![1]);
///
/// // Out-of-range and empty ranges leave the vector as it was.
/// assert_eq!(delete_at(vec![1, 2, 3], 3, None), vec![1, 2, 3]);
/// assert_eq!(delete_at(vec![1, 2, 3], 2, Some(2)), vec![1, 2, 3]);
/// ```
pub fn delete_at<T>(mut sequence: Vec<T>, start: usize, end: Option<usize>) -> Vec<T> {
    let length = sequence.len();
    if start >= length {
        return sequence;
    }

    let end = end.unwrap_or(start + 1);
    if end <= start {
        return sequence;
    }

    sequence.drain(start..end.min(length));
    sequence
}

/// Returns `sequence` without its first `count` elements.
///
/// The result is a view into `sequence`. Dropping zero elements returns the
/// whole slice; dropping at least `sequence.len()` returns an empty slice.
///
/// # Examples
///
/// ```rust
/// use seqkit::structural::drop_first;
///
/// let values = [1, 2, 3, 4];
/// assert_eq!(drop_first(&values, 1), &[2, 3, 4]);
/// assert_eq!(drop_first(&values, 0), &values);
/// assert!(drop_first(&values, 10).is_empty());
/// ```
pub fn drop_first<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[count.min(sequence.len())..]
}

/// Returns `sequence` without its last `count` elements.
///
/// The result is a view into `sequence`.
///
/// # Examples
///
/// ```rust
/// use seqkit::structural::drop_last;
///
/// let values = [1, 2, 3, 4];
/// assert_eq!(drop_last(&values, 1), &[1, 2, 3]);
/// assert!(drop_last(&values, 4).is_empty());
/// ```
pub fn drop_last<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[..sequence.len().saturating_sub(count)]
}

/// Drops the longest prefix whose elements all satisfy `predicate`.
///
/// The first element for which `predicate` fails is kept, along with
/// everything after it. The result is a view into `sequence`.
///
/// # Examples
///
/// ```rust
/// use seqkit::structural::drop_while;
///
/// let values = [1, 2, 5, 1, 2];
/// assert_eq!(drop_while(&values, |element| *element < 3), &[5, 1, 2]);
/// assert!(drop_while(&values, |_| true).is_empty());
/// ```
pub fn drop_while<T, P>(sequence: &[T], mut predicate: P) -> &[T]
where
    P: FnMut(&T) -> bool,
{
    let start = sequence
        .iter()
        .position(|element| !predicate(element))
        .unwrap_or(sequence.len());
    &sequence[start..]
}

/// Drops the longest suffix whose elements all satisfy `predicate`.
///
/// Elements are tested from the end. The last element for which `predicate`
/// fails is kept, along with everything before it. The result is a view into
/// `sequence`.
///
/// # Examples
///
/// ```rust
/// use seqkit::structural::drop_right_while;
///
/// let values = [1, 2, 5, 1, 2];
/// assert_eq!(drop_right_while(&values, |element| *element < 3), &[1, 2, 5]);
/// assert_eq!(drop_right_while(&values, |_| false), &values);
/// ```
pub fn drop_right_while<T, P>(sequence: &[T], mut predicate: P) -> &[T]
where
    P: FnMut(&T) -> bool,
{
    let end = sequence
        .iter()
        .rposition(|element| !predicate(element))
        .map_or(0, |index| index + 1);
    &sequence[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // delete_at
    // =========================================================================

    #[rstest]
    #[case(vec![1, 2, 3, 4, 5], 1, Some(3), vec![1, 4, 5])]
    #[case(vec![1, 2, 3, 4, 5], 4, None, vec![1, 2, 3, 4])]
    #[case(vec![1, 2, 3, 4, 5], 0, Some(5), vec![])]
    #[case(vec![1, 2, 3, 4, 5], 2, Some(1), vec![1, 2, 3, 4, 5])]
    #[case(vec![1, 2, 3, 4, 5], 5, Some(6), vec![1, 2, 3, 4, 5])]
    #[case(vec![1, 2, 3, 4, 5], 3, Some(100), vec![1, 2, 3])]
    #[case(vec![], 0, None, vec![])]
    fn delete_at_cases(
        #[case] values: Vec<i32>,
        #[case] start: usize,
        #[case] end: Option<usize>,
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(delete_at(values, start, end), expected);
    }

    #[rstest]
    fn delete_at_reuses_allocation() {
        let values = vec![1, 2, 3, 4];
        let pointer = values.as_ptr();
        let result = delete_at(values, 0, None);
        assert_eq!(result.as_ptr(), pointer);
        assert_eq!(result, vec![2, 3, 4]);
    }

    // =========================================================================
    // drop_first / drop_last
    // =========================================================================

    #[rstest]
    #[case(0, vec![1, 2, 3])]
    #[case(2, vec![3])]
    #[case(3, vec![])]
    #[case(7, vec![])]
    fn drop_first_cases(#[case] count: usize, #[case] expected: Vec<i32>) {
        assert_eq!(drop_first(&[1, 2, 3], count), expected.as_slice());
    }

    #[rstest]
    #[case(0, vec![1, 2, 3])]
    #[case(2, vec![1])]
    #[case(3, vec![])]
    #[case(7, vec![])]
    fn drop_last_cases(#[case] count: usize, #[case] expected: Vec<i32>) {
        assert_eq!(drop_last(&[1, 2, 3], count), expected.as_slice());
    }

    #[rstest]
    fn drop_first_shares_storage_with_input() {
        let values = vec![String::from("a"), String::from("b")];
        let rest = drop_first(&values, 1);
        assert!(std::ptr::eq(&rest[0], &values[1]));
    }

    // =========================================================================
    // drop_while / drop_right_while
    // =========================================================================

    #[rstest]
    fn drop_while_nothing_matches() {
        let values = [3, 2, 1];
        assert_eq!(drop_while(&values, |element| *element > 5), &values);
    }

    #[rstest]
    fn drop_while_stops_testing_after_failure() {
        let values = [1, 9, 1, 1];
        let mut calls = 0;
        let rest = drop_while(&values, |element| {
            calls += 1;
            *element == 1
        });
        assert_eq!(rest, &[9, 1, 1]);
        assert_eq!(calls, 2);
    }

    #[rstest]
    fn drop_right_while_everything_matches() {
        let values = ["", ""];
        assert!(drop_right_while(&values, |text| text.is_empty()).is_empty());
    }

    #[rstest]
    fn drop_right_while_tests_from_end() {
        let values = [1, 2, 3];
        let mut seen = Vec::new();
        let rest = drop_right_while(&values, |element| {
            seen.push(*element);
            *element > 1
        });
        assert_eq!(rest, &[1]);
        assert_eq!(seen, vec![3, 2, 1]);
    }

    #[rstest]
    fn drop_while_empty() {
        let values: [i32; 0] = [];
        assert!(drop_while(&values, |_| true).is_empty());
        assert!(drop_right_while(&values, |_| true).is_empty());
    }
}
