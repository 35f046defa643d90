//! Value replacement.

/// Returns a copy of `sequence` with up to `limit` occurrences of `old`
/// replaced by `new`, scanning left to right.
///
/// A negative `limit` replaces every occurrence; a `limit` of zero replaces
/// nothing.
///
/// # Examples
///
/// ```rust
/// use seqkit::structural::replace;
///
/// let values = vec!["a", "b", "a", "a"];
/// assert_eq!(replace(&values, &"a", &"x", 2), vec!["x", "b", "x", "a"]);
/// assert_eq!(replace(&values, &"a", &"x", -1), vec!["x", "b", "x", "x"]);
/// assert_eq!(replace(&values, &"a", &"x", 0), values);
/// ```
pub fn replace<T>(sequence: &[T], old: &T, new: &T, limit: isize) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut remaining = usize::try_from(limit).ok();
    sequence
        .iter()
        .map(|element| {
            if element != old || remaining == Some(0) {
                return element.clone();
            }
            if let Some(count) = remaining.as_mut() {
                *count -= 1;
            }
            new.clone()
        })
        .collect()
}

/// Returns a copy of `sequence` with every occurrence of `old` replaced by
/// `new`.
///
/// Equivalent to [`replace`] with a negative limit.
///
/// # Examples
///
/// ```rust
/// use seqkit::structural::replace_all;
///
/// assert_eq!(replace_all(&[1, 0, 1], &1, &7), vec![7, 0, 7]);
/// ```
pub fn replace_all<T>(sequence: &[T], old: &T, new: &T) -> Vec<T>
where
    T: PartialEq + Clone,
{
    replace(sequence, old, new, -1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, vec![1, 2, 1, 2])]
    #[case(1, vec![9, 2, 1, 2])]
    #[case(2, vec![9, 2, 9, 2])]
    #[case(5, vec![9, 2, 9, 2])]
    #[case(-1, vec![9, 2, 9, 2])]
    #[case(isize::MIN, vec![9, 2, 9, 2])]
    fn replace_limits(#[case] limit: isize, #[case] expected: Vec<i32>) {
        let values = vec![1, 2, 1, 2];
        assert_eq!(replace(&values, &1, &9, limit), expected);
        assert_eq!(values, vec![1, 2, 1, 2]);
    }

    #[rstest]
    fn replace_missing_value() {
        assert_eq!(replace(&["a"], &"b", &"c", -1), vec!["a"]);
    }

    #[rstest]
    fn replace_all_empty() {
        let values: Vec<String> = vec![];
        assert!(replace_all(&values, &String::new(), &String::from("x")).is_empty());
    }
}
