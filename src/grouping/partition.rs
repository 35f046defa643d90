//! Binary partition by predicate.

/// Splits `sequence` into the elements for which `predicate` holds and the
/// elements for which it does not.
///
/// Both halves keep their relative input order. An empty input yields two
/// empty vectors.
///
/// # Examples
///
/// ```rust
/// use seqkit::grouping::partition_by;
///
/// let words = vec!["apple", "kiwi", "banana", "fig"];
/// let (long, short) = partition_by(&words, |_, word| word.len() > 4);
/// assert_eq!(long, vec!["apple", "banana"]);
/// assert_eq!(short, vec!["kiwi", "fig"]);
/// ```
pub fn partition_by<T, P>(sequence: &[T], mut predicate: P) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: FnMut(usize, &T) -> bool,
{
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for (index, element) in sequence.iter().enumerate() {
        if predicate(index, element) {
            matching.push(element.clone());
        } else {
            rest.push(element.clone());
        }
    }
    (matching, rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn partition_empty() {
        let values: Vec<i32> = vec![];
        let (matching, rest) = partition_by(&values, |_, _| true);
        assert!(matching.is_empty());
        assert!(rest.is_empty());
    }

    #[rstest]
    fn partition_all_match() {
        let (matching, rest) = partition_by(&[1, 2, 3], |_, _| true);
        assert_eq!(matching, vec![1, 2, 3]);
        assert!(rest.is_empty());
    }

    #[rstest]
    fn partition_by_index() {
        let (first_half, second_half) = partition_by(&['a', 'b', 'c', 'd'], |index, _| index < 2);
        assert_eq!(first_half, vec!['a', 'b']);
        assert_eq!(second_half, vec!['c', 'd']);
    }
}
