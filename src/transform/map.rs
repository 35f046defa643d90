//! Mapping, filtering and visiting.

/// Applies `projection` to every element and collects the results.
///
/// The result always has the same length as the input: element `i` of the
/// output is `projection(i, &sequence[i])`.
///
/// # Examples
///
/// ```rust
/// use seqkit::transform::map;
///
/// let words = vec!["a", "bb", "ccc"];
/// assert_eq!(map(&words, |_, word| word.len()), vec![1, 2, 3]);
/// assert_eq!(map(&words, |index, _| index), vec![0, 1, 2]);
/// ```
pub fn map<T, U, F>(sequence: &[T], mut projection: F) -> Vec<U>
where
    F: FnMut(usize, &T) -> U,
{
    let mut result = Vec::with_capacity(sequence.len());
    for (index, element) in sequence.iter().enumerate() {
        result.push(projection(index, element));
    }
    result
}

/// Keeps the elements for which `predicate` returns `true`, in input order.
///
/// # Examples
///
/// ```rust
/// use seqkit::transform::filter;
///
/// let values = vec![1, 2, 3, 4, 5, 6];
/// assert_eq!(filter(&values, |_, element| element % 3 == 0), vec![3, 6]);
///
/// // Odd positions only
/// assert_eq!(filter(&values, |index, _| index % 2 == 1), vec![2, 4, 6]);
/// ```
pub fn filter<T, P>(sequence: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(usize, &T) -> bool,
{
    sequence
        .iter()
        .enumerate()
        .filter(|(index, element)| predicate(*index, *element))
        .map(|(_, element)| element.clone())
        .collect()
}

/// Filters and maps in one pass.
///
/// `projection` returns `Some(value)` to keep `value` and `None` to skip the
/// element.
///
/// # Examples
///
/// ```rust
/// use seqkit::transform::filter_map;
///
/// let raw = vec!["1", "two", "3"];
/// let parsed: Vec<i32> = filter_map(&raw, |_, text| text.parse().ok());
/// assert_eq!(parsed, vec![1, 3]);
/// ```
pub fn filter_map<T, U, F>(sequence: &[T], mut projection: F) -> Vec<U>
where
    F: FnMut(usize, &T) -> Option<U>,
{
    sequence
        .iter()
        .enumerate()
        .filter_map(|(index, element)| projection(index, element))
        .collect()
}

/// Maps every element to a collection and concatenates the results in order.
///
/// # Examples
///
/// ```rust
/// use seqkit::transform::flat_map;
///
/// let values = vec![1, 2, 3];
/// let repeated = flat_map(&values, |_, element| vec![*element; *element as usize]);
/// assert_eq!(repeated, vec![1, 2, 2, 3, 3, 3]);
/// ```
pub fn flat_map<T, U, I, F>(sequence: &[T], mut projection: F) -> Vec<U>
where
    I: IntoIterator<Item = U>,
    F: FnMut(usize, &T) -> I,
{
    let mut result = Vec::with_capacity(sequence.len());
    for (index, element) in sequence.iter().enumerate() {
        result.extend(projection(index, element));
    }
    result
}

/// Calls `visitor` for every element in ascending index order.
///
/// # Examples
///
/// ```rust
/// use seqkit::transform::for_each;
///
/// let mut total = 0;
/// for_each(&[1, 2, 3], |_, element| total += element);
/// assert_eq!(total, 6);
/// ```
pub fn for_each<T, F>(sequence: &[T], mut visitor: F)
where
    F: FnMut(usize, &T),
{
    for (index, element) in sequence.iter().enumerate() {
        visitor(index, element);
    }
}

/// Calls `visitor` for elements in ascending index order until it returns
/// `false`.
///
/// The element for which `visitor` returns `false` has been visited; no
/// later element is.
///
/// # Examples
///
/// ```rust
/// use seqkit::transform::for_each_with_break;
///
/// let mut seen = Vec::new();
/// for_each_with_break(&[1, 2, 3, 4], |_, element| {
///     seen.push(*element);
///     *element < 2
/// });
/// assert_eq!(seen, vec![1, 2]);
/// ```
pub fn for_each_with_break<T, F>(sequence: &[T], mut visitor: F)
where
    F: FnMut(usize, &T) -> bool,
{
    for (index, element) in sequence.iter().enumerate() {
        if !visitor(index, element) {
            break;
        }
    }
}
