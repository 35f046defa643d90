//! Folds over sequences.

/// Reduces a sequence to a single value of the element type.
///
/// For an empty `sequence` this returns `initial` without calling `combiner`.
/// Otherwise the first call is `combiner(0, initial, &sequence[0])` and every
/// following call is `combiner(i, previous, &sequence[i])`, so `combiner`
/// runs exactly `sequence.len()` times.
///
/// # Examples
///
/// ```rust
/// use seqkit::transform::reduce;
///
/// let values = vec![1, 2, 3];
/// let mut calls = Vec::new();
/// let total = reduce(
///     &values,
///     |index, accumulator, element| {
///         calls.push((index, accumulator, *element));
///         accumulator + element
///     },
///     0,
/// );
///
/// assert_eq!(total, 6);
/// assert_eq!(calls, vec![(0, 0, 1), (1, 1, 2), (2, 3, 3)]);
/// ```
pub fn reduce<T, F>(sequence: &[T], mut combiner: F, initial: T) -> T
where
    F: FnMut(usize, T, &T) -> T,
{
    sequence
        .iter()
        .enumerate()
        .fold(initial, |accumulator, (index, element)| {
            combiner(index, accumulator, element)
        })
}

/// Left fold with an accumulator of any type.
///
/// `reducer` is called once per element in ascending index order with the
/// index, the element and the current accumulator. An empty sequence returns
/// `initial` unchanged.
///
/// # Examples
///
/// ```rust
/// use seqkit::transform::reduce_by;
///
/// let words = vec!["one", "three", "five"];
/// let total_length = reduce_by(&words, 0, |_, word, accumulator| accumulator + word.len());
/// assert_eq!(total_length, 12);
/// ```
pub fn reduce_by<T, U, F>(sequence: &[T], initial: U, mut reducer: F) -> U
where
    F: FnMut(usize, &T, U) -> U,
{
    let mut accumulator = initial;
    for (index, element) in sequence.iter().enumerate() {
        accumulator = reducer(index, element, accumulator);
    }
    accumulator
}

/// Right fold: like [`reduce_by`] but visits elements in descending index
/// order.
///
/// # Examples
///
/// ```rust
/// use seqkit::transform::reduce_right;
///
/// let values = vec![1, 2, 3];
/// let reversed = reduce_right(&values, Vec::new(), |_, element, mut accumulator| {
///     accumulator.push(*element);
///     accumulator
/// });
/// assert_eq!(reversed, vec![3, 2, 1]);
/// ```
pub fn reduce_right<T, U, F>(sequence: &[T], initial: U, mut reducer: F) -> U
where
    F: FnMut(usize, &T, U) -> U,
{
    let mut accumulator = initial;
    for (index, element) in sequence.iter().enumerate().rev() {
        accumulator = reducer(index, element, accumulator);
    }
    accumulator
}
