//! Key-based grouping.

use std::collections::HashMap;
use std::hash::Hash;

/// Hasher used by [`GroupMap`].
///
/// With the `fxhash` feature this is `rustc_hash::FxBuildHasher`; with only
/// the `ahash` feature it is `ahash::RandomState`; otherwise it is the
/// standard library's `RandomState`.
#[cfg(feature = "fxhash")]
pub type GroupHasher = rustc_hash::FxBuildHasher;

/// Hasher used by [`GroupMap`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type GroupHasher = ahash::RandomState;

/// Hasher used by [`GroupMap`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type GroupHasher = std::collections::hash_map::RandomState;

/// Mapping from a group key to the elements sharing that key.
pub type GroupMap<K, T> = HashMap<K, Vec<T>, GroupHasher>;

/// Groups the elements of `sequence` by the key `key_of` derives from each.
///
/// Inside each group the elements keep their input order. The iteration
/// order of the keys themselves is unspecified.
///
/// # Examples
///
/// ```rust
/// use seqkit::grouping::group_with;
///
/// let words = vec!["one", "two", "three", "four", "five"];
/// let by_length = group_with(&words, |word| word.len());
///
/// assert_eq!(by_length.len(), 3);
/// assert_eq!(by_length[&3], vec!["one", "two"]);
/// assert_eq!(by_length[&4], vec!["four", "five"]);
/// assert_eq!(by_length[&5], vec!["three"]);
/// ```
pub fn group_with<T, K, F>(sequence: &[T], mut key_of: F) -> GroupMap<K, T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut groups: GroupMap<K, T> = GroupMap::with_hasher(GroupHasher::default());
    for element in sequence {
        groups
            .entry(key_of(element))
            .or_default()
            .push(element.clone());
    }
    groups
}
