//! Predicate scanning over sequences.
//!
//! This module answers "is it there" and "where is the first/last one"
//! questions over a slice, either by value equality or by a caller-supplied
//! predicate:
//!
//! - [`contains`]: Membership by value equality
//! - [`contains_by`]: Membership by predicate
//! - [`contains_subsequence`]: Every element of one slice occurs in another
//! - [`find`] / [`find_last`]: First / last element satisfying a predicate
//!
//! None of these operations can fail. A search that matches nothing reports
//! the absence through `None` rather than an error.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::scan::{contains, contains_subsequence, find, find_last};
//!
//! let values = vec![3, 8, 1, 6];
//!
//! assert!(contains(&values, &8));
//! assert!(contains_subsequence(&values, &[1, 3]));
//!
//! assert_eq!(find(&values, |_, element| *element > 4), Some(&8));
//! assert_eq!(find_last(&values, |_, element| *element > 4), Some(&6));
//! assert_eq!(find(&values, |_, element| *element > 10), None);
//! ```

mod contains;
mod find;

pub use contains::{contains, contains_by, contains_subsequence};
pub use find::{find, find_last};
