//! Structural equality, partitioning and grouping.
//!
//! - [`equal`], [`equal_with`]: Element-wise equality, same type or across
//!   types through a comparator
//! - [`partition_by`]: Split into exactly two subsequences by a predicate
//! - [`group_with`]: Split into any number of subsequences by a derived key
//!
//! Partitioning and grouping keep the relative input order inside every
//! output group.
//!
//! # Partition vs. Group
//!
//! ```rust
//! use seqkit::grouping::{group_with, partition_by};
//!
//! let values = vec![1, 2, 3, 4];
//!
//! let (even, odd) = partition_by(&values, |_, element| element % 2 == 0);
//! assert_eq!((even, odd), (vec![2, 4], vec![1, 3]));
//!
//! let by_parity = group_with(&values, |element| element % 2 == 0);
//! assert_eq!(by_parity[&true], vec![2, 4]);
//! assert_eq!(by_parity[&false], vec![1, 3]);
//! ```

mod equal;
mod group;
mod partition;

pub use equal::{equal, equal_with};
pub use group::{GroupHasher, GroupMap, group_with};
pub use partition::partition_by;
