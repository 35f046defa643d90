//! Structural rewrites of sequences.
//!
//! These operations never look at what the elements mean, only at where they
//! are:
//!
//! - [`chunk`]: Split into fixed-size groups
//! - [`compact`]: Remove default ("zero") values
//! - [`concat`]: Join several slices
//! - [`replace`], [`replace_all`]: Substitute occurrences of a value
//! - [`repeat`]: Build a sequence of one repeated value
//! - [`delete_at`]: Remove an index range
//! - [`drop_first`], [`drop_last`], [`drop_while`], [`drop_right_while`]: Remove a
//!   prefix or suffix
//!
//! # Storage Sharing
//!
//! The drop family returns a sub-slice of its input rather than a new
//! vector, so the result borrows the caller's storage. Call `.to_vec()` on
//! the result when an independent copy is required.
//!
//! [`delete_at`] takes its vector by value and drains the range in place,
//! reusing the caller's allocation. Clone first to keep the original.
//!
//! ```rust
//! use seqkit::structural::{delete_at, drop_first};
//!
//! let values = vec![1, 2, 3, 4, 5];
//!
//! let tail = drop_first(&values, 2);
//! assert_eq!(tail, &[3, 4, 5]);
//! assert!(std::ptr::eq(tail.as_ptr(), values[2..].as_ptr()));
//!
//! let kept = values.clone();
//! let shortened = delete_at(values, 1, Some(3));
//! assert_eq!(shortened, vec![1, 4, 5]);
//! assert_eq!(kept, vec![1, 2, 3, 4, 5]);
//! ```

mod chunk;
mod delete;
mod replace;

pub use chunk::{chunk, compact, concat, repeat};
pub use delete::{delete_at, drop_first, drop_last, drop_right_while, drop_while};
pub use replace::{replace, replace_all};
