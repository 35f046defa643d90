//! Element-wise transforms, folds and quantifiers.
//!
//! Every callback in this module receives the element's index alongside a
//! reference to the element, and elements are always visited in ascending
//! index order unless the function name says otherwise ([`reduce_right`]).
//!
//! - [`map`], [`filter`], [`filter_map`], [`flat_map`]: Build new vectors
//! - [`for_each`], [`for_each_with_break`]: Visit elements for side effects
//! - [`reduce`], [`reduce_by`], [`reduce_right`]: Fold to a single value
//! - [`every`], [`none`], [`some`]: Quantifiers
//! - [`count`], [`count_by`]: Counting
//! - [`difference`], [`difference_by`]: Set difference preserving input order
//!
//! # Reduce vs. `reduce_by`
//!
//! [`reduce`] keeps the element type: it pairs `initial` with the first
//! element and threads the result through the rest. [`reduce_by`] is the
//! ordinary left fold into an accumulator of any type. Both return `initial`
//! untouched for an empty input.
//!
//! ```rust
//! use seqkit::transform::{reduce, reduce_by, reduce_right};
//!
//! let values = vec![1, 2, 3];
//!
//! assert_eq!(reduce(&values, |_, accumulator, element| accumulator + element, 0), 6);
//!
//! let joined = reduce_by(&values, String::new(), |_, element, accumulator| {
//!     format!("{accumulator}{element}")
//! });
//! assert_eq!(joined, "123");
//!
//! let reversed = reduce_right(&values, String::new(), |_, element, accumulator| {
//!     format!("{accumulator}{element}")
//! });
//! assert_eq!(reversed, "321");
//! ```

mod difference;
mod map;
mod quantify;
mod reduce;

pub use difference::{difference, difference_by};
pub use map::{filter, filter_map, flat_map, for_each, for_each_with_break, map};
pub use quantify::{count, count_by, every, none, some};
pub use reduce::{reduce, reduce_by, reduce_right};
