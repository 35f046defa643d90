//! # seqkit
//!
//! Operations over ordered, finite, index-addressable sequences.
//!
//! ## Overview
//!
//! Application code keeps writing the same loops over slices: "is this value
//! in there", "keep the ones that match", "split into pages", "group by key".
//! This library collects those loops behind small, predictable functions:
//!
//! - **Scanning**: membership tests and first/last search by predicate
//! - **Transform & Reduce**: map, filter, flat-map, folds, quantifiers, counting
//!   and set difference
//! - **Structural**: chunking, compaction, concatenation, replacement,
//!   deletion and prefix/suffix dropping
//! - **Dynamic**: flattening of sequences whose nesting is only known at
//!   runtime, plus coercion back into statically typed vectors
//! - **Grouping**: structural equality, binary partition and key grouping
//!
//! Every operation is a pure function of its arguments. Inputs are borrowed
//! and left untouched unless a signature takes ownership (see
//! [`structural::delete_at`]).
//!
//! ## Feature Flags
//!
//! - `scan`: Predicate scanning
//! - `transform`: Transform & reduce (enables `scan`)
//! - `structural`: Structural rewrites
//! - `dynamic`: Dynamic flattening engine and coercion helpers
//! - `grouping`: Equality, partitioning and grouping
//! - `serde`: Serialization of dynamic values
//! - `fxhash` / `ahash`: Faster hashers for [`grouping::GroupMap`]
//! - `full`: Enable all features except the alternative hashers
//!
//! ## Example
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//!
//! let doubled = map(&numbers, |_, element| element * 2);
//! assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
//!
//! let pages = chunk(&numbers, 2);
//! assert_eq!(pages, vec![vec![1, 2], vec![3, 4], vec![5]]);
//!
//! let (even, odd) = partition_by(&numbers, |_, element| element % 2 == 0);
//! assert_eq!(even, vec![2, 4]);
//! assert_eq!(odd, vec![1, 3, 5]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every operation of the enabled components.
///
/// # Usage
///
/// ```rust
/// use seqkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "scan")]
    pub use crate::scan::*;

    #[cfg(feature = "transform")]
    pub use crate::transform::*;

    #[cfg(feature = "structural")]
    pub use crate::structural::*;

    #[cfg(feature = "dynamic")]
    pub use crate::dynamic::*;

    #[cfg(feature = "grouping")]
    pub use crate::grouping::*;
}

#[cfg(feature = "scan")]
pub mod scan;

#[cfg(feature = "transform")]
pub mod transform;

#[cfg(feature = "structural")]
pub mod structural;

#[cfg(feature = "dynamic")]
pub mod dynamic;

#[cfg(feature = "grouping")]
pub mod grouping;
