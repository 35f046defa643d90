//! Dynamic flattening engine.
//!
//! Most of this library works on `&[T]` with a static `T`. Flattening nested
//! data whose depth is decided at runtime cannot be expressed that way, so
//! this module provides a small tagged value model and operations over it:
//!
//! - [`DynamicValue`]: A scalar leaf or a nested [`DynamicSequence`]
//! - [`DynamicSequence`]: A declared [`ElementKind`] plus elements (or nil)
//! - [`flatten_one_level`], [`flatten_deep`]: Remove one / all nesting levels
//! - [`to_opaque_slice`], [`to_string_slice`], [`to_int_slice`], ...:
//!   Coerce back into typed vectors
//! - [`dynamic!`](crate::dynamic!): Literal construction of irregular nesting
//!
//! Values enter the model once, at the boundary: from statically typed
//! vectors through [`DynamicSequence::from`], from untyped input through the
//! `serde` feature or the `dynamic!` macro.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::dynamic::{flatten_deep, flatten_one_level, to_int_slice, DynamicSequence};
//!
//! let nested = DynamicSequence::from(vec![vec![vec![1i64, 2], vec![3]], vec![vec![4]]]);
//!
//! let once = flatten_one_level(&nested);
//! assert_eq!(once.len(), 3);
//!
//! let all = flatten_deep(&nested);
//! assert_eq!(to_int_slice(&all), vec![1, 2, 3, 4]);
//! ```

mod coerce;
mod error;
mod flatten;
mod kind;
mod macros;
#[cfg(feature = "serde")]
mod serialize;
mod value;

pub use coerce::{
    FromDynamic, to_bool_slice, to_float_slice, to_int_slice, to_opaque_slice, to_string_slice,
    try_to_int_slice, try_to_string_slice, try_to_typed_slice,
};
pub use error::DynamicError;
pub use flatten::{flatten_deep, flatten_one_level};
pub use kind::{ElementKind, ScalarKind};
pub use value::{DynamicElement, DynamicSequence, DynamicValue};
