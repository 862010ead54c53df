//! Generic sequence utilities.
//!
//! Free functions over ordered sequences. Every function makes a single eager
//! pass over its input, never mutates it, and returns a freshly allocated
//! result owned by the caller:
//!
//! - **`select`**: `dedupe`, `filter`, `last`
//! - **`fold`**: `reduce`, `to_map`
//! - **`transform`**: `transform`, plus the short-circuiting `transform_err`
//!   and `transform_err_indexed`
//! - **`shape`**: `flatten`, truncating `zip`
//!
//! Only the fallible transforms have an error channel. Everything else is
//! total, and empty input always produces an empty (never absent) output.

pub mod fold;
pub mod select;
pub mod shape;
pub mod transform;

pub use fold::{reduce, to_map};
pub use select::{dedupe, filter, last};
pub use shape::{flatten, zip};
pub use transform::{TransformError, transform, transform_err, transform_err_indexed};
