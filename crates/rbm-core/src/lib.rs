//! # rbm-core
//!
//! Core types for rigid-body motion exponential and logarithm maps.
//!
//! This crate provides the foundational types used throughout the rbm
//! workspace:
//!
//! - [`Error`], [`Result`] - Shared error taxonomy
//! - [`Op`] - Which map (`exp` or `log`) an error came from
//! - [`Array`] - Dynamic row-major numeric array, the array-like input of
//!   the dispatch boundary
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. All other rbm crates depend
//! on `rbm-core`:
//!
//! ```text
//! rbm-core (this crate)
//!    ^
//!    |
//!    +-- rbm-math (SO(3)/SE(3) maps)
//!    +-- rbm-explog (type/shape dispatch)
//!    +-- rbm-py (Python bindings)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod array;
pub mod error;

pub use array::{format_shape, Array};
pub use error::{Error, Op, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::array::Array;
    pub use crate::error::{Error, Op, Result};
}
