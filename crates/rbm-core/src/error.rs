//! Error types for rbm operations.
//!
//! This module provides a single error type shared by the math, dispatch
//! and binding crates.
//!
//! # Overview
//!
//! The [`Error`] enum covers every way an `exp`/`log` call can fail:
//! - Classification failures (wrong shape, wrong kind of value)
//! - Scalar domain failures (logarithm of a non-positive number, overflow)
//! - Engine failures (non-finite input, custom engine errors)
//! - Configuration loading
//!
//! # Usage
//!
//! ```rust
//! use rbm_core::{Error, Op, Result};
//!
//! fn check_vector(shape: &[usize]) -> Result<()> {
//!     if shape != [3, 1] && shape != [6, 1] {
//!         return Err(Error::invalid_shape(Op::Exp, shape));
//!     }
//!     Ok(())
//! }
//!
//! let err = check_vector(&[2, 1]).unwrap_err();
//! assert!(err.to_string().contains("only 3 and 6 vectors are allowed"));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `rbm-math` - Array conversions
//! - `rbm-explog` - Dispatch and engine errors
//! - `rbm-py` - Mapped onto Python exceptions

use std::fmt;
use thiserror::Error;

use crate::array::format_shape;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// The operation an error was raised from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Exponential map.
    Exp,
    /// Logarithm map.
    Log,
}

impl Op {
    /// Short operation name, `"exp"` or `"log"`.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exp => "exp",
            Self::Log => "log",
        }
    }

    /// Array shapes accepted by this operation, as shown in error messages.
    #[inline]
    pub const fn accepted_shapes(self) -> &'static str {
        match self {
            Self::Exp => "3 and 6 vectors",
            Self::Log => "3 and 4 matrices",
        }
    }

    /// Value categories accepted by this operation, as shown in error messages.
    #[inline]
    pub const fn accepted_types(self) -> &'static str {
        match self {
            Self::Exp => "real, vector3, vector6 and Motion objects",
            Self::Log => "real, matrix3, matrix4 and SE3 objects",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur during exp/log dispatch and evaluation.
///
/// # Categories
///
/// - **Classification errors**: [`InvalidShape`](Error::InvalidShape), [`UnsupportedType`](Error::UnsupportedType)
/// - **Scalar errors**: [`Domain`](Error::Domain), [`Overflow`](Error::Overflow)
/// - **Engine errors**: [`NonFinite`](Error::NonFinite), [`Engine`](Error::Engine)
/// - **Data errors**: [`DataLength`](Error::DataLength)
/// - **Configuration errors**: [`Config`](Error::Config), [`Io`](Error::Io), [`Yaml`](Error::Yaml)
#[derive(Debug, Error)]
pub enum Error {
    /// Array-like input does not have a shape the operation accepts.
    ///
    /// `exp` accepts 3x1 and 6x1 column vectors, `log` accepts 3x3 and 4x4
    /// matrices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rbm_core::{Error, Op};
    ///
    /// let err = Error::invalid_shape(Op::Log, &[5, 5]);
    /// assert!(err.to_string().contains("3 and 4"));
    /// assert!(err.to_string().contains("(5, 5)"));
    /// ```
    #[error("invalid shape {shape} for {op}: only {} are allowed", .op.accepted_shapes())]
    InvalidShape {
        /// Operation that rejected the input
        op: Op,
        /// Offending shape, numpy tuple notation
        shape: String,
    },

    /// Input is not a kind of value the operation is defined for.
    #[error("{op} is only defined for {}, got {found}", .op.accepted_types())]
    UnsupportedType {
        /// Operation that rejected the input
        op: Op,
        /// Name of the rejected value's type
        found: String,
    },

    /// Scalar logarithm of a non-positive number.
    #[error("math domain error: log is undefined for {value}")]
    Domain {
        /// Rejected argument
        value: f64,
    },

    /// Scalar exponential overflowed to infinity.
    #[error("math range error: exp({value}) overflows")]
    Overflow {
        /// Argument that overflowed
        value: f64,
    },

    /// Engine input contains NaN or infinite entries.
    #[error("non-finite entries in {what}")]
    NonFinite {
        /// Description of the rejected input
        what: &'static str,
    },

    /// Array data length doesn't match the product of its shape.
    #[error("array data length {len} does not match shape {shape}")]
    DataLength {
        /// Requested shape, numpy tuple notation
        shape: String,
        /// Number of elements supplied
        len: usize,
    },

    /// Failure reported by a custom engine implementation.
    #[error("engine error: {0}")]
    Engine(String),

    /// Invalid or missing configuration.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error reading configuration files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Creates an [`Error::InvalidShape`] error.
    #[inline]
    pub fn invalid_shape(op: Op, shape: &[usize]) -> Self {
        Self::InvalidShape {
            op,
            shape: format_shape(shape),
        }
    }

    /// Creates an [`Error::UnsupportedType`] error.
    #[inline]
    pub fn unsupported_type(op: Op, found: impl Into<String>) -> Self {
        Self::UnsupportedType {
            op,
            found: found.into(),
        }
    }

    /// Creates an [`Error::DataLength`] error.
    #[inline]
    pub fn data_length(shape: &[usize], len: usize) -> Self {
        Self::DataLength {
            shape: format_shape(shape),
            len,
        }
    }

    /// Creates an [`Error::Engine`] error.
    #[inline]
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }

    /// Creates an [`Error::Config`] error.
    #[inline]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns `true` if the input was rejected before any computation.
    #[inline]
    pub fn is_classification_error(&self) -> bool {
        matches!(self, Self::InvalidShape { .. } | Self::UnsupportedType { .. })
    }

    /// Returns `true` if this is a scalar domain or range error.
    #[inline]
    pub fn is_math_error(&self) -> bool {
        matches!(self, Self::Domain { .. } | Self::Overflow { .. })
    }

    /// Operation the error was raised from, for classification errors.
    #[inline]
    pub fn op(&self) -> Option<Op> {
        match self {
            Self::InvalidShape { op, .. } | Self::UnsupportedType { op, .. } => Some(*op),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_shape_exp() {
        let err = Error::invalid_shape(Op::Exp, &[2, 1]);
        let msg = err.to_string();
        assert!(msg.contains("only 3 and 6 vectors are allowed"));
        assert!(msg.contains("(2, 1)"));
        assert!(err.is_classification_error());
        assert_eq!(err.op(), Some(Op::Exp));
    }

    #[test]
    fn test_invalid_shape_log() {
        let msg = Error::invalid_shape(Op::Log, &[5, 5]).to_string();
        assert!(msg.contains("only 3 and 4 matrices are allowed"));
    }

    #[test]
    fn test_unsupported_type() {
        let err = Error::unsupported_type(Op::Exp, "str");
        let msg = err.to_string();
        assert!(msg.starts_with("exp is only defined for real, vector3, vector6 and Motion"));
        assert!(msg.ends_with("got str"));

        let msg = Error::unsupported_type(Op::Log, "Motion").to_string();
        assert!(msg.contains("real, matrix3, matrix4 and SE3 objects"));
    }

    #[test]
    fn test_math_errors() {
        let err = Error::Domain { value: -1.0 };
        assert!(err.is_math_error());
        assert!(!err.is_classification_error());
        assert!(err.to_string().contains("-1"));
        assert_eq!(err.op(), None);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
