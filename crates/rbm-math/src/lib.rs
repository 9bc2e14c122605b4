//! # rbm-math
//!
//! Rigid-body motion math: the exponential and logarithm maps of SO(3) and
//! SE(3).
//!
//! This crate provides:
//!
//! - [`Motion`], [`Vector6`] - Twists, structured and flat
//! - [`SE3`] - Rigid transforms with homogeneous conversions
//! - [`exp3`], [`log3`] - Rotation generator <-> rotation matrix
//! - [`exp6`], [`log6`] - Twist <-> rigid transform
//! - [`Tolerance`] - Thresholds for series fallbacks
//! - Array conversions for the dispatch boundary
//!
//! # Design
//!
//! Built on the f64 types of [`glam`] (`DVec3`, `DMat3`, `DMat4`). glam is
//! column-major; [`Array`](rbm_core::Array) data is row-major and the
//! [`convert`] functions translate between the two. Vectors are columns:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use glam::DVec3;
//! use rbm_math::{exp6, log6, Motion, SE3};
//!
//! let twist = Motion::new(DVec3::new(0.0, 0.0, 1.0), DVec3::new(0.0, 0.0, 0.3));
//! let pose: SE3 = exp6(&twist);
//! let h = pose.to_homogeneous();
//! assert_eq!(SE3::from_homogeneous(&h), pose);
//! assert!(log6(&pose).abs_diff_eq(&twist, 1e-12));
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Fixed-size f64 vectors and matrices
//! - `rbm-core` - Array type
//!
//! # Used By
//!
//! - `rbm-explog` - Native engine
//! - `rbm-py` - Python classes

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
mod motion;
mod se3;
mod skew;
mod so3;
mod tolerance;

pub use convert::*;
pub use motion::*;
pub use se3::*;
pub use skew::*;
pub use so3::*;
pub use tolerance::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DMat4, DVec3, DVec4};
}
