//! # rbm-explog
//!
//! `exp` and `log` over rigid-body motion representations.
//!
//! Two entry points inspect what they are given and forward to the matching
//! exponential or logarithm map:
//!
//! - real numbers -> ordinary `exp`/`ln`
//! - 3x1 / 3x3 -> SO(3) maps
//! - 6x1 / 4x4 -> SE(3) maps on flat vectors and homogeneous matrices
//! - [`Motion`](rbm_math::Motion) / [`SE3`](rbm_math::SE3) -> SE(3) maps on
//!   structured types
//!
//! # Modules
//!
//! - [`dispatch`] - The routing itself
//! - [`engine`] - [`LieEngine`] seam and the closed-form [`NativeEngine`]
//! - [`value`] - [`Value`] and [`Operand`]
//! - [`config`] - [`EngineConfig`], YAML loadable
//!
//! # Example
//!
//! ```rust
//! use glam::DVec3;
//! use rbm_core::Array;
//! use rbm_explog::{exp, log, Value};
//! use rbm_math::Motion;
//!
//! // Structured motion -> rigid transform and back
//! let twist = Motion::new(DVec3::X, DVec3::new(0.0, 0.0, 0.5));
//! let pose = exp(twist).unwrap();
//! let back = log(pose).unwrap().as_motion().unwrap();
//! assert!(back.abs_diff_eq(&twist, 1e-12));
//!
//! // Flat twist -> homogeneous matrix
//! let h = exp(Array::column(&[1.0, 0.0, 0.0, 0.0, 0.0, 0.5])).unwrap();
//! assert_eq!(h.shape(), Some([4, 4]));
//! ```
//!
//! ## Custom engines
//!
//! ```rust,ignore
//! use rbm_explog::{exp_with, LieEngine};
//!
//! struct Recording { /* ... */ }
//! impl LieEngine for Recording { /* ... */ }
//!
//! let value = exp_with(&Recording::new(), 0.5)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod dispatch;
pub mod engine;
pub mod value;

pub use config::EngineConfig;
pub use dispatch::{default_engine, exp, exp_with, log, log_with};
pub use engine::{LieEngine, NativeEngine};
pub use value::{Operand, Value};

pub use rbm_core::{Error, Op, Result};
