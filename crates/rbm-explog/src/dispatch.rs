//! Type and shape dispatch for `exp` and `log`.
//!
//! # Routing
//!
//! Checked in order, first match wins. Structured values are recognized
//! before scalars, scalars before arrays.
//!
//! | input            | `exp`                         | `log`                           |
//! |------------------|-------------------------------|---------------------------------|
//! | `Motion`         | `exp_motion` -> `Transform`   | `UnsupportedType`               |
//! | `SE3`            | `UnsupportedType`             | `log_transform` -> `Motion`     |
//! | real             | `e^x`                         | `ln x`, `Domain` if `x <= 0`    |
//! | 6x1              | `exp_twist` -> 4x4            | `InvalidShape`                  |
//! | 3x1              | `exp_rotation` -> 3x3         | `InvalidShape`                  |
//! | 4x4              | `InvalidShape`                | `log_homogeneous` -> 6x1        |
//! | 3x3              | `InvalidShape`                | `log_rotation` -> 3x1           |
//! | other array      | `InvalidShape`                | `InvalidShape`                  |
//! | anything else    | `UnsupportedType`             | `UnsupportedType`               |
//!
//! Engine results and engine errors are returned unchanged.

use std::sync::OnceLock;

use rbm_core::{Error, Op, Result};
use tracing::{debug, trace};

use crate::{LieEngine, NativeEngine, Operand, Value};

static DEFAULT_ENGINE: OnceLock<NativeEngine> = OnceLock::new();

/// Process-wide engine used by [`exp`] and [`log`], default configuration.
pub fn default_engine() -> &'static NativeEngine {
    DEFAULT_ENGINE.get_or_init(NativeEngine::default)
}

/// Exponential map with the default [`NativeEngine`].
///
/// # Example
///
/// ```rust
/// use rbm_core::Array;
/// use rbm_explog::{exp, Value};
///
/// assert_eq!(exp(0.0).unwrap(), Value::Scalar(1.0));
///
/// let r = exp(Array::column(&[0.0, 0.0, 1.0])).unwrap();
/// assert_eq!(r.shape(), Some([3, 3]));
///
/// let err = exp(Array::column(&[1.0, 2.0])).unwrap_err();
/// assert!(err.to_string().contains("only 3 and 6 vectors"));
/// ```
pub fn exp(x: impl Into<Operand>) -> Result<Value> {
    exp_with(default_engine(), x)
}

/// Logarithm map with the default [`NativeEngine`].
///
/// # Example
///
/// ```rust
/// use rbm_core::Array;
/// use rbm_explog::{log, Value};
///
/// assert_eq!(log(1.0).unwrap(), Value::Scalar(0.0));
/// assert!(log(-1.0).is_err());
///
/// let err = log(Array::zeros([5, 5])).unwrap_err();
/// assert!(err.to_string().contains("only 3 and 4 matrices"));
/// ```
pub fn log(x: impl Into<Operand>) -> Result<Value> {
    log_with(default_engine(), x)
}

/// Exponential map with an explicit engine.
pub fn exp_with<E: LieEngine + ?Sized>(engine: &E, x: impl Into<Operand>) -> Result<Value> {
    match x.into() {
        Operand::Value(v) => exp_value(engine, v),
        Operand::Array(a) => match Value::from_array(&a) {
            Some(v) => exp_value(engine, v),
            None => rejected(Error::invalid_shape(Op::Exp, a.shape())),
        },
        Operand::Foreign(name) => rejected(Error::unsupported_type(Op::Exp, name)),
    }
}

/// Logarithm map with an explicit engine.
pub fn log_with<E: LieEngine + ?Sized>(engine: &E, x: impl Into<Operand>) -> Result<Value> {
    match x.into() {
        Operand::Value(v) => log_value(engine, v),
        Operand::Array(a) => match Value::from_array(&a) {
            Some(v) => log_value(engine, v),
            None => rejected(Error::invalid_shape(Op::Log, a.shape())),
        },
        Operand::Foreign(name) => rejected(Error::unsupported_type(Op::Log, name)),
    }
}

fn exp_value<E: LieEngine + ?Sized>(engine: &E, v: Value) -> Result<Value> {
    match v {
        Value::Motion(m) => {
            trace!(op = "exp", branch = "motion");
            engine.exp_motion(&m).map(Value::Transform)
        }
        Value::Scalar(s) => {
            trace!(op = "exp", branch = "scalar");
            exp_scalar(s).map(Value::Scalar)
        }
        Value::Vector6(t) => {
            trace!(op = "exp", branch = "vector6");
            engine.exp_twist(&t).map(Value::Matrix4)
        }
        Value::Vector3(w) => {
            trace!(op = "exp", branch = "vector3");
            engine.exp_rotation(w).map(Value::Matrix3)
        }
        Value::Matrix3(_) | Value::Matrix4(_) => {
            let shape = v.shape().unwrap_or_default();
            rejected(Error::invalid_shape(Op::Exp, &shape))
        }
        Value::Transform(_) => rejected(Error::unsupported_type(Op::Exp, v.type_name())),
    }
}

fn log_value<E: LieEngine + ?Sized>(engine: &E, v: Value) -> Result<Value> {
    match v {
        Value::Transform(m) => {
            trace!(op = "log", branch = "se3");
            engine.log_transform(&m).map(Value::Motion)
        }
        Value::Scalar(s) => {
            trace!(op = "log", branch = "scalar");
            log_scalar(s).map(Value::Scalar)
        }
        Value::Matrix4(h) => {
            trace!(op = "log", branch = "matrix4");
            engine.log_homogeneous(&h).map(Value::Vector6)
        }
        Value::Matrix3(r) => {
            trace!(op = "log", branch = "matrix3");
            engine.log_rotation(&r).map(Value::Vector3)
        }
        Value::Vector3(_) | Value::Vector6(_) => {
            let shape = v.shape().unwrap_or_default();
            rejected(Error::invalid_shape(Op::Log, &shape))
        }
        Value::Motion(_) => rejected(Error::unsupported_type(Op::Log, v.type_name())),
    }
}

/// Real exponential; a finite argument that overflows is an error.
pub fn exp_scalar(s: f64) -> Result<f64> {
    let y = s.exp();
    if y.is_infinite() && s.is_finite() {
        return Err(Error::Overflow { value: s });
    }
    Ok(y)
}

/// Natural logarithm; non-positive arguments are a domain error.
///
/// NaN maps to NaN.
pub fn log_scalar(s: f64) -> Result<f64> {
    if s <= 0.0 {
        return Err(Error::Domain { value: s });
    }
    Ok(s.ln())
}

fn rejected(err: Error) -> Result<Value> {
    debug!(%err, "exp/log input rejected");
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exp_scalar() {
        assert_relative_eq!(exp_scalar(1.0).unwrap(), std::f64::consts::E);
        assert_eq!(exp_scalar(f64::NEG_INFINITY).unwrap(), 0.0);
        assert_eq!(exp_scalar(f64::INFINITY).unwrap(), f64::INFINITY);
        assert!(exp_scalar(f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn test_exp_scalar_overflow() {
        let err = exp_scalar(1000.0).unwrap_err();
        assert!(matches!(err, Error::Overflow { .. }));
        assert!(err.is_math_error());
    }

    #[test]
    fn test_log_scalar() {
        assert_relative_eq!(log_scalar(std::f64::consts::E).unwrap(), 1.0);
        assert!(matches!(log_scalar(0.0), Err(Error::Domain { .. })));
        assert!(matches!(log_scalar(-2.5), Err(Error::Domain { .. })));
        assert!(log_scalar(f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn test_default_engine_is_shared() {
        assert!(std::ptr::eq(default_engine(), default_engine()));
        assert!(!default_engine().config().check_finite);
    }
}
