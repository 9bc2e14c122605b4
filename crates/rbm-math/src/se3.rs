//! Rigid transforms and the SE(3) exponential and logarithm maps.
//!
//! [`SE3`] stores a rotation and a translation. Its homogeneous form is
//!
//! ```text
//! | R  p |
//! | 0  1 |
//! ```
//!
//! [`exp6`] integrates a constant [`Motion`] over unit time:
//!
//! ```text
//! R = exp3(w)
//! p = V(w) v,   V = I + ((1 - cos t)/t^2) [w] + ((t - sin t)/t^3) [w]^2
//! ```
//!
//! and [`log6`] inverts it with
//!
//! ```text
//! V^-1 = I - 1/2 [w] + (1/t^2)(1 - t sin t / (2 (1 - cos t))) [w]^2
//! ```
//!
//! # Usage
//!
//! ```rust
//! use glam::DVec3;
//! use rbm_math::{exp6, log6, Motion};
//!
//! let twist = Motion::new(DVec3::new(1.0, 0.0, 0.0), DVec3::new(0.0, 0.0, 0.5));
//! let m = exp6(&twist);
//! assert!(log6(&m).abs_diff_eq(&twist, 1e-12));
//! ```

use std::ops::Mul;

use glam::{DMat3, DMat4, DVec3};

use crate::skew::skew;
use crate::so3::{exp3_with, log3_with, one_minus_cos_over_t2};
use crate::{Motion, Tolerance};

/// A rigid transform: rotation followed by translation.
///
/// Acting on a point: `p' = rotation * p + translation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SE3 {
    /// Rotation part, an element of SO(3).
    pub rotation: DMat3,
    /// Translation part.
    pub translation: DVec3,
}

impl SE3 {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        rotation: DMat3::IDENTITY,
        translation: DVec3::ZERO,
    };

    /// Creates a transform from rotation and translation.
    #[inline]
    pub const fn new(rotation: DMat3, translation: DVec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Pure translation.
    #[inline]
    pub const fn from_translation(translation: DVec3) -> Self {
        Self::new(DMat3::IDENTITY, translation)
    }

    /// Pure rotation.
    #[inline]
    pub const fn from_rotation(rotation: DMat3) -> Self {
        Self::new(rotation, DVec3::ZERO)
    }

    /// Reads rotation and translation from a homogeneous matrix.
    ///
    /// The bottom row is ignored.
    #[inline]
    pub fn from_homogeneous(m: &DMat4) -> Self {
        Self::new(
            DMat3::from_cols(
                m.x_axis.truncate(),
                m.y_axis.truncate(),
                m.z_axis.truncate(),
            ),
            m.w_axis.truncate(),
        )
    }

    /// Homogeneous 4x4 form.
    #[inline]
    pub fn to_homogeneous(&self) -> DMat4 {
        DMat4::from_cols(
            self.rotation.x_axis.extend(0.0),
            self.rotation.y_axis.extend(0.0),
            self.rotation.z_axis.extend(0.0),
            self.translation.extend(1.0),
        )
    }

    /// Inverse transform.
    #[inline]
    pub fn inverse(&self) -> Self {
        let rt = self.rotation.transpose();
        Self::new(rt, -(rt * self.translation))
    }

    /// Applies the transform to a point.
    #[inline]
    pub fn act_point(&self, p: DVec3) -> DVec3 {
        self.rotation * p + self.translation
    }

    /// Expresses a motion given in the local frame in the parent frame
    /// (adjoint action).
    #[inline]
    pub fn act_motion(&self, m: &Motion) -> Motion {
        let angular = self.rotation * m.angular;
        let linear = self.rotation * m.linear + self.translation.cross(angular);
        Motion::new(linear, angular)
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.rotation.is_finite() && self.translation.is_finite()
    }

    /// Component-wise comparison within `max_abs_diff`.
    #[inline]
    pub fn abs_diff_eq(&self, other: &Self, max_abs_diff: f64) -> bool {
        self.rotation.abs_diff_eq(other.rotation, max_abs_diff)
            && self.translation.abs_diff_eq(other.translation, max_abs_diff)
    }
}

impl Default for SE3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// SE3 * SE3
impl Mul for SE3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.rotation * rhs.rotation,
            self.rotation * rhs.translation + self.translation,
        )
    }
}

// SE3 * point
impl Mul<DVec3> for SE3 {
    type Output = DVec3;

    #[inline]
    fn mul(self, rhs: DVec3) -> DVec3 {
        self.act_point(rhs)
    }
}

/// Upper bound on `t^2` for the series form of the `V^-1` coefficient.
///
/// About `cbrt(f64::EPSILON)`; the closed form cancels badly below it.
const D_SERIES_MAX_THETA2: f64 = 6.0e-6;

/// Exponential map se(3) -> SE(3) with default [`Tolerance`].
#[inline]
pub fn exp6(m: &Motion) -> SE3 {
    exp6_with(m, &Tolerance::default())
}

/// Exponential map se(3) -> SE(3).
pub fn exp6_with(m: &Motion, tol: &Tolerance) -> SE3 {
    let w = m.angular;
    let theta2 = w.length_squared();
    let theta = theta2.sqrt();

    // V = I + b [w] + c [w]^2
    let (b, c) = if theta < tol.small_angle {
        (0.5 - theta2 / 24.0, 1.0 / 6.0 - theta2 / 120.0)
    } else {
        (one_minus_cos_over_t2(theta), (theta - theta.sin()) / (theta2 * theta))
    };

    let k = skew(w);
    let v = DMat3::IDENTITY + k * b + (k * k) * c;
    SE3::new(exp3_with(w, tol), v * m.linear)
}

/// Logarithm map SE(3) -> se(3) with default [`Tolerance`].
#[inline]
pub fn log6(m: &SE3) -> Motion {
    log6_with(m, &Tolerance::default())
}

/// Logarithm map SE(3) -> se(3).
///
/// The angular part has norm in `[0, pi]`.
pub fn log6_with(m: &SE3, tol: &Tolerance) -> Motion {
    let w = log3_with(&m.rotation, tol);
    let theta2 = w.length_squared();
    let theta = theta2.sqrt();

    // d = (1 - (t/2) cot(t/2)) / t^2
    let d = if theta2 < D_SERIES_MAX_THETA2.max(tol.small_angle * tol.small_angle) {
        1.0 / 12.0 + theta2 / 720.0 + theta2 * theta2 / 30240.0
    } else {
        let (sin, cos) = (0.5 * theta).sin_cos();
        (1.0 - 0.5 * theta * cos / sin) / theta2
    };

    let k = skew(w);
    let v_inv = DMat3::IDENTITY - k * 0.5 + (k * k) * d;
    Motion::new(v_inv * m.translation, w)
}
