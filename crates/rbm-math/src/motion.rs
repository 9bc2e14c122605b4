//! Spatial motion vectors.
//!
//! [`Motion`] is a twist: linear and angular velocity of a rigid body.
//! [`Vector6`] is the same quantity as a flat 6-component column, linear
//! part first:
//!
//! ```text
//! | v |   linear  (rows 0..3)
//! | w |   angular (rows 3..6)
//! ```
//!
//! The dispatcher routes `Motion` to the structured exponential and
//! `Vector6` to the homogeneous-matrix one.

use std::ops::{Add, Index, Mul, Neg, Sub};

use glam::DVec3;

/// A spatial motion (twist): linear and angular velocity.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use rbm_math::{Motion, Vector6};
///
/// let m = Motion::new(DVec3::new(1.0, 0.0, 0.0), DVec3::new(0.0, 0.0, 2.0));
/// let v = Vector6::from(m);
/// assert_eq!(v.as_array(), [1.0, 0.0, 0.0, 0.0, 0.0, 2.0]);
/// assert_eq!(Motion::from(v), m);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Motion {
    /// Linear velocity.
    pub linear: DVec3,
    /// Angular velocity.
    pub angular: DVec3,
}

impl Motion {
    /// Zero motion.
    pub const ZERO: Self = Self {
        linear: DVec3::ZERO,
        angular: DVec3::ZERO,
    };

    /// Creates a motion from its linear and angular parts.
    #[inline]
    pub const fn new(linear: DVec3, angular: DVec3) -> Self {
        Self { linear, angular }
    }

    /// Pure translation velocity.
    #[inline]
    pub const fn from_linear(linear: DVec3) -> Self {
        Self::new(linear, DVec3::ZERO)
    }

    /// Pure rotation velocity.
    #[inline]
    pub const fn from_angular(angular: DVec3) -> Self {
        Self::new(DVec3::ZERO, angular)
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.linear.is_finite() && self.angular.is_finite()
    }

    /// Component-wise comparison within `max_abs_diff`.
    #[inline]
    pub fn abs_diff_eq(&self, other: &Self, max_abs_diff: f64) -> bool {
        self.linear.abs_diff_eq(other.linear, max_abs_diff)
            && self.angular.abs_diff_eq(other.angular, max_abs_diff)
    }
}

impl Add for Motion {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.linear + rhs.linear, self.angular + rhs.angular)
    }
}

impl Sub for Motion {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.linear - rhs.linear, self.angular - rhs.angular)
    }
}

impl Neg for Motion {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.linear, -self.angular)
    }
}

impl Mul<f64> for Motion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.linear * rhs, self.angular * rhs)
    }
}

impl From<Vector6> for Motion {
    #[inline]
    fn from(v: Vector6) -> Self {
        Self::new(v.linear(), v.angular())
    }
}

/// A 6-component column vector `[linear; angular]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector6(pub [f64; 6]);

impl Vector6 {
    /// Zero vector.
    pub const ZERO: Self = Self([0.0; 6]);

    /// Creates a vector by stacking linear over angular.
    #[inline]
    pub fn new(linear: DVec3, angular: DVec3) -> Self {
        Self([linear.x, linear.y, linear.z, angular.x, angular.y, angular.z])
    }

    /// Rows 0..3.
    #[inline]
    pub fn linear(&self) -> DVec3 {
        DVec3::new(self.0[0], self.0[1], self.0[2])
    }

    /// Rows 3..6.
    #[inline]
    pub fn angular(&self) -> DVec3 {
        DVec3::new(self.0[3], self.0[4], self.0[5])
    }

    /// Component array.
    #[inline]
    pub const fn as_array(&self) -> [f64; 6] {
        self.0
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }
}

impl From<Motion> for Vector6 {
    #[inline]
    fn from(m: Motion) -> Self {
        Self::new(m.linear, m.angular)
    }
}

impl From<[f64; 6]> for Vector6 {
    #[inline]
    fn from(values: [f64; 6]) -> Self {
        Self(values)
    }
}

impl Index<usize> for Vector6 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}
