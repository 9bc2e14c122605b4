//! Exponential and logarithm maps of SO(3).
//!
//! A rotation generator `w` in so(3) is a 3-vector whose direction is the
//! rotation axis and whose norm is the angle in radians. [`exp3`] maps it to
//! a rotation matrix with the Rodrigues formula:
//!
//! ```text
//! R = I + (sin t / t) [w] + ((1 - cos t) / t^2) [w]^2,   t = |w|
//! ```
//!
//! [`log3`] is the inverse on rotation angles in `[0, pi]`.
//!
//! # Usage
//!
//! ```rust
//! use glam::DVec3;
//! use rbm_math::{exp3, log3};
//!
//! let w = DVec3::new(0.0, 0.0, std::f64::consts::FRAC_PI_2);
//! let r = exp3(w);
//! assert!((r * DVec3::X).abs_diff_eq(DVec3::Y, 1e-12));
//! assert!(log3(&r).abs_diff_eq(w, 1e-12));
//! ```

use std::f64::consts::PI;

use glam::{DMat3, DVec3};
use tracing::warn;

use crate::skew::{at, skew, trace, vee};
use crate::Tolerance;

/// Exponential map so(3) -> SO(3) with default [`Tolerance`].
#[inline]
pub fn exp3(w: DVec3) -> DMat3 {
    exp3_with(w, &Tolerance::default())
}

/// Exponential map so(3) -> SO(3).
pub fn exp3_with(w: DVec3, tol: &Tolerance) -> DMat3 {
    let theta2 = w.length_squared();
    let theta = theta2.sqrt();

    let (a, b) = if theta < tol.small_angle {
        (1.0 - theta2 / 6.0, 0.5 - theta2 / 24.0)
    } else {
        (theta.sin() / theta, one_minus_cos_over_t2(theta))
    };

    let k = skew(w);
    DMat3::IDENTITY + k * a + (k * k) * b
}

/// `(1 - cos t) / t^2` via `1 - cos t = 2 sin^2(t/2)`.
#[inline]
pub(crate) fn one_minus_cos_over_t2(theta: f64) -> f64 {
    let s = (0.5 * theta).sin() / theta;
    2.0 * s * s
}

/// Logarithm map SO(3) -> so(3) with default [`Tolerance`].
#[inline]
pub fn log3(r: &DMat3) -> DVec3 {
    log3_with(r, &Tolerance::default())
}

/// Logarithm map SO(3) -> so(3).
///
/// The returned generator has norm in `[0, pi]`. The input is assumed to be
/// a rotation; no orthonormality check is made.
pub fn log3_with(r: &DMat3, tol: &Tolerance) -> DVec3 {
    let raw_cos = (trace(r) - 1.0) * 0.5;
    if (raw_cos.abs() - 1.0) > 1e-6 {
        warn!(cos = raw_cos, "log3: trace out of range, input is not a rotation");
    }
    let cos = raw_cos.clamp(-1.0, 1.0);

    // sin(t) * axis
    let axis_sin = vee(&(*r - r.transpose())) * 0.5;
    let theta = axis_sin.length().atan2(cos);

    if theta < tol.small_angle {
        // t / sin t = 1 + t^2/6 + O(t^4)
        return axis_sin * (1.0 + theta * theta / 6.0);
    }
    if PI - theta < tol.near_pi {
        return near_pi_axis(r, cos, axis_sin) * theta;
    }
    axis_sin * (theta / theta.sin())
}

/// Unit rotation axis for angles close to pi.
///
/// Uses `(R + R^T)/2 = cos t I + (1 - cos t) n n^T`, reading the column with
/// the largest diagonal entry. The sign follows `axis_sin`, which is still
/// informative away from exactly pi.
fn near_pi_axis(r: &DMat3, cos: f64, axis_sin: DVec3) -> DVec3 {
    let sym = (*r + r.transpose()) * 0.5;
    let one_minus_cos = 1.0 - cos;

    let diag = DVec3::new(at(&sym, 0, 0), at(&sym, 1, 1), at(&sym, 2, 2));
    let k = if diag.x >= diag.y && diag.x >= diag.z {
        0
    } else if diag.y >= diag.z {
        1
    } else {
        2
    };

    let nk = ((diag[k] - cos) / one_minus_cos).max(0.0).sqrt();
    let mut n = DVec3::ZERO;
    for i in 0..3 {
        n[i] = if i == k {
            nk
        } else {
            at(&sym, i, k) / (one_minus_cos * nk)
        };
    }
    let n = n.normalize();

    if n.dot(axis_sin) < 0.0 { -n } else { n }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn is_rotation(r: &DMat3) -> bool {
        (*r * r.transpose()).abs_diff_eq(DMat3::IDENTITY, 1e-12) && (r.determinant() - 1.0).abs() < 1e-12
    }

    #[test]
    fn test_exp3_zero_is_identity() {
        assert_eq!(exp3(DVec3::ZERO), DMat3::IDENTITY);
    }

    #[test]
    fn test_exp3_quarter_turn_about_z() {
        let r = exp3(DVec3::new(0.0, 0.0, FRAC_PI_2));
        let expected = DMat3::from_cols(
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(-1.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
        );
        assert!(r.abs_diff_eq(expected, 1e-12));
    }

    #[test]
    fn test_exp3_matches_glam_axis_angle() {
        let axis = DVec3::new(1.0, 2.0, -0.5).normalize();
        let angle = 1.3;
        let r = exp3(axis * angle);
        assert!(r.abs_diff_eq(DMat3::from_axis_angle(axis, angle), 1e-12));
        assert!(is_rotation(&r));
    }

    #[test]
    fn test_exp3_small_angle_series() {
        let w = DVec3::new(1e-6, -2e-6, 3e-7);
        let r = exp3(w);
        assert!(is_rotation(&r));
        assert!(r.abs_diff_eq(DMat3::IDENTITY + skew(w), 1e-10));
    }

    #[test]
    fn test_log3_identity() {
        assert_eq!(log3(&DMat3::IDENTITY), DVec3::ZERO);
    }

    #[test]
    fn test_log3_roundtrip_generic() {
        let w = DVec3::new(0.4, -1.1, 0.7);
        let back = log3(&exp3(w));
        assert!(back.abs_diff_eq(w, 1e-12));
    }

    #[test]
    fn test_log3_roundtrip_small() {
        let w = DVec3::new(3e-6, 1e-6, -2e-6);
        assert!(log3(&exp3(w)).abs_diff_eq(w, 1e-15));
    }

    #[test]
    fn test_log3_roundtrip_near_pi() {
        let axis = DVec3::new(0.3, -0.8, 0.5).normalize();
        for gap in [1e-4, 1e-7] {
            let w = axis * (PI - gap);
            let back = log3(&exp3(w));
            assert!(back.abs_diff_eq(w, 1e-8), "gap {gap}: {back:?} vs {w:?}");
        }
    }

    #[test]
    fn test_log3_exactly_pi() {
        let w = DVec3::new(0.0, PI, 0.0);
        let back = log3(&exp3(w));
        assert_relative_eq!(back.length(), PI, epsilon = 1e-12);
        // Axis is only defined up to sign at exactly pi
        assert!(back.abs_diff_eq(w, 1e-8) || back.abs_diff_eq(-w, 1e-8));
    }

    #[test]
    fn test_log3_angle_wraps_into_range() {
        let axis = DVec3::Z;
        let back = log3(&exp3(axis * (PI + 0.5)));
        assert!(back.abs_diff_eq(-axis * (PI - 0.5), 1e-12));
    }
}
