//! Cross-product matrices and small matrix helpers.
//!
//! glam stores matrices column-major; [`at`] reads an element by
//! mathematical `(row, col)` so formulas can be written as on paper.

use glam::{DMat3, DVec3};

/// Element at `(row, col)` of a column-major matrix.
#[inline]
pub fn at(m: &DMat3, row: usize, col: usize) -> f64 {
    m.col(col)[row]
}

/// Skew-symmetric cross-product matrix: `skew(v) * u == v.cross(u)`.
///
/// ```text
/// |  0  -z   y |
/// |  z   0  -x |
/// | -y   x   0 |
/// ```
#[inline]
pub fn skew(v: DVec3) -> DMat3 {
    DMat3::from_cols(
        DVec3::new(0.0, v.z, -v.y),
        DVec3::new(-v.z, 0.0, v.x),
        DVec3::new(v.y, -v.x, 0.0),
    )
}

/// Inverse of [`skew`] on the antisymmetric part stored in `m`.
///
/// Reads `(m21, m02, m10)`; for a skew matrix this recovers `v` exactly.
#[inline]
pub fn vee(m: &DMat3) -> DVec3 {
    DVec3::new(at(m, 2, 1), at(m, 0, 2), at(m, 1, 0))
}

/// Sum of the diagonal.
#[inline]
pub fn trace(m: &DMat3) -> f64 {
    m.x_axis.x + m.y_axis.y + m.z_axis.z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skew_is_cross_product() {
        let v = DVec3::new(1.0, -2.0, 0.5);
        let u = DVec3::new(0.3, 4.0, -1.0);
        assert!((skew(v) * u).abs_diff_eq(v.cross(u), 1e-12));
    }

    #[test]
    fn test_skew_antisymmetric() {
        let k = skew(DVec3::new(1.0, 2.0, 3.0));
        assert!((k + k.transpose()).abs_diff_eq(DMat3::ZERO, 0.0));
        assert_eq!(trace(&k), 0.0);
    }

    #[test]
    fn test_vee_inverts_skew() {
        let v = DVec3::new(-0.7, 0.2, 9.0);
        assert_eq!(vee(&skew(v)), v);
    }

    #[test]
    fn test_at_row_col() {
        let m = DMat3::from_cols(
            DVec3::new(1.0, 4.0, 7.0),
            DVec3::new(2.0, 5.0, 8.0),
            DVec3::new(3.0, 6.0, 9.0),
        );
        assert_eq!(at(&m, 0, 1), 2.0);
        assert_eq!(at(&m, 2, 0), 7.0);
        assert_eq!(trace(&m), 15.0);
    }
}
