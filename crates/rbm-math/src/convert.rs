//! Conversions between [`Array`] and the fixed-size math types.
//!
//! Arrays are row-major; glam matrices are column-major. The `*_from_array`
//! functions check the shape exactly and return `None` on mismatch, leaving
//! the choice of error to the caller.

use glam::{DMat3, DMat4, DVec3};
use rbm_core::Array;

use crate::Vector6;

/// Shape of a 3-vector column.
pub const VECTOR3_SHAPE: [usize; 2] = [3, 1];
/// Shape of a 6-vector column.
pub const VECTOR6_SHAPE: [usize; 2] = [6, 1];
/// Shape of a rotation matrix.
pub const MATRIX3_SHAPE: [usize; 2] = [3, 3];
/// Shape of a homogeneous matrix.
pub const MATRIX4_SHAPE: [usize; 2] = [4, 4];

/// Reads a 3x1 column.
pub fn vec3_from_array(a: &Array) -> Option<DVec3> {
    if !a.has_shape(&VECTOR3_SHAPE) {
        return None;
    }
    let d = a.data();
    Some(DVec3::new(d[0], d[1], d[2]))
}

/// Reads a 6x1 column.
pub fn vector6_from_array(a: &Array) -> Option<Vector6> {
    if !a.has_shape(&VECTOR6_SHAPE) {
        return None;
    }
    let d = a.data();
    Some(Vector6([d[0], d[1], d[2], d[3], d[4], d[5]]))
}

/// Reads a 3x3 matrix.
pub fn mat3_from_array(a: &Array) -> Option<DMat3> {
    if !a.has_shape(&MATRIX3_SHAPE) {
        return None;
    }
    let d = a.data();
    // Row-major data read as columns gives the transpose
    Some(DMat3::from_cols_slice(d).transpose())
}

/// Reads a 4x4 matrix.
pub fn mat4_from_array(a: &Array) -> Option<DMat4> {
    if !a.has_shape(&MATRIX4_SHAPE) {
        return None;
    }
    Some(DMat4::from_cols_slice(a.data()).transpose())
}

/// 3x1 column from a vector.
pub fn vec3_to_array(v: DVec3) -> Array {
    Array::column(&v.to_array())
}

/// 6x1 column from a vector.
pub fn vector6_to_array(v: &Vector6) -> Array {
    Array::column(&v.as_array())
}

/// 3x3 row-major array from a matrix.
pub fn mat3_to_array(m: &DMat3) -> Array {
    Array::from_rows(m.transpose().to_cols_array_2d())
}

/// 4x4 row-major array from a matrix.
pub fn mat4_to_array(m: &DMat4) -> Array {
    Array::from_rows(m.transpose().to_cols_array_2d())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat3_row_major() {
        let a = Array::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let m = mat3_from_array(&a).unwrap();
        assert_eq!(m.row(0), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.col(0), DVec3::new(1.0, 4.0, 7.0));
        assert_eq!(mat3_to_array(&m), a);
    }

    #[test]
    fn test_mat4_row_major() {
        let a = Array::from_rows([
            [1.0, 0.0, 0.0, 5.0],
            [0.0, 1.0, 0.0, 6.0],
            [0.0, 0.0, 1.0, 7.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let m = mat4_from_array(&a).unwrap();
        assert_eq!(m.w_axis, glam::DVec4::new(5.0, 6.0, 7.0, 1.0));
        assert_eq!(mat4_to_array(&m), a);
    }

    #[test]
    fn test_vectors() {
        let v = vec3_from_array(&Array::column(&[1.0, 2.0, 3.0])).unwrap();
        assert_eq!(v, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(vec3_to_array(v).shape(), &VECTOR3_SHAPE);

        let six = Array::column(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let t = vector6_from_array(&six).unwrap();
        assert_eq!(t.angular(), DVec3::new(4.0, 5.0, 6.0));
        assert_eq!(vector6_to_array(&t), six);
    }

    #[test]
    fn test_shape_is_exact() {
        assert!(vec3_from_array(&Array::zeros([3])).is_none());
        assert!(vec3_from_array(&Array::zeros([1, 3])).is_none());
        assert!(vector6_from_array(&Array::zeros([3, 1])).is_none());
        assert!(mat3_from_array(&Array::zeros([4, 4])).is_none());
        assert!(mat4_from_array(&Array::zeros([3, 3])).is_none());
    }
}
