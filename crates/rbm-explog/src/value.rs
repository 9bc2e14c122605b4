//! Inputs and outputs of the `exp`/`log` dispatcher.
//!
//! [`Value`] is the closed set of things the maps know about. [`Operand`]
//! widens it with the two dynamic cases found at an API boundary: an
//! [`Array`] whose shape has not been classified yet, and a foreign value
//! known only by its type name.

use glam::{DMat3, DMat4, DVec3};
use rbm_core::Array;
use rbm_math::{
    mat3_from_array, mat3_to_array, mat4_from_array, mat4_to_array, vec3_from_array,
    vec3_to_array, vector6_from_array, vector6_to_array, Motion, Vector6, SE3,
};

/// A value `exp` or `log` can receive or return.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use rbm_explog::Value;
///
/// let v = Value::from(DVec3::new(0.0, 0.0, 1.0));
/// assert_eq!(v.shape(), Some([3, 1]));
/// assert_eq!(Value::from(2.0).shape(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A real number.
    Scalar(f64),
    /// A 3x1 column, rotation generator.
    Vector3(DVec3),
    /// A 6x1 column, twist.
    Vector6(Vector6),
    /// A 3x3 matrix, rotation.
    Matrix3(DMat3),
    /// A 4x4 matrix, homogeneous transform.
    Matrix4(DMat4),
    /// A structured spatial motion.
    Motion(Motion),
    /// A structured rigid transform.
    Transform(SE3),
}

impl Value {
    /// Human-readable type name used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "real",
            Self::Vector3(_) => "vector3",
            Self::Vector6(_) => "vector6",
            Self::Matrix3(_) => "matrix3",
            Self::Matrix4(_) => "matrix4",
            Self::Motion(_) => "Motion",
            Self::Transform(_) => "SE3",
        }
    }

    /// Array shape for array-like variants, `None` for scalars and
    /// structured values.
    pub const fn shape(&self) -> Option<[usize; 2]> {
        match self {
            Self::Vector3(_) => Some([3, 1]),
            Self::Vector6(_) => Some([6, 1]),
            Self::Matrix3(_) => Some([3, 3]),
            Self::Matrix4(_) => Some([4, 4]),
            Self::Scalar(_) | Self::Motion(_) | Self::Transform(_) => None,
        }
    }

    /// Returns true for the vector and matrix variants.
    #[inline]
    pub const fn is_array_like(&self) -> bool {
        self.shape().is_some()
    }

    /// Classifies an array by its exact shape.
    ///
    /// Returns `None` unless the shape is 3x1, 6x1, 3x3 or 4x4.
    pub fn from_array(a: &Array) -> Option<Self> {
        match a.shape() {
            [3, 1] => vec3_from_array(a).map(Self::Vector3),
            [6, 1] => vector6_from_array(a).map(Self::Vector6),
            [3, 3] => mat3_from_array(a).map(Self::Matrix3),
            [4, 4] => mat4_from_array(a).map(Self::Matrix4),
            _ => None,
        }
    }

    /// Row-major array form of an array-like value.
    pub fn to_array(&self) -> Option<Array> {
        match self {
            Self::Vector3(v) => Some(vec3_to_array(*v)),
            Self::Vector6(v) => Some(vector6_to_array(v)),
            Self::Matrix3(m) => Some(mat3_to_array(m)),
            Self::Matrix4(m) => Some(mat4_to_array(m)),
            Self::Scalar(_) | Self::Motion(_) | Self::Transform(_) => None,
        }
    }

    /// The scalar, if this is one.
    #[inline]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(s) => Some(*s),
            _ => None,
        }
    }

    /// The 3-vector, if this is one.
    #[inline]
    pub fn as_vector3(&self) -> Option<DVec3> {
        match self {
            Self::Vector3(v) => Some(*v),
            _ => None,
        }
    }

    /// The 6-vector, if this is one.
    #[inline]
    pub fn as_vector6(&self) -> Option<Vector6> {
        match self {
            Self::Vector6(v) => Some(*v),
            _ => None,
        }
    }

    /// The 3x3 matrix, if this is one.
    #[inline]
    pub fn as_matrix3(&self) -> Option<DMat3> {
        match self {
            Self::Matrix3(m) => Some(*m),
            _ => None,
        }
    }

    /// The 4x4 matrix, if this is one.
    #[inline]
    pub fn as_matrix4(&self) -> Option<DMat4> {
        match self {
            Self::Matrix4(m) => Some(*m),
            _ => None,
        }
    }

    /// The motion, if this is one.
    #[inline]
    pub fn as_motion(&self) -> Option<Motion> {
        match self {
            Self::Motion(m) => Some(*m),
            _ => None,
        }
    }

    /// The transform, if this is one.
    #[inline]
    pub fn as_transform(&self) -> Option<SE3> {
        match self {
            Self::Transform(m) => Some(*m),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(s: f64) -> Self {
        Self::Scalar(s)
    }
}

impl From<DVec3> for Value {
    fn from(v: DVec3) -> Self {
        Self::Vector3(v)
    }
}

impl From<Vector6> for Value {
    fn from(v: Vector6) -> Self {
        Self::Vector6(v)
    }
}

impl From<DMat3> for Value {
    fn from(m: DMat3) -> Self {
        Self::Matrix3(m)
    }
}

impl From<DMat4> for Value {
    fn from(m: DMat4) -> Self {
        Self::Matrix4(m)
    }
}

impl From<Motion> for Value {
    fn from(m: Motion) -> Self {
        Self::Motion(m)
    }
}

impl From<SE3> for Value {
    fn from(m: SE3) -> Self {
        Self::Transform(m)
    }
}

/// Anything handed to `exp` or `log`, classified or not.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A value of a known kind.
    Value(Value),
    /// A numeric array of arbitrary shape.
    Array(Array),
    /// A value of some other type, identified by its type name.
    Foreign(String),
}

impl Operand {
    /// Creates an [`Operand::Foreign`].
    pub fn foreign(type_name: impl Into<String>) -> Self {
        Self::Foreign(type_name.into())
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Self::Value(v)
    }
}

impl From<Array> for Operand {
    fn from(a: Array) -> Self {
        Self::Array(a)
    }
}

macro_rules! operand_from_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(v: $ty) -> Self {
                    Self::Value(Value::from(v))
                }
            }
        )*
    };
}

operand_from_value!(f64, DVec3, Vector6, DMat3, DMat4, Motion, SE3);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_array_classifies_exact_shapes() {
        let v3 = Value::from_array(&Array::column(&[1.0, 2.0, 3.0]));
        assert_eq!(v3, Some(Value::Vector3(DVec3::new(1.0, 2.0, 3.0))));

        let v6 = Value::from_array(&Array::zeros([6, 1]));
        assert_eq!(v6, Some(Value::Vector6(Vector6::ZERO)));

        let m3 = Value::from_array(&Array::from_rows([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ]));
        assert_eq!(m3, Some(Value::Matrix3(DMat3::IDENTITY)));

        assert!(matches!(
            Value::from_array(&Array::zeros([4, 4])),
            Some(Value::Matrix4(_))
        ));
    }

    #[test]
    fn test_from_array_rejects_other_shapes() {
        let shapes: [Vec<usize>; 6] = [vec![3], vec![1, 3], vec![2, 1], vec![5, 5], vec![3, 1, 1], vec![]];
        for shape in shapes {
            assert_eq!(Value::from_array(&Array::zeros(shape.clone())), None, "{shape:?}");
        }
    }

    #[test]
    fn test_array_roundtrip() {
        let m = Value::Matrix4(SE3::from_translation(DVec3::new(1.0, 2.0, 3.0)).to_homogeneous());
        let a = m.to_array().unwrap();
        assert_eq!(a.get(&[0, 3]), Some(1.0));
        assert_eq!(Value::from_array(&a), Some(m));
    }

    #[test]
    fn test_shape_and_names() {
        assert_eq!(Value::from(Motion::ZERO).shape(), None);
        assert!(!Value::from(SE3::IDENTITY).is_array_like());
        assert!(Value::from(DMat3::IDENTITY).is_array_like());
        assert_eq!(Value::from(SE3::IDENTITY).type_name(), "SE3");
        assert_eq!(Value::from(1.0).type_name(), "real");
    }

    #[test]
    fn test_operand_conversions() {
        assert_eq!(Operand::from(2.0), Operand::Value(Value::Scalar(2.0)));
        assert_eq!(Operand::foreign("str"), Operand::Foreign("str".into()));
        assert!(matches!(Operand::from(Array::zeros([2])), Operand::Array(_)));
    }
}
