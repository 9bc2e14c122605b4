//! `Motion` and `SE3` classes.
//!
//! ```python
//! import numpy as np
//! import rbm
//!
//! v = rbm.Motion(linear=[1, 0, 0], angular=[0, 0, 0.5])
//! m = rbm.exp(v)                  # SE3
//! m.homogeneous                   # (4, 4) ndarray
//! rbm.log(m).vector               # (6, 1) ndarray
//! ```

use numpy::PyArrayDyn;
use pyo3::prelude::*;

use rbm_math::convert::{mat3_to_array, mat4_to_array, vec3_to_array, vector6_to_array};
use rbm_math::glam::DVec3;
use rbm_math::{Motion as RustMotion, Vector6, SE3 as RustSE3};

use crate::convert::{array_into_py, mat3_from_py, mat4_from_py, vec3_from_py};

fn fmt_vec3(v: DVec3) -> String {
    format!("[{}, {}, {}]", v.x, v.y, v.z)
}

// ============================================================================
// Motion
// ============================================================================

/// Spatial velocity: linear and angular parts.
///
/// Args:
///     linear: 3 numbers, defaults to zero
///     angular: 3 numbers, defaults to zero
#[pyclass(name = "Motion", module = "rbm")]
#[derive(Clone)]
pub struct Motion {
    pub(crate) inner: RustMotion,
}

#[pymethods]
impl Motion {
    #[new]
    #[pyo3(signature = (linear=None, angular=None))]
    fn new(linear: Option<&Bound<'_, PyAny>>, angular: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let linear = match linear {
            Some(ob) => vec3_from_py(ob, "linear")?,
            None => DVec3::ZERO,
        };
        let angular = match angular {
            Some(ob) => vec3_from_py(ob, "angular")?,
            None => DVec3::ZERO,
        };
        Ok(Self {
            inner: RustMotion::new(linear, angular),
        })
    }

    /// Zero motion.
    #[staticmethod]
    fn zero() -> Self {
        Self {
            inner: RustMotion::ZERO,
        }
    }

    /// Linear part, shape (3, 1).
    #[getter]
    fn linear<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArrayDyn<f64>>> {
        array_into_py(py, vec3_to_array(self.inner.linear))
    }

    /// Angular part, shape (3, 1).
    #[getter]
    fn angular<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArrayDyn<f64>>> {
        array_into_py(py, vec3_to_array(self.inner.angular))
    }

    /// Stacked `[linear; angular]`, shape (6, 1).
    #[getter]
    fn vector<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArrayDyn<f64>>> {
        array_into_py(py, vector6_to_array(&Vector6::from(self.inner)))
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        format!(
            "Motion(linear={}, angular={})",
            fmt_vec3(self.inner.linear),
            fmt_vec3(self.inner.angular)
        )
    }
}

// ============================================================================
// SE3
// ============================================================================

/// Rigid transform: rotation and translation.
///
/// Args:
///     rotation: 3x3 rotation matrix, defaults to identity
///     translation: 3 numbers, defaults to zero
#[pyclass(name = "SE3", module = "rbm")]
#[derive(Clone)]
pub struct SE3 {
    pub(crate) inner: RustSE3,
}

#[pymethods]
impl SE3 {
    #[new]
    #[pyo3(signature = (rotation=None, translation=None))]
    fn new(rotation: Option<&Bound<'_, PyAny>>, translation: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let mut inner = RustSE3::IDENTITY;
        if let Some(ob) = rotation {
            inner.rotation = mat3_from_py(ob, "rotation")?;
        }
        if let Some(ob) = translation {
            inner.translation = vec3_from_py(ob, "translation")?;
        }
        Ok(Self { inner })
    }

    /// Identity transform.
    #[staticmethod]
    fn identity() -> Self {
        Self {
            inner: RustSE3::IDENTITY,
        }
    }

    /// Builds a transform from a 4x4 homogeneous matrix.
    ///
    /// The bottom row is not checked.
    #[staticmethod]
    fn from_homogeneous(matrix: &Bound<'_, PyAny>) -> PyResult<Self> {
        let m = mat4_from_py(matrix, "matrix")?;
        Ok(Self {
            inner: RustSE3::from_homogeneous(&m),
        })
    }

    /// Rotation matrix, shape (3, 3).
    #[getter]
    fn rotation<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArrayDyn<f64>>> {
        array_into_py(py, mat3_to_array(&self.inner.rotation))
    }

    /// Translation, shape (3, 1).
    #[getter]
    fn translation<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArrayDyn<f64>>> {
        array_into_py(py, vec3_to_array(self.inner.translation))
    }

    /// Homogeneous matrix, shape (4, 4).
    #[getter]
    fn homogeneous<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArrayDyn<f64>>> {
        array_into_py(py, mat4_to_array(&self.inner.to_homogeneous()))
    }

    /// Inverse transform.
    fn inverse(&self) -> Self {
        Self {
            inner: self.inner.inverse(),
        }
    }

    /// Applies the transform to a point.
    fn act(&self, py: Python<'_>, point: &Bound<'_, PyAny>) -> PyResult<Py<PyArrayDyn<f64>>> {
        let p = vec3_from_py(point, "point")?;
        Ok(array_into_py(py, vec3_to_array(self.inner.act_point(p)))?.unbind())
    }

    fn __mul__(&self, other: &Self) -> Self {
        Self {
            inner: self.inner * other.inner,
        }
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        let r = &self.inner.rotation;
        format!(
            "SE3(rotation=[{}, {}, {}], translation={})",
            fmt_vec3(r.row(0)),
            fmt_vec3(r.row(1)),
            fmt_vec3(r.row(2)),
            fmt_vec3(self.inner.translation)
        )
    }
}
