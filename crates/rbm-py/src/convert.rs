//! Python <-> rbm value conversion.

use numpy::{PyArrayDyn, PyArrayMethods, ToPyArray};
use pyo3::exceptions::{PyIOError, PyOverflowError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyFloat, PyInt};

use rbm_core::{Array, Error};
use rbm_explog::{Operand, Value};

use crate::types::{Motion, SE3};

// ============================================================================
// Errors
// ============================================================================

/// Maps an rbm error onto the closest Python exception.
pub(crate) fn to_py_err(err: Error) -> PyErr {
    match err {
        Error::Overflow { .. } => PyOverflowError::new_err(err.to_string()),
        Error::Io(_) => PyIOError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

// ============================================================================
// Python -> rbm
// ============================================================================

/// Reads any numpy-convertible object as a float64 [`Array`].
///
/// Integer and bool dtypes are cast; shape is kept as is. Complex data is
/// rejected rather than truncated to its real part.
pub(crate) fn array_from_py(ob: &Bound<'_, PyAny>) -> PyResult<Array> {
    let np = ob.py().import("numpy")?;
    let raw = np.call_method1("asarray", (ob,))?;
    let kind: String = raw.getattr("dtype")?.getattr("kind")?.extract()?;
    if kind == "c" {
        return Err(PyValueError::new_err(format!(
            "complex arrays are not supported, got dtype {}",
            raw.getattr("dtype")?.str()?
        )));
    }
    let cast = np.call_method1("asarray", (raw, "float64"))?;
    let arr = cast.downcast_into::<PyArrayDyn<f64>>()?;
    let view = arr.readonly();
    let view = view.as_array();
    let shape = view.shape().to_vec();
    let data: Vec<f64> = view.iter().copied().collect();
    Array::new(shape, data).map_err(to_py_err)
}

/// Reads three numbers from a list, tuple or array of any 3-element shape.
pub(crate) fn vec3_from_py(ob: &Bound<'_, PyAny>, what: &str) -> PyResult<glam::DVec3> {
    let arr = array_from_py(ob)?;
    match arr.data() {
        [x, y, z] => Ok(glam::DVec3::new(*x, *y, *z)),
        _ => Err(PyValueError::new_err(format!(
            "{what} must have 3 elements, got shape {}",
            rbm_core::format_shape(arr.shape())
        ))),
    }
}

/// Reads a 3x3 matrix from a nested sequence or array.
pub(crate) fn mat3_from_py(ob: &Bound<'_, PyAny>, what: &str) -> PyResult<glam::DMat3> {
    let arr = array_from_py(ob)?;
    rbm_math::convert::mat3_from_array(&arr).ok_or_else(|| {
        PyValueError::new_err(format!(
            "{what} must have shape (3, 3), got {}",
            rbm_core::format_shape(arr.shape())
        ))
    })
}

/// Reads a 4x4 matrix from a nested sequence or array.
pub(crate) fn mat4_from_py(ob: &Bound<'_, PyAny>, what: &str) -> PyResult<glam::DMat4> {
    let arr = array_from_py(ob)?;
    rbm_math::convert::mat4_from_array(&arr).ok_or_else(|| {
        PyValueError::new_err(format!(
            "{what} must have shape (4, 4), got {}",
            rbm_core::format_shape(arr.shape())
        ))
    })
}

fn is_numpy_array(ob: &Bound<'_, PyAny>) -> bool {
    ob.downcast::<numpy::PyUntypedArray>().is_ok()
}

/// Real scalars: `float`, `int`, numpy real scalars, anything registered as
/// `numbers.Real` (`Fraction`), and non-complex `numbers.Number` such as
/// `Decimal`.
fn is_real(ob: &Bound<'_, PyAny>) -> PyResult<bool> {
    if ob.is_instance_of::<PyFloat>() || ob.is_instance_of::<PyInt>() {
        return Ok(true);
    }
    let numbers = ob.py().import("numbers")?;
    if ob.is_instance(&numbers.getattr("Real")?)? {
        return Ok(true);
    }
    Ok(ob.is_instance(&numbers.getattr("Number")?)? && !ob.is_instance(&numbers.getattr("Complex")?)?)
}

/// Classifies an arbitrary Python object for dispatch.
///
/// Order: rbm classes, real numbers, numpy arrays, everything else.
/// Lists and tuples are not array-like here.
pub(crate) fn operand_from_py(ob: &Bound<'_, PyAny>) -> PyResult<Operand> {
    if let Ok(m) = ob.downcast::<Motion>() {
        return Ok(Value::Motion(m.borrow().inner).into());
    }
    if let Ok(t) = ob.downcast::<SE3>() {
        return Ok(Value::Transform(t.borrow().inner).into());
    }
    if is_real(ob)? {
        return Ok(Value::Scalar(ob.extract::<f64>()?).into());
    }
    if is_numpy_array(ob) {
        return Ok(array_from_py(ob)?.into());
    }
    let name = ob.get_type().name()?.to_string();
    Ok(Operand::foreign(name))
}

// ============================================================================
// rbm -> Python
// ============================================================================

/// Converts an [`Array`] into a numpy array of the same shape.
pub(crate) fn array_into_py<'py>(py: Python<'py>, arr: Array) -> PyResult<Bound<'py, PyArrayDyn<f64>>> {
    let shape = arr.shape().to_vec();
    arr.data()
        .to_pyarray(py)
        .reshape(shape)
        .map_err(|e| PyValueError::new_err(format!("Reshape failed: {}", e)))
}

/// Converts a dispatch result into a Python object.
pub(crate) fn value_into_py(py: Python<'_>, value: Value) -> PyResult<PyObject> {
    let obj = match value {
        Value::Scalar(s) => PyFloat::new(py, s).into_any(),
        Value::Motion(inner) => Bound::new(py, Motion { inner })?.into_any(),
        Value::Transform(inner) => Bound::new(py, SE3 { inner })?.into_any(),
        Value::Vector3(_) | Value::Vector6(_) | Value::Matrix3(_) | Value::Matrix4(_) => {
            let arr = value
                .to_array()
                .ok_or_else(|| PyValueError::new_err("value has no array form"))?;
            array_into_py(py, arr)?.into_any()
        }
    };
    Ok(obj.unbind())
}
