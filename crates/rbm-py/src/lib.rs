//! Python bindings for rbm.
//!
//! Exposes `exp`/`log` over Python floats, numpy arrays and the `Motion` and
//! `SE3` classes via PyO3.

use pyo3::prelude::*;

mod convert;
mod types;

pub use types::{Motion, SE3};

use convert::{operand_from_py, to_py_err, value_into_py};

/// Exponential map.
///
/// Accepts a real number, a (3, 1) or (6, 1) array, or a `Motion`.
///
/// # Example
/// ```python
/// rbm.exp(1.0)                         # 2.718...
/// rbm.exp(np.array([[0], [0], [1]]))   # (3, 3) rotation
/// rbm.exp(rbm.Motion(angular=[0, 0, 1]))  # SE3
/// ```
#[pyfunction]
#[pyo3(signature = (x))]
fn exp(py: Python<'_>, x: &Bound<'_, PyAny>) -> PyResult<PyObject> {
    let operand = operand_from_py(x)?;
    let value = rbm_explog::exp(operand).map_err(to_py_err)?;
    value_into_py(py, value)
}

/// Logarithm map.
///
/// Accepts a positive real number, a (3, 3) or (4, 4) array, or an `SE3`.
///
/// # Example
/// ```python
/// rbm.log(np.eye(4))          # (6, 1) zeros
/// rbm.log(rbm.SE3.identity()) # Motion
/// ```
#[pyfunction]
#[pyo3(signature = (x))]
fn log(py: Python<'_>, x: &Bound<'_, PyAny>) -> PyResult<PyObject> {
    let operand = operand_from_py(x)?;
    let value = rbm_explog::log(operand).map_err(to_py_err)?;
    value_into_py(py, value)
}

/// rbm - exp/log maps for rigid-body motion
#[pymodule]
fn rbm(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Motion>()?;
    m.add_class::<SE3>()?;

    m.add_function(wrap_pyfunction!(exp, m)?)?;
    m.add_function(wrap_pyfunction!(log, m)?)?;

    Ok(())
}
