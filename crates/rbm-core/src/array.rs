//! Dynamic numeric arrays.
//!
//! [`Array`] is the array-like input of the dispatch boundary: an owned,
//! row-major buffer of `f64` with an arbitrary shape, in the spirit of a
//! numpy `ndarray`. Shape is compared exactly, so `[3, 1]`, `[1, 3]` and
//! `[3]` are three different things.
//!
//! # Example
//!
//! ```rust
//! use rbm_core::Array;
//!
//! let col = Array::column(&[1.0, 2.0, 3.0]);
//! assert_eq!(col.shape(), &[3, 1]);
//! assert_eq!(col.get(&[2, 0]), Some(3.0));
//!
//! let m = Array::from_rows([[1.0, 2.0], [3.0, 4.0]]);
//! assert_eq!(m.get(&[1, 0]), Some(3.0));
//! ```

use crate::{Error, Result};

/// Formats a shape in numpy tuple notation: `(3, 1)`, `(3,)`, `()`.
pub fn format_shape(shape: &[usize]) -> String {
    match shape {
        [] => "()".to_string(),
        [n] => format!("({n},)"),
        dims => {
            let parts: Vec<String> = dims.iter().map(|d| d.to_string()).collect();
            format!("({})", parts.join(", "))
        }
    }
}

/// An owned, row-major n-dimensional array of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    shape: Vec<usize>,
    data: Vec<f64>,
}

impl Array {
    /// Creates an array from a shape and row-major data.
    ///
    /// Fails with [`Error::DataLength`] if `data.len()` is not the product
    /// of the shape. An empty shape denotes a 0-d array holding one element.
    pub fn new(shape: impl Into<Vec<usize>>, data: Vec<f64>) -> Result<Self> {
        let shape = shape.into();
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(Error::data_length(&shape, data.len()));
        }
        Ok(Self { shape, data })
    }

    /// Creates a zero-filled array.
    pub fn zeros(shape: impl Into<Vec<usize>>) -> Self {
        let shape = shape.into();
        let len = shape.iter().product();
        Self {
            shape,
            data: vec![0.0; len],
        }
    }

    /// Creates an `n x 1` column vector.
    pub fn column(values: &[f64]) -> Self {
        Self {
            shape: vec![values.len(), 1],
            data: values.to_vec(),
        }
    }

    /// Creates an `R x C` matrix from row arrays.
    pub fn from_rows<const R: usize, const C: usize>(rows: [[f64; C]; R]) -> Self {
        Self {
            shape: vec![R, C],
            data: rows.iter().flatten().copied().collect(),
        }
    }

    /// Array shape.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of dimensions.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if the shape is exactly `dims`.
    #[inline]
    pub fn has_shape(&self, dims: &[usize]) -> bool {
        self.shape == dims
    }

    /// Row-major element buffer.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Consumes the array and returns its buffer.
    #[inline]
    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    /// Element at a multi-dimensional index, `None` if out of range.
    pub fn get(&self, index: &[usize]) -> Option<f64> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut offset = 0;
        for (&i, &dim) in index.iter().zip(&self.shape) {
            if i >= dim {
                return None;
            }
            offset = offset * dim + i;
        }
        self.data.get(offset).copied()
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_shape() {
        assert_eq!(format_shape(&[]), "()");
        assert_eq!(format_shape(&[3]), "(3,)");
        assert_eq!(format_shape(&[3, 1]), "(3, 1)");
        assert_eq!(format_shape(&[2, 3, 4]), "(2, 3, 4)");
    }

    #[test]
    fn test_new_checks_length() {
        assert!(Array::new([2, 2], vec![1.0, 2.0, 3.0, 4.0]).is_ok());
        let err = Array::new([2, 2], vec![1.0, 2.0, 3.0]).unwrap_err();
        assert!(err.to_string().contains("(2, 2)"));
        assert!(Array::new(Vec::<usize>::new(), vec![7.0]).is_ok());
    }

    #[test]
    fn test_row_major_indexing() {
        let m = Array::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(m.shape(), &[2, 3]);
        assert_eq!(m.get(&[0, 2]), Some(3.0));
        assert_eq!(m.get(&[1, 0]), Some(4.0));
        assert_eq!(m.get(&[2, 0]), None);
        assert_eq!(m.get(&[0]), None);
    }

    #[test]
    fn test_column_shape_is_exact() {
        let col = Array::column(&[1.0, 2.0, 3.0]);
        assert!(col.has_shape(&[3, 1]));
        assert!(!col.has_shape(&[3]));
        assert!(!col.has_shape(&[1, 3]));
    }

    #[test]
    fn test_is_finite() {
        let mut data = vec![0.0; 4];
        assert!(Array::new([4], data.clone()).unwrap().is_finite());
        data[1] = f64::NAN;
        assert!(!Array::new([4], data).unwrap().is_finite());
        assert!(Array::zeros([2, 2]).is_finite());
    }
}
