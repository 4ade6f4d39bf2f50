//! # Two dimensional scalar field on the unit square
//!
//! A `Field2` stores an `n x n` array of grid values together with
//! its grid coordinates. Velocity components and pressure are all
//! `Field2`s.
#[cfg(feature = "hdf5")]
pub mod io;
use crate::error::{check_shape, Result};
use ndarray::{Array1, Array2};

/// Scalar field sampled at `x_j = j*h`, `y_i = i*h` with `h = 1/(n-1)`
///
/// v: ndarray
///
///   Holds the grid values, indexed `v[[i, j]]` (row `i` along y,
///   column `j` along x)
///
/// x, y: ndarrays
///
///   Grid coordinates along x (columns) and y (rows)
///
/// The dimension is fixed on construction. Derivatives and norms
/// live in [`crate::operators`] and [`crate::navier_stokes::functions`]
/// and act on `v` directly.
///
/// # Example
///```
/// use rustfd::field::Field2;
///
/// let field = Field2::new(33);
/// assert_eq!(field.v.shape(), &[33, 33]);
/// assert!((field.h - 1. / 32.).abs() < 1e-15);
///```
#[derive(Clone, Debug, PartialEq)]
pub struct Field2 {
    /// Number of grid points per axis
    pub n: usize,
    /// Grid spacing
    pub h: f64,
    /// Field values
    pub v: Array2<f64>,
    /// Grid coordinates along x
    pub x: Array1<f64>,
    /// Grid coordinates along y
    pub y: Array1<f64>,
}

impl Field2 {
    /// Return a zero field with `n` points per axis.
    ///
    /// `n` must be at least 2; the solver itself requires 3
    /// (see `Parameters::validate`).
    pub fn new(n: usize) -> Self {
        let h = spacing(n);
        Self {
            n,
            h,
            v: Array2::zeros((n, n)),
            x: Array1::linspace(0., 1., n),
            y: Array1::linspace(0., 1., n),
        }
    }

    /// Wrap existing values
    ///
    /// # Errors
    /// Array is not square.
    pub fn from_array(v: Array2<f64>) -> Result<Self> {
        let n = v.nrows();
        check_shape("field", &[n, n], v.shape())?;
        let mut field = Self::new(n);
        field.v = v;
        Ok(field)
    }
}

/// Grid spacing on the unit square for `n` points per axis
pub fn spacing(n: usize) -> f64 {
    if n < 2 {
        1.
    } else {
        1. / (n - 1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates() {
        let field = Field2::new(5);
        assert_eq!(field.h, 0.25);
        assert_eq!(field.x[4], 1.);
        assert_eq!(field.y[2], 0.5);
        assert_eq!(field.v.dim(), (5, 5));
    }

    #[test]
    fn test_from_array_rejects_non_square() {
        assert!(Field2::from_array(Array2::zeros((4, 5))).is_err());
        let field = Field2::from_array(Array2::from_elem((4, 4), 2.)).unwrap();
        assert_eq!(field.h, 1. / 3.);
        assert_eq!(field.x, Array1::linspace(0., 1., 4));
        assert_eq!(field.v[[3, 3]], 2.);
    }

    #[test]
    fn test_spacing() {
        assert_eq!(spacing(33), 1. / 32.);
        assert_eq!(spacing(1), 1.);
    }
}
