//! # Central finite difference operators
//!
//! Arrays are indexed `f[[i, j]]` with `i` running along y (rows) and `j`
//! running along x (columns), i.e. `x_j = j*h`, `y_i = i*h`.
//!
//! Interior points `1 <= i, j <= n-2` are evaluated with second order
//! central differences
//!
//! $$
//! \partial_x f \approx (f_{i,j+1} - f_{i,j-1}) / 2h
//! $$
//! $$
//! \partial_{xx} f \approx (f_{i,j+1} - 2 f_{i,j} + f_{i,j-1}) / h^2
//! $$
//!
//! and the four edge rows/columns of the output are set to exactly zero.
//!
//! Every operator comes in two flavours: an allocating one (`d_dx`) and one
//! writing into a caller owned buffer (`d_dx_into`). The time stepping loop
//! only uses the latter. Input and output can never alias, because the output
//! is borrowed mutably while the input is borrowed shared.
use crate::error::{check_shape, Result};
use ndarray::{s, Array2, ArrayBase, Data, DataMut, Ix2, Zip};

/// Set the four edge rows/columns to zero
pub fn zero_boundary<S>(out: &mut ArrayBase<S, Ix2>)
where
    S: DataMut<Elem = f64>,
{
    let (ny, nx) = out.dim();
    if ny == 0 || nx == 0 {
        return;
    }
    out.row_mut(0).fill(0.);
    out.row_mut(ny - 1).fill(0.);
    out.column_mut(0).fill(0.);
    out.column_mut(nx - 1).fill(0.);
}

/// First derivative in x, written into `out`
///
/// # Errors
/// `out` and `f` differ in shape.
pub fn d_dx_into<S1, S2>(f: &ArrayBase<S1, Ix2>, out: &mut ArrayBase<S2, Ix2>, h: f64) -> Result<()>
where
    S1: Data<Elem = f64>,
    S2: DataMut<Elem = f64>,
{
    check_shape("d_dx", f.shape(), out.shape())?;
    if has_interior(f) {
        let two_h = 2. * h;
        Zip::from(out.slice_mut(s![1..-1, 1..-1]))
            .and(f.slice(s![1..-1, 2..]))
            .and(f.slice(s![1..-1, ..-2]))
            .par_for_each(|o, &east, &west| *o = (east - west) / two_h);
    }
    zero_boundary(out);
    Ok(())
}

/// First derivative in y, written into `out`
///
/// # Errors
/// `out` and `f` differ in shape.
pub fn d_dy_into<S1, S2>(f: &ArrayBase<S1, Ix2>, out: &mut ArrayBase<S2, Ix2>, h: f64) -> Result<()>
where
    S1: Data<Elem = f64>,
    S2: DataMut<Elem = f64>,
{
    check_shape("d_dy", f.shape(), out.shape())?;
    if has_interior(f) {
        let two_h = 2. * h;
        Zip::from(out.slice_mut(s![1..-1, 1..-1]))
            .and(f.slice(s![2.., 1..-1]))
            .and(f.slice(s![..-2, 1..-1]))
            .par_for_each(|o, &north, &south| *o = (north - south) / two_h);
    }
    zero_boundary(out);
    Ok(())
}

/// Second derivative in x, written into `out`
///
/// # Errors
/// `out` and `f` differ in shape.
pub fn d2x2_into<S1, S2>(f: &ArrayBase<S1, Ix2>, out: &mut ArrayBase<S2, Ix2>, h: f64) -> Result<()>
where
    S1: Data<Elem = f64>,
    S2: DataMut<Elem = f64>,
{
    check_shape("d2x2", f.shape(), out.shape())?;
    if has_interior(f) {
        let h2 = h * h;
        Zip::from(out.slice_mut(s![1..-1, 1..-1]))
            .and(f.slice(s![1..-1, 1..-1]))
            .and(f.slice(s![1..-1, 2..]))
            .and(f.slice(s![1..-1, ..-2]))
            .par_for_each(|o, &c, &east, &west| *o = (east - 2. * c + west) / h2);
    }
    zero_boundary(out);
    Ok(())
}

/// Second derivative in y, written into `out`
///
/// # Errors
/// `out` and `f` differ in shape.
pub fn d2y2_into<S1, S2>(f: &ArrayBase<S1, Ix2>, out: &mut ArrayBase<S2, Ix2>, h: f64) -> Result<()>
where
    S1: Data<Elem = f64>,
    S2: DataMut<Elem = f64>,
{
    check_shape("d2y2", f.shape(), out.shape())?;
    if has_interior(f) {
        let h2 = h * h;
        Zip::from(out.slice_mut(s![1..-1, 1..-1]))
            .and(f.slice(s![1..-1, 1..-1]))
            .and(f.slice(s![2.., 1..-1]))
            .and(f.slice(s![..-2, 1..-1]))
            .par_for_each(|o, &c, &north, &south| *o = (north - 2. * c + south) / h2);
    }
    zero_boundary(out);
    Ok(())
}

/// Five point laplacian `d2x2(f) + d2y2(f)`, written into `out`
///
/// Both second derivatives are evaluated per cell in a single pass,
/// so no scratch buffer is needed.
///
/// # Errors
/// `out` and `f` differ in shape.
pub fn laplacian_into<S1, S2>(
    f: &ArrayBase<S1, Ix2>,
    out: &mut ArrayBase<S2, Ix2>,
    h: f64,
) -> Result<()>
where
    S1: Data<Elem = f64>,
    S2: DataMut<Elem = f64>,
{
    check_shape("laplacian", f.shape(), out.shape())?;
    if has_interior(f) {
        let h2 = h * h;
        Zip::from(out.slice_mut(s![1..-1, 1..-1]))
            .and(f.slice(s![1..-1, 1..-1]))
            .and(f.slice(s![1..-1, 2..]))
            .and(f.slice(s![1..-1, ..-2]))
            .and(f.slice(s![2.., 1..-1]))
            .and(f.slice(s![..-2, 1..-1]))
            .par_for_each(|o, &c, &east, &west, &north, &south| {
                *o = (east - 2. * c + west) / h2 + (north - 2. * c + south) / h2;
            });
    }
    zero_boundary(out);
    Ok(())
}

/// First derivative in x
///
/// # Example
/// `f = x` has unit slope in the interior
/// ```
/// use ndarray::Array2;
/// use rustfd::operators::d_dx;
/// let h = 0.25;
/// let f = Array2::from_shape_fn((5, 5), |(_, j)| j as f64 * h);
/// let df = d_dx(&f, h);
/// assert!((df[[2, 2]] - 1.).abs() < 1e-12);
/// assert_eq!(df[[0, 2]], 0.);
/// ```
pub fn d_dx<S: Data<Elem = f64>>(f: &ArrayBase<S, Ix2>, h: f64) -> Array2<f64> {
    allocate(f, h, d_dx_into)
}

/// First derivative in y
pub fn d_dy<S: Data<Elem = f64>>(f: &ArrayBase<S, Ix2>, h: f64) -> Array2<f64> {
    allocate(f, h, d_dy_into)
}

/// Second derivative in x
pub fn d2x2<S: Data<Elem = f64>>(f: &ArrayBase<S, Ix2>, h: f64) -> Array2<f64> {
    allocate(f, h, d2x2_into)
}

/// Second derivative in y
pub fn d2y2<S: Data<Elem = f64>>(f: &ArrayBase<S, Ix2>, h: f64) -> Array2<f64> {
    allocate(f, h, d2y2_into)
}

/// Laplacian `d2x2(f) + d2y2(f)`
pub fn laplacian<S: Data<Elem = f64>>(f: &ArrayBase<S, Ix2>, h: f64) -> Array2<f64> {
    allocate(f, h, laplacian_into)
}

/// Run an `_into` stencil on a fresh buffer shaped like `f`
fn allocate<S, F>(f: &ArrayBase<S, Ix2>, h: f64, op: F) -> Array2<f64>
where
    S: Data<Elem = f64>,
    F: Fn(&ArrayBase<S, Ix2>, &mut Array2<f64>, f64) -> Result<()>,
{
    let mut out = Array2::zeros(f.raw_dim());
    // out is shaped like f, so op cannot fail
    let _ = op(f, &mut out, h);
    out
}

/// Discrete divergence `d_dx(ux) + d_dy(uy)`, written into `out`.
/// `scratch` holds the y-derivative.
///
/// # Errors
/// Any of the arrays differ in shape.
pub fn divergence_into<S1, S2, S3, S4>(
    ux: &ArrayBase<S1, Ix2>,
    uy: &ArrayBase<S2, Ix2>,
    out: &mut ArrayBase<S3, Ix2>,
    scratch: &mut ArrayBase<S4, Ix2>,
    h: f64,
) -> Result<()>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    S3: DataMut<Elem = f64>,
    S4: DataMut<Elem = f64>,
{
    check_shape("divergence", ux.shape(), uy.shape())?;
    d_dx_into(ux, out, h)?;
    d_dy_into(uy, scratch, h)?;
    *out += &*scratch;
    Ok(())
}

/// Discrete divergence `d_dx(ux) + d_dy(uy)`
///
/// # Errors
/// `ux` and `uy` differ in shape.
pub fn divergence<S1, S2>(ux: &ArrayBase<S1, Ix2>, uy: &ArrayBase<S2, Ix2>, h: f64) -> Result<Array2<f64>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let mut out = Array2::zeros(ux.raw_dim());
    let mut scratch = Array2::zeros(ux.raw_dim());
    divergence_into(ux, uy, &mut out, &mut scratch, h)?;
    Ok(out)
}

fn has_interior<S: Data<Elem = f64>>(f: &ArrayBase<S, Ix2>) -> bool {
    let (ny, nx) = f.dim();
    ny > 2 && nx > 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn approx_eq<S, D>(result: &ArrayBase<S, D>, expected: &ArrayBase<S, D>)
    where
        S: Data<Elem = f64>,
        D: ndarray::Dimension,
    {
        let dif = 1e-10;
        for (a, b) in expected.iter().zip(result.iter()) {
            if (a - b).abs() > dif {
                panic!("Large difference of values, got {} expected {}.", b, a)
            }
        }
    }

    fn assert_zero_boundary(f: &Array2<f64>) {
        let n = f.nrows();
        for k in 0..n {
            assert_eq!(f[[0, k]], 0.);
            assert_eq!(f[[n - 1, k]], 0.);
            assert_eq!(f[[k, 0]], 0.);
            assert_eq!(f[[k, n - 1]], 0.);
        }
    }

    #[test]
    fn test_linear_in_x() {
        let (n, h) = (5, 0.25);
        let f = Array2::from_shape_fn((n, n), |(_, j)| j as f64 * h);
        let df = d_dx(&f, h);
        let mut expected = Array2::<f64>::zeros((n, n));
        expected.slice_mut(s![1..-1, 1..-1]).fill(1.);
        approx_eq(&df, &expected);
        assert_zero_boundary(&df);
        // no slope in y, no curvature
        approx_eq(&d_dy(&f, h), &Array2::zeros((n, n)));
        approx_eq(&laplacian(&f, h), &Array2::zeros((n, n)));
    }

    #[test]
    fn test_linear_in_y() {
        let (n, h) = (5, 0.25);
        let f = Array2::from_shape_fn((n, n), |(i, _)| 3. * i as f64 * h);
        let df = d_dy(&f, h);
        for i in 1..n - 1 {
            for j in 1..n - 1 {
                assert!((df[[i, j]] - 3.).abs() < 1e-12);
            }
        }
        assert_zero_boundary(&df);
        approx_eq(&d_dx(&f, h), &Array2::zeros((n, n)));
    }

    #[test]
    fn test_quadratic_curvature() {
        // f = x^2 + 2 y^2 -> d2x2 = 2, d2y2 = 4, laplacian = 6 (exact for quadratics)
        let n = 9;
        let h = 1. / (n - 1) as f64;
        let f = Array2::from_shape_fn((n, n), |(i, j)| {
            let (x, y) = (j as f64 * h, i as f64 * h);
            x * x + 2. * y * y
        });
        let fxx = d2x2(&f, h);
        let fyy = d2y2(&f, h);
        let lap = laplacian(&f, h);
        for i in 1..n - 1 {
            for j in 1..n - 1 {
                assert!((fxx[[i, j]] - 2.).abs() < 1e-9);
                assert!((fyy[[i, j]] - 4.).abs() < 1e-9);
                assert!((lap[[i, j]] - 6.).abs() < 1e-9);
            }
        }
        assert_zero_boundary(&fxx);
        assert_zero_boundary(&fyy);
        assert_zero_boundary(&lap);
        approx_eq(&lap, &(&fxx + &fyy));
    }

    #[test]
    fn test_into_reuses_buffer() {
        let (n, h) = (6, 0.2);
        let f = Array2::from_shape_fn((n, n), |(i, j)| (i * j) as f64);
        // buffer with garbage, including the edges
        let mut out = Array2::from_elem((n, n), 7.);
        d_dy_into(&f, &mut out, h).unwrap();
        approx_eq(&out, &d_dy(&f, h));
        assert_zero_boundary(&out);
    }

    #[test]
    fn test_allocating_forms_on_views() {
        let (n, h) = (7, 0.2);
        let big = Array2::from_shape_fn((n + 2, n + 2), |(i, j)| (i * i + 3 * j) as f64);
        let f = big.slice(s![1..-1, 1..-1]);
        let mut out = Array2::<f64>::zeros((n, n));
        d_dx_into(&f, &mut out, h).unwrap();
        approx_eq(&d_dx(&f, h), &out);
        d_dy_into(&f, &mut out, h).unwrap();
        approx_eq(&d_dy(&f, h), &out);
        d2x2_into(&f, &mut out, h).unwrap();
        approx_eq(&d2x2(&f, h), &out);
        d2y2_into(&f, &mut out, h).unwrap();
        approx_eq(&d2y2(&f, h), &out);
        laplacian_into(&f, &mut out, h).unwrap();
        approx_eq(&laplacian(&f, h), &out);
        assert_eq!(laplacian(&f, h).shape(), &[n, n]);
    }

    #[test]
    fn test_shape_mismatch() {
        let f = Array2::<f64>::zeros((5, 5));
        let mut out = Array2::<f64>::zeros((5, 6));
        assert!(d_dx_into(&f, &mut out, 0.25).is_err());
        assert!(laplacian_into(&f, &mut out, 0.25).is_err());
        assert!(divergence(&f, &out, 0.25).is_err());
    }

    #[test]
    fn test_divergence_of_rotation() {
        // u = -y, v = x is divergence free
        let n = 7;
        let h = 1. / (n - 1) as f64;
        let ux = Array2::from_shape_fn((n, n), |(i, _)| -(i as f64) * h);
        let uy = Array2::from_shape_fn((n, n), |(_, j)| j as f64 * h);
        let div = divergence(&ux, &uy, h).unwrap();
        approx_eq(&div, &Array2::zeros((n, n)));
    }
}
