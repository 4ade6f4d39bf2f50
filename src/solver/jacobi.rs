//! Jacobi relaxation for the pressure poisson equation
//!
//! Each sweep updates every interior cell from the previous iterate
//! $$
//! p^{k+1}\_{i,j} = \frac{1}{4} ( p^k\_{i,j-1} + p^k\_{i,j+1} + p^k\_{i+1,j} + p^k\_{i-1,j} - h^2 f\_{i,j} )
//! $$
//! followed by the zero-gradient boundary pass. The new iterate is
//! written into a second buffer of the same shape, then the buffers swap
//! roles, so no cell ever reads an already updated neighbour.
use super::{PoissonSolver, SolveInfo};
use crate::error::{check_shape, Result};
use crate::navier_stokes::boundary_conditions::neumann;
use ndarray::{s, Array2, ArrayBase, Data, Ix2, Zip};

/// Jacobi solver with preallocated ping-pong buffer
#[derive(Debug, Clone)]
pub struct Jacobi {
    /// Grid points per axis
    pub n: usize,
    /// Grid spacing
    pub h: f64,
    /// Number of sweeps per solve
    pub max_iter: usize,
    /// Stop early once the residual drops below this value.
    /// If `None`, exactly `max_iter` sweeps are performed.
    pub tol: Option<f64>,
    /// Second iterate
    buf: Array2<f64>,
}

impl Jacobi {
    /// Initialize solver for an `n x n` grid
    pub fn new(n: usize, h: f64, max_iter: usize, tol: Option<f64>) -> Self {
        Self {
            n,
            h,
            max_iter,
            tol,
            buf: Array2::zeros((n, n)),
        }
    }

    /// One sweep: read `pres`, write into `buf`, swap
    fn sweep(&mut self, rhs: &Array2<f64>, pres: &mut Array2<f64>) {
        let h2 = self.h * self.h;
        Zip::from(self.buf.slice_mut(s![1..-1, 1..-1]))
            .and(pres.slice(s![1..-1, ..-2]))
            .and(pres.slice(s![1..-1, 2..]))
            .and(pres.slice(s![2.., 1..-1]))
            .and(pres.slice(s![..-2, 1..-1]))
            .and(rhs.slice(s![1..-1, 1..-1]))
            .par_for_each(|p, &west, &east, &north, &south, &f| {
                *p = 0.25 * (west + east + north + south - h2 * f);
            });
        neumann(&mut self.buf);
        std::mem::swap(pres, &mut self.buf);
    }
}

impl PoissonSolver for Jacobi {
    /// # Example
    /// Zero right hand side keeps a constant pressure
    ///```
    /// use ndarray::Array2;
    /// use rustfd::solver::{Jacobi, PoissonSolver};
    /// let n = 9;
    /// let mut solver = Jacobi::new(n, 1. / 8., 10, None);
    /// let rhs = Array2::<f64>::zeros((n, n));
    /// let mut pres = Array2::<f64>::from_elem((n, n), 2.);
    /// let info = solver.solve(&rhs, &mut pres).unwrap();
    /// assert_eq!(info.iterations, 10);
    /// assert!(pres.iter().all(|p| (p - 2.).abs() < 1e-12));
    ///```
    fn solve(&mut self, rhs: &Array2<f64>, pres: &mut Array2<f64>) -> Result<SolveInfo> {
        check_shape("rhs", self.buf.shape(), rhs.shape())?;
        check_shape("pres", self.buf.shape(), pres.shape())?;
        let mut info = SolveInfo {
            iterations: 0,
            residual: None,
        };
        if self.n < 3 {
            return Ok(info);
        }
        for _ in 0..self.max_iter {
            self.sweep(rhs, pres);
            info.iterations += 1;
            if let Some(tol) = self.tol {
                let res = residual(pres, rhs, self.h);
                info.residual = Some(res);
                if res <= tol {
                    break;
                }
            }
        }
        if let Some(res) = info.residual {
            log::debug!("jacobi: {} sweeps, residual {:.3e}", info.iterations, res);
        }
        Ok(info)
    }
}

/// Return max|D2 p - f| over the interior, with D2 the five point laplacian
pub fn residual<S1, S2>(pres: &ArrayBase<S1, Ix2>, rhs: &ArrayBase<S2, Ix2>, h: f64) -> f64
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let (ny, nx) = pres.dim();
    if ny < 3 || nx < 3 {
        return 0.;
    }
    let h2 = h * h;
    let mut res = 0_f64;
    Zip::from(pres.slice(s![1..-1, 1..-1]))
        .and(pres.slice(s![1..-1, ..-2]))
        .and(pres.slice(s![1..-1, 2..]))
        .and(pres.slice(s![2.., 1..-1]))
        .and(pres.slice(s![..-2, 1..-1]))
        .and(rhs.slice(s![1..-1, 1..-1]))
        .for_each(|&c, &west, &east, &north, &south, &f| {
            let lap = (west + east + north + south - 4. * c) / h2;
            res = res.max((lap - f).abs());
        });
    res
}
