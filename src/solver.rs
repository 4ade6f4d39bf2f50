//! # Linear solver for the pressure poisson equation
//!
//! The pressure solve is hidden behind [`PoissonSolver`], so the
//! time stepping driver does not depend on the relaxation scheme.
//! Currently implemented:
//! - [`Jacobi`]: fixed sweep count, optional residual tolerance
#![allow(clippy::module_name_repetitions)]
pub mod jacobi;
pub use jacobi::{residual, Jacobi};
use crate::error::Result;
use ndarray::Array2;

/// Outcome of a single pressure solve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveInfo {
    /// Number of sweeps performed
    pub iterations: usize,
    /// Final residual max|D2 p - f|, only computed if a tolerance is set
    pub residual: Option<f64>,
}

/// Solve D2 p = f subject to zero-gradient boundaries.
pub trait PoissonSolver {
    /// Improve `pres` in place, using it as the initial iterate.
    ///
    /// # Errors
    /// `rhs` and `pres` differ in shape from the solver grid.
    fn solve(&mut self, rhs: &Array2<f64>, pres: &mut Array2<f64>) -> Result<SolveInfo>;
}
