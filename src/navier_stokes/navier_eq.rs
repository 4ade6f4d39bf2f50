//! Implement the individual steps of the projection method
//!
//! 1. predictor: explicit advection-diffusion update
//! $$
//! u^\* = u - \delta t (u \partial\_x u + v \partial\_y u) + \delta t \nu \nabla^2 u
//! $$
//! 2. pressure right hand side
//! $$
//! f = \frac{\rho}{\delta t} (\partial\_x u^\* + \partial\_y v^\*)
//! $$
//! 3. corrector
//! $$
//! u^{n+1} = u^\* - \frac{\delta t}{\rho} \partial\_x p
//! $$
//!
//! All routines write into caller owned buffers; the driver
//! allocates them once.
use crate::error::{check_shape, Result};
use crate::operators::{d_dx_into, d_dy_into, divergence_into, laplacian_into};
use ndarray::{Array2, Zip};

/// Scratch buffers for derivatives and the pressure right hand side
#[derive(Debug, Clone)]
pub struct Workspace {
    /// First derivative in x
    pub dfdx: Array2<f64>,
    /// First derivative in y
    pub dfdy: Array2<f64>,
    /// Laplacian
    pub lap: Array2<f64>,
    /// Right hand side of the pressure poisson equation
    pub rhs: Array2<f64>,
}

impl Workspace {
    /// Allocate buffers for an `n x n` grid
    pub fn new(n: usize) -> Self {
        Self {
            dfdx: Array2::zeros((n, n)),
            dfdy: Array2::zeros((n, n)),
            lap: Array2::zeros((n, n)),
            rhs: Array2::zeros((n, n)),
        }
    }
}

/// Advance a single velocity component `f` advected by `(ux, uy)`
///
/// # Errors
/// Any of the arrays differ in shape.
#[allow(clippy::too_many_arguments)]
pub fn predict_component(
    f: &Array2<f64>,
    ux: &Array2<f64>,
    uy: &Array2<f64>,
    out: &mut Array2<f64>,
    work: &mut Workspace,
    h: f64,
    dt: f64,
    nu: f64,
) -> Result<()> {
    check_shape("ux", f.shape(), ux.shape())?;
    check_shape("uy", f.shape(), uy.shape())?;
    check_shape("predictor", f.shape(), out.shape())?;
    d_dx_into(f, &mut work.dfdx, h)?;
    d_dy_into(f, &mut work.dfdy, h)?;
    laplacian_into(f, &mut work.lap, h)?;
    // - dt * convection
    Zip::from(&mut *out)
        .and(f)
        .and(ux)
        .and(uy)
        .and(&work.dfdx)
        .and(&work.dfdy)
        .par_for_each(|o, &f, &u, &v, &dfdx, &dfdy| {
            *o = f - dt * (u * dfdx + v * dfdy);
        });
    // + dt * diffusion
    let c = dt * nu;
    Zip::from(out)
        .and(&work.lap)
        .par_for_each(|o, &lap| *o += c * lap);
    Ok(())
}

/// Predictor step: intermediate velocity `(ux_star, uy_star)` from `(ux, uy)`
///
/// The result is not divergence free and its boundary values are
/// meaningless until the Dirichlet condition is enforced.
///
/// # Errors
/// Any of the arrays differ in shape.
#[allow(clippy::too_many_arguments)]
pub fn predictor(
    ux: &Array2<f64>,
    uy: &Array2<f64>,
    ux_star: &mut Array2<f64>,
    uy_star: &mut Array2<f64>,
    work: &mut Workspace,
    h: f64,
    dt: f64,
    nu: f64,
) -> Result<()> {
    predict_component(ux, ux, uy, ux_star, work, h, dt, nu)?;
    predict_component(uy, ux, uy, uy_star, work, h, dt, nu)?;
    Ok(())
}

/// Right hand side `rho/dt * div(u*)` of the pressure equation, stored in `work.rhs`
///
/// # Errors
/// Any of the arrays differ in shape.
pub fn pressure_rhs(
    ux_star: &Array2<f64>,
    uy_star: &Array2<f64>,
    work: &mut Workspace,
    h: f64,
    dt: f64,
    rho: f64,
) -> Result<()> {
    divergence_into(ux_star, uy_star, &mut work.rhs, &mut work.dfdy, h)?;
    work.rhs *= rho / dt;
    Ok(())
}

/// Corrector step: subtract `dt/rho * grad(p)` from the intermediate
/// velocity, in place
///
/// # Errors
/// Any of the arrays differ in shape.
#[allow(clippy::too_many_arguments)]
pub fn corrector(
    ux: &mut Array2<f64>,
    uy: &mut Array2<f64>,
    pres: &Array2<f64>,
    work: &mut Workspace,
    h: f64,
    dt: f64,
    rho: f64,
) -> Result<()> {
    check_shape("ux", pres.shape(), ux.shape())?;
    check_shape("uy", pres.shape(), uy.shape())?;
    d_dx_into(pres, &mut work.dfdx, h)?;
    d_dy_into(pres, &mut work.dfdy, h)?;
    let c = dt / rho;
    Zip::from(ux)
        .and(&work.dfdx)
        .par_for_each(|u, &dpdx| *u -= c * dpdx);
    Zip::from(uy)
        .and(&work.dfdy)
        .par_for_each(|v, &dpdy| *v -= c * dpdy);
    Ok(())
}
