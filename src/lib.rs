//! # `rustfd`: Finite difference solver for incompressible Navier-Stokes equations
//!<img align="right" src="https://rustacean.net/assets/cuddlyferris.png" width="80">
//!
//! # Dependencies
//! - cargo >= v1.60
//! - `hdf5` (sudo apt-get install -y libhdf5-dev), only with feature `hdf5`
//!
//! # Details
//!
//! This library integrates the 2-dimensional incompressible
//! Navier-Stokes equations on the unit square with a projection
//! (fractional step) method:
//!
//! - second order central differences on a uniform `n x n` grid,
//!   see [`operators`]
//! - explicit advection-diffusion predictor,
//!   see [`navier_stokes::navier_eq`]
//! - pressure poisson equation solved by Jacobi relaxation,
//!   see [`solver::Jacobi`]
//! - Dirichlet walls for velocity, zero-gradient pressure,
//!   see [`navier_stokes::boundary_conditions`]
//!
//! Stencils run in parallel over the grid via `ndarray`'s
//! rayon integration. Timesteps are strictly sequential.
//!
//! ## Implemented solver
//!
//! - `2-D lid/wall driven incompressible flow`,
//! see [`navier_stokes::Navier2D`]
//!
//! # Example
//! Evolve a random divergence free velocity field
//! ```
//! use ndarray::Array2;
//! use rustfd::navier_stokes::functions::random_velocity;
//! use rustfd::navier_stokes::{Navier2D, Parameters};
//!
//! let params = Parameters {
//!     timesteps: 20,
//!     snapshot_intervall: Some(10),
//!     ..Parameters::default()
//! };
//! let (ux, uy) = random_velocity(params.n, 1., 3, 0);
//! let pres = Array2::zeros((params.n, params.n));
//! let mut navier = Navier2D::new(params, ux, uy, pres).unwrap();
//! navier.on_snapshot(|s| println!("step {} |u| = {}", s.timestep, s.ux[[5, 5]]));
//! navier.run().unwrap();
//! ```
//!
//! ## Postprocess the output
//!
//! With feature `hdf5`, attach a [`navier_stokes::Hdf5Writer`] and
//! the snapshots are written to `data/flow{timestep}.h5`.
//!
//! ## Documentation
//!
//! Download and run:
//!
//! `cargo doc --open`
#![warn(missing_docs)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
pub mod error;
pub mod field;
#[cfg(feature = "hdf5")]
pub mod io;
pub mod navier_stokes;
pub mod operators;
pub mod solver;
pub use error::{Error, Result};

/// Integrate trait, step forward in time, and write results
pub trait Integrate {
    /// Update solution
    ///
    /// # Errors
    /// The step can not be completed, e.g. the solution blew up.
    fn update(&mut self) -> Result<()>;
    /// Receive current time
    fn get_time(&self) -> f64;
    /// Get timestep
    fn get_dt(&self) -> f64;
    /// Callback function (can be used for i/o)
    ///
    /// # Errors
    /// Output failed.
    fn callback(&mut self) -> Result<()>;
    /// Additional break criteria
    fn exit(&mut self) -> bool;
}

/// Integrade pde, that implements the Integrate trait.
///
/// Specify `save_intervall` to call `callback` after every
/// `save_intervall`-th step.
///
/// Stop Criteria:
/// 1. Timestep limit
/// 2. Break criteria (`exit`), checked before each step
/// 3. First error
///
/// Returns the number of completed steps.
///
/// # Errors
/// Propagates errors of `update` and `callback`.
pub fn integrate<T: Integrate>(
    pde: &mut T,
    max_timestep: usize,
    save_intervall: Option<usize>,
) -> Result<usize> {
    let mut timestep: usize = 0;
    while timestep < max_timestep {
        // Break
        if pde.exit() {
            log::info!("break criteria triggered after {} steps", timestep);
            break;
        }

        // Update
        if let Err(e) = pde.update() {
            log::error!("{} (time = {:e})", e, pde.get_time());
            return Err(e);
        }
        timestep += 1;

        // Save
        if let Some(n) = save_intervall {
            if n > 0 && timestep % n == 0 {
                pde.callback()?;
            }
        }
    }
    if timestep == max_timestep {
        log::debug!("timestep limit reached: {}", timestep);
    }
    Ok(timestep)
}
