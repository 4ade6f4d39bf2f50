//! Solver parameters
use crate::error::{Error, Result};
use crate::field::spacing;

/// Which pressure enters the velocity correction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressureCoupling {
    /// Gradient of the pressure solved in the current timestep
    #[default]
    Current,
    /// Gradient of the pressure handed to the Jacobi solver, i.e. the
    /// pressure of the previous timestep
    Lagged,
}

/// Parameters of a run. Fixed once the solver is constructed.
///
/// The default reproduces the reference configuration:
/// 32 x 32 grid, `dt = 1e-5`, `nu = 0.1`, `rho = 1`, 50 Jacobi
/// sweeps per step, 5000 steps, snapshots every 1000 steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    /// Grid points per axis
    pub n: usize,
    /// Timestep size
    pub dt: f64,
    /// Kinematic viscosity
    pub nu: f64,
    /// Density
    pub rho: f64,
    /// Jacobi sweeps per pressure solve
    pub jacobi_iter: usize,
    /// Total number of timesteps
    pub timesteps: usize,
    /// Steps between snapshots. If none, no snapshots are emitted.
    pub snapshot_intervall: Option<usize>,
    /// Optional early exit of the pressure solve
    pub tolerance: Option<f64>,
    /// Pressure used in the corrector
    pub coupling: PressureCoupling,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            n: 32,
            dt: 1e-5,
            nu: 0.1,
            rho: 1.,
            jacobi_iter: 50,
            timesteps: 5000,
            snapshot_intervall: Some(1000),
            tolerance: None,
            coupling: PressureCoupling::Current,
        }
    }
}

impl Parameters {
    /// Parameters without snapshots, tolerance or lagged coupling
    ///
    /// # Arguments
    ///
    /// * `n` - Grid points per axis
    ///
    /// * `dt` - Timestep size
    ///
    /// * `nu,rho` - Viscosity and density
    ///
    /// * `jacobi_iter` - Sweeps per pressure solve
    ///
    /// * `timesteps` - Number of timesteps
    pub fn new(n: usize, dt: f64, nu: f64, rho: f64, jacobi_iter: usize, timesteps: usize) -> Self {
        Self {
            n,
            dt,
            nu,
            rho,
            jacobi_iter,
            timesteps,
            snapshot_intervall: None,
            ..Self::default()
        }
    }

    /// Grid spacing `1/(n-1)`
    pub fn h(&self) -> f64 {
        spacing(self.n)
    }

    /// Largest stable `dt` of the explicit diffusion term, `h^2/(4 nu)`
    pub fn diffusion_limit(&self) -> f64 {
        if self.nu > 0. {
            self.h().powi(2) / (4. * self.nu)
        } else {
            f64::INFINITY
        }
    }

    /// Diffusion number `nu dt / h^2` (stable below 0.25)
    pub fn diffusion_number(&self) -> f64 {
        self.nu * self.dt / self.h().powi(2)
    }

    /// Reject parameters the solver can not run with
    ///
    /// # Errors
    /// Any parameter out of range.
    pub fn validate(&self) -> Result<()> {
        if self.n < 3 {
            return Err(Error::config(
                "n",
                format!("need at least 3 grid points per axis, got {}", self.n),
            ));
        }
        if !(self.dt.is_finite() && self.dt > 0.) {
            return Err(Error::config("dt", format!("must be positive, got {}", self.dt)));
        }
        if !(self.nu.is_finite() && self.nu >= 0.) {
            return Err(Error::config("nu", format!("must be non-negative, got {}", self.nu)));
        }
        if !(self.rho.is_finite() && self.rho > 0.) {
            return Err(Error::config("rho", format!("must be positive, got {}", self.rho)));
        }
        if self.jacobi_iter == 0 {
            return Err(Error::config("jacobi_iter", "must be positive"));
        }
        if self.timesteps == 0 {
            return Err(Error::config("timesteps", "must be positive"));
        }
        if self.snapshot_intervall == Some(0) {
            return Err(Error::config("snapshot_intervall", "must be positive"));
        }
        if let Some(tol) = self.tolerance {
            if !(tol.is_finite() && tol >= 0.) {
                return Err(Error::config("tolerance", format!("must be non-negative, got {}", tol)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected_key(params: &Parameters) -> &'static str {
        match params.validate() {
            Err(Error::Configuration { key, .. }) => key,
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_is_valid() {
        let params = Parameters::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.coupling, PressureCoupling::Current);
        assert!(params.dt < params.diffusion_limit());
    }

    #[test]
    fn test_rejects_non_positive() {
        let ok = Parameters::new(16, 1e-4, 0.1, 1., 10, 10);
        assert!(ok.validate().is_ok());
        assert_eq!(rejected_key(&Parameters { n: 2, ..ok.clone() }), "n");
        assert_eq!(rejected_key(&Parameters { dt: 0., ..ok.clone() }), "dt");
        assert_eq!(rejected_key(&Parameters { dt: -1e-3, ..ok.clone() }), "dt");
        assert_eq!(rejected_key(&Parameters { jacobi_iter: 0, ..ok.clone() }), "jacobi_iter");
        assert_eq!(rejected_key(&Parameters { timesteps: 0, ..ok.clone() }), "timesteps");
        assert_eq!(rejected_key(&Parameters { rho: 0., ..ok.clone() }), "rho");
        assert_eq!(rejected_key(&Parameters { nu: f64::NAN, ..ok.clone() }), "nu");
        assert_eq!(
            rejected_key(&Parameters {
                snapshot_intervall: Some(0),
                ..ok.clone()
            }),
            "snapshot_intervall"
        );
        assert_eq!(
            rejected_key(&Parameters {
                tolerance: Some(-1.),
                ..ok
            }),
            "tolerance"
        );
    }

    #[test]
    fn test_diffusion_limit() {
        let params = Parameters::new(32, 1e-5, 0.1, 1., 10, 10);
        let h = 1. / 31.;
        assert!((params.diffusion_limit() - h * h / 0.4).abs() < 1e-15);
        assert!(params.diffusion_number() < 0.25);
        let inviscid = Parameters { nu: 0., ..params };
        assert!(inviscid.diffusion_limit().is_infinite());
    }
}
