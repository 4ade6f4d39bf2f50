//! Error type of `rustfd`
//!
//! Every fallible routine in the crate returns [`Result`]. The numerical core
//! never recovers locally; errors travel up to the caller of the time loop.
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the solver
#[derive(Error, Debug)]
pub enum Error {
    /// A field contains NaN or Inf after a timestep. The combination of
    /// `dt`, `nu` and grid spacing is unstable.
    #[error("numerical instability: non-finite value in `{field}` at timestep {timestep}")]
    NumericalInstability {
        /// Index of the timestep that failed (1-based)
        timestep: usize,
        /// Name of the offending field
        field: &'static str,
    },

    /// Two fields which must share a shape do not
    #[error("dimension mismatch in `{name}`: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        /// Name of the field
        name: &'static str,
        /// Expected shape
        expected: [usize; 2],
        /// Actual shape
        actual: [usize; 2],
    },

    /// Invalid solver parameter, rejected before the run starts
    #[error("invalid parameter `{key}`: {reason}")]
    Configuration {
        /// Parameter name
        key: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// Failed to create an output directory
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read or write an hdf5 file
    #[cfg(feature = "hdf5")]
    #[error("hdf5: {0}")]
    Hdf5(#[from] hdf5::Error),
}

impl Error {
    pub(crate) fn config<S: Into<String>>(key: &'static str, reason: S) -> Self {
        Self::Configuration {
            key,
            reason: reason.into(),
        }
    }
}

/// Return `DimensionMismatch` unless `actual` equals `expected`
///
/// # Errors
/// Shapes differ.
pub fn check_shape(name: &'static str, expected: &[usize], actual: &[usize]) -> Result<()> {
    if expected == actual {
        return Ok(());
    }
    let to_pair = |s: &[usize]| [s.first().copied().unwrap_or(0), s.get(1).copied().unwrap_or(0)];
    Err(Error::DimensionMismatch {
        name,
        expected: to_pair(expected),
        actual: to_pair(actual),
    })
}
