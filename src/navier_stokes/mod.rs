//! Navier--Stokes solver (finite differences, projection method)
pub mod boundary_conditions;
pub mod functions;
pub mod navier;
pub mod navier_eq;
#[cfg(feature = "hdf5")]
pub mod navier_io;
pub mod params;
pub use navier::{Navier2D, Snapshot, SnapshotConsumer, State};
#[cfg(feature = "hdf5")]
pub use navier_io::Hdf5Writer;
pub use params::{Parameters, PressureCoupling};
