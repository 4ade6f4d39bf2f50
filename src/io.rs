//! # Read and write ndarrays to hdf5 files
//!
//! Only compiled with feature `hdf5`.
pub mod read_write_hdf5;
pub use hdf5::H5Type;
pub use read_write_hdf5::{read_from_hdf5, read_scalar_from_hdf5};
pub use read_write_hdf5::{write_scalar_to_hdf5, write_to_hdf5};
