//! Implement io routines for `Field2`
use super::Field2;
use crate::error::{check_shape, Result};
use crate::io::{read_from_hdf5, write_to_hdf5};
use ndarray::{Array2, Ix2};

impl Field2 {
    /// Read field values from group `varname` of an hdf5 file
    ///
    /// # Errors
    /// Can't read file, or stored field has a different size.
    pub fn read(&mut self, filename: &str, varname: &str) -> Result<()> {
        let data: Array2<f64> = read_from_hdf5::<f64, Ix2>(filename, &format!("{}/v", varname))?;
        check_shape("field", self.v.shape(), data.shape())?;
        self.v.assign(&data);
        Ok(())
    }

    /// Write field values and grid to group `varname` of an hdf5 file
    ///
    /// # Errors
    /// Can't write file.
    pub fn write(&self, filename: &str, varname: &str) -> Result<()> {
        write_to_hdf5(filename, &format!("{}/x", varname), &self.x)?;
        write_to_hdf5(filename, &format!("{}/y", varname), &self.y)?;
        write_to_hdf5(filename, &format!("{}/v", varname), &self.v)?;
        Ok(())
    }
}
