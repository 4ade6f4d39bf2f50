//! `Hdf5` functions to read and write ndarrays
use super::H5Type;
use crate::error::{Error, Result};
use ndarray::{Array, ArrayBase, ArrayD, Dimension};
use std::path::Path;

/// Read scalar from hdf5
///
/// # Errors
/// When file or variable does not exist, or the
/// variable is not of dimensionality 1.
pub fn read_scalar_from_hdf5<T>(filename: &str, name: &str) -> Result<T>
where
    T: H5Type + Clone + Copy,
{
    let file = hdf5::File::open(filename)?;
    let dset = file.dataset(name)?;
    let scalar: ndarray::Array1<T> = dset.read()?;
    match scalar.len() {
        1 => Ok(scalar[0]),
        len => Err(Error::DimensionMismatch {
            name: "scalar",
            expected: [1, 0],
            actual: [len, 0],
        }),
    }
}

/// Interface to write scalar to hdf5 file
///
/// # Errors
/// File can not be created or written.
pub fn write_scalar_to_hdf5<T>(filename: &str, name: &str, scalar: T) -> Result<()>
where
    T: H5Type + Copy,
{
    let x = ndarray::Array1::<T>::from_elem(1, scalar);
    write_to_hdf5(filename, name, &x)
}

/// Read ndarray from hdf5 file
///
/// # Errors
/// Errors when file/variable does not exist and
/// when the stored array has a different dimensionality.
pub fn read_from_hdf5<A, D>(filename: &str, varname: &str) -> Result<Array<A, D>>
where
    A: H5Type,
    D: Dimension,
{
    let file = hdf5::File::open(filename)?;
    let data = file.dataset(varname)?;
    let y: ArrayD<A> = data.read_dyn::<A>()?;
    let shape = y.shape().to_vec();
    y.into_dimensionality::<D>()
        .map_err(|_| Error::DimensionMismatch {
            name: "hdf5 dataset",
            expected: [D::NDIM.unwrap_or(0), 0],
            actual: [shape.len(), 0],
        })
}

/// Write ndarray to hdf5 file
///
/// Appends to an existing file and overwrites an existing
/// variable of the same name.
///
/// # Errors
/// When file can not be created, or when the variable
/// exists with a different shape.
pub fn write_to_hdf5<A, S, D>(filename: &str, varname: &str, array: &ArrayBase<S, D>) -> Result<()>
where
    A: H5Type,
    S: ndarray::Data<Elem = A>,
    D: ndarray::Dimension,
{
    let file = if Path::new(filename).exists() {
        hdf5::File::append(filename)?
    } else {
        hdf5::File::create(filename)?
    };

    let dset = match file.dataset(varname) {
        Ok(dset) => dset,
        Err(..) => file
            .new_dataset::<A>()
            .no_chunk()
            .shape(array.shape())
            .create(varname)?,
    };
    dset.write(&array.view())?;
    Ok(())
}
