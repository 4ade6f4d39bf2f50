//! Collection of boundary conditions
//!
//! - velocity: Dirichlet, the four edges are overwritten with the
//!   edges of the initial field
//! - pressure: Neumann (zero normal gradient), every edge cell copies
//!   its interior neighbour
use crate::error::{check_shape, Result};
use ndarray::{s, ArrayBase, Data, DataMut, Ix2};

/// Overwrite the edges of `field` with the edges of `bc`.
///
/// Each edge of `field` is taken from the same edge of `bc`. Interior
/// values are untouched.
///
/// # Errors
/// `field` and `bc` differ in shape.
pub fn dirichlet<S1, S2>(field: &mut ArrayBase<S1, Ix2>, bc: &ArrayBase<S2, Ix2>) -> Result<()>
where
    S1: DataMut<Elem = f64>,
    S2: Data<Elem = f64>,
{
    check_shape("dirichlet", bc.shape(), field.shape())?;
    let (ny, nx) = field.dim();
    if ny == 0 || nx == 0 {
        return Ok(());
    }
    field.row_mut(0).assign(&bc.row(0));
    field.row_mut(ny - 1).assign(&bc.row(ny - 1));
    field.column_mut(0).assign(&bc.column(0));
    field.column_mut(nx - 1).assign(&bc.column(nx - 1));
    Ok(())
}

/// Apply Dirichlet condition to both velocity components
///
/// # Errors
/// A component differs in shape from its boundary field.
pub fn dirichlet_velocity<S1, S2>(
    ux: &mut ArrayBase<S1, Ix2>,
    uy: &mut ArrayBase<S1, Ix2>,
    ux_bc: &ArrayBase<S2, Ix2>,
    uy_bc: &ArrayBase<S2, Ix2>,
) -> Result<()>
where
    S1: DataMut<Elem = f64>,
    S2: Data<Elem = f64>,
{
    dirichlet(ux, ux_bc)?;
    dirichlet(uy, uy_bc)
}

/// Zero gradient pressure boundary
///
/// ```text
/// p[:, 0] = p[:, 1],  p[:, n-1] = p[:, n-2]
/// p[0, :] = p[1, :],  p[n-1, :] = p[n-2, :]
/// ```
/// Rows are set after columns, so a corner takes the value of its
/// diagonal interior neighbour.
pub fn neumann<S>(pres: &mut ArrayBase<S, Ix2>)
where
    S: DataMut<Elem = f64>,
{
    let (ny, nx) = pres.dim();
    if ny < 2 || nx < 2 {
        return;
    }
    let (mut edge, inner) = pres.multi_slice_mut((s![.., 0], s![.., 1]));
    edge.assign(&inner);
    let (mut edge, inner) = pres.multi_slice_mut((s![.., nx - 1], s![.., nx - 2]));
    edge.assign(&inner);
    let (mut edge, inner) = pres.multi_slice_mut((s![0, ..], s![1, ..]));
    edge.assign(&inner);
    let (mut edge, inner) = pres.multi_slice_mut((s![ny - 1, ..], s![ny - 2, ..]));
    edge.assign(&inner);
}
