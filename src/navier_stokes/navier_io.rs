//! Implement io routines for `Navier2D`
use super::navier::{Navier2D, Snapshot, SnapshotConsumer, State};
use super::params::Parameters;
use crate::error::Result;
use crate::io::{read_scalar_from_hdf5, write_scalar_to_hdf5, write_to_hdf5};
use crate::Integrate;
use ndarray::Array1;

impl Navier2D {
    /// Restart from file
    ///
    /// Reads `ux`, `uy`, `pres`, `time` and `timestep`. The wall
    /// velocities stay those of the initial fields given to `new`.
    ///
    /// # Errors
    /// Failed to read, or stored fields differ in size.
    pub fn read(&mut self, filename: &str) -> Result<()> {
        let mut state = State::new(self.params().n);
        state.ux.read(filename, "ux")?;
        state.uy.read(filename, "uy")?;
        state.pres.read(filename, "pres")?;
        let time = read_scalar_from_hdf5::<f64>(filename, "time")?;
        let timestep = read_scalar_from_hdf5::<u64>(filename, "timestep")? as usize;
        self.set_state(state, time, timestep)?;
        log::info!(" <== {:?}", filename);
        Ok(())
    }

    /// Read snapshot from file, and handle error
    pub fn read_unwrap(&mut self, filename: &str) {
        if let Err(e) = self.read(filename) {
            log::error!("Error while reading file {:?}. Error: {}", filename, e);
        }
    }

    /// Write current state to file
    ///
    /// # Errors
    /// Failed to write
    pub fn write(&self, filename: &str) -> Result<()> {
        self.state().ux.write(filename, "ux")?;
        self.state().uy.write(filename, "uy")?;
        self.state().pres.write(filename, "pres")?;
        write_to_hdf5(filename, "x", &self.state().ux.x)?;
        write_to_hdf5(filename, "y", &self.state().ux.y)?;
        write_scalars(filename, self.get_time(), self.timestep(), self.params())
    }

    /// Write current state to file, and handle error
    pub fn write_unwrap(&self, filename: &str) {
        if let Err(e) = self.write(filename) {
            log::error!("Error while writing file {:?}. Error: {}", filename, e);
        }
    }
}

fn write_scalars(filename: &str, time: f64, timestep: usize, params: &Parameters) -> Result<()> {
    write_scalar_to_hdf5(filename, "time", time)?;
    write_scalar_to_hdf5(filename, "timestep", timestep as u64)?;
    write_scalar_to_hdf5(filename, "dt", params.dt)?;
    write_scalar_to_hdf5(filename, "nu", params.nu)?;
    write_scalar_to_hdf5(filename, "rho", params.rho)?;
    Ok(())
}

/// Snapshot consumer writing `{dir}/flow{timestep:0>8}.h5`
///
/// # Example
///```ignore
/// let writer = Hdf5Writer::new("data", navier.params());
/// navier.add_consumer(writer);
///```
#[derive(Debug, Clone)]
pub struct Hdf5Writer {
    /// Output directory
    pub dir: String,
    params: Parameters,
}

impl Hdf5Writer {
    /// Writer for a run with `params`
    pub fn new(dir: &str, params: &Parameters) -> Self {
        Self {
            dir: dir.to_string(),
            params: params.clone(),
        }
    }

    /// File name of a snapshot
    pub fn filename(&self, timestep: usize) -> String {
        format!("{}/flow{:0>8}.h5", self.dir, timestep)
    }
}

impl SnapshotConsumer for Hdf5Writer {
    fn receive(&mut self, snapshot: &Snapshot) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let fname = self.filename(snapshot.timestep);
        for (name, v) in [
            ("ux/v", &snapshot.ux),
            ("uy/v", &snapshot.uy),
            ("pres/v", &snapshot.pres),
        ] {
            write_to_hdf5(&fname, name, v)?;
        }
        let grid = Array1::linspace(0., 1., snapshot.ux.nrows());
        write_to_hdf5(&fname, "x", &grid)?;
        write_to_hdf5(&fname, "y", &grid)?;
        write_scalars(&fname, snapshot.time, snapshot.timestep, &self.params)?;
        log::info!(" ==> {:?}", fname);
        Ok(())
    }
}
