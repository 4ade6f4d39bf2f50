//! Run reference configuration:
//!
//! cargo run --release
//!
//! 32 x 32 grid, dt = 1e-5, nu = 0.1, 5000 steps, snapshot
//! every 1000 steps. Log level is read from `RUST_LOG`.
//!
//! Write snapshots to `data/`:
//!
//! cargo run --release --features hdf5
use ndarray::Array2;
use rustfd::navier_stokes::functions::{random_pressure, random_velocity};
use rustfd::navier_stokes::{Navier2D, Parameters};

fn run() -> rustfd::Result<()> {
    let params = Parameters::default();
    let n = params.n;
    let (ux, uy) = random_velocity(n, 1., 3, 0);
    let pres: Array2<f64> = random_pressure(n, 1., 0);
    let mut navier = Navier2D::new(params, ux, uy, pres)?;
    #[cfg(feature = "hdf5")]
    {
        use rustfd::navier_stokes::Hdf5Writer;
        let writer = Hdf5Writer::new("data", navier.params());
        navier.add_consumer(writer);
    }
    navier.run()?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
