//! Some useful diagnostics and initial fields
use ndarray::{Array2, ArrayBase, Data, Ix2};
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use num_traits::Float;
use std::f64::consts::PI;

/// Return true if no element is NaN or Inf
pub fn all_finite<A, S>(array: &ArrayBase<S, Ix2>) -> bool
where
    A: Float,
    S: Data<Elem = A>,
{
    array.iter().all(|x| x.is_finite())
}

/// Return max |x|
pub fn max_abs<S: Data<Elem = f64>>(array: &ArrayBase<S, Ix2>) -> f64 {
    array.iter().fold(0., |acc: f64, x| acc.max(x.abs()))
}

/// Return l2 norm of real array
pub fn norm_l2<S: Data<Elem = f64>>(array: &ArrayBase<S, Ix2>) -> f64 {
    array.iter().map(|x| x.powi(2)).sum::<f64>().sqrt()
}

/// Mean kinetic energy `0.5 <ux^2 + uy^2>`
pub fn kinetic_energy<S1, S2>(ux: &ArrayBase<S1, Ix2>, uy: &ArrayBase<S2, Ix2>) -> f64
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    if ux.is_empty() {
        return 0.;
    }
    let sum: f64 = ux
        .iter()
        .zip(uy.iter())
        .map(|(u, v)| u * u + v * v)
        .sum();
    0.5 * sum / ux.len() as f64
}

/// Advective CFL number `dt * max(|ux|, |uy|) / h`
pub fn cfl<S1, S2>(ux: &ArrayBase<S1, Ix2>, uy: &ArrayBase<S2, Ix2>, dt: f64, h: f64) -> f64
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let umax = max_abs(ux).max(max_abs(uy));
    dt * umax / h
}

/// Velocity `(ux, uy) = (dpsi/dy, -dpsi/dx)` of stream function `psi`
///
/// The derivatives are taken with the same central stencil the
/// solver uses, sampling `psi` half a stencil outside the domain
/// where needed. Hence the discrete divergence
/// `d_dx(ux) + d_dy(uy)` vanishes (up to round off) at every
/// interior point.
pub fn velocity_from_stream_function<F>(n: usize, psi: F) -> (Array2<f64>, Array2<f64>)
where
    F: Fn(f64, f64) -> f64,
{
    let h = crate::field::spacing(n);
    let two_h = 2. * h;
    let ux = Array2::from_shape_fn((n, n), |(i, j)| {
        let (x, y) = (j as f64 * h, i as f64 * h);
        (psi(x, y + h) - psi(x, y - h)) / two_h
    });
    let uy = Array2::from_shape_fn((n, n), |(i, j)| {
        let (x, y) = (j as f64 * h, i as f64 * h);
        -(psi(x + h, y) - psi(x - h, y)) / two_h
    });
    (ux, uy)
}

/// Single vortex cell mode
///
/// psi = amp \* sin(pi\*m\*x) sin(pi\*k\*y)
pub fn vortex_mode(n: usize, amp: f64, m: f64, k: f64) -> (Array2<f64>, Array2<f64>) {
    velocity_from_stream_function(n, |x, y| amp * (PI * m * x).sin() * (PI * k * y).sin())
}

/// Divergence free random velocity
///
/// The stream function is a sine series with `modes x modes`
/// coefficients drawn uniformly from `[-amp, amp]`.
pub fn random_velocity(n: usize, amp: f64, modes: usize, seed: u64) -> (Array2<f64>, Array2<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let amp = amp.abs();
    let coeff: Array2<f64> =
        Array2::random_using((modes, modes), Uniform::new_inclusive(-amp, amp), &mut rng);
    velocity_from_stream_function(n, |x, y| {
        coeff
            .indexed_iter()
            .map(|((a, b), c)| {
                c * (PI * (a + 1) as f64 * x).sin() * (PI * (b + 1) as f64 * y).sin()
            })
            .sum()
    })
}

/// Random pressure, uniform in `[-amp, amp]`
pub fn random_pressure(n: usize, amp: f64, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let amp = amp.abs();
    Array2::random_using((n, n), Uniform::new_inclusive(-amp, amp), &mut rng)
}
