//! Provides closed-form eigenfunctions for a small set of textbook potentials
//! in one dimension, along with their position- and momentum-space probability
//! densities and expectation values.
//!
//! Supported potentials (see [`potential::PotentialKind`]):
//! - Infinite square well ("particle in a box") over *x* ∊ [0, 2π]
//! - Harmonic oscillator over *x* ∊ [-5, 5], in natural units
//! - Quartic double well over *x* ∊ [-5, 5], approximated as
//!   exp(-*x*⁴) *H*<sub>*n*</sub>(*x*)
//!
//! Each eigenstate is sampled on a fixed grid of [`GRID_POINTS`] points.
//! Momentum-space densities are computed from the discrete Fourier transform of
//! the sampled wavefunction, and expectation values via the trapezoidal rule.
//! Densities are *not* renormalized over the sampling domain; see
//! [`expectation::Evaluation`].

pub mod config;
pub mod error;
pub mod expectation;
pub mod hermite;
pub mod potential;
pub mod utils;

/// Number of points in every spatial grid.
pub const GRID_POINTS: usize = 500;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
