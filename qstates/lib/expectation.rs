//! Position and momentum expectation values of closed-form eigenstates.
//!
//! ```
//! use qstates::{ GRID_POINTS, expectation::evaluate_named };
//!
//! let ev = evaluate_named(0, "harmonic_oscillator").unwrap();
//! assert_eq!(ev.density.len(), GRID_POINTS);
//! assert!(ev.position.abs() < 1e-10);
//! ```

use std::f64::consts::TAU;
use ndarray as nd;
use crate::{
    potential::{ PotentialKind, QResult },
    utils::{ do_fft, fft_shift, trapz, trapz_sampled, wf_norm },
};

/// The sampled densities and expectation values for a single eigenstate.
///
/// Densities are the plain squares of the closed-form eigenfunctions and are
/// not renormalized over the (truncated) sampling domain, so `position` and
/// `momentum` are the raw integrals. [`Self::norm`] and
/// [`Self::mean_position`] account for this when needed.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// Quantum number
    pub n: i64,
    /// Potential
    pub kind: PotentialKind,
    /// Position grid
    pub x: nd::Array1<f64>,
    /// Position-space probability density
    pub density: nd::Array1<f64>,
    /// Angular wavenumbers, in FFT order
    pub k: nd::Array1<f64>,
    /// Momentum-space probability density, indexed by `k`
    pub momentum_density: nd::Array1<f64>,
    /// Trapezoidal integral of `x * density`
    pub position: f64,
    /// Trapezoidal integral of `k * momentum_density`, taken over `k` in FFT
    /// order
    pub momentum: f64,
}

impl Evaluation {
    /// Grid spacing.
    pub fn dx(&self) -> f64 { self.x[1] - self.x[0] }

    /// Trapezoidal integral of the position density.
    pub fn norm(&self) -> f64 {
        trapz(&self.density, self.dx())
    }

    /// Position expectation value after normalizing the density over the grid.
    pub fn mean_position(&self) -> f64 { self.position / self.norm() }

    /// Return the wavenumbers and momentum density reordered so that the
    /// wavenumbers are ascending.
    pub fn momentum_shifted(&self) -> (nd::Array1<f64>, nd::Array1<f64>) {
        (fft_shift(&self.k), fft_shift(&self.momentum_density))
    }

    /// Format the position and momentum expectation values as two report
    /// lines, labeling the quantum number as `label`.
    pub fn summary(&self, label: &str) -> [String; 2] {
        [
            format!(
                "Expectation value of position for {} = {}: {:?}",
                label, self.n, self.position,
            ),
            format!(
                "Expectation value of momentum for {} = {}: {:?}",
                label, self.n, self.momentum,
            ),
        ]
    }
}

/// Sample the `n`-th eigenfunction of `kind` and compute its position and
/// momentum densities and expectation values.
pub fn evaluate(n: i64, kind: PotentialKind) -> QResult<Evaluation> {
    let x = kind.grid();
    let dx = x[1] - x[0];
    let psi = kind.eigenfunction(n, &x)?;
    let density = psi.mapv(|q| q * q);
    let position = trapz(&(&x * &density), dx);

    let (psi_k, freq) = do_fft(&psi, dx);
    let k = freq * TAU;
    let momentum_density = psi_k.mapv(|qk| qk.norm_sqr());
    let momentum = trapz_sampled(&(&k * &momentum_density), &k)?;

    if density.iter().chain(&momentum_density).any(|p| !p.is_finite()) {
        eprintln!(
            "expectation::evaluate: WARNING: encountered non-finite density \
            values for n = {} ({}); results are unreliable",
            n, kind,
        );
    }

    Ok(Evaluation { n, kind, x, density, k, momentum_density, position, momentum })
}

/// Like [`evaluate`], but select the potential by name.
///
/// Fails with [`InvalidArgument`][crate::error::InvalidArgument] before any
/// sampling is done if the name is unsupported.
pub fn evaluate_named(n: i64, potential: &str) -> QResult<Evaluation> {
    let kind: PotentialKind = potential.parse()?;
    evaluate(n, kind)
}

/// Norm of the sampled `n`-th eigenfunction of `kind` over its grid.
pub fn eigenfunction_norm(n: i64, kind: PotentialKind) -> QResult<f64> {
    let x = kind.grid();
    let psi = kind.eigenfunction(n, &x)?;
    Ok(wf_norm(&psi, x[1] - x[0]))
}
