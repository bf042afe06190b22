//! Closed-form eigenfunctions for a fixed set of textbook potentials.
//!
//! ```
//! use ndarray as nd;
//! use qstates::potential::PotentialKind;
//!
//! let kind: PotentialKind = "harmonic_oscillator".parse().unwrap();
//! let x: nd::Array1<f64> = kind.grid();
//! let psi = kind.eigenfunction(0, &x).unwrap();
//! assert_eq!(psi.len(), x.len());
//! assert!(psi.iter().all(|q| *q > 0.0));
//! ```

use std::{ f64::consts::{ PI, TAU }, fmt, str::FromStr };
use ndarray as nd;
use crate::{
    Arr1,
    GRID_POINTS,
    error::{ InvalidArgument, QError },
    hermite::{ hermite_function, weighted_hermite },
};

pub type QResult<T> = Result<T, QError>;

/// A potential with known (or approximate) closed-form eigenfunctions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PotentialKind {
    /// Infinite square well, `sqrt(2/π) sin(n x)`.
    ParticleInBox,
    /// Harmonic oscillator in natural units, normalized Hermite functions.
    HarmonicOscillator,
    /// Quartic double well, approximated by `exp(-x⁴) Hₙ(x)`.
    ///
    /// This is not a true eigenstate of any double-well Hamiltonian and is not
    /// normalized.
    DoubleWell,
}

impl PotentialKind {
    /// All supported kinds.
    pub const ALL: [Self; 3]
        = [Self::ParticleInBox, Self::HarmonicOscillator, Self::DoubleWell];

    /// Name used to select the kind from text.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ParticleInBox => "particle_in_box",
            Self::HarmonicOscillator => "harmonic_oscillator",
            Self::DoubleWell => "double_well",
        }
    }

    /// Endpoints of the spatial domain over which eigenfunctions are sampled.
    pub fn domain(&self) -> (f64, f64) {
        match self {
            Self::ParticleInBox => (0.0, TAU),
            Self::HarmonicOscillator | Self::DoubleWell => (-5.0, 5.0),
        }
    }

    /// Construct the evenly spaced sampling grid of [`GRID_POINTS`] points over
    /// [`Self::domain`], including both endpoints.
    pub fn grid(&self) -> nd::Array1<f64> {
        let (lo, hi) = self.domain();
        nd::Array1::linspace(lo, hi, GRID_POINTS)
    }

    /// Evaluate the `n`-th eigenfunction at each point in `x`.
    ///
    /// Negative `n` is accepted for [`Self::ParticleInBox`] but fails for the
    /// Hermite-based kinds.
    pub fn eigenfunction<S>(&self, n: i64, x: &Arr1<S>)
        -> QResult<nd::Array1<f64>>
    where S: nd::Data<Elem = f64>
    {
        match self {
            Self::ParticleInBox => Ok(particle_in_box(n, x)),
            Self::HarmonicOscillator => {
                let n = self.degree(n)?;
                Ok(harmonic_oscillator(n, x))
            },
            Self::DoubleWell => {
                let n = self.degree(n)?;
                Ok(double_well(n, x))
            },
        }
    }

    fn degree(&self, n: i64) -> Result<usize, InvalidArgument> {
        usize::try_from(n)
            .map_err(|_| {
                InvalidArgument::NegativeQuantumNumber { kind: self.name(), n }
            })
    }
}

impl fmt::Display for PotentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PotentialKind {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| InvalidArgument::UnknownPotential(s.to_string()))
    }
}

/// Evaluate the `n`-th eigenfunction of the potential named `potential` at
/// each point in `x`.
///
/// Fails with [`InvalidArgument`] if the name isn't one of the supported
/// [`PotentialKind`]s.
pub fn eigenfunction<S>(n: i64, x: &Arr1<S>, potential: &str)
    -> QResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    let kind: PotentialKind = potential.parse()?;
    kind.eigenfunction(n, x)
}

fn particle_in_box<S>(n: i64, x: &Arr1<S>) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    let a = (2.0 / PI).sqrt();
    let n = n as f64;
    x.mapv(|xk| a * (n * xk).sin())
}

fn harmonic_oscillator<S>(n: usize, x: &Arr1<S>) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    x.mapv(|xk| hermite_function(n, xk))
}

fn double_well<S>(n: usize, x: &Arr1<S>) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    x.mapv(|xk| weighted_hermite(n, xk, -xk.powi(4)))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use crate::hermite::hermite;
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in PotentialKind::ALL {
            assert_eq!(kind.name().parse::<PotentialKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn unknown_name_is_invalid_argument() {
        let x = PotentialKind::HarmonicOscillator.grid();
        match eigenfunction(1, &x, "triangular_well") {
            Err(QError::InvalidArgument(InvalidArgument::UnknownPotential(s))) =>
                assert_eq!(s, "triangular_well"),
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
        assert!("Particle_In_Box".parse::<PotentialKind>().is_err());
        assert!(" double_well".parse::<PotentialKind>().is_err());
    }

    #[test]
    fn grids() {
        let x = PotentialKind::ParticleInBox.grid();
        assert_eq!(x.len(), GRID_POINTS);
        assert_eq!(x[0], 0.0);
        assert_abs_diff_eq!(x[GRID_POINTS - 1], TAU, epsilon = 1e-12);
        for kind in [PotentialKind::HarmonicOscillator, PotentialKind::DoubleWell] {
            let x = kind.grid();
            assert_eq!(x.len(), GRID_POINTS);
            assert_eq!(x[0], -5.0);
            assert_abs_diff_eq!(x[GRID_POINTS - 1], 5.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn box_vanishes_at_walls() {
        let x = PotentialKind::ParticleInBox.grid();
        for n in 1..10 {
            let psi = PotentialKind::ParticleInBox.eigenfunction(n, &x).unwrap();
            assert_eq!(psi[0], 0.0);
            assert_abs_diff_eq!(psi[GRID_POINTS - 1], 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn box_matches_sine() {
        let x = PotentialKind::ParticleInBox.grid();
        let psi = eigenfunction(3, &x, "particle_in_box").unwrap();
        psi.iter().zip(&x)
            .for_each(|(q, xk)| {
                assert_abs_diff_eq!(
                    *q, (2.0 / PI).sqrt() * (3.0 * xk).sin(), epsilon = 1e-15);
            });
        // negative quantum numbers flip the sign
        let psi_neg = eigenfunction(-3, &x, "particle_in_box").unwrap();
        psi.iter().zip(&psi_neg)
            .for_each(|(q, qn)| assert_abs_diff_eq!(*q, -qn, epsilon = 1e-15));
    }

    #[test]
    fn oscillator_ground_state_is_gaussian() {
        let x = PotentialKind::HarmonicOscillator.grid();
        let psi = eigenfunction(0, &x, "harmonic_oscillator").unwrap();
        psi.iter().zip(&x)
            .for_each(|(q, xk)| {
                assert_abs_diff_eq!(
                    *q, PI.powf(-0.25) * (-xk * xk / 2.0).exp(), epsilon = 1e-15);
            });
    }

    #[test]
    fn double_well_form() {
        let x = PotentialKind::DoubleWell.grid();
        let psi = eigenfunction(2, &x, "double_well").unwrap();
        psi.iter().zip(&x)
            .for_each(|(q, xk)| {
                assert_abs_diff_eq!(
                    *q, (-xk.powi(4)).exp() * hermite(2, *xk), epsilon = 1e-12);
            });
    }

    #[test]
    fn negative_hermite_degree_rejected() {
        let x = PotentialKind::HarmonicOscillator.grid();
        for kind in [PotentialKind::HarmonicOscillator, PotentialKind::DoubleWell] {
            assert!(matches!(
                kind.eigenfunction(-1, &x),
                Err(QError::InvalidArgument(
                    InvalidArgument::NegativeQuantumNumber { n: -1, .. }
                )),
            ));
        }
    }
}
