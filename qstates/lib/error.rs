//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use std::num::ParseIntError;
use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned when an eigenfunction is requested for arguments outside the
/// supported set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The potential name is not one of `particle_in_box`,
    /// `harmonic_oscillator`, or `double_well`.
    #[error("unsupported potential type '{0}'")]
    UnknownPotential(String),

    /// Hermite polynomials are only defined for non-negative degree.
    #[error("quantum number must be non-negative for {kind}; got {n}")]
    NegativeQuantumNumber { kind: &'static str, n: i64 },
}

/// Returned from eigenfunction and expectation value functions.
#[derive(Debug, Error)]
pub enum QError {
    /// [`InvalidArgument`]
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),
}

/// Returned while reading a [`Config`][crate::config::Config] from
/// interactive input.
#[derive(Debug, Error)]
pub enum InputError {
    /// Returned when an answer to a numeric prompt can't be parsed as an
    /// integer.
    #[error("invalid input for '{prompt}': '{text}' is not an integer ({source})")]
    InvalidInput {
        prompt: &'static str,
        text: String,
        source: ParseIntError,
    },

    /// Returned when input ends before a prompt is answered.
    #[error("input ended before '{prompt}' was answered")]
    UnexpectedEof { prompt: &'static str },

    /// [`InvalidArgument`]
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    /// [`std::io::Error`]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

