//! Run configuration, read from interactive prompts.
//!
//! ```
//! use std::io::Cursor;
//! use qstates::{ config::Config, potential::PotentialKind };
//!
//! let input = Cursor::new("1\n2\nparticle_in_box\n");
//! let config = Config::prompt(input, std::io::sink()).unwrap();
//! assert_eq!(config.n1, 1);
//! assert_eq!(config.n2, 2);
//! assert_eq!(config.potential, PotentialKind::ParticleInBox);
//! ```

use std::io::{ BufRead, Write };
use crate::{ error::InputError, potential::PotentialKind };

pub type InputResult<T> = Result<T, InputError>;

pub const PROMPT_N1: &str = "Index of the first eigen function: ";
pub const PROMPT_N2: &str = "Index of the second eigen function: ";
pub const PROMPT_POTENTIAL: &str
    = "Enter potential type ('particle_in_box', 'harmonic_oscillator', 'double_well'): ";

/// Parameters for a single comparison of two eigenstates of the same
/// potential.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// First quantum number
    pub n1: i64,
    /// Second quantum number
    pub n2: i64,
    /// Potential
    pub potential: PotentialKind,
}

impl Config {
    /// Ask for both quantum numbers and the potential name in order, writing
    /// each prompt to `output` and reading one line of `input` in response.
    ///
    /// Quantum numbers may be surrounded by whitespace; the potential name must
    /// match exactly apart from its line terminator.
    pub fn prompt<R, W>(mut input: R, mut output: W) -> InputResult<Self>
    where
        R: BufRead,
        W: Write,
    {
        let n1 = read_int(&mut input, &mut output, PROMPT_N1)?;
        let n2 = read_int(&mut input, &mut output, PROMPT_N2)?;
        let name = read_line(&mut input, &mut output, PROMPT_POTENTIAL)?;
        let potential: PotentialKind = name.parse()?;
        Ok(Self { n1, n2, potential })
    }
}

fn read_line<R, W>(input: &mut R, output: &mut W, prompt: &'static str)
    -> InputResult<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(InputError::UnexpectedEof { prompt });
    }
    let len = buf.trim_end_matches(|c| c == '\n' || c == '\r').len();
    buf.truncate(len);
    Ok(buf)
}

fn read_int<R, W>(input: &mut R, output: &mut W, prompt: &'static str)
    -> InputResult<i64>
where
    R: BufRead,
    W: Write,
{
    let text = read_line(input, output, prompt)?;
    let parsed = text.trim().parse::<i64>();
    parsed.map_err(|source| InputError::InvalidInput { prompt, text, source })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use crate::error::InvalidArgument;
    use super::*;

    fn run(input: &str) -> (InputResult<Config>, String) {
        let mut out: Vec<u8> = Vec::new();
        let res = Config::prompt(Cursor::new(input), &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn reads_all_fields() {
        let (res, out) = run(" 3 \r\n-1\nharmonic_oscillator\r\n");
        let config = res.unwrap();
        assert_eq!(
            config,
            Config { n1: 3, n2: -1, potential: PotentialKind::HarmonicOscillator },
        );
        assert_eq!(out, format!("{}{}{}", PROMPT_N1, PROMPT_N2, PROMPT_POTENTIAL));
    }

    #[test]
    fn last_line_without_terminator() {
        let (res, _) = run("0\n4\ndouble_well");
        assert_eq!(res.unwrap().potential, PotentialKind::DoubleWell);
    }

    #[test]
    fn non_integer_quantum_number() {
        let (res, out) = run("1\ntwo\nparticle_in_box\n");
        match res {
            Err(InputError::InvalidInput { prompt, text, .. }) => {
                assert_eq!(prompt, PROMPT_N2);
                assert_eq!(text, "two");
            },
            other => panic!("expected InvalidInput, got {other:?}"),
        }
        // no further prompts after the failure
        assert_eq!(out, format!("{}{}", PROMPT_N1, PROMPT_N2));
    }

    #[test]
    fn fractional_quantum_number() {
        let (res, _) = run("1.5\n2\nparticle_in_box\n");
        assert!(matches!(res, Err(InputError::InvalidInput { .. })));
    }

    #[test]
    fn unknown_potential() {
        let (res, _) = run("1\n2\ntriangular_well\n");
        assert!(matches!(
            res,
            Err(InputError::InvalidArgument(InvalidArgument::UnknownPotential(_))),
        ));
        let (res, _) = run("1\n2\n particle_in_box\n");
        assert!(matches!(res, Err(InputError::InvalidArgument(_))));
    }

    #[test]
    fn input_ends_early() {
        let (res, _) = run("1\n");
        assert!(matches!(
            res,
            Err(InputError::UnexpectedEof { prompt: PROMPT_N2 }),
        ));
    }
}
