//! Prompt-driven configuration input.
//!
//! Reads the number of charges, then magnitude and position for each charge,
//! then one evaluation point, issuing a prompt per value. The first value that
//! fails to parse aborts the whole read with the underlying conversion error;
//! retry policy belongs to the caller, not here.

use std::io::{self, BufRead, Write};
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

use crate::charge::PointCharge;
use crate::math::{R2, Scalar};

/// Errors raised while reading an interactive configuration.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Underlying stream failure.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A value expected to be an integer did not parse.
    #[error("invalid integer: {0}")]
    InvalidInteger(#[from] ParseIntError),
    /// A value expected to be a real number did not parse.
    #[error("invalid number: {0}")]
    InvalidNumber(#[from] ParseFloatError),
    /// The stream ended before all values were supplied.
    #[error("unexpected end of input")]
    UnexpectedEof,
}

/// A complete interactive configuration: the charge set plus the single
/// point at which field and potential are requested.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeConfig {
    /// Charges in input order.
    pub charges: Vec<PointCharge>,
    /// Evaluation point in meters.
    pub point: R2,
}

fn read_value<R, W, T>(input: &mut R, output: &mut W, prompt: &str) -> Result<T, InputError>
where
    R: BufRead,
    W: Write,
    T: FromStr,
    InputError: From<T::Err>,
{
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::UnexpectedEof);
    }
    Ok(line.trim().parse::<T>()?)
}

/// Reads charges and an evaluation point from `input`, echoing prompts to
/// `output`.
///
/// A charge count of zero is accepted: the degenerate empty charge set is
/// well-defined downstream (zero field and potential everywhere).
pub fn read_probe_config<R, W>(input: &mut R, output: &mut W) -> Result<ProbeConfig, InputError>
where
    R: BufRead,
    W: Write,
{
    let count: usize = read_value(input, output, "Enter the number of charges: ")?;

    let mut charges = Vec::with_capacity(count);
    for i in 1..=count {
        let charge_c: Scalar =
            read_value(input, output, &format!("Enter charge {i} value (in Coulombs): "))?;
        let x: Scalar = read_value(input, output, &format!("Enter x-coordinate of charge {i}: "))?;
        let y: Scalar = read_value(input, output, &format!("Enter y-coordinate of charge {i}: "))?;
        charges.push(PointCharge::new(charge_c, x, y));
    }

    let x: Scalar = read_value(input, output, "Enter the x-coordinate of the evaluation point: ")?;
    let y: Scalar = read_value(input, output, "Enter the y-coordinate of the evaluation point: ")?;

    Ok(ProbeConfig {
        charges,
        point: R2::new(x, y),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn read_from(text: &str) -> Result<ProbeConfig, InputError> {
        let mut input = Cursor::new(text.to_owned());
        let mut output = Vec::new();
        read_probe_config(&mut input, &mut output)
    }

    #[test]
    fn parses_two_charges_and_a_point() {
        let config = read_from("2\n1e-9\n-2\n0\n-1e-9\n2\n0\n0\n0\n").expect("valid input");
        assert_eq!(
            config.charges,
            vec![
                PointCharge::new(1.0e-9, -2.0, 0.0),
                PointCharge::new(-1.0e-9, 2.0, 0.0),
            ]
        );
        assert_eq!(config.point, R2::zeros());
    }

    #[test]
    fn zero_charges_is_accepted() {
        let config = read_from("0\n1.5\n-0.5\n").expect("valid input");
        assert!(config.charges.is_empty());
        assert_eq!(config.point, R2::new(1.5, -0.5));
    }

    #[test]
    fn non_numeric_magnitude_aborts_immediately() {
        let err = read_from("1\nbanana\n").expect_err("malformed input");
        assert!(matches!(err, InputError::InvalidNumber(_)));
    }

    #[test]
    fn non_numeric_count_aborts_immediately() {
        let err = read_from("two\n").expect_err("malformed input");
        assert!(matches!(err, InputError::InvalidInteger(_)));
    }

    #[test]
    fn truncated_input_is_reported_as_eof() {
        let err = read_from("1\n1e-9\n0\n").expect_err("truncated input");
        assert!(matches!(err, InputError::UnexpectedEof));
    }

    #[test]
    fn prompts_are_echoed_in_order() {
        let mut input = Cursor::new("1\n1e-9\n0\n0\n1\n1\n".to_owned());
        let mut output = Vec::new();
        read_probe_config(&mut input, &mut output).expect("valid input");
        let text = String::from_utf8(output).expect("utf8 prompts");
        assert!(text.starts_with("Enter the number of charges: "));
        assert!(text.contains("Enter charge 1 value (in Coulombs): "));
        assert!(text.contains("Enter the y-coordinate of the evaluation point: "));
    }
}
