//! Parsing of numbers typed by users.
//!
//! Surrounding whitespace is ignored, everything else must be the number:
//! `"12abc"` is not `12`. Decimals may be written in scientific notation.

use std::str::FromStr as _;

use derive_more::{Display, Error};
use rust_decimal::Decimal;

/// Error of parsing a number from user input.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum ParseError {
    /// Input is empty or whitespace only.
    #[display("no number provided")]
    Empty,

    /// Input is not a finite number of the expected kind.
    #[display("not a valid number")]
    Invalid,
}

/// Parses a finite [`Decimal`] from the provided `input`.
///
/// # Errors
///
/// If the `input` is empty or isn't a finite decimal number.
pub fn decimal(input: &str) -> Result<Decimal, ParseError> {
    let input = non_empty(input)?;
    Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .map_err(|_| ParseError::Invalid)
}

/// Parses a whole number from the provided `input`.
///
/// # Errors
///
/// If the `input` is empty or isn't a whole number fitting into [`i32`].
pub fn integer(input: &str) -> Result<i32, ParseError> {
    non_empty(input)?.parse().map_err(|_| ParseError::Invalid)
}

/// Trims the provided `input`, rejecting it if nothing remains.
fn non_empty(input: &str) -> Result<&str, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        Err(ParseError::Empty)
    } else {
        Ok(input)
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::{decimal, integer, ParseError};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn parses_decimals() {
        assert_eq!(decimal("250000"), Ok(dec("250000")));
        assert_eq!(decimal("2.5"), Ok(dec("2.5")));
        assert_eq!(decimal(" 1500.75 "), Ok(dec("1500.75")));
        assert_eq!(decimal("-3"), Ok(dec("-3")));
        assert_eq!(decimal("1e3"), Ok(dec("1000")));
    }

    #[test]
    fn rejects_non_decimals() {
        assert_eq!(decimal(""), Err(ParseError::Empty));
        assert_eq!(decimal("   "), Err(ParseError::Empty));
        assert_eq!(decimal("abc"), Err(ParseError::Invalid));
        assert_eq!(decimal("12abc"), Err(ParseError::Invalid));
        assert_eq!(decimal("NaN"), Err(ParseError::Invalid));
        assert_eq!(decimal("Infinity"), Err(ParseError::Invalid));
    }

    #[test]
    fn parses_integers() {
        assert_eq!(integer("3"), Ok(3));
        assert_eq!(integer(" 4 "), Ok(4));
        assert_eq!(integer("-1"), Ok(-1));
    }

    #[test]
    fn rejects_non_integers() {
        assert_eq!(integer(""), Err(ParseError::Empty));
        assert_eq!(integer("2.5"), Err(ParseError::Invalid));
        assert_eq!(integer("two"), Err(ParseError::Invalid));
        assert_eq!(integer("99999999999"), Err(ParseError::Invalid));
    }
}
