//! Lenient parsing of the raw text typed into number inputs or carried in
//! a query string.

use std::str::FromStr;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use thiserror::Error;

/// Error returned when a string cannot be parsed as an amount.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid amount '{input}'")]
pub struct ParseAmountError {
    input: String,
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`) and scientific
/// notation (e.g. `"1.5e3"`). Empty or whitespace-only input is treated as 0.
/// Anything else that is not a finite decimal (including `NaN` and
/// `Infinity`) is an error.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|_| ParseAmountError {
            input: s.to_string(),
        })
}

/// Parses an amount, substituting zero when the input is not a number.
pub fn amount_or_zero(s: &str) -> Decimal {
    parse_amount(s).unwrap_or_else(|e| {
        tracing::debug!(input = %s, "{e}; using 0");
        Decimal::ZERO
    })
}

/// Converts a decimal player count into a whole number of at least one.
///
/// Fractions are truncated; zero and negative counts become one.
pub fn clamp_players(count: Decimal) -> u32 {
    if count < Decimal::ONE {
        return 1;
    }
    count.trunc().to_u32().unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_amount("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  123.45  ").unwrap(), dec!(123.45));
    }

    #[test]
    fn parse_amount_empty_treated_as_zero() {
        assert_eq!(parse_amount("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_accepts_scientific_notation() {
        assert_eq!(parse_amount("1.5e3").unwrap(), dec!(1500));
    }

    #[test]
    fn parse_amount_rejects_non_numbers() {
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("Infinity").is_err());
    }

    #[test]
    fn amount_or_zero_substitutes_zero() {
        assert_eq!(amount_or_zero("twelve"), Decimal::ZERO);
        assert_eq!(amount_or_zero("12"), dec!(12));
    }

    #[test]
    fn clamp_players_keeps_at_least_one() {
        assert_eq!(clamp_players(dec!(0)), 1);
        assert_eq!(clamp_players(dec!(-4)), 1);
        assert_eq!(clamp_players(dec!(0.5)), 1);
        assert_eq!(clamp_players(dec!(15)), 15);
        assert_eq!(clamp_players(dec!(2.9)), 2);
    }

    #[test]
    fn clamp_players_saturates_huge_counts() {
        assert_eq!(clamp_players(dec!(100000000000000000000)), u32::MAX);
    }
}
