//! Text formatting for money, fee rates and percentages.
//!
//! Negative amounts carry the sign ahead of the dollar sign (`-$3.10`, not
//! `$-3.10`). Amounts too large to scale print as `n/a` instead of failing.

use ice_core::calculations::common::round_half_up;
use rust_decimal::Decimal;

/// Dollar amount with two decimals: `$18450.75`, `-$3.10`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_half_up(value);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${:.2}", rounded.abs())
    }
}

/// Fixed number of decimals, rounding half away from zero.
pub fn format_amount(
    value: Decimal,
    decimals: u32,
) -> String {
    let rounded = value.round_dp_with_strategy(
        decimals,
        rust_decimal::RoundingStrategy::MidpointAwayFromZero,
    );
    format!("{rounded:.prec$}", prec = decimals as usize)
}

/// A fraction shown as a percentage with one decimal: `0.025` → `2.5%`.
pub fn format_percent(fraction: Decimal) -> String {
    match fraction.checked_mul(Decimal::ONE_HUNDRED) {
        Some(percent) => format!("{}%", format_amount(percent, 1)),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn currency_always_has_cents() {
        assert_eq!(format_currency(dec!(18088)), "$18088.00");
        assert_eq!(format_currency(dec!(1230.05)), "$1230.05");
        assert_eq!(format_currency(dec!(0.005)), "$0.01");
    }

    #[test]
    fn negative_currency_puts_sign_first() {
        assert_eq!(format_currency(dec!(-3.1)), "-$3.10");
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn amount_pads_and_rounds() {
        assert_eq!(format_amount(dec!(0.02), 3), "0.020");
        assert_eq!(format_amount(dec!(1.0245), 3), "1.025");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(dec!(0.02)), "2.0%");
        assert_eq!(format_percent(dec!(0.035)), "3.5%");
    }

    #[test]
    fn percent_out_of_range_is_not_available() {
        assert_eq!(format_percent(dec!(1000000000000000000000000000)), "n/a");
        assert_eq!(format_percent(Decimal::MIN), "n/a");
    }

    #[test]
    fn extreme_currency_still_formats() {
        assert_eq!(
            format_currency(Decimal::MIN),
            "-$79228162514264337593543950335.00"
        );
    }
}
