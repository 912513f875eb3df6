//! Rounding and division helpers shared by the calculation modules.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use ice_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Player count as a divisor, never below one.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use ice_core::calculations::common::player_divisor;
///
/// assert_eq!(player_divisor(15), dec!(15));
/// assert_eq!(player_divisor(0), dec!(1));
/// ```
pub fn player_divisor(players: u32) -> Decimal {
    Decimal::from(players.max(1))
}

/// Divides by the player count; cannot fail because the divisor is at least one.
pub fn per_player(
    amount: Decimal,
    players: u32,
) -> Decimal {
    amount / player_divisor(players)
}
