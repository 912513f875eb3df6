//! Totals for a team plan.
//!
//! | Total             | Formula                                              |
//! |-------------------|------------------------------------------------------|
//! | `base_total`      | ice $/h × hours + coach cost + jersey cost           |
//! | `total_with_fees` | unrounded base × (1 + fee percent) + fixed fee       |
//! | `per_player`      | rounded `total_with_fees` ÷ max(1, players)          |
//!
//! Each total is rounded to cents on its own, in that order. The jersey cost
//! enters the base once; the summary's jersey line multiplies it by the
//! player count separately (see [`super::breakdown`]).
//!
//! Arithmetic saturates instead of overflowing, so absurd inputs produce
//! absurd totals rather than a panic.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use ice_core::{PlanState, calculations::recalculate};
//!
//! let state = PlanState { players: 15, ..PlanState::default() };
//! let totals = recalculate(&state);
//!
//! assert_eq!(totals.base_total, dec!(18088.00));
//! assert_eq!(totals.total_with_fees, dec!(18450.75));
//! assert_eq!(totals.per_player, dec!(1230.05));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::{per_player, round_half_up};
use crate::models::{DerivedTotals, PlanState};

/// Computes the derived totals for `state`. Pure and deterministic.
pub fn recalculate(state: &PlanState) -> DerivedTotals {
    let base_raw = state
        .ice_cost_per_hour
        .saturating_mul(state.hours)
        .saturating_add(state.coach_cost)
        .saturating_add(state.jersey_cost_per_player);

    let with_fees_raw = base_raw
        .saturating_mul(Decimal::ONE.saturating_add(state.fee_percent))
        .saturating_add(state.fee_fixed);

    let total_with_fees = round_half_up(with_fees_raw);

    DerivedTotals {
        base_total: round_half_up(base_raw),
        total_with_fees,
        per_player: round_half_up(per_player(total_with_fees, state.players)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn state(
        ice: Decimal,
        hours: Decimal,
        coach: Decimal,
        jersey: Decimal,
        fee_percent: Decimal,
        fee_fixed: Decimal,
        players: u32,
    ) -> PlanState {
        PlanState {
            ice_cost_per_hour: ice,
            hours,
            coach_cost: coach,
            jersey_cost_per_player: jersey,
            fee_percent,
            fee_fixed,
            players,
            ..PlanState::default()
        }
    }

    #[test]
    fn single_player_pays_everything() {
        let totals = recalculate(&state(
            dec!(300),
            dec!(50),
            dec!(3000),
            dec!(88),
            dec!(0.02),
            dec!(0.99),
            1,
        ));

        assert_eq!(totals.base_total, dec!(18088.00));
        assert_eq!(totals.total_with_fees, dec!(18450.75));
        assert_eq!(totals.per_player, dec!(18450.75));
    }

    #[test]
    fn fifteen_players_split_the_total() {
        let totals = recalculate(&state(
            dec!(300),
            dec!(50),
            dec!(3000),
            dec!(88),
            dec!(0.02),
            dec!(0.99),
            15,
        ));

        assert_eq!(totals.base_total, dec!(18088.00));
        assert_eq!(totals.total_with_fees, dec!(18450.75));
        assert_eq!(totals.per_player, dec!(1230.05));
    }

    #[test]
    fn jersey_cost_is_added_once() {
        let one = recalculate(&state(dec!(0), dec!(0), dec!(0), dec!(88), dec!(0), dec!(0), 1));
        let many = recalculate(&state(dec!(0), dec!(0), dec!(0), dec!(88), dec!(0), dec!(0), 20));

        assert_eq!(one.base_total, dec!(88));
        assert_eq!(many.base_total, dec!(88));
        assert_eq!(many.per_player, dec!(4.40));
    }

    #[test]
    fn fees_use_the_unrounded_base() {
        // base 10.005 rounds to 10.01 on its own, but fees apply to 10.005:
        // 10.005 × 1.5 = 15.0075 → 15.01 (not 10.01 × 1.5 = 15.015 → 15.02)
        let totals = recalculate(&state(
            dec!(10.005),
            dec!(1),
            dec!(0),
            dec!(0),
            dec!(0.5),
            dec!(0),
            1,
        ));

        assert_eq!(totals.base_total, dec!(10.01));
        assert_eq!(totals.total_with_fees, dec!(15.01));
    }

    #[test]
    fn per_player_uses_the_rounded_total() {
        // 1.005 → 1.01, then 1.01 / 2 = 0.505 → 0.51 (1.005 / 2 would give 0.50)
        let totals = recalculate(&state(
            dec!(0),
            dec!(0),
            dec!(1.005),
            dec!(0),
            dec!(0),
            dec!(0),
            2,
        ));

        assert_eq!(totals.total_with_fees, dec!(1.01));
        assert_eq!(totals.per_player, dec!(0.51));
    }

    #[test]
    fn zero_players_divides_by_one() {
        let totals = recalculate(&state(
            dec!(100),
            dec!(1),
            dec!(0),
            dec!(0),
            dec!(0),
            dec!(0),
            0,
        ));

        assert_eq!(totals.per_player, dec!(100));
    }

    #[test]
    fn recalculate_is_idempotent() {
        let state = PlanState {
            players: 7,
            ..PlanState::default()
        };

        assert_eq!(recalculate(&state), recalculate(&state));
    }

    #[test]
    fn huge_inputs_saturate_instead_of_panicking() {
        let totals = recalculate(&state(
            Decimal::MAX,
            Decimal::MAX,
            Decimal::MAX,
            dec!(0),
            dec!(1),
            dec!(1),
            3,
        ));

        assert_eq!(totals.base_total, Decimal::MAX);
        assert!(totals.per_player > Decimal::ZERO);
    }

    #[test]
    fn formula_holds_across_a_grid_of_inputs() {
        let amounts = [dec!(0), dec!(0.01), dec!(12.345), dec!(250), dec!(9999.99)];
        let percents = [dec!(0), dec!(0.02), dec!(0.125)];
        let players = [1_u32, 2, 15, 37];

        for ice in amounts {
            for jersey in amounts {
                for pct in percents {
                    for count in players {
                        let s = state(ice, dec!(3), dec!(500), jersey, pct, dec!(0.99), count);
                        let totals = recalculate(&s);
                        let base_raw = ice * dec!(3) + dec!(500) + jersey;
                        let with_fees =
                            round_half_up(base_raw * (Decimal::ONE + pct) + dec!(0.99));

                        assert_eq!(totals.base_total, round_half_up(base_raw));
                        assert_eq!(totals.total_with_fees, with_fees);
                        assert_eq!(
                            totals.per_player,
                            round_half_up(with_fees / Decimal::from(count))
                        );
                    }
                }
            }
        }
    }
}
