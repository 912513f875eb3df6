//! Presentation-only figures for the summary and settings pages.
//!
//! Nothing here is stored on the plan; callers recompute on every render.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::calculations::common::{per_player, round_half_up};
use crate::models::{DerivedTotals, PlanState};

/// Whole-team cost lines.
///
/// `jersey` is jersey cost × players, unlike the base total which adds the
/// jersey cost once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TotalBreakdown {
    pub ice: Decimal,
    pub coach: Decimal,
    pub jersey: Decimal,
    pub subtotal: Decimal,
    pub fees: Decimal,
    pub total: Decimal,
}

/// One player's share of each cost line. `jersey` is already a per-player
/// figure and is shown as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerPlayerBreakdown {
    pub ice: Decimal,
    pub coach: Decimal,
    pub jersey: Decimal,
    pub fees: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryBreakdown {
    pub totals: TotalBreakdown,
    pub per_player: PerPlayerBreakdown,
}

impl SummaryBreakdown {
    pub fn compute(
        state: &PlanState,
        totals: &DerivedTotals,
    ) -> Self {
        let ice_raw = state.ice_cost_per_hour.saturating_mul(state.hours);
        let fees = round_half_up(totals.total_with_fees.saturating_sub(totals.base_total));

        Self {
            totals: TotalBreakdown {
                ice: round_half_up(ice_raw),
                coach: state.coach_cost,
                jersey: round_half_up(
                    state
                        .jersey_cost_per_player
                        .saturating_mul(Decimal::from(state.players)),
                ),
                subtotal: totals.base_total,
                fees,
                total: totals.total_with_fees,
            },
            per_player: PerPlayerBreakdown {
                ice: round_half_up(per_player(ice_raw, state.players)),
                coach: round_half_up(per_player(state.coach_cost, state.players)),
                jersey: round_half_up(state.jersey_cost_per_player),
                fees: round_half_up(per_player(fees, state.players)),
                total: totals.per_player,
            },
        }
    }
}

/// What a $1000 base costs once the fees are applied; shown on the settings
/// page next to the fee inputs.
pub fn fee_example(
    fee_percent: Decimal,
    fee_fixed: Decimal,
) -> Decimal {
    round_half_up(
        dec!(1000)
            .saturating_mul(Decimal::ONE.saturating_add(fee_percent))
            .saturating_add(fee_fixed),
    )
}
