use rust_decimal::Decimal;
use serde::Serialize;

/// Totals recomputed from a [`PlanState`](super::PlanState) after every
/// change. Never persisted: storage and links only carry the inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DerivedTotals {
    pub base_total: Decimal,
    pub total_with_fees: Decimal,
    pub per_player: Decimal,
}
