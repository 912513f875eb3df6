use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{Page, PlanField};

/// Team name used until the user picks one.
pub const DEFAULT_TEAM_NAME: &str = "Penn State Champs";

/// The single mutable record behind every page.
///
/// Monetary values are decimals so that cents survive arithmetic exactly.
/// `fee_percent` is a fraction (`0.02` is 2%). `players` is kept at one or
/// more by every write path in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanState {
    pub team_name: String,
    /// Empty means no logo.
    pub logo_url: String,
    pub ice_cost_per_hour: Decimal,
    pub hours: Decimal,
    pub fee_percent: Decimal,
    pub fee_fixed: Decimal,
    pub coach_cost: Decimal,
    pub jersey_cost_per_player: Decimal,
    pub players: u32,
    pub current_page: Page,
}

impl Default for PlanState {
    fn default() -> Self {
        Self {
            team_name: DEFAULT_TEAM_NAME.to_string(),
            logo_url: String::new(),
            ice_cost_per_hour: dec!(300),
            hours: dec!(50),
            fee_percent: dec!(0.02),
            fee_fixed: dec!(0.99),
            coach_cost: dec!(3000),
            jersey_cost_per_player: dec!(88),
            players: 1,
            current_page: Page::Calculator,
        }
    }
}

impl PlanState {
    pub fn has_logo(&self) -> bool {
        !self.logo_url.is_empty()
    }

    /// Current value of a decimal field, `None` for text and count fields.
    pub fn amount(
        &self,
        field: PlanField,
    ) -> Option<Decimal> {
        match field {
            PlanField::IceCostPerHour => Some(self.ice_cost_per_hour),
            PlanField::Hours => Some(self.hours),
            PlanField::FeePercent => Some(self.fee_percent),
            PlanField::FeeFixed => Some(self.fee_fixed),
            PlanField::CoachCost => Some(self.coach_cost),
            PlanField::JerseyCostPerPlayer => Some(self.jersey_cost_per_player),
            PlanField::TeamName | PlanField::LogoUrl | PlanField::Players => None,
        }
    }

    pub fn amount_mut(
        &mut self,
        field: PlanField,
    ) -> Option<&mut Decimal> {
        match field {
            PlanField::IceCostPerHour => Some(&mut self.ice_cost_per_hour),
            PlanField::Hours => Some(&mut self.hours),
            PlanField::FeePercent => Some(&mut self.fee_percent),
            PlanField::FeeFixed => Some(&mut self.fee_fixed),
            PlanField::CoachCost => Some(&mut self.coach_cost),
            PlanField::JerseyCostPerPlayer => Some(&mut self.jersey_cost_per_player),
            PlanField::TeamName | PlanField::LogoUrl | PlanField::Players => None,
        }
    }
}
