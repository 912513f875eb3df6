//! Best-effort persistence of a plan's inputs to [`LocalStorage`].
//!
//! The blob is a JSON object under [`STORAGE_KEY`] holding the team identity,
//! cost and fee fields and the player count. The current page and the
//! derived totals are never stored; totals are always recomputed on load.
//!
//! Every failure here (storage disabled, quota exceeded, malformed blob) is
//! logged and swallowed. The planner keeps working from memory and the link.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::PlanState;
use crate::parse::clamp_players;
use crate::storage::LocalStorage;

/// Storage key of the plan blob.
pub const STORAGE_KEY: &str = "ice-planner-v1";

/// The stored subset of a [`PlanState`].
///
/// Every field is optional: a blob written by an older build, or edited by
/// hand, may lack some of them, and a missing field must leave the current
/// value alone. Field names of the first release (`logo`, `iceCost`,
/// `feePct`, `jerseyCost`) are still accepted on read.
///
/// Amounts are written as JSON numbers carrying the decimal's exact digits,
/// so a reload gives the same totals a shared link would.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,

    #[serde(default, alias = "logo", skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(
        default,
        alias = "iceCost",
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub ice_cost_per_hour: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub hours: Option<Decimal>,

    #[serde(
        default,
        alias = "feePct",
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub fee_percent: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub fee_fixed: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub coach_cost: Option<Decimal>,

    #[serde(
        default,
        alias = "jerseyCost",
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub jersey_cost_per_player: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub players: Option<Decimal>,
}

impl StoredPlan {
    pub fn from_state(state: &PlanState) -> Self {
        Self {
            team_name: Some(state.team_name.clone()),
            logo_url: Some(state.logo_url.clone()),
            ice_cost_per_hour: Some(state.ice_cost_per_hour),
            hours: Some(state.hours),
            fee_percent: Some(state.fee_percent),
            fee_fixed: Some(state.fee_fixed),
            coach_cost: Some(state.coach_cost),
            jersey_cost_per_player: Some(state.jersey_cost_per_player),
            players: Some(Decimal::from(state.players)),
        }
    }

    /// Overlays the stored fields onto `state`, leaving absent ones untouched.
    pub fn apply_to(
        self,
        state: &mut PlanState,
    ) {
        if let Some(v) = self.team_name {
            state.team_name = v;
        }
        if let Some(v) = self.logo_url {
            state.logo_url = v;
        }
        if let Some(v) = self.ice_cost_per_hour {
            state.ice_cost_per_hour = v;
        }
        if let Some(v) = self.hours {
            state.hours = v;
        }
        if let Some(v) = self.fee_percent {
            state.fee_percent = v;
        }
        if let Some(v) = self.fee_fixed {
            state.fee_fixed = v;
        }
        if let Some(v) = self.coach_cost {
            state.coach_cost = v;
        }
        if let Some(v) = self.jersey_cost_per_player {
            state.jersey_cost_per_player = v;
        }
        if let Some(v) = self.players {
            state.players = clamp_players(v);
        }
    }
}

/// Reads and writes the plan blob through a [`LocalStorage`] backend.
pub struct PlanPersistence {
    storage: Box<dyn LocalStorage>,
}

impl PlanPersistence {
    pub fn new(storage: Box<dyn LocalStorage>) -> Self {
        Self { storage }
    }

    /// Writes the stored subset of `state`. Failures are logged, never returned.
    pub fn save(
        &mut self,
        state: &PlanState,
    ) {
        let blob = match serde_json::to_string(&StoredPlan::from_state(state)) {
            Ok(blob) => blob,
            Err(error) => {
                warn!(%error, "could not serialize plan; skipping save");
                return;
            }
        };
        match self.storage.set_item(STORAGE_KEY, &blob) {
            Ok(()) => debug!(bytes = blob.len(), "plan saved"),
            Err(error) => warn!(%error, "could not save plan; continuing without storage"),
        }
    }

    /// Returns whatever subset was previously saved, or `None` when nothing
    /// usable is stored.
    pub fn load(&self) -> Option<StoredPlan> {
        let raw = match self.storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no stored plan");
                return None;
            }
            Err(error) => {
                warn!(%error, "could not read stored plan");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(stored) => Some(stored),
            Err(error) => {
                warn!(%error, "ignoring malformed stored plan");
                None
            }
        }
    }

    /// Forgets the stored plan. Failures are logged, never returned.
    pub fn clear(&mut self) {
        if let Err(error) = self.storage.remove_item(STORAGE_KEY) {
            warn!(%error, "could not clear stored plan");
        }
    }
}
