use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the raw value of a field is interpreted on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Stored verbatim.
    Text,
    /// Lenient decimal; unparseable input becomes zero.
    Amount,
    /// Lenient decimal truncated to a whole number, never below one.
    Count,
}

/// Every editable field of a [`PlanState`](super::PlanState).
///
/// Each field is known by three spellings: its state name (`iceCostPerHour`),
/// its query key (`ice`) and the event a view emits when it changes
/// (`ice-changed`). [`PlanField::parse`] accepts any of them, plus the
/// snake_case form of the state name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanField {
    TeamName,
    LogoUrl,
    IceCostPerHour,
    Hours,
    FeePercent,
    FeeFixed,
    CoachCost,
    JerseyCostPerPlayer,
    Players,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown field '{0}'")]
pub struct ParseFieldError(pub String);

impl PlanField {
    pub const ALL: [PlanField; 9] = [
        PlanField::TeamName,
        PlanField::LogoUrl,
        PlanField::IceCostPerHour,
        PlanField::Hours,
        PlanField::FeePercent,
        PlanField::FeeFixed,
        PlanField::CoachCost,
        PlanField::JerseyCostPerPlayer,
        PlanField::Players,
    ];

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::TeamName | Self::LogoUrl => FieldKind::Text,
            Self::Players => FieldKind::Count,
            _ => FieldKind::Amount,
        }
    }

    pub fn state_name(&self) -> &'static str {
        match self {
            Self::TeamName => "teamName",
            Self::LogoUrl => "logoUrl",
            Self::IceCostPerHour => "iceCostPerHour",
            Self::Hours => "hours",
            Self::FeePercent => "feePercent",
            Self::FeeFixed => "feeFixed",
            Self::CoachCost => "coachCost",
            Self::JerseyCostPerPlayer => "jerseyCostPerPlayer",
            Self::Players => "players",
        }
    }

    fn snake_name(&self) -> &'static str {
        match self {
            Self::TeamName => "team_name",
            Self::LogoUrl => "logo_url",
            Self::IceCostPerHour => "ice_cost_per_hour",
            Self::Hours => "hours",
            Self::FeePercent => "fee_percent",
            Self::FeeFixed => "fee_fixed",
            Self::CoachCost => "coach_cost",
            Self::JerseyCostPerPlayer => "jersey_cost_per_player",
            Self::Players => "players",
        }
    }

    /// Short key used in the shareable link's query string.
    pub fn query_key(&self) -> &'static str {
        match self {
            Self::TeamName => "team",
            Self::LogoUrl => "logo",
            Self::IceCostPerHour => "ice",
            Self::Hours => "hrs",
            Self::FeePercent => "pct",
            Self::FeeFixed => "fix",
            Self::CoachCost => "coach",
            Self::JerseyCostPerPlayer => "jersey",
            Self::Players => "players",
        }
    }

    /// Name of the upward change event emitted by the views.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::TeamName => "team-changed",
            Self::LogoUrl => "logo-changed",
            Self::IceCostPerHour => "ice-changed",
            Self::Hours => "hours-changed",
            Self::FeePercent => "fee-pct-changed",
            Self::FeeFixed => "fee-fixed-changed",
            Self::CoachCost => "coach-changed",
            Self::JerseyCostPerPlayer => "jersey-changed",
            Self::Players => "players-changed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|field| {
            s.eq_ignore_ascii_case(field.state_name())
                || s.eq_ignore_ascii_case(field.snake_name())
                || s.eq_ignore_ascii_case(field.query_key())
                || s.eq_ignore_ascii_case(field.event_name())
        })
    }
}

impl FromStr for PlanField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseFieldError(s.to_string()))
    }
}

impl fmt::Display for PlanField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.state_name())
    }
}
