//! Shareable links: a plan's inputs and current page encoded in the query
//! string of a URL.
//!
//! | key       | field                    |
//! |-----------|--------------------------|
//! | `team`    | team name                |
//! | `logo`    | logo URL (omitted empty) |
//! | `ice`     | ice cost per hour        |
//! | `hrs`     | hours                    |
//! | `pct`     | fee percent (fraction)   |
//! | `fix`     | fixed fee                |
//! | `coach`   | coach cost               |
//! | `jersey`  | jersey cost per player   |
//! | `players` | player count, ≥ 1        |
//! | `page`    | current page             |
//!
//! Keys are written in that order with `application/x-www-form-urlencoded`
//! escaping.

use std::collections::HashMap;

use rust_decimal::Decimal;
use url::Url;

use crate::models::{Page, PlanField, PlanState};
use crate::parse::{clamp_players, parse_amount};

/// Query key of the current page.
pub const PAGE_KEY: &str = "page";

/// The one URL a planner session owns: its address bar.
///
/// Writes replace the URL in place; there is no history to go back to.
/// Each replacement bumps [`revision`](Self::revision) so observers can tell
/// the link changed, and [`navigate_to`](Self::navigate_to) additionally
/// raises a page-changed notice for the store to pick up.
#[derive(Debug, Clone)]
pub struct AddressBar {
    url: Url,
    revision: u64,
    page_changed: bool,
}

impl AddressBar {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            revision: 0,
            page_changed: false,
        }
    }

    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Url::parse(input).map(Self::new)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    /// Number of in-place replacements since this address bar was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// `true` when the query string carries at least one parameter.
    pub fn has_query_params(&self) -> bool {
        self.url.query_pairs().next().is_some()
    }

    /// First value of `key`.
    pub fn query_param(
        &self,
        key: &str,
    ) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// Replaces the whole query string without adding a history entry.
    pub fn replace_query<'a>(
        &mut self,
        pairs: impl IntoIterator<Item = (&'a str, String)>,
    ) {
        {
            let mut query = self.url.query_pairs_mut();
            query.clear();
            for (key, value) in pairs {
                query.append_pair(key, &value);
            }
        }
        self.revision += 1;
    }

    /// Sets the `page` parameter, keeping every other parameter, and raises
    /// a page-changed notice.
    pub fn navigate_to(
        &mut self,
        page: Page,
    ) {
        let mut pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(k, _)| k != PAGE_KEY)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        pairs.push((PAGE_KEY.to_string(), page.as_str().to_string()));

        self.replace_query(pairs.iter().map(|(k, v)| (k.as_str(), v.clone())));
        self.page_changed = true;
    }

    /// Takes the pending page-changed notice, if any.
    pub fn take_page_changed(&mut self) -> bool {
        std::mem::take(&mut self.page_changed)
    }
}

/// Fields found in a query string. `None` means "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOverrides {
    pub team_name: Option<String>,
    pub logo_url: Option<String>,
    pub ice_cost_per_hour: Option<Decimal>,
    pub hours: Option<Decimal>,
    pub fee_percent: Option<Decimal>,
    pub fee_fixed: Option<Decimal>,
    pub coach_cost: Option<Decimal>,
    pub jersey_cost_per_player: Option<Decimal>,
    pub players: Option<u32>,
    pub current_page: Page,
}

impl QueryOverrides {
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
            state.players = v;
        }
        state.current_page = self.current_page;
    }
}

/// Reads plan fields from the query string of `url`.
///
/// Returns `None` when the query has no parameters at all, so the caller can
/// fall back to storage. Otherwise every recognized key overrides its field;
/// absent keys and numbers that do not parse keep the current value, and an
/// absent or unknown `page` selects the calculator.
pub fn read_from_query(url: &Url) -> Option<QueryOverrides> {
    let mut params: HashMap<String, String> = HashMap::new();
    for (key, value) in url.query_pairs() {
        params
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    if params.is_empty() {
        return None;
    }

    let text = |field: PlanField| params.get(field.query_key()).cloned();
    let amount = |field: PlanField| {
        params
            .get(field.query_key())
            .and_then(|raw| parse_amount(raw).ok())
    };

    Some(QueryOverrides {
        team_name: text(PlanField::TeamName),
        logo_url: text(PlanField::LogoUrl),
        ice_cost_per_hour: amount(PlanField::IceCostPerHour),
        hours: amount(PlanField::Hours),
        fee_percent: amount(PlanField::FeePercent),
        fee_fixed: amount(PlanField::FeeFixed),
        coach_cost: amount(PlanField::CoachCost),
        jersey_cost_per_player: amount(PlanField::JerseyCostPerPlayer),
        players: amount(PlanField::Players).map(clamp_players),
        current_page: Page::parse_or_default(params.get(PAGE_KEY).map(String::as_str)),
    })
}

/// Query pairs describing `state`, in link order.
pub fn query_pairs(state: &PlanState) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::with_capacity(10);
    pairs.push((PlanField::TeamName.query_key(), state.team_name.clone()));
    if state.has_logo() {
        pairs.push((PlanField::LogoUrl.query_key(), state.logo_url.clone()));
    }
    for field in [
        PlanField::IceCostPerHour,
        PlanField::Hours,
        PlanField::FeePercent,
        PlanField::FeeFixed,
        PlanField::CoachCost,
        PlanField::JerseyCostPerPlayer,
    ] {
        if let Some(value) = state.amount(field) {
            pairs.push((field.query_key(), format_number(value)));
        }
    }
    pairs.push((PlanField::Players.query_key(), state.players.to_string()));
    pairs.push((PAGE_KEY, state.current_page.as_str().to_string()));
    pairs
}

/// Rewrites the address bar to describe `state`.
pub fn write_to_query(
    state: &PlanState,
    address: &mut AddressBar,
) {
    address.replace_query(query_pairs(state));
}

/// Shortest decimal text for `value` (`300`, `0.02`).
pub fn format_number(value: Decimal) -> String {
    value.normalize().to_string()
}
