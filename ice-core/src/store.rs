//! The plan store: sole owner and sole writer of a [`PlanState`].
//!
//! Every change goes through [`PlanStore::dispatch`] (or the narrower
//! [`set_field`](PlanStore::set_field) / [`set_page`](PlanStore::set_page) /
//! [`navigate`](PlanStore::navigate)), and each one runs to completion:
//! the field is updated, the totals are recomputed, then storage and the
//! address bar are rewritten. Views only ever see `&PlanState`.

use tracing::{debug, info};

use crate::calculations::recalculate;
use crate::models::{DerivedTotals, FieldKind, Page, ParseFieldError, PlanEvent, PlanField, PlanState};
use crate::parse::{amount_or_zero, clamp_players};
use crate::persistence::PlanPersistence;
use crate::query::{self, AddressBar, PAGE_KEY};

/// Where [`PlanStore::bootstrap`] found the initial values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Neither the link nor storage had anything; hard-coded defaults.
    Defaults,
    /// The address bar carried query parameters.
    Query,
    /// The link was bare and a stored plan was found.
    Storage,
}

pub struct PlanStore {
    state: PlanState,
    totals: DerivedTotals,
    persistence: PlanPersistence,
    address: AddressBar,
    load_source: Option<LoadSource>,
}

impl PlanStore {
    /// Creates a store holding the default plan, with totals already computed.
    pub fn new(
        persistence: PlanPersistence,
        address: AddressBar,
    ) -> Self {
        let state = PlanState::default();
        let totals = recalculate(&state);
        Self {
            state,
            totals,
            persistence,
            address,
            load_source: None,
        }
    }

    /// Loads the initial plan. Runs once; later calls return the first result.
    ///
    /// 1. If the address bar has any query parameter, the link's fields are
    ///    applied over the defaults and storage is not consulted.
    /// 2. Otherwise a stored plan, if any, is applied over the defaults.
    /// 3. Totals are recomputed.
    ///
    /// Loading writes nothing back; the first edit does.
    pub fn bootstrap(&mut self) -> LoadSource {
        if let Some(source) = self.load_source {
            return source;
        }

        let source = if let Some(overrides) = query::read_from_query(self.address.url()) {
            overrides.apply_to(&mut self.state);
            LoadSource::Query
        } else if let Some(stored) = self.persistence.load() {
            stored.apply_to(&mut self.state);
            LoadSource::Storage
        } else {
            LoadSource::Defaults
        };

        self.recalculate();
        self.load_source = Some(source);
        info!(?source, page = %self.state.current_page, "plan loaded");
        source
    }

    pub fn load_source(&self) -> Option<LoadSource> {
        self.load_source
    }

    pub fn state(&self) -> &PlanState {
        &self.state
    }

    pub fn totals(&self) -> &DerivedTotals {
        &self.totals
    }

    pub fn address(&self) -> &AddressBar {
        &self.address
    }

    /// The current address, which fully encodes the plan once any field
    /// has been written.
    pub fn shareable_link(&self) -> String {
        self.address.href().to_string()
    }

    /// Single entry point for events coming up from the views.
    pub fn dispatch(
        &mut self,
        event: PlanEvent,
    ) {
        match event {
            PlanEvent::FieldChanged { field, raw } => self.set_field(field, &raw),
            PlanEvent::Navigate(page) => self.navigate(page),
            PlanEvent::CopyLink => debug!(link = self.address.href(), "copy link requested"),
        }
    }

    /// Writes one field from its raw text.
    ///
    /// Numbers that fail to parse become zero; the player count is also
    /// truncated and kept at one or more; text is stored as-is. Storage and
    /// the address bar are rewritten afterwards.
    pub fn set_field(
        &mut self,
        field: PlanField,
        raw: &str,
    ) {
        match field.kind() {
            FieldKind::Text => {
                let value = raw.to_string();
                match field {
                    PlanField::LogoUrl => self.state.logo_url = value,
                    _ => self.state.team_name = value,
                }
            }
            FieldKind::Count => self.state.players = clamp_players(amount_or_zero(raw)),
            FieldKind::Amount => {
                if let Some(slot) = self.state.amount_mut(field) {
                    *slot = amount_or_zero(raw);
                }
            }
        }
        debug!(%field, raw, "field changed");

        self.recalculate();
        self.persistence.save(&self.state);
        self.write_address();
    }

    /// Writes a field addressed by any of its names, including the page
    /// (`page` / `currentPage`).
    pub fn set_named(
        &mut self,
        name: &str,
        raw: &str,
    ) -> Result<(), ParseFieldError> {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case(PAGE_KEY) || trimmed.eq_ignore_ascii_case("currentPage") {
            self.set_page(Page::parse_or_default(Some(raw.trim())));
            return Ok(());
        }
        let field: PlanField = trimmed.parse()?;
        self.set_field(field, raw);
        Ok(())
    }

    /// Changes the current page. Only the address bar is rewritten; the page
    /// is not part of the stored plan.
    pub fn set_page(
        &mut self,
        page: Page,
    ) {
        self.state.current_page = page;
        debug!(%page, "page set");
        self.write_address();
    }

    /// Navigation from the page header: the address bar's `page` parameter
    /// is replaced and the resulting notice re-reads the page from it.
    pub fn navigate(
        &mut self,
        page: Page,
    ) {
        self.address.navigate_to(page);
        if self.address.take_page_changed() {
            self.sync_page_from_address();
        }
    }

    /// Re-reads only the `page` parameter; cost fields in the address bar
    /// are ignored. Returns `true` when the page changed.
    pub fn sync_page_from_address(&mut self) -> bool {
        let page = Page::parse_or_default(self.address.query_param(PAGE_KEY).as_deref());
        if page == self.state.current_page {
            return false;
        }
        debug!(from = %self.state.current_page, to = %page, "page changed");
        self.state.current_page = page;
        true
    }

    /// Forgets the stored plan and returns to the defaults.
    pub fn reset(&mut self) {
        self.persistence.clear();
        self.state = PlanState::default();
        self.recalculate();
        self.write_address();
        info!("plan reset to defaults");
    }

    fn recalculate(&mut self) {
        self.totals = recalculate(&self.state);
    }

    fn write_address(&mut self) {
        query::write_to_query(&self.state, &mut self.address);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> PlanStore {
        let mut store = PlanStore::new(
            PlanPersistence::new(Box::new(MemoryStorage::new())),
            AddressBar::parse("https://planner.example/").unwrap(),
        );
        store.bootstrap();
        store
    }

    #[test]
    fn new_store_has_totals_before_bootstrap() {
        let store = PlanStore::new(
            PlanPersistence::new(Box::new(MemoryStorage::new())),
            AddressBar::parse("https://planner.example/").unwrap(),
        );

        assert_eq!(store.load_source(), None);
        assert_eq!(store.totals().total_with_fees, dec!(18450.75));
    }

    #[test]
    fn set_field_recalculates_and_rewrites_the_link() {
        let mut store = store();

        store.set_field(PlanField::Players, "15");

        assert_eq!(store.state().players, 15);
        assert_eq!(store.totals().per_player, dec!(1230.05));
        assert_eq!(store.address().query_param("players").as_deref(), Some("15"));
    }

    #[test]
    fn unparseable_amount_becomes_zero() {
        let mut store = store();

        store.set_field(PlanField::CoachCost, "a lot");

        assert_eq!(store.state().coach_cost, Decimal::ZERO);
        assert_eq!(store.totals().base_total, dec!(15088));
    }

    #[test]
    fn players_are_clamped_on_write() {
        let mut store = store();

        store.set_field(PlanField::Players, "0");
        assert_eq!(store.state().players, 1);

        store.set_field(PlanField::Players, "-7");
        assert_eq!(store.state().players, 1);

        store.set_field(PlanField::Players, "NaN");
        assert_eq!(store.state().players, 1);
    }

    #[test]
    fn text_fields_are_stored_verbatim() {
        let mut store = store();

        store.set_field(PlanField::TeamName, "  Lions  ");
        store.set_field(PlanField::LogoUrl, "https://img.example/l.png");

        assert_eq!(store.state().team_name, "  Lions  ");
        assert_eq!(store.state().logo_url, "https://img.example/l.png");
        assert_eq!(
            store.address().query_param("logo").as_deref(),
            Some("https://img.example/l.png")
        );
    }

    #[test]
    fn dispatch_routes_events() {
        let mut store = store();

        store.dispatch(PlanEvent::field_changed(PlanField::Hours, "10"));
        store.dispatch(PlanEvent::Navigate(Page::Summary));

        assert_eq!(store.state().hours, dec!(10));
        assert_eq!(store.state().current_page, Page::Summary);
    }

    #[test]
    fn copy_link_changes_nothing() {
        let mut store = store();
        let before = store.address().revision();

        store.dispatch(PlanEvent::CopyLink);

        assert_eq!(store.state(), &PlanState::default());
        assert_eq!(store.address().revision(), before);
    }

    #[test]
    fn navigate_updates_page_and_keeps_costs_in_link() {
        let mut store = store();
        store.set_field(PlanField::IceCostPerHour, "250");

        store.navigate(Page::Settings);

        assert_eq!(store.state().current_page, Page::Settings);
        assert_eq!(store.address().query_param("page").as_deref(), Some("settings"));
        assert_eq!(store.address().query_param("ice").as_deref(), Some("250"));
    }

    #[test]
    fn set_named_handles_page_and_fields() {
        let mut store = store();

        store.set_named("page", "summary").unwrap();
        store.set_named("jersey-changed", "70").unwrap();

        assert_eq!(store.state().current_page, Page::Summary);
        assert_eq!(store.state().jersey_cost_per_player, dec!(70));
        assert_eq!(
            store.set_named("goalies", "2"),
            Err(ParseFieldError("goalies".to_string()))
        );
    }

    #[test]
    fn bootstrap_runs_once() {
        let mut store = store();
        store.set_field(PlanField::TeamName, "Lions");

        assert_eq!(store.bootstrap(), LoadSource::Defaults);
        assert_eq!(store.state().team_name, "Lions");
    }

    #[test]
    fn reset_returns_to_defaults() {
        let mut store = store();
        store.set_field(PlanField::TeamName, "Lions");

        store.reset();

        assert_eq!(store.state(), &PlanState::default());
    }
}
