//! End-to-end checks of how a session picks its starting plan: link first,
//! storage second, defaults last.
//!
//! Each test plays one or two "page lives" against a storage that outlives
//! them.

use std::cell::RefCell;
use std::rc::Rc;

use ice_core::storage::MemoryStorage;
use ice_core::{
    AddressBar, LoadSource, LocalStorage, Page, PlanEvent, PlanField, PlanPersistence, PlanState,
    PlanStore, STORAGE_KEY, StorageError,
};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

/// Storage handle shared between sessions of one test.
#[derive(Clone, Default)]
struct SharedStorage(Rc<RefCell<MemoryStorage>>);

impl LocalStorage for SharedStorage {
    fn get_item(
        &self,
        key: &str,
    ) -> Result<Option<String>, StorageError> {
        self.0.borrow().get_item(key)
    }

    fn set_item(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), StorageError> {
        self.0.borrow_mut().set_item(key, value)
    }

    fn remove_item(
        &mut self,
        key: &str,
    ) -> Result<(), StorageError> {
        self.0.borrow_mut().remove_item(key)
    }
}

const BASE: &str = "https://planner.example/ice";

fn open_session(
    storage: &SharedStorage,
    link: &str,
) -> PlanStore {
    let mut store = PlanStore::new(
        PlanPersistence::new(Box::new(storage.clone())),
        AddressBar::parse(link).unwrap(),
    );
    store.bootstrap();
    store
}

#[test]
fn first_visit_uses_defaults() {
    let storage = SharedStorage::default();

    let store = open_session(&storage, BASE);

    assert_eq!(store.load_source(), Some(LoadSource::Defaults));
    assert_eq!(store.state(), &PlanState::default());
    assert_eq!(store.totals().base_total, dec!(18088.00));
    assert_eq!(store.totals().total_with_fees, dec!(18450.75));
    assert_eq!(store.totals().per_player, dec!(18450.75));
}

#[test]
fn bare_link_restores_the_stored_team() {
    let storage = SharedStorage::default();
    {
        let mut first = open_session(&storage, BASE);
        first.set_field(PlanField::TeamName, "Lions");
    }

    let second = open_session(&storage, BASE);

    assert_eq!(second.load_source(), Some(LoadSource::Storage));
    assert_eq!(second.state().team_name, "Lions");
}

#[test]
fn link_parameters_win_and_storage_is_ignored() {
    let storage = SharedStorage::default();
    {
        let mut first = open_session(&storage, BASE);
        first.set_field(PlanField::TeamName, "Lions");
        first.set_field(PlanField::CoachCost, "1000");
    }

    let second = open_session(&storage, &format!("{BASE}?ice=100&hrs=10"));

    let expected = PlanState {
        ice_cost_per_hour: dec!(100),
        hours: dec!(10),
        ..PlanState::default()
    };
    assert_eq!(second.load_source(), Some(LoadSource::Query));
    assert_eq!(second.state(), &expected);
    assert_eq!(second.totals().base_total, dec!(4088));
}

#[test]
fn fifteen_players_from_a_shared_link() {
    let storage = SharedStorage::default();

    let store = open_session(&storage, &format!("{BASE}?players=15&page=summary"));

    assert_eq!(store.state().current_page, Page::Summary);
    assert_eq!(store.totals().base_total, dec!(18088.00));
    assert_eq!(store.totals().total_with_fees, dec!(18450.75));
    assert_eq!(store.totals().per_player, dec!(1230.05));
}

#[test]
fn loading_writes_nothing_back() {
    let storage = SharedStorage::default();

    let store = open_session(&storage, &format!("{BASE}?team=Visitors"));

    assert_eq!(store.address().revision(), 0);
    assert_eq!(storage.get_item(STORAGE_KEY).unwrap(), None);
}

#[test]
fn every_edit_is_saved_and_linked() {
    let storage = SharedStorage::default();
    let mut store = open_session(&storage, BASE);

    store.dispatch(PlanEvent::field_changed(PlanField::Players, "15"));
    store.dispatch(PlanEvent::field_changed(PlanField::FeeFixed, "2"));

    let blob: serde_json::Value =
        serde_json::from_str(&storage.get_item(STORAGE_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(blob["players"].as_f64(), Some(15.0));
    assert_eq!(blob["feeFixed"].as_f64(), Some(2.0));
    assert_eq!(store.address().revision(), 2);
    assert_eq!(store.address().query_param("fix").as_deref(), Some("2"));
}

#[test]
fn navigation_does_not_touch_storage() {
    let storage = SharedStorage::default();
    let mut store = open_session(&storage, BASE);

    store.dispatch(PlanEvent::Navigate(Page::Settings));

    assert_eq!(store.state().current_page, Page::Settings);
    assert_eq!(storage.get_item(STORAGE_KEY).unwrap(), None);
}

#[test]
fn shared_link_reproduces_the_plan_in_a_new_session() {
    let storage = SharedStorage::default();
    let mut sender = open_session(&storage, BASE);
    sender.set_field(PlanField::TeamName, "Lions");
    sender.set_field(PlanField::Players, "12");
    sender.set_field(PlanField::FeePercent, "0.03");
    sender.navigate(Page::Summary);

    let receiver = open_session(&SharedStorage::default(), &sender.shareable_link());

    assert_eq!(receiver.state(), sender.state());
    assert_eq!(receiver.totals(), sender.totals());
}

#[test]
fn storage_outage_degrades_to_memory_only() {
    let mut store = PlanStore::new(
        PlanPersistence::new(Box::new(MemoryStorage::unavailable())),
        AddressBar::parse(BASE).unwrap(),
    );

    assert_eq!(store.bootstrap(), LoadSource::Defaults);
    store.set_field(PlanField::Hours, "60");

    assert_eq!(store.state().hours, dec!(60));
    assert_eq!(store.address().query_param("hrs").as_deref(), Some("60"));
}
