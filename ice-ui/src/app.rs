//! Wiring between config, storage, the plan store and the views.

use anyhow::Context;
use ice_core::storage::{MemoryStorage, MemoryStorageFactory};
use ice_core::{
    AddressBar, LocalStorage, ParseFieldError, PlanEvent, PlanPersistence, PlanStore,
    StorageConfig, StorageError, StorageRegistry,
};
use ice_storage_file::FileStorageFactory;
use tracing::{debug, warn};

use crate::clipboard::{Clipboard, copy_best_effort};
use crate::render::render_text;
use crate::views::{PageView, current_view};

/// Build a registry with every backend this binary knows about.
pub fn build_registry() -> StorageRegistry {
    let mut registry = StorageRegistry::new();
    registry.register(Box::new(MemoryStorageFactory));
    registry.register(Box::new(FileStorageFactory));
    registry
}

/// Opens the configured storage.
///
/// An unknown backend is a configuration mistake and is returned. Any other
/// failure (an unwritable directory, say) leaves the planner running on
/// session-only memory storage.
pub fn open_storage(
    registry: &StorageRegistry,
    config: &StorageConfig,
) -> anyhow::Result<Box<dyn LocalStorage>> {
    match registry.create(config) {
        Ok(storage) => {
            debug!(backend = %config.backend, location = %config.location, "storage opened");
            Ok(storage)
        }
        Err(e @ StorageError::Configuration(_)) => Err(e).context("cannot select storage backend"),
        Err(error) => {
            warn!(%error, backend = %config.backend, "storage unavailable; plan will not be saved");
            Ok(Box::new(MemoryStorage::new()))
        }
    }
}

/// One planner session: the store, its clipboard, and the current page.
pub struct Planner {
    store: PlanStore,
    clipboard: Box<dyn Clipboard>,
}

impl Planner {
    /// Opens storage, loads the plan for `link` and returns a ready session.
    pub fn open(
        storage: &StorageConfig,
        link: &str,
        clipboard: Box<dyn Clipboard>,
    ) -> anyhow::Result<Self> {
        let address =
            AddressBar::parse(link).with_context(|| format!("invalid planner link '{link}'"))?;
        let storage = open_storage(&build_registry(), storage)?;
        let mut store = PlanStore::new(PlanPersistence::new(storage), address);
        store.bootstrap();
        Ok(Self::from_store(store, clipboard))
    }

    pub fn from_store(
        store: PlanStore,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        Self { store, clipboard }
    }

    pub fn store(&self) -> &PlanStore {
        &self.store
    }

    pub fn view(&self) -> PageView {
        current_view(self.store.state(), self.store.totals())
    }

    pub fn render(&self) -> String {
        render_text(&self.view())
    }

    pub fn link(&self) -> String {
        self.store.shareable_link()
    }

    /// Handles one event from the views.
    pub fn handle(
        &mut self,
        event: PlanEvent,
    ) {
        let copy = event == PlanEvent::CopyLink;
        self.store.dispatch(event);
        if copy {
            self.copy_link();
        }
    }

    /// Puts the shareable link on the clipboard; `false` when that failed.
    pub fn copy_link(&mut self) -> bool {
        let link = self.store.shareable_link();
        copy_best_effort(self.clipboard.as_mut(), &link)
    }

    /// Sets a field (or the page) by any of its names.
    pub fn set(
        &mut self,
        name: &str,
        value: &str,
    ) -> Result<(), ParseFieldError> {
        self.store.set_named(name, value)
    }

    pub fn reset(&mut self) {
        self.store.reset();
    }
}
