use std::collections::HashMap;

use super::backend::{LocalStorage, StorageError};

/// Which storage a planner session keeps its plan in.
///
/// The `[storage]` table of the config file and the `--backend` /
/// `--storage-dir` flags both end up here.
///
/// | backend  | location                                            |
/// |----------|-----------------------------------------------------|
/// | `memory` | unused; the plan lives only as long as the process  |
/// | `file`   | directory holding one `.item` file per storage key  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// `"memory"` or `"file"`.
    pub backend: String,
    /// Directory for the `file` backend. Empty for `memory`.
    pub location: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            location: String::new(),
        }
    }
}

/// Opens a [`LocalStorage`] for one backend.
///
/// `ice-core` ships the memory backend and `ice-storage-file` the file
/// backend; the binary registers both.
pub trait StorageFactory {
    /// Name matched against [`StorageConfig::backend`].
    fn backend_name(&self) -> &'static str;

    fn create(
        &self,
        config: &StorageConfig,
    ) -> Result<Box<dyn LocalStorage>, StorageError>;
}

/// Storage factories by backend name.
pub struct StorageRegistry {
    factories: HashMap<&'static str, Box<dyn StorageFactory>>,
}

impl StorageRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Adds `factory`, replacing any earlier one with the same name.
    pub fn register(
        &mut self,
        factory: Box<dyn StorageFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Backend names in alphabetical order, as shown in error messages.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Opens the storage `config` asks for.
    ///
    /// A backend name nobody registered is a
    /// [`StorageError::Configuration`] that lists the known names, so a
    /// typo in `--backend` fails at startup instead of silently
    /// dropping to memory. Errors from the factory pass through.
    pub fn create(
        &self,
        config: &StorageConfig,
    ) -> Result<Box<dyn LocalStorage>, StorageError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                StorageError::Configuration(format!(
                    "unknown backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        factory.create(config)
    }
}

impl Default for StorageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
