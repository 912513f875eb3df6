use std::collections::HashMap;

use super::backend::{LocalStorage, StorageError};
use super::factory::{StorageConfig, StorageFactory};

/// In-process storage. Contents live as long as the value does.
///
/// A byte quota and an "unavailable" switch let callers exercise the
/// failure paths of code built on [`LocalStorage`].
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    quota: Option<usize>,
    unavailable: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that refuses writes once keys and values exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota: Some(bytes),
            ..Self::default()
        }
    }

    /// Storage whose every operation fails, as when storage is disabled.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn used_bytes_without(
        &self,
        key: &str,
    ) -> usize {
        self.items
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.unavailable {
            Err(StorageError::Unavailable("memory storage disabled".to_string()))
        } else {
            Ok(())
        }
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(
        &self,
        key: &str,
    ) -> Result<Option<String>, StorageError> {
        self.check_available()?;
        Ok(self.items.get(key).cloned())
    }

    fn set_item(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), StorageError> {
        self.check_available()?;
        if let Some(quota) = self.quota {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded(format!(
                    "{needed} bytes needed, {quota} allowed"
                )));
            }
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(
        &mut self,
        key: &str,
    ) -> Result<(), StorageError> {
        self.check_available()?;
        self.items.remove(key);
        Ok(())
    }
}

/// [`StorageFactory`] for [`MemoryStorage`]; `location` is ignored.
pub struct MemoryStorageFactory;

impl StorageFactory for MemoryStorageFactory {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn create(
        &self,
        _config: &StorageConfig,
    ) -> Result<Box<dyn LocalStorage>, StorageError> {
        Ok(Box::new(MemoryStorage::new()))
    }
}
