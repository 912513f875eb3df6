use ice_core::{LocalStorage, StorageConfig, StorageError, storage::StorageFactory};

use crate::storage::FileStorage;

/// [`StorageFactory`] for [`FileStorage`].
///
/// Register this with a [`ice_core::StorageRegistry`] to make the `"file"`
/// backend available:
///
/// ```rust,no_run
/// use ice_core::StorageRegistry;
/// use ice_storage_file::FileStorageFactory;
///
/// let mut registry = StorageRegistry::new();
/// registry.register(Box::new(FileStorageFactory));
/// ```
pub struct FileStorageFactory;

impl StorageFactory for FileStorageFactory {
    fn backend_name(&self) -> &'static str {
        "file"
    }

    /// Open the directory named by `config.location`, creating it if needed.
    fn create(
        &self,
        config: &StorageConfig,
    ) -> Result<Box<dyn LocalStorage>, StorageError> {
        if config.location.trim().is_empty() {
            return Err(StorageError::Configuration(
                "file backend needs a storage directory".to_string(),
            ));
        }
        Ok(Box::new(FileStorage::open(config.location.trim())?))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn backend_name_is_file() {
        assert_eq!(FileStorageFactory.backend_name(), "file");
    }

    #[test]
    fn empty_location_is_a_configuration_error() {
        let config = StorageConfig {
            backend: "file".to_string(),
            location: " ".to_string(),
        };

        assert!(matches!(
            FileStorageFactory.create(&config),
            Err(StorageError::Configuration(_))
        ));
    }

    #[test]
    fn creates_storage_in_directory() {
        let dir = tempdir().unwrap();
        let config = StorageConfig {
            backend: "file".to_string(),
            location: dir.path().join("store").display().to_string(),
        };

        let result = FileStorageFactory.create(&config);

        assert!(result.is_ok(), "failed to create file storage: {:#?}", result.err());
        assert!(dir.path().join("store").is_dir());
    }
}
