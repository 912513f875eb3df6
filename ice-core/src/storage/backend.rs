use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Key/value string storage local to one device.
///
/// Callers that treat persistence as best-effort (see
/// [`PlanPersistence`](crate::persistence::PlanPersistence)) swallow these
/// errors; backends should still report them faithfully.
pub trait LocalStorage {
    fn get_item(
        &self,
        key: &str,
    ) -> Result<Option<String>, StorageError>;

    fn set_item(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), StorageError>;

    fn remove_item(
        &mut self,
        key: &str,
    ) -> Result<(), StorageError>;
}
