use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use ice_core::{LocalStorage, StorageError};
use tempfile::NamedTempFile;
use tracing::debug;

/// Extension of the file holding one item.
const ITEM_EXTENSION: &str = "item";

/// One file per key under a directory.
///
/// Writes go to a temporary file in the same directory which is then
/// renamed over the item, so a crash never leaves half a value behind.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Opens storage rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| map_io(&root, e))?;
        debug!(root = %root.display(), "file storage opened");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file that holds `key`.
    pub fn item_path(
        &self,
        key: &str,
    ) -> PathBuf {
        self.root
            .join(format!("{}.{ITEM_EXTENSION}", sanitize_key(key)))
    }
}

impl LocalStorage for FileStorage {
    fn get_item(
        &self,
        key: &str,
    ) -> Result<Option<String>, StorageError> {
        let path = self.item_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io(&path, e)),
        }
    }

    fn set_item(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), StorageError> {
        let path = self.item_path(key);
        let mut tmp = NamedTempFile::new_in(&self.root).map_err(|e| map_io(&self.root, e))?;
        tmp.write_all(value.as_bytes())
            .map_err(|e| map_io(tmp.path(), e))?;
        tmp.persist(&path).map_err(|e| map_io(&path, e.error))?;
        Ok(())
    }

    fn remove_item(
        &mut self,
        key: &str,
    ) -> Result<(), StorageError> {
        let path = self.item_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(map_io(&path, e)),
        }
    }
}

fn map_io(
    path: &Path,
    error: io::Error,
) -> StorageError {
    let message = format!("{}: {error}", path.display());
    match error.kind() {
        io::ErrorKind::StorageFull => {
            StorageError::QuotaExceeded(message)
        }
        io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
            StorageError::Unavailable(message)
        }
        _ => StorageError::Io(message),
    }
}

/// Keeps ASCII alphanumerics, `-`, `_` and `.`; everything else becomes `_`.
fn sanitize_key(key: &str) -> String {
    let sanitized: String = key
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.') {
                ch
            } else {
                '_'
            }
        })
        .collect();
    if sanitized.is_empty() || sanitized.chars().all(|ch| ch == '.') {
        "item".to_string()
    } else {
        sanitized
    }
}
