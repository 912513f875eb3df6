//! The planner's TOML config file.
//!
//! ```toml
//! [storage]
//! backend = "file"                       # or "memory"
//! location = "/home/me/.local/share/ice-planner"
//!
//! [link]
//! base_url = "https://ice-planner.app/"
//!
//! [logging]
//! level = "info"
//! file = "/tmp/ice-planner.log"
//! console = true
//! ```
//!
//! Every key is optional. A missing file at the default location means
//! "all defaults"; a missing file named explicitly is an error.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use ice_core::StorageConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::logging::{DEFAULT_FILTER, LogSettings};

/// Directory name used under the platform config and data directories.
pub const APP_DIR: &str = "ice-planner";

/// Base of the shareable link when the config does not name one.
pub const DEFAULT_BASE_URL: &str = "https://ice-planner.app/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub storage: StorageSection,
    pub link: LinkSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageSection {
    pub backend: String,
    /// Backend-specific; for `file`, the directory. Empty picks the
    /// platform data directory.
    pub location: String,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            backend: "file".to_string(),
            location: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkSection {
    pub base_url: String,
}

impl Default for LinkSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    pub level: String,
    pub file: Option<PathBuf>,
    pub console: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: DEFAULT_FILTER.to_string(),
            file: None,
            console: true,
        }
    }
}

impl LoggingSection {
    pub fn settings(&self) -> LogSettings<'_> {
        LogSettings {
            level: &self.level,
            file: self.file.as_deref(),
            console: self.console,
        }
    }
}

/// `<config dir>/ice-planner/config.toml`, when the platform has a config
/// directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// `<data dir>/ice-planner`, falling back to `./ice-planner`.
pub fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(APP_DIR))
}

impl AppConfig {
    pub fn parse(
        text: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `explicit` if given, else the default location.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => match default_config_path() {
                Some(path) => (path, false),
                None => {
                    debug!("no config directory on this platform; using defaults");
                    return Ok(Self::default());
                }
            },
        };

        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!(path = %path.display(), "config loaded");
                Self::parse(&text, &path)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
                debug!(path = %path.display(), "no config file; using defaults");
                Ok(Self::default())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ConfigError::NotFound { path }),
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    /// Storage selection with the platform data directory filled in for
    /// an empty `file` location.
    pub fn storage_config(&self) -> StorageConfig {
        let location = if self.storage.location.trim().is_empty() && self.storage.backend == "file" {
            default_storage_dir().display().to_string()
        } else {
            self.storage.location.clone()
        };
        StorageConfig {
            backend: self.storage.backend.clone(),
            location,
        }
    }
}
