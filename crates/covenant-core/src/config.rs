//! Covenant configuration
//!
//! Loaded from TOML. Every section is optional; missing keys take defaults.
//!
//! ```toml
//! [storage]
//! backend = "file"
//! data_dir = ".covenant"
//!
//! [display]
//! placeholder = "-"
//!
//! [logging]
//! filter = "warn"
//! json = false
//! ```

use crate::error::{CovenantError, Result};
use covenant_store::{FileStore, MemoryStore, Repository};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CovenantConfig {
    /// Where collections live
    pub storage: StorageConfig,
    /// Display settings
    pub display: DisplayConfig,
    /// Log output settings
    pub logging: LoggingConfig,
}

impl CovenantConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// [`CovenantError::Config`] on malformed TOML or unknown enum values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CovenantError::Config(e.to_string()))
    }

    /// Load from a TOML file; a missing file yields defaults
    ///
    /// # Errors
    /// [`CovenantError::Config`] if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::from_toml_str(&text)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no configuration file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(CovenantError::Config(format!("{}: {e}", path.display()))),
        }
    }

    /// With storage backend
    #[inline]
    #[must_use]
    pub fn with_backend(mut self, backend: StorageBackend) -> Self {
        self.storage.backend = backend;
        self
    }

    /// With data directory (file backend)
    #[inline]
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage.data_dir = dir.into();
        self
    }

    /// With placeholder for unresolved blueprint names
    #[inline]
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.display.placeholder = placeholder.into();
        self
    }

    /// Build the repository the configuration points at
    #[must_use]
    pub fn open_repository(&self) -> Repository {
        match self.storage.backend {
            StorageBackend::Memory => Repository::new(MemoryStore::new()),
            StorageBackend::File => Repository::new(FileStore::new(&self.storage.data_dir)),
        }
    }
}

/// Storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local; gone on exit
    Memory,
    /// One JSON file per collection
    #[default]
    File,
}

/// Storage section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            data_dir: PathBuf::from(".covenant"),
        }
    }
}

/// Display section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Shown when a contract's blueprint no longer resolves
    pub placeholder: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder: "-".to_owned(),
        }
    }
}

/// Logging section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Emit JSON lines
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_owned(),
            json: false,
        }
    }
}
