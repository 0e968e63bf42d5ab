//! File-backed key-value store
//!
//! Each key lives in `<root>/<key>.json`. Writes land in a temporary file in the
//! same directory and are renamed over the target, so readers see either the
//! old collection or the new one.

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Directory of one JSON file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Store rooted at `root`; the directory is created on first write
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File that holds `key`
    ///
    /// # Errors
    /// [`StoreError::InvalidKey`] unless the key is non-empty ASCII
    /// alphanumerics, `-` or `_`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_owned()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io_error(path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.root).map_err(|e| StoreError::io_error(&self.root, e))?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.root)
            .map_err(|e| StoreError::io_error(&self.root, e))?;
        tmp.write_all(value.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| StoreError::io_error(tmp.path(), e))?;
        tmp.persist(&path)
            .map_err(|e| StoreError::io_error(&path, e.error))?;

        tracing::trace!(path = %path.display(), bytes = value.len(), "wrote key");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_path_like_keys() {
        let store = FileStore::new("/tmp/covenant-unused");
        assert!(matches!(
            store.path_for("../etc/passwd"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(store.path_for("").is_err());
        assert!(store.path_for("contracts").is_ok());
    }

    #[test]
    fn key_maps_to_json_file() {
        let store = FileStore::new("/data");
        assert_eq!(
            store.path_for("blueprints").unwrap(),
            PathBuf::from("/data/blueprints.json")
        );
    }
}
