//! String-keyed blob stores
//!
//! [`KeyValueStore`] is the seam between the repository and whatever holds the
//! bytes. Every backend offers synchronous get/set of whole string values.

use crate::error::StoreError;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Synchronous string key-value storage
///
/// `set` replaces the whole value. A `get` after a successful `set` observes
/// the new value.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    /// Backend failures only; a missing key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value stored under `key`
    ///
    /// # Errors
    /// Backend failures.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Process-local store, the in-memory fake used by tests and `memory` mode
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys held
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.inner.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.write().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_none() {
        let store = MemoryStore::new();
        assert!(store.get("blueprints").unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn set_overwrites() {
        let store = MemoryStore::new();
        store.set("contracts", "[1]").unwrap();
        store.set("contracts", "[2]").unwrap();
        assert_eq!(store.get("contracts").unwrap().as_deref(), Some("[2]"));
        assert_eq!(store.len(), 1);
    }
}
