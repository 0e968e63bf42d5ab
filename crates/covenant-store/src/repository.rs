//! Whole-collection repository
//!
//! Every read produces a fresh copy of a collection and every write replaces
//! it. There is no caching, merging or partial write; the last writer wins.

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use covenant_model::{Blueprint, Contract};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Named persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Blueprints,
    Contracts,
}

impl Collection {
    /// Storage key
    #[inline]
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Collection::Blueprints => "blueprints",
            Collection::Contracts => "contracts",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A record type stored as one collection
pub trait Record: Serialize + DeserializeOwned {
    /// Collection the type lives in
    const COLLECTION: Collection;
}

impl Record for Blueprint {
    const COLLECTION: Collection = Collection::Blueprints;
}

impl Record for Contract {
    const COLLECTION: Collection = Collection::Contracts;
}

/// Shared handle to the backing store
///
/// Cheap to clone; every view takes one instead of reaching for a global.
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn KeyValueStore>,
}

impl fmt::Debug for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository").finish_non_exhaustive()
    }
}

impl Repository {
    /// Wrap a backend
    #[inline]
    #[must_use]
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Wrap an already shared backend
    #[inline]
    #[must_use]
    pub fn from_shared(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load a whole collection
    ///
    /// Nothing stored, an unparseable value, and a failing backend all read as
    /// an empty collection. The failure is logged, never returned.
    #[must_use]
    pub fn load<R: Record>(&self) -> Vec<R> {
        let key = R::COLLECTION.key();
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(collection = key, "nothing stored");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(collection = key, error = %e, "read failed, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<R>>(&raw) {
            Ok(records) => {
                tracing::debug!(collection = key, count = records.len(), "loaded");
                records
            }
            Err(e) => {
                tracing::warn!(collection = key, error = %e, "corrupt collection, treating as empty");
                Vec::new()
            }
        }
    }

    /// Overwrite a whole collection
    ///
    /// # Errors
    /// Encoding or backend failure; the stored value is then unchanged.
    pub fn save<R: Record>(&self, records: &[R]) -> Result<(), StoreError> {
        let key = R::COLLECTION.key();
        let raw = serde_json::to_string(records).map_err(|source| StoreError::Encode {
            collection: key,
            source,
        })?;
        self.store.set(key, &raw)?;
        tracing::debug!(collection = key, count = records.len(), "saved");
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn blueprints(&self) -> Vec<Blueprint> {
        self.load()
    }

    #[inline]
    #[must_use]
    pub fn contracts(&self) -> Vec<Contract> {
        self.load()
    }

    /// # Errors
    /// See [`Repository::save`].
    #[inline]
    pub fn save_blueprints(&self, blueprints: &[Blueprint]) -> Result<(), StoreError> {
        self.save(blueprints)
    }

    /// # Errors
    /// See [`Repository::save`].
    #[inline]
    pub fn save_contracts(&self, contracts: &[Contract]) -> Result<(), StoreError> {
        self.save(contracts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{MemoryStore, MockKeyValueStore};
    use covenant_model::FieldKind;
    use pretty_assertions::assert_eq;

    fn sample() -> (Blueprint, Contract) {
        let bp = Blueprint::from_kinds("NDA", &[FieldKind::Text, FieldKind::Checkbox]);
        let contract = Contract::instantiate("Acme NDA", &bp);
        (bp, contract)
    }

    #[test]
    fn empty_store_loads_empty() {
        let repo = Repository::new(MemoryStore::new());
        assert!(repo.blueprints().is_empty());
        assert!(repo.contracts().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let repo = Repository::new(MemoryStore::new());
        let (bp, contract) = sample();

        repo.save_blueprints(std::slice::from_ref(&bp)).unwrap();
        repo.save_contracts(std::slice::from_ref(&contract)).unwrap();

        assert_eq!(repo.blueprints(), vec![bp]);
        assert_eq!(repo.contracts(), vec![contract]);
    }

    #[test]
    fn corrupt_value_loads_empty() {
        let store = MemoryStore::new();
        store.set("contracts", "{not json").unwrap();
        let repo = Repository::new(store);
        assert!(repo.contracts().is_empty());
    }

    #[test]
    fn unknown_shape_loads_empty() {
        let store = MemoryStore::new();
        store
            .set("blueprints", r#"[{"id":"b","name":"x","fields":[{"id":"f","type":"radio","label":"r"}]}]"#)
            .unwrap();
        let repo = Repository::new(store);
        assert!(repo.blueprints().is_empty());
    }

    #[test]
    fn backend_read_failure_loads_empty() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get()
            .withf(|key| key == "contracts")
            .returning(|_| Err(StoreError::Backend("offline".into())));
        let repo = Repository::new(mock);
        assert!(repo.contracts().is_empty());
    }

    #[test]
    fn save_writes_whole_collection_under_its_key() {
        let (bp, _) = sample();
        let expected = serde_json::to_string(&vec![bp.clone()]).unwrap();

        let mut mock = MockKeyValueStore::new();
        mock.expect_set()
            .withf(move |key, value| key == "blueprints" && value == expected)
            .times(1)
            .returning(|_, _| Ok(()));
        let repo = Repository::new(mock);

        repo.save_blueprints(&[bp]).unwrap();
    }

    #[test]
    fn backend_write_failure_is_returned() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_set()
            .returning(|_, _| Err(StoreError::Backend("quota".into())));
        let repo = Repository::new(mock);
        assert!(repo.save_contracts(&[]).is_err());
    }

    #[test]
    fn clones_share_the_store() {
        let repo = Repository::new(MemoryStore::new());
        let other = repo.clone();
        let (bp, _) = sample();
        repo.save_blueprints(&[bp.clone()]).unwrap();
        assert_eq!(other.blueprints(), vec![bp]);
    }
}
