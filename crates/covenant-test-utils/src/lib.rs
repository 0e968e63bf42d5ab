//! Testing utilities for the Covenant workspace
//!
//! Shared fixtures: in-memory repositories and pre-seeded records.

#![allow(missing_docs)]

use covenant_model::{Blueprint, Contract, FieldKind, Status};
use covenant_store::{KeyValueStore, MemoryStore, Repository};
use std::sync::Arc;

/// Repository over a fresh in-memory store
pub fn memory_repository() -> Repository {
    Repository::new(MemoryStore::new())
}

/// Repository plus a handle on its raw store, for byte-level assertions
pub fn memory_repository_with_store() -> (Repository, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let shared: Arc<dyn KeyValueStore> = store.clone();
    (Repository::from_shared(shared), store)
}

/// Store a blueprint directly, bypassing the authoring flow
pub fn seed_blueprint(repo: &Repository, name: &str, kinds: &[FieldKind]) -> Blueprint {
    let blueprint = Blueprint::from_kinds(name, kinds);
    let mut all = repo.blueprints();
    all.push(blueprint.clone());
    repo.save_blueprints(&all).unwrap();
    blueprint
}

/// The one-text-field "NDA" blueprint used across scenarios
pub fn nda_blueprint(repo: &Repository) -> Blueprint {
    seed_blueprint(repo, "NDA", &[FieldKind::Text])
}

/// Store a contract instantiated from `blueprint`
pub fn seed_contract(repo: &Repository, name: &str, blueprint: &Blueprint) -> Contract {
    let contract = Contract::instantiate(name, blueprint);
    let mut all = repo.contracts();
    all.push(contract.clone());
    repo.save_contracts(&all).unwrap();
    contract
}

/// Contract instance carrying an arbitrary status, including `Revoked`
///
/// No operation produces `Revoked`, so the record is built through its wire form.
pub fn contract_with_status(name: &str, blueprint: &Blueprint, status: Status) -> Contract {
    let mut value = serde_json::to_value(Contract::instantiate(name, blueprint)).unwrap();
    value["status"] = serde_json::to_value(status).unwrap();
    serde_json::from_value(value).unwrap()
}

/// Raw stored text of a collection key
pub fn raw(store: &MemoryStore, key: &str) -> Option<String> {
    store.get(key).unwrap()
}
