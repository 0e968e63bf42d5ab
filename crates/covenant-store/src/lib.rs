//! Covenant Store
//!
//! Persistence adapter for the two record collections.
//!
//! # Architecture
//!
//! ```text
//! view → Repository::load::<R>() → KeyValueStore::get("<collection>") → JSON array
//! view → Repository::save::<R>() → KeyValueStore::set("<collection>") ← JSON array
//! ```
//!
//! Backends: [`MemoryStore`] (process-local, used as the test fake) and
//! [`FileStore`] (one JSON file per collection).
//!
//! # Example
//!
//! ```rust
//! use covenant_model::{Blueprint, FieldKind};
//! use covenant_store::{MemoryStore, Repository};
//!
//! let repo = Repository::new(MemoryStore::new());
//! let nda = Blueprint::from_kinds("NDA", &[FieldKind::Text]);
//! repo.save_blueprints(&[nda.clone()]).unwrap();
//! assert_eq!(repo.blueprints(), vec![nda]);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod file;
pub mod kv;
pub mod repository;

pub use error::StoreError;
pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use repository::{Collection, Record, Repository};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
