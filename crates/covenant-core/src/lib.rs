//! Covenant Core
//!
//! The operations behind each view:
//! - Blueprint authoring (draft, validate, append)
//! - Contract instantiation from a stored blueprint
//! - Contract editing, with locked contracts left untouched
//! - Dashboard listing and lifecycle advancement
//! - Navigation between the four views
//!
//! Every component takes a [`Repository`] handle; each operation reads the
//! collection it needs, computes the new collection and writes it back whole.
//!
//! # Example
//!
//! ```rust
//! use covenant_core::prelude::*;
//! use covenant_store::MemoryStore;
//!
//! let repo = Repository::new(MemoryStore::new());
//! let nda = BlueprintAuthoring::new(repo.clone())
//!     .create_blueprint("NDA", &[FieldKind::Text])
//!     .unwrap();
//! let contract = ContractInstantiation::new(repo.clone())
//!     .create_contract("Acme NDA", nda.id())
//!     .unwrap();
//!
//! let dashboard = Dashboard::new(repo);
//! assert_eq!(dashboard.advance_status(contract.id()).unwrap(), Status::Approved);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod authoring;
pub mod config;
pub mod dashboard;
pub mod editor;
pub mod error;
pub mod instantiation;
pub mod navigation;
pub mod notices;

pub use authoring::{BlueprintAuthoring, BlueprintDraft};
pub use config::{CovenantConfig, DisplayConfig, LoggingConfig, StorageBackend, StorageConfig};
pub use dashboard::{Dashboard, DashboardRow, RowStyle};
pub use editor::{set_field_value, ContractEditor};
pub use error::{CovenantError, Result, ValidationError};
pub use instantiation::{BlueprintOption, ContractInstantiation};
pub use navigation::{Navigator, Page, UnknownPage, View};

pub use covenant_model::{
    advance, Blueprint, BlueprintId, Contract, ContractId, EditOutcome, Field, FieldError,
    FieldId, FieldKind, FieldValue, Status,
};
pub use covenant_store::Repository;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Covenant Core
    pub use crate::{
        BlueprintAuthoring, BlueprintDraft, ContractEditor, ContractInstantiation, CovenantConfig,
        CovenantError, Dashboard, EditOutcome, FieldKind, FieldValue, Navigator, Page, Repository,
        Status, View,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
