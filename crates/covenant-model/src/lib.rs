//! Covenant Model
//!
//! Records shared by every layer of the workspace.
//!
//! # Core Concepts
//!
//! - [`Blueprint`]: reusable template, an ordered list of typed field definitions
//! - [`Contract`]: an instance of a blueprint with its own values and status
//! - [`Field`] / [`FieldValue`]: a typed slot and its kind-checked value
//! - [`Status`]: the linear lifecycle `Created → Approved → Sent → Signed → Locked`
//!
//! # Example
//!
//! ```rust
//! use covenant_model::{Blueprint, Contract, FieldKind, Status};
//!
//! let nda = Blueprint::from_kinds("NDA", &[FieldKind::Text]);
//! let mut contract = Contract::instantiate("Acme NDA", &nda);
//! assert_eq!(contract.status(), Status::Created);
//! assert_eq!(contract.advance(), Status::Approved);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod blueprint;
mod contract;
mod field;
mod ids;
mod status;

pub use blueprint::Blueprint;
pub use contract::{Contract, EditOutcome};
pub use field::{Field, FieldError, FieldKind, FieldValue, DATE_FORMAT};
pub use ids::{BlueprintId, ContractId, FieldId};
pub use status::{advance, Status, UnknownStatus};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
