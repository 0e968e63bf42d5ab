//! Error types for Covenant Core
//!
//! Covers:
//! - Validation failures at the point of a user action (nothing is persisted)
//! - Field value kind mismatches
//! - Storage write failures
//! - Lookups of contracts that do not exist
//!
//! Locked-contract edits and unresolved blueprint references are not errors:
//! the first is an [`EditOutcome`](covenant_model::EditOutcome), the second a
//! placeholder on the dashboard.

use covenant_model::{BlueprintId, ContractId, FieldError};
use covenant_store::StoreError;

/// Main Covenant error type
#[derive(Debug, thiserror::Error)]
pub enum CovenantError {
    /// Required input missing or invalid
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Value rejected by a field
    #[error("field error: {0}")]
    Field(#[from] FieldError),

    /// Backend write failed
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// No contract with that id
    #[error("contract not found: {0}")]
    ContractNotFound(ContractId),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl CovenantError {
    /// Error is a user input problem
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Notice to show the user, for validation failures
    #[inline]
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Validation(v) => Some(v.notice()),
            _ => None,
        }
    }
}

/// Missing or blank required input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Blueprint name empty after trimming
    #[error("blueprint name is blank")]
    BlankBlueprintName,

    /// Contract name empty after trimming
    #[error("contract name is blank")]
    BlankContractName,

    /// No blueprint chosen for a new contract
    #[error("no blueprint selected")]
    NoBlueprintSelected,

    /// Chosen blueprint does not exist
    #[error("unknown blueprint: {0}")]
    UnknownBlueprint(BlueprintId),
}

impl ValidationError {
    /// User-facing notice
    #[must_use]
    pub fn notice(&self) -> &'static str {
        match self {
            Self::BlankBlueprintName => crate::notices::ENTER_BLUEPRINT_NAME,
            Self::BlankContractName | Self::NoBlueprintSelected => crate::notices::FILL_ALL_FIELDS,
            Self::UnknownBlueprint(_) => crate::notices::BLUEPRINT_GONE,
        }
    }
}

/// Convenience alias
pub type Result<T, E = CovenantError> = std::result::Result<T, E>;
