//! Contract editing
//!
//! An editor is opened on a fresh snapshot of the contract collection. Each
//! applied edit writes the whole snapshot back.

use crate::error::{CovenantError, Result};
use covenant_model::{Contract, ContractId, EditOutcome, FieldId, FieldValue};
use covenant_store::Repository;

/// Editing view over one contract
#[derive(Debug, Clone)]
pub struct ContractEditor {
    repo: Repository,
    contracts: Vec<Contract>,
    index: usize,
}

impl ContractEditor {
    /// Snapshot the collection and focus `contract_id`; `None` if it does not exist
    #[must_use]
    pub fn open(repo: Repository, contract_id: &ContractId) -> Option<Self> {
        let contracts = repo.contracts();
        let index = contracts.iter().position(|c| c.id() == contract_id)?;
        Some(Self {
            repo,
            contracts,
            index,
        })
    }

    /// Contract being edited, as held in the snapshot
    #[inline]
    #[must_use]
    pub fn contract(&self) -> &Contract {
        &self.contracts[self.index]
    }

    #[inline]
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.contract().is_locked()
    }

    /// Replace one field's value and persist the collection
    ///
    /// Locked contracts and unknown fields are no-ops; nothing is written.
    ///
    /// # Errors
    /// A value of the wrong kind, or a storage write failure. On a failed
    /// write the snapshot keeps its previous value.
    pub fn set_field_value(&mut self, field_id: &FieldId, value: FieldValue) -> Result<EditOutcome> {
        let mut edited = self.contracts[self.index].clone();
        let outcome = edited.set_field_value(field_id, value)?;
        match outcome {
            EditOutcome::Applied => {
                let previous = std::mem::replace(&mut self.contracts[self.index], edited);
                if let Err(e) = self.repo.save_contracts(&self.contracts) {
                    self.contracts[self.index] = previous;
                    return Err(e.into());
                }
                tracing::debug!(contract = %self.contract().id(), field = %field_id, "field updated");
            }
            EditOutcome::Locked => {
                tracing::debug!(contract = %self.contract().id(), "edit ignored, contract locked");
            }
            EditOutcome::FieldNotFound => {
                tracing::debug!(contract = %self.contract().id(), field = %field_id, "edit ignored, no such field");
            }
        }
        Ok(outcome)
    }

    /// Write the snapshot back as it stands
    ///
    /// # Errors
    /// Storage write failure.
    pub fn save(&self) -> Result<()> {
        self.repo.save_contracts(&self.contracts)?;
        tracing::info!(contract = %self.contract().id(), "contract saved");
        Ok(())
    }
}

/// Load, edit and persist in one call
///
/// # Errors
/// [`CovenantError::ContractNotFound`], a value of the wrong kind, or a storage
/// write failure.
pub fn set_field_value(
    repo: &Repository,
    contract_id: &ContractId,
    field_id: &FieldId,
    value: FieldValue,
) -> Result<EditOutcome> {
    let mut editor = ContractEditor::open(repo.clone(), contract_id)
        .ok_or_else(|| CovenantError::ContractNotFound(contract_id.clone()))?;
    editor.set_field_value(field_id, value)
}
