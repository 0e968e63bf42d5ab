//! Contract instances

use crate::blueprint::Blueprint;
use crate::field::{Field, FieldError, FieldValue};
use crate::ids::{BlueprintId, ContractId, FieldId};
use crate::status::Status;
use serde::{Deserialize, Serialize};

/// Result of a field edit that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Value replaced
    Applied,
    /// Contract is locked; nothing changed
    Locked,
    /// No field with that id; nothing changed
    FieldNotFound,
}

impl EditOutcome {
    /// The record changed
    #[inline]
    #[must_use]
    pub fn is_applied(self) -> bool {
        self == EditOutcome::Applied
    }
}

/// Instance of a blueprint with its own values and status
///
/// # Invariants
/// - `fields` matches the blueprint's fields at instantiation time in length,
///   order, ids, kinds and labels
/// - once `status` is `Locked` no field changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    id: ContractId,
    name: String,
    blueprint_id: BlueprintId,
    fields: Vec<Field>,
    status: Status,
}

impl Contract {
    /// Materialize a new contract from `blueprint`
    ///
    /// Each field is a copy of the definition holding the empty value for its
    /// kind. Status starts at `Created`.
    #[must_use]
    pub fn instantiate(name: impl Into<String>, blueprint: &Blueprint) -> Self {
        Self {
            id: ContractId::generate(),
            name: name.into(),
            blueprint_id: blueprint.id().clone(),
            fields: blueprint.fields().iter().map(Field::instantiate).collect(),
            status: Status::Created,
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> &ContractId {
        &self.id
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Originating blueprint; may no longer resolve
    #[inline]
    #[must_use]
    pub fn blueprint_id(&self) -> &BlueprintId {
        &self.blueprint_id
    }

    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id() == id)
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.status.is_locked()
    }

    /// Replace one field's value
    ///
    /// Locked contracts and unknown field ids are silent no-ops, reported
    /// through the returned [`EditOutcome`].
    ///
    /// # Errors
    /// [`FieldError::KindMismatch`] if `value` does not fit the field.
    pub fn set_field_value(
        &mut self,
        field_id: &FieldId,
        value: FieldValue,
    ) -> Result<EditOutcome, FieldError> {
        if self.is_locked() {
            return Ok(EditOutcome::Locked);
        }
        match self.fields.iter_mut().find(|f| f.id() == field_id) {
            Some(field) => {
                field.set_value(value)?;
                Ok(EditOutcome::Applied)
            }
            None => Ok(EditOutcome::FieldNotFound),
        }
    }

    /// Apply the lifecycle policy and return the new status
    pub fn advance(&mut self) -> Status {
        self.status = self.status.advance();
        self.status
    }
}
