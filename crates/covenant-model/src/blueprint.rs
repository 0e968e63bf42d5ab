//! Reusable blueprint templates

use crate::field::{Field, FieldKind};
use crate::ids::BlueprintId;
use serde::{Deserialize, Serialize};

/// Named, ordered set of field definitions
///
/// Blueprints are immutable once stored. Their fields never carry values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    id: BlueprintId,
    name: String,
    fields: Vec<Field>,
}

impl Blueprint {
    /// Assemble a blueprint with a fresh id
    ///
    /// Name validation is the caller's job; see the authoring flow.
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            id: BlueprintId::generate(),
            name: name.into(),
            fields,
        }
    }

    /// Blueprint with one fresh definition per kind, in order
    #[must_use]
    pub fn from_kinds(name: impl Into<String>, kinds: &[FieldKind]) -> Self {
        Self::new(name, kinds.iter().copied().map(Field::definition).collect())
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> &BlueprintId {
        &self.id
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}
