//! Blueprint authoring
//!
//! A [`BlueprintDraft`] collects field definitions one at a time. Saving the
//! draft validates the name and appends the new blueprint to the stored
//! collection.

use crate::error::{Result, ValidationError};
use covenant_model::{Blueprint, Field, FieldKind};
use covenant_store::Repository;

/// Blueprint under construction
///
/// Fields are append-only; there is no reorder or removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlueprintDraft {
    name: String,
    fields: Vec<Field>,
}

impl BlueprintDraft {
    /// Empty draft
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft with a name already typed
    #[inline]
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a definition of `kind`, labelled with the kind token
    pub fn add_field(&mut self, kind: FieldKind) -> &Field {
        self.fields.push(Field::definition(kind));
        &self.fields[self.fields.len() - 1]
    }

    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Backs the "Fields added" counter
    #[inline]
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// # Errors
    /// [`ValidationError::BlankBlueprintName`] if the trimmed name is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankBlueprintName);
        }
        Ok(())
    }
}

/// Persists new blueprints
#[derive(Debug, Clone)]
pub struct BlueprintAuthoring {
    repo: Repository,
}

impl BlueprintAuthoring {
    #[inline]
    #[must_use]
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Create and store a blueprint with one field per kind, in order
    ///
    /// # Errors
    /// Validation failure (nothing stored) or a storage write failure.
    pub fn create_blueprint(&self, name: &str, kinds: &[FieldKind]) -> Result<Blueprint> {
        let mut draft = BlueprintDraft::named(name);
        for kind in kinds {
            draft.add_field(*kind);
        }
        self.save_draft(draft)
    }

    /// Store a finished draft
    ///
    /// The stored name is the name as typed; only the blank check trims.
    ///
    /// # Errors
    /// Validation failure (nothing stored) or a storage write failure.
    pub fn save_draft(&self, draft: BlueprintDraft) -> Result<Blueprint> {
        draft.validate()?;

        let blueprint = Blueprint::new(draft.name, draft.fields);
        let mut all = self.repo.blueprints();
        all.push(blueprint.clone());
        self.repo.save_blueprints(&all)?;

        tracing::info!(
            id = %blueprint.id(),
            name = blueprint.name(),
            fields = blueprint.fields().len(),
            "blueprint created"
        );
        Ok(blueprint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CovenantError;
    use covenant_store::MemoryStore;

    fn authoring() -> (BlueprintAuthoring, Repository) {
        let repo = Repository::new(MemoryStore::new());
        (BlueprintAuthoring::new(repo.clone()), repo)
    }

    #[test]
    fn draft_counts_and_labels_fields() {
        let mut draft = BlueprintDraft::new();
        let label = draft.add_field(FieldKind::Signature).label().to_owned();
        draft.add_field(FieldKind::Checkbox);
        assert_eq!(label, "signature");
        assert_eq!(draft.field_count(), 2);
    }

    #[test]
    fn whitespace_name_is_rejected_and_nothing_stored() {
        let (authoring, repo) = authoring();
        let err = authoring
            .create_blueprint("   ", &[FieldKind::Text])
            .unwrap_err();
        assert!(matches!(
            err,
            CovenantError::Validation(ValidationError::BlankBlueprintName)
        ));
        assert!(repo.blueprints().is_empty());
    }

    #[test]
    fn created_blueprint_is_appended() {
        let (authoring, repo) = authoring();
        let first = authoring.create_blueprint("NDA", &[FieldKind::Text]).unwrap();
        let second = authoring
            .create_blueprint("Lease", &[FieldKind::Date, FieldKind::Signature])
            .unwrap();

        let stored = repo.blueprints();
        assert_eq!(stored, vec![first, second]);
    }

    #[test]
    fn name_is_stored_as_typed() {
        let (authoring, _) = authoring();
        let bp = authoring.create_blueprint(" NDA ", &[]).unwrap();
        assert_eq!(bp.name(), " NDA ");
    }

    #[test]
    fn draft_field_ids_survive_save() {
        let (authoring, _) = authoring();
        let mut draft = BlueprintDraft::named("Offer");
        let id = draft.add_field(FieldKind::Date).id().clone();
        let bp = authoring.save_draft(draft).unwrap();
        assert_eq!(bp.fields()[0].id(), &id);
    }
}
