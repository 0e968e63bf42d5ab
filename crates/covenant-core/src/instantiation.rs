//! Contract instantiation from a stored blueprint

use crate::error::{Result, ValidationError};
use covenant_model::{BlueprintId, Contract};
use covenant_store::Repository;

/// Entry in the blueprint selection list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlueprintOption {
    pub id: BlueprintId,
    pub name: String,
}

/// Creates contracts
#[derive(Debug, Clone)]
pub struct ContractInstantiation {
    repo: Repository,
}

impl ContractInstantiation {
    #[inline]
    #[must_use]
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Every stored blueprint, in stored order
    #[must_use]
    pub fn blueprint_options(&self) -> Vec<BlueprintOption> {
        self.repo
            .blueprints()
            .into_iter()
            .map(|bp| BlueprintOption {
                id: bp.id().clone(),
                name: bp.name().to_owned(),
            })
            .collect()
    }

    /// Instantiate and store a contract from `blueprint_id`
    ///
    /// # Errors
    /// - [`ValidationError::BlankContractName`] for a blank name
    /// - [`ValidationError::NoBlueprintSelected`] for a blank id
    /// - [`ValidationError::UnknownBlueprint`] when the id does not resolve
    /// - a storage write failure
    ///
    /// Nothing is stored on any validation failure.
    pub fn create_contract(&self, name: &str, blueprint_id: &BlueprintId) -> Result<Contract> {
        if name.trim().is_empty() {
            return Err(ValidationError::BlankContractName.into());
        }
        if blueprint_id.is_blank() {
            return Err(ValidationError::NoBlueprintSelected.into());
        }

        let blueprint = self
            .repo
            .blueprints()
            .into_iter()
            .find(|bp| bp.id() == blueprint_id)
            .ok_or_else(|| ValidationError::UnknownBlueprint(blueprint_id.clone()))?;

        let contract = Contract::instantiate(name, &blueprint);
        let mut all = self.repo.contracts();
        all.push(contract.clone());
        self.repo.save_contracts(&all)?;

        tracing::info!(
            id = %contract.id(),
            name = contract.name(),
            blueprint = %blueprint_id,
            "contract created"
        );
        Ok(contract)
    }
}
