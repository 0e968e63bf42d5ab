//! Contract dashboard
//!
//! Lists contracts with their blueprint names and advances their status.
//! Every call reads the collections fresh.

use crate::error::{CovenantError, Result};
use covenant_model::{Contract, ContractId, Status};
use covenant_store::Repository;
use std::collections::HashMap;

/// How a row is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    /// Still moving through the lifecycle
    Active,
    /// Locked
    Locked,
}

/// One dashboard line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardRow {
    pub contract: Contract,
    /// Blueprint name, or the placeholder if it no longer resolves
    pub blueprint_name: String,
    pub style: RowStyle,
}

/// Dashboard view coordinator
#[derive(Debug, Clone)]
pub struct Dashboard {
    repo: Repository,
    placeholder: String,
}

impl Dashboard {
    /// Dashboard with the default `-` placeholder
    #[inline]
    #[must_use]
    pub fn new(repo: Repository) -> Self {
        Self {
            repo,
            placeholder: "-".to_owned(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Contracts joined with blueprint names, in stored order
    #[must_use]
    pub fn list(&self) -> Vec<DashboardRow> {
        let blueprints = self.repo.blueprints();
        let names: HashMap<_, _> = blueprints.iter().map(|bp| (bp.id(), bp.name())).collect();

        self.repo
            .contracts()
            .into_iter()
            .map(|contract| {
                let blueprint_name = names
                    .get(contract.blueprint_id())
                    .map_or_else(|| self.placeholder.clone(), |n| (*n).to_owned());
                let style = if contract.is_locked() {
                    RowStyle::Locked
                } else {
                    RowStyle::Active
                };
                DashboardRow {
                    contract,
                    blueprint_name,
                    style,
                }
            })
            .collect()
    }

    /// Move one contract a step along the lifecycle and persist
    ///
    /// # Errors
    /// [`CovenantError::ContractNotFound`] (nothing written) or a storage write
    /// failure.
    pub fn advance_status(&self, contract_id: &ContractId) -> Result<Status> {
        let mut contracts = self.repo.contracts();
        let contract = contracts
            .iter_mut()
            .find(|c| c.id() == contract_id)
            .ok_or_else(|| CovenantError::ContractNotFound(contract_id.clone()))?;

        let from = contract.status();
        let to = contract.advance();
        self.repo.save_contracts(&contracts)?;

        if from == to {
            tracing::debug!(contract = %contract_id, status = %to, "status unchanged");
        } else {
            tracing::info!(contract = %contract_id, %from, %to, "status advanced");
        }
        Ok(to)
    }
}
