//! Single-view navigation
//!
//! Exactly one view is mounted at a time. Opening a page builds its view from
//! a fresh read of storage, so no view ever observes another's stale state.

use crate::authoring::BlueprintDraft;
use crate::dashboard::{Dashboard, DashboardRow};
use crate::editor::ContractEditor;
use crate::instantiation::{BlueprintOption, ContractInstantiation};
use covenant_model::ContractId;
use covenant_store::Repository;
use std::fmt;
use std::str::FromStr;

/// Navigable pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    BlueprintBuilder,
    ContractEditor,
    CreateContract,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Dashboard,
        Page::BlueprintBuilder,
        Page::ContractEditor,
        Page::CreateContract,
    ];

    /// Route name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::BlueprintBuilder => "blueprint",
            Page::ContractEditor => "contract",
            Page::CreateContract => "create",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown page name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page: {0} (expected dashboard, blueprint, contract or create)")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dashboard" => Ok(Page::Dashboard),
            "blueprint" | "blueprint-builder" => Ok(Page::BlueprintBuilder),
            "contract" | "contract-editor" | "editor" => Ok(Page::ContractEditor),
            "create" | "create-contract" => Ok(Page::CreateContract),
            _ => Err(UnknownPage(s.to_owned())),
        }
    }
}

/// Mounted view
#[derive(Debug)]
pub enum View {
    /// Contract table
    Dashboard(Vec<DashboardRow>),
    /// Empty blueprint draft
    BlueprintBuilder(BlueprintDraft),
    /// Selection list for a new contract
    CreateContract(Vec<BlueprintOption>),
    /// Editor on one contract
    ContractEditor(ContractEditor),
    /// Nothing to show (editor without a resolvable contract)
    Empty,
}

/// Page switcher
#[derive(Debug, Clone)]
pub struct Navigator {
    repo: Repository,
    placeholder: String,
    page: Page,
    active_id: Option<ContractId>,
}

impl Navigator {
    /// Navigator starting on the dashboard
    #[must_use]
    pub fn new(repo: Repository) -> Self {
        Self {
            repo,
            placeholder: "-".to_owned(),
            page: Page::Dashboard,
            active_id: None,
        }
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[inline]
    #[must_use]
    pub fn active_id(&self) -> Option<&ContractId> {
        self.active_id.as_ref()
    }

    /// Switch to `page`, replacing the active id, and mount its view
    pub fn open(&mut self, page: Page, id: Option<ContractId>) -> View {
        self.page = page;
        self.active_id = id;
        tracing::debug!(page = %page, id = ?self.active_id, "open");

        match page {
            Page::Dashboard => View::Dashboard(
                Dashboard::new(self.repo.clone())
                    .with_placeholder(self.placeholder.clone())
                    .list(),
            ),
            Page::BlueprintBuilder => View::BlueprintBuilder(BlueprintDraft::new()),
            Page::CreateContract => {
                View::CreateContract(ContractInstantiation::new(self.repo.clone()).blueprint_options())
            }
            Page::ContractEditor => self
                .active_id
                .as_ref()
                .and_then(|id| ContractEditor::open(self.repo.clone(), id))
                .map_or(View::Empty, View::ContractEditor),
        }
    }

    /// Back to the dashboard
    pub fn back(&mut self) -> View {
        self.open(Page::Dashboard, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_model::{Blueprint, Contract, FieldKind};
    use covenant_store::MemoryStore;

    fn seeded() -> (Navigator, Contract) {
        let repo = Repository::new(MemoryStore::new());
        let bp = Blueprint::from_kinds("NDA", &[FieldKind::Text]);
        let contract = Contract::instantiate("Acme NDA", &bp);
        repo.save_blueprints(&[bp]).unwrap();
        repo.save_contracts(std::slice::from_ref(&contract)).unwrap();
        (Navigator::new(repo), contract)
    }

    #[test]
    fn page_names_parse() {
        for page in Page::ALL {
            assert_eq!(page.as_str().parse::<Page>().unwrap(), page);
        }
        assert!("settings".parse::<Page>().is_err());
    }

    #[test]
    fn starts_on_dashboard() {
        let (nav, _) = seeded();
        assert_eq!(nav.page(), Page::Dashboard);
        assert!(nav.active_id().is_none());
    }

    #[test]
    fn editor_mounts_with_id() {
        let (mut nav, contract) = seeded();
        match nav.open(Page::ContractEditor, Some(contract.id().clone())) {
            View::ContractEditor(editor) => assert_eq!(editor.contract(), &contract),
            other => panic!("unexpected view {other:?}"),
        }
        assert_eq!(nav.active_id(), Some(contract.id()));
    }

    #[test]
    fn editor_without_id_is_empty() {
        let (mut nav, _) = seeded();
        assert!(matches!(nav.open(Page::ContractEditor, None), View::Empty));
        assert!(matches!(
            nav.open(Page::ContractEditor, Some(ContractId::from("gone"))),
            View::Empty
        ));
    }

    #[test]
    fn other_pages_clear_active_id() {
        let (mut nav, contract) = seeded();
        nav.open(Page::ContractEditor, Some(contract.id().clone()));
        match nav.back() {
            View::Dashboard(rows) => assert_eq!(rows.len(), 1),
            other => panic!("unexpected view {other:?}"),
        }
        assert!(nav.active_id().is_none());
    }

    #[test]
    fn create_page_lists_blueprints() {
        let (mut nav, _) = seeded();
        match nav.open(Page::CreateContract, None) {
            View::CreateContract(options) => assert_eq!(options[0].name, "NDA"),
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn builder_starts_empty() {
        let (mut nav, _) = seeded();
        match nav.open(Page::BlueprintBuilder, None) {
            View::BlueprintBuilder(draft) => assert_eq!(draft.field_count(), 0),
            other => panic!("unexpected view {other:?}"),
        }
    }
}
