//! Subcommand dispatch

use crate::render;
use anyhow::{anyhow, bail};
use clap::ArgMatches;
use covenant_core::notices;
use covenant_core::{
    BlueprintAuthoring, BlueprintId, ContractEditor, ContractId, ContractInstantiation,
    CovenantError, Dashboard, EditOutcome, Field, FieldId, FieldKind, FieldValue, Navigator, Page,
    Repository,
};

/// What a command prints: `output` to stdout, `notice` to stderr
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Reply {
    pub(crate) output: String,
    pub(crate) notice: Option<&'static str>,
}

impl Reply {
    fn output(output: String) -> Self {
        Self { output, notice: None }
    }

    fn with_notice(mut self, notice: &'static str) -> Self {
        self.notice = Some(notice);
        self
    }
}

/// Session settings shared by every command
#[derive(Debug, Clone)]
pub(crate) struct Session {
    pub(crate) repo: Repository,
    pub(crate) placeholder: String,
    pub(crate) json: bool,
}

pub(crate) fn execute(matches: &ArgMatches, session: &Session) -> anyhow::Result<Reply> {
    match matches.subcommand() {
        Some(("dashboard", _)) => Ok(Reply::output(render::dashboard(
            &dashboard(session).list(),
            session.json,
        ))),
        Some(("blueprint", sub)) => blueprint(sub, session),
        Some(("contract", sub)) => contract(sub, session),
        Some(("open", sub)) => {
            let page = sub.get_one::<Page>("page").copied().unwrap_or_default();
            let id = sub.get_one::<String>("id").map(|s| ContractId::from(s.as_str()));
            let view = Navigator::new(session.repo.clone())
                .with_placeholder(session.placeholder.clone())
                .open(page, id);
            Ok(Reply::output(render::view(&view, session.json)?))
        }
        Some((other, _)) => bail!("unknown command: {other}"),
        None => bail!("no command given"),
    }
}

fn dashboard(session: &Session) -> Dashboard {
    Dashboard::new(session.repo.clone()).with_placeholder(session.placeholder.clone())
}

fn blueprint(matches: &ArgMatches, session: &Session) -> anyhow::Result<Reply> {
    match matches.subcommand() {
        Some(("create", sub)) => {
            let name = required(sub, "name")?;
            let kinds: Vec<FieldKind> = sub
                .get_many::<FieldKind>("field")
                .map(|kinds| kinds.copied().collect())
                .unwrap_or_default();
            let bp = BlueprintAuthoring::new(session.repo.clone()).create_blueprint(name, &kinds)?;
            Ok(Reply::output(render::blueprint(&bp, session.json)?).with_notice(notices::BLUEPRINT_CREATED))
        }
        Some(("list", _)) => Ok(Reply::output(render::blueprints(
            &session.repo.blueprints(),
            session.json,
        )?)),
        _ => bail!("expected `blueprint create` or `blueprint list`"),
    }
}

fn contract(matches: &ArgMatches, session: &Session) -> anyhow::Result<Reply> {
    let Some((name, sub)) = matches.subcommand() else {
        bail!("expected a contract subcommand");
    };

    if name == "create" {
        let contract_name = required(sub, "name")?;
        let blueprint_id = BlueprintId::from(required(sub, "blueprint")?);
        let contract = ContractInstantiation::new(session.repo.clone())
            .create_contract(contract_name, &blueprint_id)?;
        return Ok(Reply::output(render::contract(&contract, session.json)?)
            .with_notice(notices::CONTRACT_CREATED));
    }

    let id = ContractId::from(required(sub, "id")?);
    match name {
        "show" => {
            let editor = open_editor(session, &id)?;
            Ok(Reply::output(render::contract(editor.contract(), session.json)?))
        }
        "set" => {
            let mut editor = open_editor(session, &id)?;
            // Locked edits are ignored before the field or value is looked at.
            if editor.is_locked() {
                return Ok(Reply::default().with_notice(notices::CONTRACT_LOCKED));
            }
            let field_id = FieldId::from(required(sub, "field")?);
            let Some(kind) = editor.contract().field(&field_id).map(Field::kind) else {
                return Err(missing_field(&id, &field_id));
            };
            let value = FieldValue::parse_for(kind, required(sub, "value")?)?;

            match editor.set_field_value(&field_id, value)? {
                EditOutcome::Applied => Ok(Reply::output(render::contract(
                    editor.contract(),
                    session.json,
                )?)),
                EditOutcome::Locked => Ok(Reply::default().with_notice(notices::CONTRACT_LOCKED)),
                EditOutcome::FieldNotFound => Err(missing_field(&id, &field_id)),
            }
        }
        "save" => {
            let editor = open_editor(session, &id)?;
            editor.save()?;
            Ok(Reply::default().with_notice(notices::CONTRACT_SAVED))
        }
        "advance" => {
            let status = dashboard(session).advance_status(&id)?;
            Ok(Reply::output(render::status(id.as_str(), status, session.json)))
        }
        other => bail!("unknown contract subcommand: {other}"),
    }
}

fn open_editor(session: &Session, id: &ContractId) -> Result<ContractEditor, CovenantError> {
    ContractEditor::open(session.repo.clone(), id)
        .ok_or_else(|| CovenantError::ContractNotFound(id.clone()))
}

fn missing_field(id: &ContractId, field_id: &FieldId) -> anyhow::Error {
    anyhow!("contract {id} has no field {field_id}")
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> anyhow::Result<&'a str> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing argument: {name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli;
    use covenant_core::{Status, ValidationError};
    use covenant_test_utils::{
        contract_with_status, memory_repository, memory_repository_with_store, nda_blueprint, raw,
        seed_blueprint, seed_contract,
    };
    use pretty_assertions::assert_eq;

    fn session(repo: &Repository) -> Session {
        Session {
            repo: repo.clone(),
            placeholder: "-".to_owned(),
            json: false,
        }
    }

    fn run(repo: &Repository, args: &[&str]) -> anyhow::Result<Reply> {
        let matches = cli::command()
            .try_get_matches_from(std::iter::once("covenant").chain(args.iter().copied()))?;
        execute(&matches, &session(repo))
    }

    #[test]
    fn blueprint_create_persists_and_notifies() {
        let repo = memory_repository();
        let reply = run(&repo, &["blueprint", "create", "--name", "NDA", "--field", "text"]).unwrap();

        assert_eq!(reply.notice, Some(notices::BLUEPRINT_CREATED));
        let stored = repo.blueprints();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name(), "NDA");
        assert!(reply.output.starts_with(stored[0].id().as_str()));
    }

    #[test]
    fn blank_blueprint_name_is_a_validation_error() {
        let repo = memory_repository();
        let err = run(&repo, &["blueprint", "create", "--name", "  "]).unwrap_err();

        let err = err.downcast_ref::<CovenantError>().unwrap();
        assert!(matches!(
            err,
            CovenantError::Validation(ValidationError::BlankBlueprintName)
        ));
        assert!(repo.blueprints().is_empty());
    }

    #[test]
    fn contract_create_then_set_then_show() {
        let repo = memory_repository();
        let bp = nda_blueprint(&repo);
        let reply = run(
            &repo,
            &["contract", "create", "--name", "Acme NDA", "--blueprint", bp.id().as_str()],
        )
        .unwrap();
        assert_eq!(reply.notice, Some(notices::CONTRACT_CREATED));

        let id = repo.contracts()[0].id().clone();
        let field = bp.fields()[0].id().as_str();
        run(&repo, &["contract", "set", id.as_str(), field, "Acme Ltd"]).unwrap();

        let shown = run(&repo, &["contract", "show", id.as_str()]).unwrap();
        assert!(shown.output.contains("Acme Ltd"));
    }

    #[test]
    fn set_on_locked_contract_reports_notice() {
        let repo = memory_repository();
        let bp = nda_blueprint(&repo);
        let locked = contract_with_status("Done", &bp, Status::Locked);
        repo.save_contracts(std::slice::from_ref(&locked)).unwrap();

        let reply = run(
            &repo,
            &["contract", "set", locked.id().as_str(), bp.fields()[0].id().as_str(), "late"],
        )
        .unwrap();

        assert_eq!(reply.notice, Some(notices::CONTRACT_LOCKED));
        assert_eq!(repo.contracts(), vec![locked]);
    }

    #[test]
    fn set_on_locked_contract_ignores_bad_field_and_value() {
        let (repo, store) = memory_repository_with_store();
        let bp = seed_blueprint(&repo, "Lease", &[FieldKind::Date, FieldKind::Checkbox]);
        let locked = contract_with_status("Flat 4", &bp, Status::Locked);
        repo.save_contracts(std::slice::from_ref(&locked)).unwrap();
        let before = raw(&store, "contracts");

        let date_field = bp.fields()[0].id().as_str();
        for args in [
            ["contract", "set", locked.id().as_str(), date_field, "tomorrow"],
            ["contract", "set", locked.id().as_str(), "ghost", "x"],
        ] {
            let reply = run(&repo, &args).unwrap();
            assert_eq!(reply, Reply::default().with_notice(notices::CONTRACT_LOCKED));
        }

        assert_eq!(raw(&store, "contracts"), before);
    }

    #[test]
    fn set_on_unknown_field_is_an_error() {
        let repo = memory_repository();
        let bp = nda_blueprint(&repo);
        let contract = seed_contract(&repo, "Acme NDA", &bp);

        let err = run(&repo, &["contract", "set", contract.id().as_str(), "ghost", "x"]).unwrap_err();
        assert!(err.to_string().contains("no field ghost"));
        assert_eq!(repo.contracts(), vec![contract]);
    }

    #[test]
    fn advance_prints_new_status() {
        let repo = memory_repository();
        let bp = nda_blueprint(&repo);
        let contract = seed_contract(&repo, "Acme NDA", &bp);

        let reply = run(&repo, &["contract", "advance", contract.id().as_str()]).unwrap();
        assert_eq!(reply.output, format!("{}  Approved", contract.id()));
    }

    #[test]
    fn unknown_contract_is_not_found() {
        let repo = memory_repository();
        let err = run(&repo, &["contract", "advance", "missing"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CovenantError>(),
            Some(CovenantError::ContractNotFound(_))
        ));
    }

    #[test]
    fn open_dashboard_lists_contracts() {
        let repo = memory_repository();
        let bp = nda_blueprint(&repo);
        seed_contract(&repo, "Acme NDA", &bp);

        let reply = run(&repo, &["open", "dashboard"]).unwrap();
        assert!(reply.output.contains("Acme NDA"));
    }
}
