//! Command tree

use clap::{value_parser, Arg, ArgAction, Command};
use covenant_core::{FieldKind, Page};
use std::path::PathBuf;

pub(crate) fn command() -> Command {
    Command::new("covenant")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Blueprint templates and contract lifecycle")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .default_value("covenant.toml")
                .value_parser(value_parser!(PathBuf))
                .help("Configuration file (missing file means defaults)"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding blueprints.json and contracts.json"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        )
        .subcommand(Command::new("dashboard").about("List contracts with blueprint and status"))
        .subcommand(
            Command::new("blueprint")
                .about("Author blueprints")
                .subcommand_required(true)
                .subcommand(
                    Command::new("create")
                        .about("Create a blueprint")
                        .arg(
                            Arg::new("name")
                                .long("name")
                                .required(true)
                                .help("Blueprint name"),
                        )
                        .arg(
                            Arg::new("field")
                                .long("field")
                                .action(ArgAction::Append)
                                .value_parser(|s: &str| s.parse::<FieldKind>())
                                .help("Field kind to append: text, date, signature or checkbox"),
                        ),
                )
                .subcommand(Command::new("list").about("List blueprints")),
        )
        .subcommand(
            Command::new("contract")
                .about("Instantiate, edit and advance contracts")
                .subcommand_required(true)
                .subcommand(
                    Command::new("create")
                        .about("Create a contract from a blueprint")
                        .arg(
                            Arg::new("name")
                                .long("name")
                                .required(true)
                                .help("Contract name"),
                        )
                        .arg(
                            Arg::new("blueprint")
                                .long("blueprint")
                                .required(true)
                                .help("Blueprint id"),
                        ),
                )
                .subcommand(
                    Command::new("show")
                        .about("Show a contract in the editor")
                        .arg(Arg::new("id").required(true).help("Contract id")),
                )
                .subcommand(
                    Command::new("set")
                        .about("Set one field value")
                        .arg(Arg::new("id").required(true).help("Contract id"))
                        .arg(Arg::new("field").required(true).help("Field id"))
                        .arg(
                            Arg::new("value")
                                .required(true)
                                .allow_hyphen_values(true)
                                .help("New value (YYYY-MM-DD for dates, yes/no for checkboxes)"),
                        ),
                )
                .subcommand(
                    Command::new("save")
                        .about("Re-write the contract collection as loaded")
                        .arg(Arg::new("id").required(true).help("Contract id")),
                )
                .subcommand(
                    Command::new("advance")
                        .about("Advance a contract one lifecycle step")
                        .arg(Arg::new("id").required(true).help("Contract id")),
                ),
        )
        .subcommand(
            Command::new("open")
                .about("Mount a page and render it")
                .arg(
                    Arg::new("page")
                        .required(true)
                        .value_parser(|s: &str| s.parse::<Page>())
                        .help("dashboard, blueprint, contract or create"),
                )
                .arg(Arg::new("id").help("Contract id for the contract page")),
        )
}
