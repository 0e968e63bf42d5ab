//! `covenant` command-line front end

mod cli;
mod commands;
mod logging;
mod render;

use clap::ArgMatches;
use commands::Session;
use covenant_core::{CovenantConfig, CovenantError};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = cli::command().get_matches();

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => return report(&anyhow::Error::from(e)),
    };
    logging::init(&config.logging);

    let session = Session {
        repo: config.open_repository(),
        placeholder: config.display.placeholder.clone(),
        json: matches.get_flag("json"),
    };
    tracing::debug!(backend = ?config.storage.backend, dir = %config.storage.data_dir.display(), "session ready");

    match commands::execute(&matches, &session) {
        Ok(reply) => {
            if let Some(notice) = reply.notice {
                eprintln!("{notice}");
            }
            if !reply.output.is_empty() {
                println!("{}", reply.output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => report(&e),
    }
}

fn load_config(matches: &ArgMatches) -> Result<CovenantConfig, CovenantError> {
    let path = matches
        .get_one::<PathBuf>("config")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("covenant.toml"));
    let config = CovenantConfig::load(path)?;
    Ok(match matches.get_one::<PathBuf>("data-dir") {
        Some(dir) => config.with_data_dir(dir.clone()),
        None => config,
    })
}

fn notice(err: &anyhow::Error) -> Option<&'static str> {
    err.downcast_ref::<CovenantError>().and_then(CovenantError::notice)
}

/// Validation failures exit 2 with their notice; everything else exits 1
fn exit_status(err: &anyhow::Error) -> u8 {
    if notice(err).is_some() {
        2
    } else {
        1
    }
}

fn report(err: &anyhow::Error) -> ExitCode {
    match notice(err) {
        Some(notice) => eprintln!("{notice}"),
        None => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err:#}");
        }
    }
    ExitCode::from(exit_status(err))
}
