//! StashIt
//!
//! A clipboard stack: stash files and text, then copy or drop them anywhere
//! in one go. This crate is the command-line host; the stack logic lives in
//! `si-app` and the platform adapters in `si-infra` and `si-platform`.

pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod notice;
pub mod paths;
pub mod prompt;

use std::path::PathBuf;
use std::process::ExitCode;

use si_app::usecases::LaunchAction;
use si_app::UseCases;
use si_infra::StashDirs;
use tracing::{error, info_span, Instrument};

use crate::bootstrap::wiring::WiringOptions;
use crate::cli::{Cli, Command};
use crate::commands::list::ListOptions;
use crate::commands::CommandOutput;
use crate::notice::Notice;
use crate::paths::PathArgs;

/// Set up the process, run one parsed command and report its outcome.
pub async fn run(cli: Cli) -> ExitCode {
    let dirs = match StashDirs::resolve() {
        Ok(dirs) => dirs,
        Err(e) => {
            return emit(CommandOutput::notice(Notice::failure(
                "Cannot locate app directories",
                e.to_string(),
            )))
        }
    };

    if let Err(e) = bootstrap::init_tracing_subscriber(Some(dirs.logs_dir().as_path())) {
        eprintln!("Failed to initialize logging: {e:#}");
    }

    let config_file = cli.config.clone().unwrap_or_else(|| dirs.config_file());
    let config = match bootstrap::load_config(&config_file) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %format!("{e:#}"), "Failed to load config");
            return emit(CommandOutput::notice(Notice::from_error(
                "Failed to load config",
                &e,
            )));
        }
    };

    let paths = match PathArgs::from_current_dir() {
        Ok(paths) => paths,
        Err(e) => {
            return emit(CommandOutput::notice(Notice::from_error(
                "Cannot resolve paths",
                &e,
            )))
        }
    };

    let use_cases = bootstrap::build_use_cases(
        &dirs,
        config,
        WiringOptions {
            selection: paths.resolve_all(cli.select),
            assume_yes: cli.yes,
        },
    );

    let output = dispatch(&use_cases, &paths, cli.command, config_file, &dirs)
        .instrument(info_span!("stashit.command"))
        .await;
    emit(output)
}

async fn dispatch(
    use_cases: &UseCases,
    paths: &PathArgs,
    command: Command,
    config_file: PathBuf,
    dirs: &StashDirs,
) -> CommandOutput {
    match command {
        Command::Capture => commands::capture::run(use_cases).await,
        Command::List { detail, json } => {
            commands::list::run(use_cases, ListOptions { detail, json }).await
        }
        Command::Copy => commands::copy::run(use_cases).await,
        Command::Drop {
            destinations,
            move_items,
        } => commands::drop::run(use_cases, paths, destinations, move_items).await,
        Command::Clear => commands::clear::run(use_cases).await,
        Command::Remove { id } => commands::remove::run(use_cases, id).await,
        Command::CopyItem { id } => commands::copy_item::run_file(use_cases, id).await,
        Command::CopyText { id } => commands::copy_item::run_text(use_cases, id).await,
        Command::Open { id } => commands::open::run(use_cases, id, LaunchAction::Open).await,
        Command::Reveal { id } => commands::open::run(use_cases, id, LaunchAction::Reveal).await,
        Command::Status => commands::status::run(use_cases, &config_file, &dirs.data_root).await,
    }
}

/// Body on stdout; the notice on stdout, or stderr when it is a failure.
fn emit(output: CommandOutput) -> ExitCode {
    if let Some(body) = &output.body {
        println!("{body}");
    }
    match &output.notice {
        Some(notice) if notice.is_failure() => eprintln!("{notice}"),
        Some(notice) => println!("{notice}"),
        None => {}
    }
    if output.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
