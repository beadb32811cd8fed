//! Command dispatch and handlers.

pub mod home;
pub mod quote;
pub mod search;
pub mod timer;
pub mod todo;

use std::env;
use std::future::Future;
use std::path::PathBuf;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::context::ServiceContext;

/// Dispatch a parsed command line to its handler.
///
/// When `STUDYMATE_REPLAY` names a cassette, quote, search and id
/// interactions are served from it. Otherwise, when `STUDYMATE_RECORD` names
/// a file, they are recorded there once the command finishes.
///
/// # Errors
///
/// Returns an error string if the cassette cannot be loaded or the selected
/// command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = Config::load(cli.data_dir.as_deref());
    let mut ctx = if let Some(path) = env_path("STUDYMATE_REPLAY") {
        ServiceContext::replaying(&config, &path)?
    } else if let Some(path) = env_path("STUDYMATE_RECORD") {
        ServiceContext::recording(&config, &path)
    } else {
        ServiceContext::live(&config)
    };

    // The context is dropped after the handler returns, which writes any
    // recording even when the command failed.
    dispatch_with_context(&cli.command, &config, &mut ctx)
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(
    command: &Command,
    config: &Config,
    ctx: &mut ServiceContext,
) -> Result<(), String> {
    match command {
        Command::Todo { action } => todo::run(ctx, action),
        Command::Timer(args) => timer::run(ctx, config, args),
        Command::Quote(args) => quote::run(ctx, args.count),
        Command::Search { query } => search::run(ctx, &query.join(" ")),
        Command::Features => {
            home::features();
            Ok(())
        }
        Command::Flashcards => {
            home::flashcards();
            Ok(())
        }
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    let value = env::var_os(name)?;
    (!value.is_empty()).then(|| PathBuf::from(value))
}

/// Runs `future` to completion on a fresh single-threaded runtime.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output, String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;
    Ok(runtime.block_on(future))
}
