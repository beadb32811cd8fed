//! Core library for the `studymate` CLI: a to-do board, a pomodoro timer,
//! motivational quotes and a related-topics search.

pub mod adapters;
pub mod board;
pub mod cassette;
pub mod choice;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod logging;
pub mod ports;
pub mod quotes;
pub mod search;
pub mod timer;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_executes_flashcards() {
        let result = run(["studymate", "flashcards"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["studymate", "unknown"]);
        assert!(result.is_err());
    }
}
