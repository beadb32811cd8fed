//! Binary entrypoint for the `studymate` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    studymate::logging::init();
    // Record/replay is selected in commands::dispatch via STUDYMATE_RECORD / STUDYMATE_REPLAY.
    match studymate::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
