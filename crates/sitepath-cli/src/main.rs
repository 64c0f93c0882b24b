use std::process::ExitCode;

use sitepath_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() -> ExitCode {
    // Initialize logging as early as possible; stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    // Parse CLI and dispatch.
    match CliCommand::run_from_args() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("sitepath error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
