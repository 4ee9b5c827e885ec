//! i95connect - command-line entry point
//!
//! Loads `.env`, installs logging, then runs the selected subcommand. The
//! command result is printed as JSON on stdout; failures exit non-zero.

use std::process::ExitCode;

use clap::Parser;
use i95connect_lib::utils::logging;
use i95connect_lib::{commands, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before logging so RUST_LOG from the file applies
    let dotenv = dotenvy::dotenv();
    logging::init();
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(e) => tracing::debug!(error = %e, "No .env file loaded"),
    }

    let cli = Cli::parse();

    match commands::execute(cli.command).await {
        Ok(output) => {
            #[allow(clippy::print_stdout)]
            {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, kind = logging::error_label(&err), "i95connect failed");
            #[allow(clippy::print_stderr)]
            {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
