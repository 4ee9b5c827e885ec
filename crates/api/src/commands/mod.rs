//! Command handlers
//!
//! Each handler returns the rendered JSON document the binary prints on
//! stdout.

pub mod operations;
pub mod run;

use std::time::Instant;

use serde::Serialize;

use crate::cli::Command;
use crate::utils::logging::log_command_execution;

/// Dispatch a parsed subcommand.
///
/// # Errors
/// Propagates the failure of the selected handler.
pub async fn execute(command: Command) -> anyhow::Result<String> {
    let started = Instant::now();
    let (name, result) = match command {
        Command::Run(args) => ("run", run::execute(&args).await),
        Command::Operations(args) => ("operations", operations::execute(&args)),
    };
    log_command_execution(name, started.elapsed(), result.is_ok());
    result
}

/// Serialize `value` as compact or pretty JSON.
///
/// # Errors
/// Fails when `value` cannot be serialized.
pub fn render<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let rendered =
        if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
    Ok(rendered)
}
