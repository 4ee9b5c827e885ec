//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// i95connect - i95Dev commerce and Business Central workflow connector
#[derive(Debug, Parser)]
#[command(name = "i95connect")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Selected subcommand.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Execute one operation for every input item
    Run(RunArgs),

    /// List the operation catalog
    Operations(OperationsArgs),
}

/// Arguments of `run`.
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Resource the operation belongs to (`ecommerce` or `bcactions`)
    #[arg(long, short = 'r', default_value = "ecommerce")]
    pub resource: String,

    /// Operation id, e.g. `pullProductData` or `createCustomer`
    #[arg(long, short = 'o')]
    pub operation: String,

    /// JSON file with the input items (`-` reads stdin). An array is a
    /// batch, a single object is one item. Without it one item runs with
    /// default parameters.
    #[arg(long, short = 'i')]
    pub items: Option<PathBuf>,

    /// Config file (JSON or TOML). Without it the environment is tried
    /// first, then the standard config locations.
    #[arg(long, short = 'c', env = "I95CONNECT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Record undecodable items as error outputs instead of aborting
    #[arg(long)]
    pub continue_on_fail: bool,

    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments of `operations`.
#[derive(Debug, Clone, Args)]
pub struct OperationsArgs {
    /// Only list operations of this resource
    #[arg(long, short = 'r')]
    pub resource: Option<String>,

    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,
}
