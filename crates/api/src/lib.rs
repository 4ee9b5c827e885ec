//! # i95connect
//!
//! Application layer - command-line entry point for the connector.
//!
//! This crate contains:
//! - CLI argument definitions
//! - Application context (dependency injection)
//! - Command handlers (`run`, `operations`)
//! - Logging setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the reqwest transport into the core dispatcher
//! - Everything user-facing is JSON on stdout, diagnostics go to stderr

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

pub use cli::{Cli, Command, OperationsArgs, RunArgs};
pub use context::AppContext;
