//! # i95connect Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The reqwest-backed HTTP client and [`ReqwestTransport`]
//! - Conversions from reqwest errors and HTTP statuses into domain errors
//! - The configuration loader (environment variables, JSON/TOML files)
//!
//! ## Architecture
//! - Implements traits defined in `i95connect-core`
//! - Contains all "impure" code (network, file system, environment)

pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::*;
