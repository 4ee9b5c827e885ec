//! # i95connect Core
//!
//! Connector logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - The outbound HTTP port ([`HttpTransport`])
//! - Commerce session helpers and the family executor
//! - The Business Central executor
//! - The dispatcher and the per-item batch runner
//!
//! ## Architecture Principles
//! - Only depends on `i95connect-domain`
//! - No reqwest, file system or environment access
//! - All I/O goes through [`HttpTransport`]
//! - Executors never return `Err`; failures become an
//!   [`ApiResponse`](i95connect_domain::ApiResponse)

pub mod business_central;
pub mod commerce;
pub mod dispatcher;
pub mod runner;

// Infrastructure ports
pub mod transport_ports;

#[cfg(test)]
pub(crate) mod test_support;

pub use business_central::BusinessCentralExecutor;
pub use commerce::CommerceExecutor;
pub use dispatcher::{route, Dispatcher, Route};
pub use runner::{BatchRunner, ItemJson, ItemOutput, PairedItem};
pub use transport_ports::HttpTransport;
