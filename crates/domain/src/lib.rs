//! # i95connect Domain
//!
//! Business domain types for the i95Dev / Business Central connector.
//!
//! This crate contains:
//! - Credentials and connector configuration structures
//! - The operation catalog (operation id → entity type + family)
//! - Request envelopes sent to the commerce API
//! - The uniform `ApiResponse` returned for every workflow item
//! - Domain error types and Result definitions
//!
//! ## Architecture
//! - No dependencies on other i95connect crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
