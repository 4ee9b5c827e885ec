//! Error types used throughout the connector

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for i95connect
///
/// The `Display` form of an error is what ends up in the `error` field of a
/// failed [`ApiResponse`](crate::ApiResponse), so messages must never carry
/// secrets.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ConnectorError {
    /// Missing or invalid configuration (including Business Central
    /// credentials).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection, timeout or transport-level failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Rejected credentials or a failed token exchange.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Non-success HTTP status from an upstream API.
    #[error("Request failed with status code {status}: {body}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Response body as text.
        body: String,
    },

    /// Caller-supplied data could not be used.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An upstream response lacked a field the flow depends on.
    #[error("Response missing field: {0}")]
    MissingField(String),

    /// JSON encoding or decoding failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConnectorError {
    /// Stable label suitable for structured log fields.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Network(_) => "network",
            Self::Auth(_) => "auth",
            Self::Upstream { .. } => "upstream",
            Self::InvalidInput(_) => "invalid_input",
            Self::MissingField(_) => "missing_field",
            Self::Serialization(_) => "serialization",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<serde_json::Error> for ConnectorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for connector operations
pub type Result<T> = std::result::Result<T, ConnectorError>;
