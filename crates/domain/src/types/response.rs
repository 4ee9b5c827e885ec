//! Uniform per-item result

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{TOKEN_PREVIEW_LEN, TOKEN_PREVIEW_SUFFIX};

/// Result returned for every workflow item, success or failure.
///
/// Optional fields are omitted from JSON when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// Whether the operation completed.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Upstream payload, passed through unmodified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_response: Option<Value>,
    /// Truncated bearer token used for the call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
    /// Scheduler id the call ran under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler_id: Option<String>,
    /// Envelope that was posted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,
    /// Completion time, see [`now_timestamp`].
    pub timestamp: String,
    /// Lower-level error text on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    /// Successful response carrying only the upstream payload.
    #[must_use]
    pub fn success(message: impl Into<String>, api_response: Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            api_response: Some(api_response),
            bearer_token: None,
            scheduler_id: None,
            request_body: None,
            timestamp: now_timestamp(),
            error: None,
        }
    }

    /// Successful commerce response with session diagnostics.
    ///
    /// The bearer token is redacted before it is stored.
    #[must_use]
    pub fn with_session(
        message: impl Into<String>,
        api_response: Value,
        bearer_token: &str,
        scheduler_id: impl Into<String>,
        request_body: Value,
    ) -> Self {
        Self {
            bearer_token: Some(redact_token(bearer_token)),
            scheduler_id: Some(scheduler_id.into()),
            request_body: Some(request_body),
            ..Self::success(message, api_response)
        }
    }

    /// Failure response with a human-readable message and a lower-level error.
    #[must_use]
    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            api_response: None,
            bearer_token: None,
            scheduler_id: None,
            request_body: None,
            timestamp: now_timestamp(),
            error: Some(error.into()),
        }
    }
}

/// First 20 characters of `token` followed by `...`.
#[must_use]
pub fn redact_token(token: &str) -> String {
    let prefix: String = token.chars().take(TOKEN_PREVIEW_LEN).collect();
    format!("{prefix}{TOKEN_PREVIEW_SUFFIX}")
}

/// ISO-8601 UTC timestamp with millisecond precision and `Z` suffix.
#[must_use]
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
