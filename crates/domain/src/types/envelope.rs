//! Request bodies sent to the commerce API
//!
//! Field order matches what the commerce API has always received; the
//! workspace enables `serde_json/preserve_order` so the order survives
//! conversion to `serde_json::Value`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::catalog::SchedulerType;
use super::credentials::Credentials;
use crate::constants::REQUEST_TYPE_SOURCE;

/// Body of `POST /api/client/Token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    /// Refresh token from the credentials.
    pub refresh_token: String,
}

/// Body of `POST /api/Index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerRequest {
    /// Session parameters.
    pub context: SchedulerContext,
}

/// Context block of [`SchedulerRequest`] (camelCase on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerContext {
    /// Commerce client id.
    pub client_id: String,
    /// Commerce subscription key.
    pub subscription_key: String,
    /// Instance type.
    pub instance_type: String,
    /// Session kind being opened.
    pub scheduler_type: SchedulerType,
    /// Always `Source`.
    pub request_type: String,
    /// Storefront endpoint code.
    pub endpoint_code: String,
}

impl SchedulerRequest {
    /// Scheduler request for `scheduler_type` built from `credentials`.
    #[must_use]
    pub fn new(credentials: &Credentials, scheduler_type: SchedulerType) -> Self {
        Self {
            context: SchedulerContext {
                client_id: credentials.client_id.clone(),
                subscription_key: credentials.subscription_key.clone(),
                instance_type: credentials.instance_type.clone(),
                scheduler_type,
                request_type: REQUEST_TYPE_SOURCE.to_string(),
                endpoint_code: credentials.endpoint_code.clone(),
            },
        }
    }
}

/// Context block of the standard envelope (`PascalCase` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiContext {
    /// Commerce client id.
    pub client_id: String,
    /// Commerce subscription key.
    pub subscription_key: String,
    /// Instance type.
    pub instance_type: String,
    /// Storefront endpoint code.
    pub endpoint_code: String,
    /// Always `true`; payloads are sent in clear JSON.
    #[serde(rename = "isNotEncrypted")]
    pub is_not_encrypted: bool,
    /// Session kind the scheduler id was issued for.
    pub scheduler_type: SchedulerType,
    /// Always `Source`.
    pub request_type: String,
    /// Id returned by `/api/Index`.
    pub scheduler_id: String,
}

/// Envelope used by `PullData`, `PushData` and `PullResponse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StandardRequestBody {
    /// Session context.
    pub context: ApiContext,
    /// Parsed request data, `[]` when the raw input was not JSON.
    pub request_data: Value,
    /// Batch-size hint passed through untouched.
    pub packet_size: i64,
    /// Free-text type hint; serialized as `null` when absent.
    #[serde(rename = "type")]
    pub type_hint: Option<String>,
}

/// Lower-case context block of the `PushResponse` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushResponseContext {
    /// Commerce client id.
    pub client_id: String,
    /// Commerce subscription key.
    pub subscription_key: String,
    /// Instance type.
    pub instance_type: String,
    /// Always `PushData`.
    pub scheduler_type: SchedulerType,
    /// Storefront endpoint code (note the `endPointCode` spelling).
    #[serde(rename = "endPointCode")]
    pub end_point_code: String,
    /// Id returned by `/api/Index`.
    pub scheduler_id: String,
    /// Always `true`.
    pub is_not_encrypted: bool,
}

/// Envelope used by `PushResponse`. Carries no `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushResponseBody {
    /// Session context.
    pub context: PushResponseContext,
    /// Batch-size hint passed through untouched.
    pub packet_size: i64,
    /// Parsed response acknowledgements.
    pub request_data: Value,
}

impl PushResponseBody {
    /// `PushResponse` envelope for an open `PushData` session.
    #[must_use]
    pub fn new(
        credentials: &Credentials,
        scheduler_id: &str,
        packet_size: i64,
        request_data: Value,
    ) -> Self {
        Self {
            context: PushResponseContext {
                client_id: credentials.client_id.clone(),
                subscription_key: credentials.subscription_key.clone(),
                instance_type: credentials.instance_type.clone(),
                scheduler_type: SchedulerType::PushData,
                end_point_code: credentials.endpoint_code.clone(),
                scheduler_id: scheduler_id.to_string(),
                is_not_encrypted: true,
            },
            packet_size,
            request_data,
        }
    }
}

/// Either envelope, serialized without a tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequestEnvelope {
    /// `PullData`, `PushData` and `PullResponse` body.
    Standard(StandardRequestBody),
    /// `PushResponse` body.
    PushResponse(PushResponseBody),
}
