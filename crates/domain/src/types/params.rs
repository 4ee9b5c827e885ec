//! Per-item argument bundle
//!
//! Everything an operation needs from one workflow item is passed explicitly
//! through [`ItemParameters`]; there is no ambient "current item" state.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::catalog::{EntityType, Family};
use crate::constants::DEFAULT_PACKET_SIZE;

const DEFAULT_PUSH_REQUEST_DATA: &str = r#"[{"TargetId":"C00180","SourceId":"16","MagentoId":null,"Reference":"16","MessageId":null,"Message":null,"Status":null,"InputData":"{\"sourceId\":\"16\",\"targetCustomerId\":\"C00180\"}"}]"#;
const DEFAULT_PULL_RESPONSE_REQUEST_DATA: &str = r#"[{"sourceId":"string","targetId":"string","reference":"string","message":"string","result":true,"inputData":"string","messageId":0,"statusId":0,"lastSyncTime":"2025-08-22T06:56:37.387Z"}]"#;
const DEFAULT_PUSH_RESPONSE_REQUEST_DATA: &str = r#"[{"sourceId":"string","targetId":"string","reference":"string","message":"string","result":true,"inputData":"string","messageId":0,"statusId":0,"lastSyncTime":"2025-08-22T07:25:48.426Z"}]"#;
const DEFAULT_CUSTOMER_DATA_JSON: &str = "{\n  \"displayName\": \"John Doe\",\n  \"type\": \"Person\",\n  \"email\": \"john.doe@example.com\",\n  \"phoneNumber\": \"+1-555-0123\"\n}";

/// Parameters read from one workflow item.
///
/// Missing fields take the connector's UI defaults. JSON-typed fields accept
/// either a raw string or an already-parsed JSON value; a parsed value is
/// kept in its serialized string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemParameters {
    /// Batch-size hint for every commerce family.
    pub packet_size: i64,
    /// `PullData` request data.
    #[serde(deserialize_with = "raw_json")]
    pub request_data: String,
    /// `PullData` type hint.
    pub pull_data_type: Option<String>,
    /// `PushData` request data.
    #[serde(deserialize_with = "raw_json")]
    pub push_request_data: String,
    /// `PushData` type hint.
    pub push_type: Option<String>,
    /// `PullResponse` request data.
    #[serde(deserialize_with = "raw_json")]
    pub pull_response_request_data: String,
    /// `PullResponse` type hint.
    pub pull_response_type: Option<String>,
    /// `PushResponse` request data.
    #[serde(deserialize_with = "raw_json")]
    pub push_response_request_data: String,
    /// Accepted for parity with the other families; the `PushResponse`
    /// envelope has no `type` field so it is never sent.
    pub push_response_type: Option<String>,
    /// Customer object posted to Business Central.
    #[serde(deserialize_with = "raw_json")]
    pub customer_data_json: String,
}

impl Default for ItemParameters {
    fn default() -> Self {
        Self {
            packet_size: DEFAULT_PACKET_SIZE,
            request_data: "[]".to_string(),
            pull_data_type: None,
            push_request_data: DEFAULT_PUSH_REQUEST_DATA.to_string(),
            push_type: None,
            pull_response_request_data: DEFAULT_PULL_RESPONSE_REQUEST_DATA.to_string(),
            pull_response_type: None,
            push_response_request_data: DEFAULT_PUSH_RESPONSE_REQUEST_DATA.to_string(),
            push_response_type: None,
            customer_data_json: DEFAULT_CUSTOMER_DATA_JSON.to_string(),
        }
    }
}

fn raw_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(raw) => raw,
        other => other.to_string(),
    })
}

/// Inputs of one commerce family call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyInput {
    /// Entity in the endpoint path.
    pub entity: EntityType,
    /// Batch-size hint.
    pub packet_size: i64,
    /// Request data as supplied; parsed (with `[]` fallback) by the executor.
    pub raw_request_data: String,
    /// `None` when the hint is absent or empty.
    pub type_hint: Option<String>,
}

impl ItemParameters {
    /// Select the request data and type hint the given family reads.
    ///
    /// Returns `None` for [`Family::BcCreateCustomer`], which reads
    /// `customerDataJson` instead.
    #[must_use]
    pub fn family_input(&self, entity: EntityType, family: Family) -> Option<FamilyInput> {
        let (raw, hint) = match family {
            Family::PullData => (&self.request_data, &self.pull_data_type),
            Family::PushData => (&self.push_request_data, &self.push_type),
            Family::PullResponse => (&self.pull_response_request_data, &self.pull_response_type),
            Family::PushResponse => (&self.push_response_request_data, &self.push_response_type),
            Family::BcCreateCustomer => return None,
        };

        Some(FamilyInput {
            entity,
            packet_size: self.packet_size,
            raw_request_data: raw.clone(),
            type_hint: hint.as_ref().filter(|h| !h.is_empty()).cloned(),
        })
    }
}
