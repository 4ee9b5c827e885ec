//! Family executor
//!
//! One pipeline serves all four commerce families: token, scheduler id,
//! envelope, entity call. The family only selects the scheduler tag, the
//! endpoint suffix and the envelope shape.

use std::sync::Arc;

use i95connect_domain::{
    ApiResponse, ConnectorError, Credentials, EnvelopeShape, Family, FamilyInput,
    PushResponseBody, RequestEnvelope, Result, StandardRequestBody,
};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::helpers::{build_api_context, get_bearer_token, get_scheduler_id};
use crate::transport_ports::HttpTransport;

/// Executes commerce family calls for one set of credentials.
pub struct CommerceExecutor {
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<Credentials>,
}

impl CommerceExecutor {
    /// Executor sharing `transport` and calling with `credentials`.
    #[must_use]
    pub const fn new(transport: Arc<dyn HttpTransport>, credentials: Arc<Credentials>) -> Self {
        Self { transport, credentials }
    }

    /// Run one family call. Never fails; errors become a failure
    /// [`ApiResponse`].
    #[instrument(skip(self, input), fields(entity = %input.entity, family = %family))]
    pub async fn execute(&self, family: Family, input: &FamilyInput) -> ApiResponse {
        let label = input.entity.as_str();

        match self.run(family, input).await {
            Ok(response) => {
                info!("Commerce call succeeded");
                response
            }
            Err(err) => {
                warn!(error = %err, kind = err.label(), "Commerce call failed");
                ApiResponse::failure(family.failure_message(label), err.to_string())
            }
        }
    }

    async fn run(&self, family: Family, input: &FamilyInput) -> Result<ApiResponse> {
        let (Some(scheduler_type), Some(suffix), Some(shape)) =
            (family.scheduler_type(), family.endpoint_suffix(), family.envelope_shape())
        else {
            return Err(ConnectorError::Internal(format!("{family} is not a commerce family")));
        };

        let request_data = parse_request_data(&input.raw_request_data);
        let transport = self.transport.as_ref();
        let credentials = self.credentials.as_ref();

        let token = get_bearer_token(transport, credentials).await?;
        let scheduler_id = get_scheduler_id(transport, credentials, &token, scheduler_type).await?;

        let envelope = match shape {
            EnvelopeShape::Standard => RequestEnvelope::Standard(StandardRequestBody {
                context: build_api_context(credentials, &scheduler_id, scheduler_type),
                request_data,
                packet_size: input.packet_size,
                type_hint: input.type_hint.clone(),
            }),
            EnvelopeShape::PushResponse => RequestEnvelope::PushResponse(PushResponseBody::new(
                credentials,
                &scheduler_id,
                input.packet_size,
                request_data,
            )),
        };
        let request_body = serde_json::to_value(&envelope)?;

        let base = credentials.api_base();
        let entity = input.entity;
        let url = format!("{base}/api/{entity}/{suffix}");
        debug!(method = "POST", %url, "Calling commerce entity endpoint");
        let api_response = self.transport.post_json(&url, Some(&token), &request_body).await?;

        Ok(ApiResponse::with_session(
            family.success_message(input.entity.as_str()),
            api_response,
            &token,
            scheduler_id,
            request_body,
        ))
    }
}

/// Parse caller-supplied request data, substituting `[]` when it is not
/// valid JSON.
#[must_use]
pub fn parse_request_data(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|err| {
        warn!(error = %err, "Request data is not valid JSON, sending empty array");
        Value::Array(Vec::new())
    })
}
