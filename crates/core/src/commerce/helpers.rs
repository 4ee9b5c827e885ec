//! Commerce API session helpers
//!
//! Every commerce call authenticates and resolves a scheduler id first.
//! Nothing is cached between items.

use i95connect_domain::constants::{REQUEST_TYPE_SOURCE, SCHEDULER_PATH, TOKEN_PATH};
use i95connect_domain::{
    ApiContext, ConnectorError, Credentials, Result, SchedulerRequest, SchedulerType,
    TokenRequest,
};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::transport_ports::HttpTransport;

/// Exchange the refresh token for a bearer token.
///
/// `POST {baseUrl}/api/client/Token` with `{ refreshToken }`; reads
/// `accessToken.token` from the response.
///
/// # Errors
/// Transport errors are propagated; a response without a string
/// `accessToken.token` yields [`ConnectorError::MissingField`].
#[instrument(skip_all)]
pub async fn get_bearer_token(
    transport: &dyn HttpTransport,
    credentials: &Credentials,
) -> Result<String> {
    let base = credentials.api_base();
    let url = format!("{base}{TOKEN_PATH}");
    let body = serde_json::to_value(TokenRequest {
        refresh_token: credentials.refresh_token.clone(),
    })?;

    debug!(method = "POST", %url, "Requesting commerce bearer token");
    let response = transport.post_json(&url, None, &body).await?;

    response
        .pointer("/accessToken/token")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| ConnectorError::MissingField("accessToken.token".to_string()))
}

/// Resolve a scheduler id for one pull/push session.
///
/// `POST {baseUrl}/api/Index` with bearer auth. A numeric `schedulerId` is
/// accepted and rendered as its decimal string.
///
/// # Errors
/// Transport errors are propagated; a response without a string or numeric
/// `schedulerId` yields [`ConnectorError::MissingField`].
#[instrument(skip(transport, credentials, token))]
pub async fn get_scheduler_id(
    transport: &dyn HttpTransport,
    credentials: &Credentials,
    token: &str,
    scheduler_type: SchedulerType,
) -> Result<String> {
    let base = credentials.api_base();
    let url = format!("{base}{SCHEDULER_PATH}");
    let body = serde_json::to_value(SchedulerRequest::new(credentials, scheduler_type))?;

    debug!(method = "POST", %url, "Requesting scheduler id");
    let response = transport.post_json(&url, Some(token), &body).await?;

    match response.get("schedulerId") {
        Some(Value::String(id)) => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        _ => Err(ConnectorError::MissingField("schedulerId".to_string())),
    }
}

/// Build the `PascalCase` context block of the standard envelope.
#[must_use]
pub fn build_api_context(
    credentials: &Credentials,
    scheduler_id: &str,
    scheduler_type: SchedulerType,
) -> ApiContext {
    ApiContext {
        client_id: credentials.client_id.clone(),
        subscription_key: credentials.subscription_key.clone(),
        instance_type: credentials.instance_type.clone(),
        endpoint_code: credentials.endpoint_code.clone(),
        is_not_encrypted: true,
        scheduler_type,
        request_type: REQUEST_TYPE_SOURCE.to_string(),
        scheduler_id: scheduler_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_support::{sample_credentials, Reply, StubTransport};

    #[tokio::test]
    async fn bearer_token_reads_nested_field() {
        let transport = StubTransport::new()
            .reply(Reply::json(json!({ "accessToken": { "token": "tok-123" } })));

        let token = get_bearer_token(&transport, &sample_credentials()).await.unwrap();
        assert_eq!(token, "tok-123");

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "POST");
        assert_eq!(calls[0].url, "https://commerce.example/api/client/Token");
        assert_eq!(calls[0].bearer, None);
        assert_eq!(calls[0].body, Some(json!({ "refreshToken": "refresh-abc" })));
    }

    #[tokio::test]
    async fn bearer_token_missing_field_fails() {
        let transport = StubTransport::new().reply(Reply::json(json!({ "accessToken": {} })));

        let err = get_bearer_token(&transport, &sample_credentials()).await.unwrap_err();
        assert_eq!(err, ConnectorError::MissingField("accessToken.token".to_string()));
    }

    #[tokio::test]
    async fn scheduler_id_sends_context_with_bearer() {
        let transport = StubTransport::new().reply(Reply::json(json!({ "schedulerId": "S-42" })));

        let id = get_scheduler_id(&transport, &sample_credentials(), "tok", SchedulerType::PullData)
            .await
            .unwrap();
        assert_eq!(id, "S-42");

        let calls = transport.calls();
        assert_eq!(calls[0].url, "https://commerce.example/api/Index");
        assert_eq!(calls[0].bearer.as_deref(), Some("tok"));
        assert_eq!(
            calls[0].body,
            Some(json!({ "context": {
                "clientId": "client-1",
                "subscriptionKey": "sub-key",
                "instanceType": "Staging",
                "schedulerType": "PullData",
                "requestType": "Source",
                "endpointCode": "MAG2"
            }}))
        );
    }

    #[tokio::test]
    async fn scheduler_id_accepts_numbers() {
        let transport = StubTransport::new().reply(Reply::json(json!({ "schedulerId": 9001 })));

        let id = get_scheduler_id(&transport, &sample_credentials(), "tok", SchedulerType::PushData)
            .await
            .unwrap();
        assert_eq!(id, "9001");
    }

    #[tokio::test]
    async fn scheduler_id_propagates_transport_errors() {
        let transport = StubTransport::new()
            .reply(Reply::error(ConnectorError::Upstream { status: 500, body: "down".into() }));

        let err = get_scheduler_id(&transport, &sample_credentials(), "tok", SchedulerType::PushData)
            .await
            .unwrap_err();
        assert!(matches!(err, ConnectorError::Upstream { status: 500, .. }));
    }

    #[test]
    fn api_context_is_built_from_credentials() {
        let ctx = build_api_context(&sample_credentials(), "S-1", SchedulerType::PushData);
        assert_eq!(ctx.client_id, "client-1");
        assert_eq!(ctx.endpoint_code, "MAG2");
        assert!(ctx.is_not_encrypted);
        assert_eq!(ctx.request_type, "Source");
        assert_eq!(ctx.scheduler_id, "S-1");
        assert_eq!(ctx.scheduler_type, SchedulerType::PushData);
    }
}
