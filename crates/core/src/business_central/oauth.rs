//! Business Central client-credentials token
//!
//! Tokens are requested per item and never cached.

use i95connect_domain::constants::BC_OAUTH_SCOPE;
use i95connect_domain::{BusinessCentralCredentials, BusinessCentralEndpoints, ConnectorError, Result};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::transport_ports::HttpTransport;

/// Acquire an access token with the client-credentials grant.
///
/// The token endpoint answers with JSON text; an already-decoded object is
/// accepted as well.
///
/// # Errors
/// Transport errors are propagated; unparseable text or a missing
/// `access_token` yields [`ConnectorError::Auth`].
#[instrument(skip_all, fields(tenant_id = %bc.tenant_id))]
pub async fn acquire_token(
    transport: &dyn HttpTransport,
    endpoints: &BusinessCentralEndpoints,
    bc: &BusinessCentralCredentials<'_>,
) -> Result<String> {
    let url = endpoints.token_url(bc.tenant_id);
    let form = [
        ("grant_type", "client_credentials"),
        ("client_id", bc.client_id),
        ("client_secret", bc.client_secret),
        ("scope", BC_OAUTH_SCOPE),
    ];

    debug!(method = "POST", %url, "Requesting Business Central access token");
    let response = transport.post_form(&url, &form).await?;

    let token_data = match response {
        Value::String(raw) => serde_json::from_str::<Value>(&raw).map_err(|err| {
            ConnectorError::Auth(format!("Failed to parse token response: {err}"))
        })?,
        other => other,
    };

    token_data
        .get("access_token")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| {
            ConnectorError::Auth(
                "Failed to obtain access token from Microsoft OAuth endpoint".to_string(),
            )
        })
}
