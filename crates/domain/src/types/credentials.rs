//! Connector credentials
//!
//! Supplied once per execution from configuration, read-only afterwards and
//! never persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BC_ENVIRONMENT;
use crate::{ConnectorError, Result};

const REDACTED: &str = "[REDACTED]";

/// Credentials for the commerce API and (optionally) Business Central.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Long-lived token exchanged for a bearer token on every item.
    pub refresh_token: String,
    /// Commerce client id.
    pub client_id: String,
    /// Commerce subscription key.
    pub subscription_key: String,
    /// Instance type, e.g. `Staging`.
    pub instance_type: String,
    /// Endpoint code of the connected storefront.
    pub endpoint_code: String,
    /// Commerce API root; a trailing `/` is tolerated.
    pub base_url: String,
    /// Azure AD tenant of the Business Central app registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Business Central app client id.
    #[serde(default, rename = "clientIdBC", skip_serializing_if = "Option::is_none")]
    pub client_id_bc: Option<String>,
    /// Business Central app client secret.
    #[serde(default, rename = "clientSecretBC", skip_serializing_if = "Option::is_none")]
    pub client_secret_bc: Option<String>,
    /// Business Central environment name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("refresh_token", &REDACTED)
            .field("client_id", &self.client_id)
            .field("subscription_key", &REDACTED)
            .field("instance_type", &self.instance_type)
            .field("endpoint_code", &self.endpoint_code)
            .field("base_url", &self.base_url)
            .field("tenant_id", &self.tenant_id)
            .field("client_id_bc", &self.client_id_bc)
            .field("client_secret_bc", &self.client_secret_bc.as_ref().map(|_| REDACTED))
            .field("environment", &self.environment)
            .finish()
    }
}

/// Borrowed view of the Business Central part of [`Credentials`], with the
/// environment default applied.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BusinessCentralCredentials<'a> {
    /// Azure AD tenant.
    pub tenant_id: &'a str,
    /// App registration client id.
    pub client_id: &'a str,
    /// App registration client secret.
    pub client_secret: &'a str,
    /// Environment segment of the API URL.
    pub environment: &'a str,
}

impl fmt::Debug for BusinessCentralCredentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BusinessCentralCredentials")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &REDACTED)
            .field("environment", &self.environment)
            .finish()
    }
}

/// Absent and empty count as unset; whitespace is kept as a value.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

impl Credentials {
    /// Commerce API base URL without a trailing `/`.
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Business Central credentials.
    ///
    /// An absent or empty environment falls back to `N8N`.
    ///
    /// # Errors
    /// Returns [`ConnectorError::Config`] when the tenant, client id or
    /// client secret is absent or empty.
    pub fn business_central(&self) -> Result<BusinessCentralCredentials<'_>> {
        match (
            non_empty(self.tenant_id.as_deref()),
            non_empty(self.client_id_bc.as_deref()),
            non_empty(self.client_secret_bc.as_deref()),
        ) {
            (Some(tenant_id), Some(client_id), Some(client_secret)) => {
                Ok(BusinessCentralCredentials {
                    tenant_id,
                    client_id,
                    client_secret,
                    environment: non_empty(self.environment.as_deref())
                        .unwrap_or(DEFAULT_BC_ENVIRONMENT),
                })
            }
            _ => Err(ConnectorError::Config(
                "Business Central credentials (Tenant ID, Client ID BC, Client Secret BC) are required"
                    .to_string(),
            )),
        }
    }
}
