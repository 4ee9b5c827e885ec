//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{BC_API_BASE_URL, BC_LOGIN_BASE_URL};
use crate::Credentials;

/// Connector configuration
///
/// `credentials` is required; the other sections fall back to defaults when
/// omitted from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// Commerce and Business Central credentials.
    pub credentials: Credentials,
    /// Outbound HTTP client settings.
    #[serde(default)]
    pub http: HttpSettings,
    /// Business Central login and API roots.
    #[serde(default)]
    pub business_central: BusinessCentralEndpoints,
}

impl ConnectorConfig {
    /// Configuration with default HTTP and Business Central settings.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            http: HttpSettings::default(),
            business_central: BusinessCentralEndpoints::default(),
        }
    }
}

/// Outbound HTTP settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("i95connect/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Business Central endpoints
///
/// Overridable so the OAuth and API calls can be pointed at a sandbox or a
/// local mock server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessCentralEndpoints {
    /// Identity platform root; the tenant and token path are appended.
    pub login_base_url: String,
    /// API root up to and including the API version segment.
    pub api_base_url: String,
}

impl Default for BusinessCentralEndpoints {
    fn default() -> Self {
        Self {
            login_base_url: BC_LOGIN_BASE_URL.to_string(),
            api_base_url: BC_API_BASE_URL.to_string(),
        }
    }
}

impl BusinessCentralEndpoints {
    /// `{login}/{tenant}/oauth2/v2.0/token`
    #[must_use]
    pub fn token_url(&self, tenant_id: &str) -> String {
        format!("{}/{}/oauth2/v2.0/token", self.login_base_url.trim_end_matches('/'), tenant_id)
    }

    /// `{api}/{tenant}/{environment}/api/v2.0/companies`
    #[must_use]
    pub fn companies_url(&self, tenant_id: &str, environment: &str) -> String {
        format!(
            "{}/{}/{}/api/v2.0/companies",
            self.api_base_url.trim_end_matches('/'),
            tenant_id,
            environment
        )
    }

    /// `{companies}({company_id})/customers`
    #[must_use]
    pub fn customers_url(&self, tenant_id: &str, environment: &str, company_id: &str) -> String {
        format!("{}({})/customers", self.companies_url(tenant_id, environment), company_id)
    }
}
