//! Outbound HTTP port
//!
//! Executors talk to the commerce API and Business Central only through this
//! trait; the reqwest implementation lives in the infra crate.

use async_trait::async_trait;
use i95connect_domain::Result;
use serde_json::Value;

/// JSON-over-HTTP transport used by every executor.
///
/// Implementations map transport failures and non-2xx statuses into
/// [`ConnectorError`](i95connect_domain::ConnectorError). Response bodies
/// that are not JSON are returned as [`Value::String`]; empty bodies as
/// [`Value::Null`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// `POST` a JSON body, optionally with bearer auth.
    ///
    /// # Errors
    /// Returns the mapped transport or status error.
    async fn post_json(&self, url: &str, bearer: Option<&str>, body: &Value) -> Result<Value>;

    /// `GET` with bearer auth.
    ///
    /// # Errors
    /// Returns the mapped transport or status error.
    async fn get_json(&self, url: &str, bearer: &str) -> Result<Value>;

    /// `POST` an `application/x-www-form-urlencoded` body without auth.
    ///
    /// The raw response text is returned as [`Value::String`] so callers can
    /// decide how to parse it.
    ///
    /// # Errors
    /// Returns the mapped transport or status error.
    async fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<Value>;
}
