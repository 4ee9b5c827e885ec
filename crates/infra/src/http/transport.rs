//! reqwest implementation of the core [`HttpTransport`] port

use async_trait::async_trait;
use i95connect_core::HttpTransport;
use i95connect_domain::{ConnectorError, HttpSettings, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Response};
use serde_json::Value;
use tracing::instrument;

use super::client::HttpClient;
use crate::errors::conversions::status_error;
use crate::errors::InfraError;

/// JSON transport backed by [`HttpClient`].
#[derive(Clone)]
pub struct ReqwestTransport {
    http: HttpClient,
}

impl ReqwestTransport {
    /// Transport over an existing client.
    #[must_use]
    pub const fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Transport with a client built from [`HttpSettings`].
    ///
    /// # Errors
    /// Fails when the underlying client cannot be built.
    pub fn from_settings(settings: &HttpSettings) -> Result<Self> {
        Ok(Self::new(HttpClient::from_settings(settings)?))
    }

    /// Read the body, failing on non-2xx statuses.
    async fn read_text(response: Response) -> Result<String> {
        let status = response.status();
        let text = response.text().await.map_err(|err| ConnectorError::from(InfraError::from(err)))?;

        if status.is_success() {
            Ok(text)
        } else {
            Err(status_error(status, text))
        }
    }
}

/// JSON when the body parses, the raw text otherwise, `null` when empty.
fn decode_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, bearer, body))]
    async fn post_json(&self, url: &str, bearer: Option<&str>, body: &Value) -> Result<Value> {
        let mut request = self
            .http
            .request(Method::POST, url)
            .header(ACCEPT, "application/json")
            .json(body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = self.http.send(request).await?;
        Ok(decode_body(Self::read_text(response).await?))
    }

    #[instrument(skip(self, bearer))]
    async fn get_json(&self, url: &str, bearer: &str) -> Result<Value> {
        let request = self
            .http
            .request(Method::GET, url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(bearer);

        let response = self.http.send(request).await?;
        Ok(decode_body(Self::read_text(response).await?))
    }

    #[instrument(skip(self, form))]
    async fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<Value> {
        let request = self.http.request(Method::POST, url).form(form);

        let response = self.http.send(request).await?;
        Ok(Value::String(Self::read_text(response).await?))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn transport() -> ReqwestTransport {
        ReqwestTransport::new(HttpClient::new().unwrap())
    }

    #[tokio::test]
    async fn post_json_sends_bearer_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/Index"))
            .and(header("authorization", "Bearer tok"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "context": { "clientId": "c" } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "schedulerId": "S-1" })))
            .expect(1)
            .mount(&server)
            .await;

        let value = transport()
            .post_json(
                &format!("{}/api/Index", server.uri()),
                Some("tok"),
                &json!({ "context": { "clientId": "c" } }),
            )
            .await
            .unwrap();

        assert_eq!(value, json!({ "schedulerId": "S-1" }));
    }

    #[tokio::test]
    async fn post_json_without_bearer_sends_no_authorization() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("plain text"))
            .mount(&server)
            .await;

        let value = transport().post_json(&server.uri(), None, &json!({})).await.unwrap();
        assert_eq!(value, json!("plain text"));

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn unauthorized_maps_to_auth() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
            .mount(&server)
            .await;

        let err = transport().get_json(&server.uri(), "tok").await.unwrap_err();
        assert!(matches!(err, ConnectorError::Auth(ref msg) if msg.contains("401")), "{err:?}");
    }

    #[tokio::test]
    async fn server_error_maps_to_upstream_with_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = transport().post_json(&server.uri(), Some("t"), &json!([])).await.unwrap_err();
        assert_eq!(err, ConnectorError::Upstream { status: 500, body: "boom".into() });
    }

    #[tokio::test]
    async fn empty_body_is_null() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).mount(&server).await;

        let value = transport().get_json(&server.uri(), "tok").await.unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn post_form_returns_raw_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("grant_type=client_credentials"))
            .and(body_string_contains("scope=https%3A%2F%2Fapi.businesscentral.dynamics.com%2F.default"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"access_token":"bc"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let value = transport()
            .post_form(
                &server.uri(),
                &[
                    ("grant_type", "client_credentials"),
                    ("scope", "https://api.businesscentral.dynamics.com/.default"),
                ],
            )
            .await
            .unwrap();

        assert_eq!(value, Value::String(r#"{"access_token":"bc"}"#.to_string()));
    }

    #[tokio::test]
    async fn connection_refused_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = transport().get_json(&format!("http://{addr}"), "tok").await.unwrap_err();
        assert!(matches!(err, ConnectorError::Network(_)), "{err:?}");
    }
}
