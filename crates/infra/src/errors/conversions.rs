//! Conversions from external infrastructure errors into domain errors.

use i95connect_domain::ConnectorError;
use reqwest::{Error as HttpError, StatusCode};

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ConnectorError);

impl From<InfraError> for ConnectorError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ConnectorError> for InfraError {
    fn from(value: ConnectorError) -> Self {
        Self(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoConnectorError {
    fn into_connector(self) -> ConnectorError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ConnectorError */
/* -------------------------------------------------------------------------- */

impl IntoConnectorError for HttpError {
    fn into_connector(self) -> ConnectorError {
        if self.is_timeout() {
            return ConnectorError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return ConnectorError::Network(format!("HTTP connection failure: {self}"));
        }

        if let Some(status) = self.status() {
            return status_error(status, String::new());
        }

        if self.is_decode() {
            return ConnectorError::Serialization(format!("failed to decode response: {self}"));
        }

        ConnectorError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_connector())
    }
}

/* -------------------------------------------------------------------------- */
/* Non-2xx status → ConnectorError */
/* -------------------------------------------------------------------------- */

/// Map a non-success status and its body into a domain error.
///
/// 401/403 become [`ConnectorError::Auth`]; everything else keeps status and
/// body in [`ConnectorError::Upstream`].
#[must_use]
pub fn status_error(status: StatusCode, body: String) -> ConnectorError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            let reason = status.canonical_reason().unwrap_or("unauthorized");
            if body.is_empty() {
                ConnectorError::Auth(format!("HTTP {} {}", status.as_u16(), reason))
            } else {
                ConnectorError::Auth(format!("HTTP {} {}: {}", status.as_u16(), reason, body))
            }
        }
        _ => ConnectorError::Upstream { status: status.as_u16(), body },
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use reqwest::Client;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn forbidden_maps_to_auth_error() {
        let mapped = status_error(StatusCode::FORBIDDEN, "tenant disabled".into());
        assert_eq!(mapped, ConnectorError::Auth("HTTP 403 Forbidden: tenant disabled".into()));
    }

    #[test]
    fn server_error_keeps_status_and_body() {
        let mapped = status_error(StatusCode::BAD_GATEWAY, "upstream down".into());
        assert_eq!(mapped, ConnectorError::Upstream { status: 502, body: "upstream down".into() });
        assert_eq!(mapped.to_string(), "Request failed with status code 502: upstream down");
    }

    #[tokio::test]
    async fn http_status_401_maps_to_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(StatusCode::UNAUTHORIZED))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: ConnectorError = InfraError::from(error).into();
        match mapped {
            ConnectorError::Auth(msg) => assert!(msg.contains("401")),
            other => panic!("expected auth error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn connection_refused_maps_to_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();

        let mapped: ConnectorError = InfraError::from(error).into();
        assert!(matches!(mapped, ConnectorError::Network(_)), "got {mapped:?}");
    }
}
