//! Shared fixtures for the wiremock scenario tests.

#![allow(dead_code, clippy::expect_used)]

use std::sync::Arc;

use i95connect_core::Dispatcher;
use i95connect_domain::{BusinessCentralEndpoints, Credentials};
use i95connect_infra::{HttpClient, ReqwestTransport};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const COMMERCE_TOKEN: &str = "commerce-bearer-token-0123456789abcdef";
pub const BC_TOKEN: &str = "bc-access-token";
pub const TENANT: &str = "contoso-tenant";

/// Credentials pointing the commerce API at the mock server.
pub fn credentials(server: &MockServer) -> Credentials {
    Credentials {
        refresh_token: "refresh-xyz".into(),
        client_id: "client-42".into(),
        subscription_key: "sub-key-42".into(),
        instance_type: "Staging".into(),
        endpoint_code: "MAG2".into(),
        base_url: format!("{}/", server.uri()),
        tenant_id: Some(TENANT.into()),
        client_id_bc: Some("bc-app".into()),
        client_secret_bc: Some("bc-app-secret".into()),
        environment: Some("Sandbox".into()),
    }
}

/// Business Central endpoints pointing at the mock server.
pub fn endpoints(server: &MockServer) -> BusinessCentralEndpoints {
    BusinessCentralEndpoints {
        login_base_url: format!("{}/login", server.uri()),
        api_base_url: format!("{}/bc/v2.0", server.uri()),
    }
}

pub fn dispatcher_with(server: &MockServer, credentials: Credentials) -> Dispatcher {
    let transport = ReqwestTransport::new(HttpClient::new().expect("http client"));
    Dispatcher::new(Arc::new(transport), credentials, endpoints(server))
}

pub fn dispatcher(server: &MockServer) -> Dispatcher {
    dispatcher_with(server, credentials(server))
}

/// Mount the token and scheduler exchanges for one commerce call.
pub async fn mount_session(server: &MockServer, scheduler_type: &str, scheduler_id: &str) {
    Mock::given(method("POST"))
        .and(path("/api/client/Token"))
        .and(body_json(json!({ "refreshToken": "refresh-xyz" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "accessToken": { "token": COMMERCE_TOKEN } })),
        )
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/Index"))
        .and(header("authorization", format!("Bearer {COMMERCE_TOKEN}").as_str()))
        .and(body_partial_json(json!({ "context": { "schedulerType": scheduler_type } })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "schedulerId": scheduler_id })),
        )
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a successful Business Central token exchange.
pub async fn mount_bc_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(format!("/login/{TENANT}/oauth2/v2.0/token")))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!(r#"{{"token_type":"Bearer","access_token":"{BC_TOKEN}"}}"#)),
        )
        .expect(1)
        .mount(server)
        .await;
}
