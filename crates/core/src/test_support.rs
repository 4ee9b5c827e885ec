//! In-memory transport for executor tests
//!
//! Replays scripted replies in order and records every call it receives.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use i95connect_domain::{ConnectorError, Credentials, Result};
use serde_json::Value;

use crate::transport_ports::HttpTransport;

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<Value>,
    pub form: Vec<(String, String)>,
}

/// Scripted reply for the next call.
#[derive(Debug, Clone)]
pub struct Reply(Result<Value>);

impl Reply {
    pub fn json(value: Value) -> Self {
        Self(Ok(value))
    }

    pub fn error(err: ConnectorError) -> Self {
        Self(Err(err))
    }
}

#[derive(Default)]
pub struct StubTransport {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) -> Result<Value> {
        self.calls.lock().unwrap().push(call);
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply(result)) => result,
            None => Err(ConnectorError::Network("no scripted reply left".to_string())),
        }
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn post_json(&self, url: &str, bearer: Option<&str>, body: &Value) -> Result<Value> {
        self.record(RecordedCall {
            method: "POST",
            url: url.to_string(),
            bearer: bearer.map(str::to_owned),
            body: Some(body.clone()),
            form: Vec::new(),
        })
    }

    async fn get_json(&self, url: &str, bearer: &str) -> Result<Value> {
        self.record(RecordedCall {
            method: "GET",
            url: url.to_string(),
            bearer: Some(bearer.to_string()),
            body: None,
            form: Vec::new(),
        })
    }

    async fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<Value> {
        self.record(RecordedCall {
            method: "POST",
            url: url.to_string(),
            bearer: None,
            body: None,
            form: form.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect(),
        })
    }
}

pub fn sample_credentials() -> Credentials {
    Credentials {
        refresh_token: "refresh-abc".into(),
        client_id: "client-1".into(),
        subscription_key: "sub-key".into(),
        instance_type: "Staging".into(),
        endpoint_code: "MAG2".into(),
        base_url: "https://commerce.example/".into(),
        tenant_id: Some("tenant-1".into()),
        client_id_bc: Some("bc-client".into()),
        client_secret_bc: Some("bc-secret".into()),
        environment: None,
    }
}

/// Replies for a successful token + scheduler exchange.
pub fn session_replies(transport: StubTransport, token: &str, scheduler_id: &str) -> StubTransport {
    transport
        .reply(Reply::json(serde_json::json!({ "accessToken": { "token": token } })))
        .reply(Reply::json(serde_json::json!({ "schedulerId": scheduler_id })))
}
