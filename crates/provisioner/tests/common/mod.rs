//! Shared fakes and helpers for provisioner integration tests.
//!
//! # Invariants
//! - Grafana and the orchestrator callback are served by one wiremock server;
//!   the callback lives under `/cfn-callback`
//! - Fakes share their state through `Arc`, so clones handed to the handler
//!   can still be inspected by the test

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use grafana_config::ProvisionerConfig;
use grafana_provisioner::{
    ApiKeyIssuer, CallbackClient, DashboardStore, InvocationContext, LifecycleEvent,
    LifecycleHandler, ObjectLocator, ProvisionError, RequestType,
};
use secrecy::SecretString;
use serde_json::Value;
use wiremock::matchers::{method, path};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, Request, ResponseTemplate};

#[allow(dead_code)]
pub const CALLBACK_PATH: &str = "/cfn-callback";
#[allow(dead_code)]
pub const LOG_STREAM: &str = "2026/10/18/[$LATEST]0123456789abcdef";

/// API key issuer that counts calls and can be told to fail.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct FakeKeys {
    calls: Arc<AtomicUsize>,
    failure: Option<String>,
}

#[allow(dead_code)]
impl FakeKeys {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ApiKeyIssuer for FakeKeys {
    async fn issue_admin_key(&self, _workspace_id: &str) -> grafana_provisioner::Result<SecretString> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(ProvisionError::ApiKey(message.clone())),
            None => Ok(SecretString::new("test-api-key".to_string().into())),
        }
    }
}

/// In-memory object store that records every fetch.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct FakeStore {
    objects: Arc<HashMap<String, String>>,
    fetched: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl FakeStore {
    pub fn with_objects(objects: &[(&str, &str)]) -> Self {
        Self {
            objects: Arc::new(
                objects
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
            ..Default::default()
        }
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

impl DashboardStore for FakeStore {
    async fn fetch(&self, locator: &ObjectLocator) -> grafana_provisioner::Result<String> {
        let name = locator.to_string();
        self.fetched.lock().unwrap().push(name.clone());
        self.objects
            .get(&name)
            .cloned()
            .ok_or_else(|| ProvisionError::Storage {
                locator: name,
                message: "NoSuchKey: The specified key does not exist.".to_string(),
            })
    }
}

/// Provisioner configuration pointed at the mock server.
#[allow(dead_code)]
pub fn config_for(server: &MockServer, dashboard_uris: &[&str]) -> ProvisionerConfig {
    ProvisionerConfig {
        region: "eu-west-1".to_string(),
        workspace_id: "g-0123456789".to_string(),
        grafana_endpoint: server.uri(),
        amp_workspace_id: "ws-amp-1".to_string(),
        dashboard_uris: dashboard_uris.iter().map(|s| s.to_string()).collect(),
    }
}

#[allow(dead_code)]
pub fn handler(
    config: Result<ProvisionerConfig, grafana_config::ConfigError>,
    keys: &FakeKeys,
    store: &FakeStore,
) -> LifecycleHandler<FakeKeys, FakeStore> {
    LifecycleHandler::new(
        config,
        keys.clone(),
        store.clone(),
        CallbackClient::new().unwrap(),
    )
}

/// Event whose callback URL points at the mock server.
#[allow(dead_code)]
pub fn event(request_type: RequestType, server: &MockServer) -> LifecycleEvent {
    LifecycleEvent {
        request_type,
        response_url: Some(format!(
            "{}{}?X-Amz-Algorithm=AWS4-HMAC-SHA256&X-Amz-Signature=abc123",
            server.uri(),
            CALLBACK_PATH
        )),
        stack_id: "arn:aws:cloudformation:eu-west-1:123456789012:stack/live-event/1".to_string(),
        request_id: "a1b2c3".to_string(),
        logical_resource_id: "GrafanaProvisioner".to_string(),
    }
}

#[allow(dead_code)]
pub fn context() -> InvocationContext {
    InvocationContext::new(LOG_STREAM)
}

/// Accept callbacks with 200.
#[allow(dead_code)]
pub async fn mount_callback(server: &MockServer) {
    Mock::given(method("PUT"))
        .and(path(CALLBACK_PATH))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}

/// Accept data source updates and dashboard imports with 200.
#[allow(dead_code)]
pub async fn mount_grafana_ok(server: &MockServer) {
    Mock::given(method("PUT"))
        .and(path("/api/datasources/uid/prom"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(server)
        .await;
}

/// Requests that reached the callback path.
#[allow(dead_code)]
pub async fn callback_requests(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path() == CALLBACK_PATH)
        .collect()
}

/// Requests that reached anything other than the callback path.
#[allow(dead_code)]
pub async fn grafana_requests(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path() != CALLBACK_PATH)
        .collect()
}

/// `dashboard.uid` of every import request, in arrival order.
#[allow(dead_code)]
pub async fn imported_uids(server: &MockServer) -> Vec<String> {
    grafana_requests(server)
        .await
        .into_iter()
        .filter(|r| r.url.path() == "/api/dashboards/db")
        .map(|r| {
            let body: Value = serde_json::from_slice(&r.body).unwrap();
            body["dashboard"]["uid"].as_str().unwrap_or_default().to_string()
        })
        .collect()
}

/// The single callback body, asserting exactly one was sent.
#[allow(dead_code)]
pub async fn single_callback_body(server: &MockServer) -> Value {
    let callbacks = callback_requests(server).await;
    assert_eq!(callbacks.len(), 1, "expected exactly one callback");
    serde_json::from_slice(&callbacks[0].body).unwrap()
}
