//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::path::PathBuf;

use secrecy::SecretString;

#[allow(unused_imports)]
pub use grafana_client::{AuthStrategy, DashboardDefinition, GrafanaClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Absolute path of a fixture file.
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Load a JSON fixture as a dashboard definition.
#[allow(dead_code)]
pub fn load_dashboard(name: &str) -> DashboardDefinition {
    DashboardDefinition::from_path(&fixture_path(name)).expect("fixture should be valid JSON")
}

/// Basic auth with Grafana's out-of-the-box credentials.
#[allow(dead_code)]
pub fn admin_basic_auth() -> AuthStrategy {
    AuthStrategy::Basic {
        username: "admin".to_string(),
        password: SecretString::new("admin".to_string().into()),
    }
}

/// Bearer auth with a fixed test key.
#[allow(dead_code)]
pub fn test_bearer_auth() -> AuthStrategy {
    AuthStrategy::Bearer {
        token: SecretString::new("test-api-key".to_string().into()),
    }
}

/// Client pointed at a mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer, auth: AuthStrategy) -> GrafanaClient {
    GrafanaClient::builder()
        .base_url(server.uri())
        .auth_strategy(auth)
        .build()
        .expect("client should build")
}
