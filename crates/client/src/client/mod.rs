//! Main Grafana API client and API methods.
//!
//! This module provides the primary [`GrafanaClient`] used by both the
//! standalone importer and the stack-lifecycle provisioner.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `health`: Single health checks and the readiness waiter
//! - `dashboards`: Dashboard import
//! - `datasources`: Data source upsert
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Credential issuance (API keys are obtained by the caller)

pub mod builder;

mod dashboards;
mod datasources;
mod health;

use std::time::Duration;

use crate::auth::AuthStrategy;

/// Grafana HTTP API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use grafana_client::{AuthStrategy, GrafanaClient};
/// use secrecy::SecretString;
///
/// let client = GrafanaClient::builder()
///     .base_url("http://grafana:3000".to_string())
///     .auth_strategy(AuthStrategy::Basic {
///         username: "admin".to_string(),
///         password: SecretString::new("admin".to_string().into()),
///     })
///     .build()?;
/// ```
#[derive(Debug)]
pub struct GrafanaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth: AuthStrategy,
    pub(crate) health_request_timeout: Duration,
}

impl GrafanaClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GrafanaClientBuilder {
        builder::GrafanaClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the authentication strategy.
    pub fn auth(&self) -> &AuthStrategy {
        &self.auth
    }
}
