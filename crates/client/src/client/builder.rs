//! Client builder for constructing [`GrafanaClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, auth_strategy)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, redirects)
//!
//! # Invariants
//! - `base_url` and `auth_strategy` are required fields and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes

use std::time::Duration;

use crate::auth::AuthStrategy;
use crate::client::GrafanaClient;
use crate::error::{ClientError, Result};
use grafana_config::{
    ImporterConfig,
    constants::{DEFAULT_HEALTH_REQUEST_TIMEOUT_SECS, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`GrafanaClient`].
pub struct GrafanaClientBuilder {
    base_url: Option<String>,
    auth_strategy: Option<AuthStrategy>,
    timeout: Duration,
    health_request_timeout: Duration,
}

impl Default for GrafanaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_strategy: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            health_request_timeout: Duration::from_secs(DEFAULT_HEALTH_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl GrafanaClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Grafana server, e.g. `http://grafana:3000`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the authentication strategy.
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Set the request timeout for API calls.
    ///
    /// Default is 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout of a single health check.
    ///
    /// Default is 5 seconds.
    pub fn health_request_timeout(mut self, timeout: Duration) -> Self {
        self.health_request_timeout = timeout;
        self
    }

    /// Create a client builder from the standalone importer configuration.
    ///
    /// Uses basic authentication with the configured username and password.
    pub fn from_importer_config(mut self, config: &ImporterConfig) -> Self {
        self.base_url = Some(config.grafana_url.clone());
        self.auth_strategy = Some(AuthStrategy::Basic {
            username: config.username.clone(),
            password: config.password.clone(),
        });
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"http://grafana:3000/"` -> `"http://grafana:3000"`
    /// - `"http://grafana:3000//"` -> `"http://grafana:3000"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`GrafanaClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided or is empty.
    /// Returns [`ClientError::AuthFailed`] if `auth_strategy` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<GrafanaClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("base_url is empty".to_string()));
        }

        let auth = self
            .auth_strategy
            .ok_or_else(|| ClientError::AuthFailed("auth_strategy is required".to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        Ok(GrafanaClient {
            http,
            base_url,
            auth,
            health_request_timeout: self.health_request_timeout,
        })
    }
}
