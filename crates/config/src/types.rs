//! Resolved configuration structures.
//!
//! Responsibilities:
//! - Hold the fully resolved settings for each utility.
//! - Derive values computed from settings (e.g., the AMP query URL).
//!
//! Does NOT handle:
//! - Reading environment variables (see `loader/env.rs`).
//! - Validation of raw values (see `loader/builder.rs`).
//!
//! Invariants:
//! - Secret values use `secrecy::SecretString` so they never show up in `Debug` output.
//! - Base URLs are stored without trailing slashes.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

/// Settings for the standalone readiness waiter and dashboard importer.
#[derive(Debug, Clone)]
pub struct ImporterConfig {
    /// Grafana base URL, e.g. `http://grafana:3000`.
    pub grafana_url: String,
    /// Basic-auth username.
    pub username: String,
    /// Basic-auth password.
    pub password: SecretString,
    /// Local path of the dashboard definition file.
    pub dashboard_path: PathBuf,
    /// Overall deadline for Grafana to report healthy.
    pub ready_timeout: Duration,
    /// Fixed delay between health checks.
    pub poll_interval: Duration,
}

/// Settings for the stack-lifecycle provisioner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionerConfig {
    pub region: String,
    pub workspace_id: String,
    /// Managed Grafana workspace endpoint, e.g. `https://g-xyz.grafana-workspace.eu-west-1.amazonaws.com`.
    pub grafana_endpoint: String,
    pub amp_workspace_id: String,
    /// Object-storage locators, in the order they were configured.
    pub dashboard_uris: Vec<String>,
}

impl ProvisionerConfig {
    /// Query endpoint of the Amazon Managed Prometheus workspace.
    pub fn amp_query_url(&self) -> String {
        format!(
            "https://aps-workspaces.{}.amazonaws.com/workspaces/{}/api/v1/query",
            self.region, self.amp_workspace_id
        )
    }
}
