//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse environment variables for both utilities.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final configuration (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Values already set on the loader (CLI overrides) are not replaced.
//! - Empty or whitespace-only environment variables are treated as unset,
//!   except `GRAFANA_PASS`, which is used exactly as set.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::DASHBOARD_URI_SEPARATOR;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Split a comma-separated locator list, trimming entries and dropping blanks.
///
/// Order is preserved: `"s3://b/a.json, ,s3://b/c.json"` yields
/// `["s3://b/a.json", "s3://b/c.json"]`.
pub fn parse_dashboard_uris(raw: &str) -> Vec<String> {
    raw.split(DASHBOARD_URI_SEPARATOR)
        .map(str::trim)
        .filter(|uri| !uri.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_secs(var: &str, value: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = value.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: "must be a number of seconds".to_string(),
    })?;
    Ok(Duration::from_secs(secs))
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    // Standalone importer
    if loader.grafana_url().is_none()
        && let Some(url) = env_var_or_none("GRAFANA_URL")
    {
        loader.set_grafana_url(Some(url));
    }
    if loader.username().is_none()
        && let Some(user) = env_var_or_none("GRAFANA_USER")
    {
        loader.set_username(Some(user));
    }
    // Passwords are taken verbatim: no trimming, and empty is a real value
    if let Ok(pass) = std::env::var("GRAFANA_PASS") {
        loader.set_password(Some(SecretString::new(pass.into())));
    }
    if loader.dashboard_path().is_none()
        && let Some(path) = env_var_or_none("DASHBOARD_PATH")
    {
        loader.set_dashboard_path(Some(PathBuf::from(path)));
    }
    if loader.ready_timeout().is_none()
        && let Some(timeout) = env_var_or_none("GRAFANA_READY_TIMEOUT")
    {
        loader.set_ready_timeout(Some(parse_secs("GRAFANA_READY_TIMEOUT", &timeout)?));
    }
    if loader.poll_interval().is_none()
        && let Some(interval) = env_var_or_none("GRAFANA_POLL_INTERVAL")
    {
        loader.set_poll_interval(Some(parse_secs("GRAFANA_POLL_INTERVAL", &interval)?));
    }

    // Stack-lifecycle provisioner
    if let Some(region) = env_var_or_none("AWS_REGION") {
        loader.set_region(Some(region));
    }
    if let Some(workspace_id) = env_var_or_none("GRAFANA_WORKSPACE_ID") {
        loader.set_workspace_id(Some(workspace_id));
    }
    if let Some(endpoint) = env_var_or_none("GRAFANA_ENDPOINT") {
        loader.set_grafana_endpoint(Some(endpoint));
    }
    if let Some(amp_workspace_id) = env_var_or_none("AMP_WORKSPACE_ID") {
        loader.set_amp_workspace_id(Some(amp_workspace_id));
    }
    if let Some(uris) = env_var_or_none("DASHBOARD_URIS") {
        loader.set_dashboard_uris(parse_dashboard_uris(&uris));
    }

    Ok(())
}
