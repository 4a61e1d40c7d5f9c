//! Builder-pattern configuration loader.
//!
//! Responsibilities:
//! - Collect settings from explicit overrides and the environment.
//! - Apply documented defaults for the standalone importer.
//! - Validate required settings for the provisioner and fail fast.
//!
//! Does NOT handle:
//! - Parsing individual environment variables (see env.rs).
//!
//! Invariants:
//! - Precedence is: explicit setter > environment variable > default.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_DASHBOARD_PATH, DEFAULT_GRAFANA_PASS, DEFAULT_GRAFANA_URL, DEFAULT_GRAFANA_USER,
    DEFAULT_POLL_INTERVAL_SECS, DEFAULT_READY_TIMEOUT_SECS, MAX_READY_TIMEOUT_SECS,
};
use crate::types::{ImporterConfig, ProvisionerConfig};

/// Configuration loader that builds config from explicit values and environment variables.
#[derive(Default)]
pub struct ConfigLoader {
    grafana_url: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    dashboard_path: Option<PathBuf>,
    ready_timeout: Option<Duration>,
    poll_interval: Option<Duration>,
    region: Option<String>,
    workspace_id: Option<String>,
    grafana_endpoint: Option<String>,
    amp_workspace_id: Option<String>,
    dashboard_uris: Vec<String>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load environment variables from a `.env` file in the current directory.
    ///
    /// A missing file is not an error. Set `DOTENV_DISABLED=1` (or `true`) to skip
    /// loading entirely.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            tracing::debug!("DOTENV_DISABLED is set, skipping .env");
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn dotenv_disabled() -> bool {
        std::env::var("DOTENV_DISABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Apply environment variables on top of any explicit values.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Override the Grafana base URL.
    pub fn with_grafana_url(mut self, url: String) -> Self {
        self.grafana_url = Some(url);
        self
    }

    /// Override the basic-auth username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Override the dashboard file path.
    pub fn with_dashboard_path(mut self, path: PathBuf) -> Self {
        self.dashboard_path = Some(path);
        self
    }

    /// Override the readiness deadline.
    pub fn with_ready_timeout(mut self, timeout: Duration) -> Self {
        self.ready_timeout = Some(timeout);
        self
    }

    /// Override the health check interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    pub(crate) fn grafana_url(&self) -> Option<&String> {
        self.grafana_url.as_ref()
    }

    pub(crate) fn username(&self) -> Option<&String> {
        self.username.as_ref()
    }

    pub(crate) fn dashboard_path(&self) -> Option<&PathBuf> {
        self.dashboard_path.as_ref()
    }

    pub(crate) fn ready_timeout(&self) -> Option<Duration> {
        self.ready_timeout
    }

    pub(crate) fn poll_interval(&self) -> Option<Duration> {
        self.poll_interval
    }

    pub(crate) fn set_grafana_url(&mut self, url: Option<String>) {
        self.grafana_url = url;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_dashboard_path(&mut self, path: Option<PathBuf>) {
        self.dashboard_path = path;
    }

    pub(crate) fn set_ready_timeout(&mut self, timeout: Option<Duration>) {
        self.ready_timeout = timeout;
    }

    pub(crate) fn set_poll_interval(&mut self, interval: Option<Duration>) {
        self.poll_interval = interval;
    }

    pub(crate) fn set_region(&mut self, region: Option<String>) {
        self.region = region;
    }

    pub(crate) fn set_workspace_id(&mut self, workspace_id: Option<String>) {
        self.workspace_id = workspace_id;
    }

    pub(crate) fn set_grafana_endpoint(&mut self, endpoint: Option<String>) {
        self.grafana_endpoint = endpoint;
    }

    pub(crate) fn set_amp_workspace_id(&mut self, amp_workspace_id: Option<String>) {
        self.amp_workspace_id = amp_workspace_id;
    }

    pub(crate) fn set_dashboard_uris(&mut self, uris: Vec<String>) {
        self.dashboard_uris = uris;
    }

    /// Build the standalone importer configuration, filling in defaults.
    pub fn build_importer(self) -> Result<ImporterConfig, ConfigError> {
        let grafana_url = self
            .grafana_url
            .unwrap_or_else(|| DEFAULT_GRAFANA_URL.to_string());
        let grafana_url = validate_url("GRAFANA_URL", grafana_url)?;

        let ready_timeout = self
            .ready_timeout
            .unwrap_or(Duration::from_secs(DEFAULT_READY_TIMEOUT_SECS));
        if ready_timeout.is_zero() || ready_timeout.as_secs() > MAX_READY_TIMEOUT_SECS {
            return Err(ConfigError::InvalidValue {
                var: "GRAFANA_READY_TIMEOUT".to_string(),
                message: format!(
                    "must be between 1 and {} seconds (got {})",
                    MAX_READY_TIMEOUT_SECS,
                    ready_timeout.as_secs()
                ),
            });
        }

        let poll_interval = self
            .poll_interval
            .unwrap_or(Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS));
        if poll_interval.is_zero() {
            return Err(ConfigError::InvalidValue {
                var: "GRAFANA_POLL_INTERVAL".to_string(),
                message: "must be at least 1 second".to_string(),
            });
        }

        tracing::debug!(
            grafana_url = %grafana_url,
            ready_timeout_secs = ready_timeout.as_secs(),
            poll_interval_secs = poll_interval.as_secs(),
            "Importer configuration resolved"
        );

        Ok(ImporterConfig {
            grafana_url,
            username: self
                .username
                .unwrap_or_else(|| DEFAULT_GRAFANA_USER.to_string()),
            password: self
                .password
                .unwrap_or_else(|| SecretString::new(DEFAULT_GRAFANA_PASS.to_string().into())),
            dashboard_path: self
                .dashboard_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DASHBOARD_PATH)),
            ready_timeout,
            poll_interval,
        })
    }

    /// Build the provisioner configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] naming the first required variable that is unset.
    pub fn build_provisioner(self) -> Result<ProvisionerConfig, ConfigError> {
        let region = self
            .region
            .ok_or_else(|| ConfigError::MissingEnvVar("AWS_REGION".to_string()))?;
        let workspace_id = self
            .workspace_id
            .ok_or_else(|| ConfigError::MissingEnvVar("GRAFANA_WORKSPACE_ID".to_string()))?;
        let grafana_endpoint = self
            .grafana_endpoint
            .ok_or_else(|| ConfigError::MissingEnvVar("GRAFANA_ENDPOINT".to_string()))?;
        let grafana_endpoint = validate_url("GRAFANA_ENDPOINT", grafana_endpoint)?;
        let amp_workspace_id = self
            .amp_workspace_id
            .ok_or_else(|| ConfigError::MissingEnvVar("AMP_WORKSPACE_ID".to_string()))?;

        tracing::debug!(
            region = %region,
            workspace_id = %workspace_id,
            dashboards = self.dashboard_uris.len(),
            "Provisioner configuration resolved"
        );

        Ok(ProvisionerConfig {
            region,
            workspace_id,
            grafana_endpoint,
            amp_workspace_id,
            dashboard_uris: self.dashboard_uris,
        })
    }
}

/// Check that `value` is an http(s) URL and strip trailing slashes.
fn validate_url(var: &str, value: String) -> Result<String, ConfigError> {
    let parsed = url::Url::parse(&value).map_err(|_| ConfigError::InvalidUrl {
        var: var.to_string(),
        url: value.clone(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            var: var.to_string(),
            url: value,
        });
    }
    Ok(value.trim_end_matches('/').to_string())
}
