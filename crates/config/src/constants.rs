//! Centralized constants for the Grafana provisioning workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Standalone Importer Defaults
// =============================================================================

/// Default Grafana base URL used by the standalone importer.
pub const DEFAULT_GRAFANA_URL: &str = "http://grafana:3000";

/// Default Grafana basic-auth username.
pub const DEFAULT_GRAFANA_USER: &str = "admin";

/// Default Grafana basic-auth password.
pub const DEFAULT_GRAFANA_PASS: &str = "admin";

/// Default location of the dashboard definition to import.
pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboards/liveevent-overview.json";

// =============================================================================
// Readiness Polling
// =============================================================================

/// Default overall deadline for Grafana to become healthy, in seconds.
pub const DEFAULT_READY_TIMEOUT_SECS: u64 = 120;

/// Fixed interval between health checks, in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 2;

/// Per-request timeout for a single health check, in seconds.
pub const DEFAULT_HEALTH_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Maximum allowed readiness deadline in seconds (1 hour).
pub const MAX_READY_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// HTTP Defaults
// =============================================================================

/// Default HTTP request timeout in seconds for Grafana API calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Provisioning
// =============================================================================

/// Name given to the short-lived workspace API key.
pub const API_KEY_NAME: &str = "cdk-provision";

/// Role granted to the short-lived workspace API key.
pub const API_KEY_ROLE: &str = "ADMIN";

/// Lifetime of the short-lived workspace API key in seconds (1 hour).
pub const API_KEY_TTL_SECS: i32 = 3600;

/// Well-known uid of the provisioned Prometheus data source.
pub const PROMETHEUS_DATASOURCE_UID: &str = "prom";

/// Display name of the provisioned Prometheus data source.
pub const PROMETHEUS_DATASOURCE_NAME: &str = "Prometheus";

/// Separator between entries of `DASHBOARD_URIS`.
pub const DASHBOARD_URI_SEPARATOR: char = ',';
