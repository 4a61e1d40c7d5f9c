//! Shared test utilities for grafana-import integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic command factory that prevents dotenv loading.
//! - Write throwaway dashboard files.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Polling defaults are shortened so failing waits end quickly.

use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

/// Returns a hermetic `grafana-import` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `GRAFANA_*` variables from the host are cleared.
pub fn grafana_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("grafana-import");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("GRAFANA_URL")
        .env_remove("GRAFANA_USER")
        .env_remove("GRAFANA_PASS")
        .env_remove("DASHBOARD_PATH")
        .env_remove("GRAFANA_READY_TIMEOUT")
        .env_remove("GRAFANA_POLL_INTERVAL")
        .env_remove("GRAFANA_OTLP_ENDPOINT");

    cmd
}

/// Returns a hermetic command pointed at `base_url` and `dashboard`.
#[allow(dead_code)]
pub fn grafana_cmd_for(base_url: &str, dashboard: &NamedTempFile) -> Command {
    let mut cmd = grafana_cmd();
    cmd.env("GRAFANA_URL", base_url)
        .env("DASHBOARD_PATH", dashboard.path())
        .env("GRAFANA_READY_TIMEOUT", "2")
        .env("GRAFANA_POLL_INTERVAL", "1");
    cmd
}

/// Write `contents` to a temporary `.json` file.
#[allow(dead_code)]
pub fn dashboard_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp dashboard");
    file.write_all(contents.as_bytes())
        .expect("write temp dashboard");
    file
}

/// A small, valid dashboard document.
#[allow(dead_code)]
pub fn sample_dashboard() -> NamedTempFile {
    dashboard_file(r#"{"uid": "liveevent-overview", "title": "Live Event Overview", "panels": []}"#)
}
