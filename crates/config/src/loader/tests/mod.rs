//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, cleared so the host environment cannot leak in.
pub const ALL_VARS: [&str; 11] = [
    "GRAFANA_URL",
    "GRAFANA_USER",
    "GRAFANA_PASS",
    "DASHBOARD_PATH",
    "GRAFANA_READY_TIMEOUT",
    "GRAFANA_POLL_INTERVAL",
    "AWS_REGION",
    "GRAFANA_WORKSPACE_ID",
    "GRAFANA_ENDPOINT",
    "AMP_WORKSPACE_ID",
    "DASHBOARD_URIS",
];

/// Run `f` with all loader variables unset except the given overrides.
pub fn with_clean_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
    let mut kvs: Vec<(&str, Option<&str>)> = ALL_VARS.iter().map(|k| (*k, None)).collect();
    for &(key, value) in vars {
        kvs.retain(|(k, _)| *k != key);
        kvs.push((key, Some(value)));
    }
    temp_env::with_vars(kvs, f);
}
