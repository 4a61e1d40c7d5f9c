//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Expose flags that override the environment configuration.
//!
//! Non-responsibilities:
//! - Does not read `GRAFANA_*` variables itself; defaults and validation
//!   live in `grafana_config::ConfigLoader`.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "grafana-import")]
#[command(
    about = "Wait for Grafana to become healthy, then import a dashboard",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Environment:\n  GRAFANA_URL, GRAFANA_USER, GRAFANA_PASS, DASHBOARD_PATH,\n  GRAFANA_READY_TIMEOUT, GRAFANA_POLL_INTERVAL, GRAFANA_OTLP_ENDPOINT\n\nExamples:\n  grafana-import\n  grafana-import --grafana-url http://localhost:3000 --dashboard-path ./overview.json\n  grafana-import --skip-wait --timeout 30\n"
)]
pub struct Cli {
    /// Base URL of the Grafana server (overrides GRAFANA_URL)
    #[arg(long, value_name = "URL")]
    pub grafana_url: Option<String>,

    /// Basic-auth username (overrides GRAFANA_USER; the password is only read from GRAFANA_PASS)
    #[arg(long, value_name = "USER")]
    pub grafana_user: Option<String>,

    /// Dashboard JSON file to import (overrides DASHBOARD_PATH)
    #[arg(long, value_name = "FILE")]
    pub dashboard_path: Option<PathBuf>,

    /// Seconds to wait for Grafana to report healthy (overrides GRAFANA_READY_TIMEOUT)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Seconds between health checks (overrides GRAFANA_POLL_INTERVAL)
    #[arg(long, value_name = "SECS")]
    pub poll_interval: Option<u64>,

    /// Import immediately without waiting for the health endpoint
    #[arg(long)]
    pub skip_wait: bool,

    /// OTLP collector endpoint for trace export
    #[arg(long, env = "GRAFANA_OTLP_ENDPOINT", value_name = "URL")]
    pub otlp_endpoint: Option<String>,

    /// Service name reported in exported traces
    #[arg(long, default_value = "grafana-import")]
    pub otel_service_name: String,
}
