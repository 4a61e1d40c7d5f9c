//! grafana-import - wait for Grafana, then import a dashboard.
//!
//! Responsibilities:
//! - Parse command-line flags and build the importer configuration.
//! - Set up logging and optional OTLP trace export.
//! - Run the import and translate failures into structured exit codes.
//!
//! Does NOT handle:
//! - HTTP details or readiness polling (see `crates/client`).
//! - Environment defaults and validation (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can feed clap `env` defaults.
//! - Command-line flags take precedence over environment values.

mod args;
mod commands;
mod error;

use std::time::Duration;

use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use grafana_client::TracingConfig;
use grafana_config::{ConfigLoader, ImporterConfig};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    let loader = match ConfigLoader::new().load_dotenv() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load environment: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let cli = Cli::parse();

    let mut tracing_config = TracingConfig::new().with_service_name(cli.otel_service_name.clone());
    if let Some(ref endpoint) = cli.otlp_endpoint {
        tracing_config = tracing_config.with_otlp_endpoint(endpoint);
    }
    let tracing_guard = match tracing_config.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize tracing: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let config = match build_config(loader, &cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            tracing_guard.shutdown();
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = match commands::import::run(config, cli.skip_wait).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    // Flush pending spans before exiting
    tracing_guard.shutdown();

    std::process::exit(exit_code.as_i32());
}

/// Environment values first, then command-line overrides.
fn build_config(loader: ConfigLoader, cli: &Cli) -> anyhow::Result<ImporterConfig> {
    let mut loader = loader;

    if let Some(ref url) = cli.grafana_url {
        loader = loader.with_grafana_url(url.clone());
    }
    if let Some(ref user) = cli.grafana_user {
        loader = loader.with_username(user.clone());
    }
    if let Some(ref path) = cli.dashboard_path {
        loader = loader.with_dashboard_path(path.clone());
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_ready_timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = cli.poll_interval {
        loader = loader.with_poll_interval(Duration::from_secs(secs));
    }

    Ok(loader.from_env()?.build_importer()?)
}
