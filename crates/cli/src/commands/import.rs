//! Import command implementation.
//!
//! Waits for the Grafana health endpoint (unless skipped), then reads the
//! configured dashboard file and posts it to `/api/dashboards/db`.

use anyhow::{Context, Result};
use grafana_client::{ClientError, DashboardDefinition};
use grafana_config::ImporterConfig;
use tracing::info;

pub async fn run(config: ImporterConfig, skip_wait: bool) -> Result<()> {
    let client = crate::commands::build_client_from_config(&config)?;

    if skip_wait {
        info!("Skipping readiness wait");
    } else {
        info!(
            base_url = client.base_url(),
            timeout_secs = config.ready_timeout.as_secs(),
            "Waiting for Grafana to become ready"
        );
        client
            .wait_until_ready(config.ready_timeout, config.poll_interval)
            .await?;
    }

    let dashboard = DashboardDefinition::from_path(&config.dashboard_path)?;

    match client.import_dashboard(&dashboard).await {
        Ok(response) => {
            println!("Imported dashboard: {}", response.status);
            println!("{}", response.body);
            Ok(())
        }
        Err(ClientError::ApiError {
            status,
            url,
            message,
        }) => {
            println!("Import failed: {}", status);
            println!("{}", message);
            Err(ClientError::ApiError {
                status,
                url,
                message,
            })
            .with_context(|| format!("Failed to import {}", config.dashboard_path.display()))
        }
        Err(e) => Err(e.into()),
    }
}
