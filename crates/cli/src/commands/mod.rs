//! Command implementations.

pub mod import;

use anyhow::Result;
use grafana_client::GrafanaClient;
use grafana_config::ImporterConfig;

/// Build a basic-auth client from the importer configuration.
pub fn build_client_from_config(config: &ImporterConfig) -> Result<GrafanaClient> {
    Ok(GrafanaClient::builder()
        .from_importer_config(config)
        .build()?)
}
