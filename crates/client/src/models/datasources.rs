//! Data source models.

use grafana_config::constants::{PROMETHEUS_DATASOURCE_NAME, PROMETHEUS_DATASOURCE_UID};
use serde::{Deserialize, Serialize};

/// Body of `PUT /api/datasources/uid/{uid}` and `POST /api/datasources`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub uid: String,
    pub access: String,
    pub url: String,
    #[serde(rename = "jsonData")]
    pub json_data: DataSourceJsonData,
}

/// Plugin-specific settings for a SigV4-signed Prometheus data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceJsonData {
    #[serde(rename = "httpMethod")]
    pub http_method: String,
    #[serde(rename = "sigV4Auth")]
    pub sig_v4_auth: bool,
    #[serde(rename = "sigV4Region")]
    pub sig_v4_region: String,
}

impl DataSourceDefinition {
    /// Prometheus data source with the well-known uid, signing requests with SigV4.
    pub fn prometheus(url: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: PROMETHEUS_DATASOURCE_NAME.to_string(),
            kind: "prometheus".to_string(),
            uid: PROMETHEUS_DATASOURCE_UID.to_string(),
            access: "proxy".to_string(),
            url: url.into(),
            json_data: DataSourceJsonData {
                http_method: "POST".to_string(),
                sig_v4_auth: true,
                sig_v4_region: region.into(),
            },
        }
    }
}

/// Which branch an ensure-data-source call took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The data source already existed and was updated in place.
    Updated,
    /// The update was rejected as unknown, so the data source was created.
    Created,
}
