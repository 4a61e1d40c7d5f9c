//! Dashboard import models.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ClientError, Result};

/// A dashboard definition.
///
/// The document is opaque: it is parsed only to confirm it is JSON and is
/// forwarded to Grafana unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DashboardDefinition(serde_json::Value);

impl DashboardDefinition {
    /// Wrap an already-parsed JSON value.
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Parse a dashboard from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map(Self)
            .map_err(ClientError::InvalidDashboard)
    }

    /// Read and parse a dashboard file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ClientError::DashboardRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Body of `POST /api/dashboards/db`.
///
/// Overwrite is always forced and the target is always the root folder;
/// there is no way to construct a request with other values.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest<'a> {
    dashboard: &'a DashboardDefinition,
    overwrite: bool,
    folder_id: i64,
}

impl<'a> ImportRequest<'a> {
    pub fn new(dashboard: &'a DashboardDefinition) -> Self {
        Self {
            dashboard,
            overwrite: true,
            folder_id: 0,
        }
    }
}

/// Outcome of a successful dashboard import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResponse {
    /// HTTP status code reported by Grafana.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}
