//! Error types for the Grafana client.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Grafana client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication configuration missing.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from Grafana.
    ///
    /// `message` carries the raw response body.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Grafana did not report healthy before the deadline.
    #[error("Grafana did not become ready within {0:?}")]
    Timeout(Duration),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Local dashboard file could not be read.
    #[error("Failed to read dashboard file {path}: {source}")]
    DashboardRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dashboard contents are not valid JSON.
    #[error("Invalid dashboard JSON: {0}")]
    InvalidDashboard(#[source] serde_json::Error),
}

impl ClientError {
    /// Check if a failed data source update should fall back to create.
    ///
    /// Grafana answers `PUT /api/datasources/uid/{uid}` with 404 when the uid
    /// does not exist, and some versions answer 400 instead.
    pub fn is_upsert_fallback_status(status: u16) -> bool {
        matches!(status, 400 | 404)
    }
}
