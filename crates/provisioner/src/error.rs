//! Error types for the provisioner.
//!
//! The `Display` text of [`ProvisionError`] becomes the `Reason` of a
//! FAILED callback, so messages must never contain credentials.

use grafana_client::ClientError;
use thiserror::Error;

/// Result type alias for provisioning operations.
pub type Result<T> = std::result::Result<T, ProvisionError>;

/// Errors raised while handling a lifecycle event.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// Configuration could not be loaded at cold start.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The workspace API refused to issue a key.
    #[error("Failed to create workspace API key: {0}")]
    ApiKey(String),

    /// An object could not be fetched or decoded.
    #[error("Failed to fetch {locator}: {message}")]
    Storage { locator: String, message: String },

    /// Grafana API failure.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The orchestrator callback could not be delivered.
    #[error("Failed to deliver lifecycle callback: {0}")]
    Callback(String),
}
