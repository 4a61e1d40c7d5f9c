//! Grafana HTTP API client.
//!
//! This crate provides a small, typed client for the parts of the Grafana
//! HTTP API used during provisioning: the health endpoint, dashboard import,
//! and data source create/update. It supports basic authentication (local
//! Grafana) and bearer tokens (managed workspace API keys).

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod telemetry;

pub use auth::AuthStrategy;
pub use client::GrafanaClient;
pub use client::builder::GrafanaClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    DataSourceDefinition, DataSourceJsonData, DashboardDefinition, ImportRequest, ImportResponse,
    UpsertOutcome,
};
pub use telemetry::{TracingConfig, TracingError, TracingGuard};
