//! Data models for Grafana API requests and responses.

mod dashboards;
mod datasources;

pub use dashboards::{DashboardDefinition, ImportRequest, ImportResponse};
pub use datasources::{DataSourceDefinition, DataSourceJsonData, UpsertOutcome};
