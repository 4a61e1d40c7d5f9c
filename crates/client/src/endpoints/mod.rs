//! REST API endpoint implementations.
//!
//! Each function issues exactly one HTTP request. Higher-level behavior
//! (readiness polling, update-then-create fallback) lives on
//! [`crate::GrafanaClient`].

mod dashboards;
mod datasources;
mod health;
mod request;

pub use dashboards::import_dashboard;
pub use datasources::{create_datasource, update_datasource_by_uid};
pub use health::check_health;
pub use request::send_request;
