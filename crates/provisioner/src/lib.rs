//! Stack-lifecycle provisioning for a managed Grafana workspace.
//!
//! On Create/Update events the handler issues a short-lived admin API key,
//! upserts the Prometheus data source, and imports dashboards fetched from
//! S3. Delete events are acknowledged without any backend calls. Every
//! invocation ends with exactly one callback to the orchestrator.
//!
//! # Modules
//! - [`event`]: lifecycle event and invocation context
//! - [`response`]: callback envelope
//! - [`locator`]: `s3://bucket/key` parsing
//! - [`store`]: dashboard object storage
//! - [`keys`]: workspace API key issuance
//! - [`callback`]: delivery of the callback envelope
//! - [`handler`]: the Create/Update/Delete state machine

pub mod callback;
pub mod error;
pub mod event;
pub mod handler;
pub mod keys;
pub mod locator;
pub mod response;
pub mod store;

pub use callback::CallbackClient;
pub use error::{ProvisionError, Result};
pub use event::{InvocationContext, LifecycleEvent, RequestType};
pub use handler::LifecycleHandler;
pub use keys::{ApiKeyIssuer, GrafanaWorkspaceKeys};
pub use locator::ObjectLocator;
pub use response::{CallbackResponse, ResponseStatus};
pub use store::{DashboardStore, S3DashboardStore, fetch_dashboard_json};
