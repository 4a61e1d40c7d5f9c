//! Configuration management for the Grafana provisioning utilities.
//!
//! This crate provides types and loaders for the standalone dashboard
//! importer and the stack-lifecycle provisioner, populated once from
//! environment variables (optionally seeded by a `.env` file).

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none, parse_dashboard_uris};
pub use types::{ImporterConfig, ProvisionerConfig};
