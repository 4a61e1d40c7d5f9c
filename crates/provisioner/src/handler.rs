//! The lifecycle state machine.
//!
//! # Invariants
//! - Every invocation produces exactly one [`CallbackResponse`], including
//!   payloads that do not deserialize
//! - Delete (and unrecognized) events touch no backend
//! - The first provisioning error aborts the remaining steps and becomes the
//!   FAILED `Reason`
//! - A callback that cannot be delivered is logged, never raised

use grafana_client::{AuthStrategy, DashboardDefinition, DataSourceDefinition, GrafanaClient};
use grafana_config::{ConfigError, ProvisionerConfig};
use serde_json::Value;
use tracing::{error, info};

use crate::callback::CallbackClient;
use crate::error::{ProvisionError, Result};
use crate::event::{InvocationContext, LifecycleEvent};
use crate::keys::ApiKeyIssuer;
use crate::response::CallbackResponse;
use crate::store::{DashboardStore, fetch_dashboard_json};

const OUTCOME_PROVISIONED: &str = "Provisioned";
const OUTCOME_DELETED: &str = "Deleted";

/// Handles lifecycle events for one Grafana workspace.
pub struct LifecycleHandler<K, S> {
    config: std::result::Result<ProvisionerConfig, ConfigError>,
    keys: K,
    store: S,
    callback: CallbackClient,
}

impl<K: ApiKeyIssuer, S: DashboardStore> LifecycleHandler<K, S> {
    /// Create a handler.
    ///
    /// `config` is the outcome of loading configuration at cold start. A
    /// failed load is kept so provisioning events can report it.
    pub fn new(
        config: std::result::Result<ProvisionerConfig, ConfigError>,
        keys: K,
        store: S,
        callback: CallbackClient,
    ) -> Self {
        Self {
            config,
            keys,
            store,
            callback,
        }
    }

    /// Parse a raw invocation payload, run it, and report the outcome.
    ///
    /// A payload that does not deserialize is answered FAILED, using
    /// whichever callback fields could be read from it.
    pub async fn handle_payload(&self, payload: &Value, context: &InvocationContext) -> CallbackResponse {
        match LifecycleEvent::from_payload(payload) {
            Ok(event) => self.handle(&event, context).await,
            Err(e) => {
                error!(error = %e, "Malformed lifecycle event");
                let event = LifecycleEvent::salvage(payload);
                let response =
                    CallbackResponse::failed(&event, context, format!("Invalid lifecycle event: {e}"));
                self.report(&event, &response).await;
                response
            }
        }
    }

    /// Run the event and report the outcome to its `ResponseURL`.
    pub async fn handle(&self, event: &LifecycleEvent, context: &InvocationContext) -> CallbackResponse {
        info!(
            request_type = ?event.request_type,
            request_id = %event.request_id,
            logical_resource_id = %event.logical_resource_id,
            "Handling lifecycle event"
        );

        let response = if event.request_type.provisions() {
            match self.provision().await {
                Ok(()) => CallbackResponse::success(event, context, OUTCOME_PROVISIONED),
                Err(e) => {
                    error!(error = %e, "Provisioning failed");
                    CallbackResponse::failed(event, context, e.to_string())
                }
            }
        } else {
            info!("Nothing to tear down");
            CallbackResponse::success(event, context, OUTCOME_DELETED)
        };

        self.report(event, &response).await;
        response
    }

    async fn report(&self, event: &LifecycleEvent, response: &CallbackResponse) {
        if let Err(e) = self
            .callback
            .send(event.response_url.as_deref(), response)
            .await
        {
            error!(error = %e, "Lifecycle callback was not delivered");
        }
    }

    async fn provision(&self) -> Result<()> {
        let config = self
            .config
            .as_ref()
            .map_err(|e| ProvisionError::Config(e.to_string()))?;

        let api_key = self.keys.issue_admin_key(&config.workspace_id).await?;

        let client = GrafanaClient::builder()
            .base_url(config.grafana_endpoint.clone())
            .auth_strategy(AuthStrategy::Bearer { token: api_key })
            .build()?;

        let datasource = DataSourceDefinition::prometheus(config.amp_query_url(), &config.region);
        let outcome = client.ensure_datasource(&datasource).await?;
        info!(?outcome, uid = %datasource.uid, "Prometheus data source ensured");

        let mut imported = 0usize;
        for raw in &config.dashboard_uris {
            let Some(body) = fetch_dashboard_json(&self.store, raw).await? else {
                continue;
            };
            let dashboard = DashboardDefinition::from_json_str(&body)?;
            client.import_dashboard(&dashboard).await?;
            imported += 1;
        }

        info!(imported, "Provisioning complete");
        Ok(())
    }
}
