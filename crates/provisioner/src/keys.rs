//! Workspace API key issuance.

use std::future::Future;

use aws_sdk_grafana::error::DisplayErrorContext;
use grafana_config::constants::{API_KEY_NAME, API_KEY_ROLE, API_KEY_TTL_SECS};
use secrecy::SecretString;
use tracing::info;

use crate::error::{ProvisionError, Result};

/// Issues short-lived admin API keys for a Grafana workspace.
pub trait ApiKeyIssuer: Send + Sync {
    fn issue_admin_key(&self, workspace_id: &str) -> impl Future<Output = Result<SecretString>> + Send;
}

/// [`ApiKeyIssuer`] backed by the Amazon Managed Grafana API.
///
/// Each call creates a new key named `cdk-provision` with the `ADMIN` role
/// and a one hour lifetime.
#[derive(Debug, Clone)]
pub struct GrafanaWorkspaceKeys {
    client: aws_sdk_grafana::Client,
}

impl GrafanaWorkspaceKeys {
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self::from_client(aws_sdk_grafana::Client::new(sdk_config))
    }

    pub fn from_client(client: aws_sdk_grafana::Client) -> Self {
        Self { client }
    }
}

impl ApiKeyIssuer for GrafanaWorkspaceKeys {
    async fn issue_admin_key(&self, workspace_id: &str) -> Result<SecretString> {
        let output = self
            .client
            .create_workspace_api_key()
            .key_name(API_KEY_NAME)
            .key_role(API_KEY_ROLE)
            .seconds_to_live(API_KEY_TTL_SECS)
            .workspace_id(workspace_id)
            .send()
            .await
            .map_err(|e| ProvisionError::ApiKey(DisplayErrorContext(&e).to_string()))?;

        info!(
            workspace_id,
            key_name = API_KEY_NAME,
            ttl_secs = API_KEY_TTL_SECS,
            "Workspace API key issued"
        );

        Ok(SecretString::new(output.key().to_string().into()))
    }
}
