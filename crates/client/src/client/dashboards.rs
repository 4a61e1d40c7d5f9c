//! Dashboard import.

use tracing::info;

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{DashboardDefinition, ImportResponse};

impl GrafanaClient {
    /// Import a dashboard into the root folder, overwriting any existing version.
    pub async fn import_dashboard(&self, dashboard: &DashboardDefinition) -> Result<ImportResponse> {
        let response =
            endpoints::import_dashboard(&self.http, &self.base_url, &self.auth, dashboard).await?;
        info!(status = response.status, auth = self.auth.kind(), "Dashboard imported");
        Ok(response)
    }
}
