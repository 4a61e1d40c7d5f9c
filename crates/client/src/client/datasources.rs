//! Data source upsert.

use tracing::{debug, info};

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{DataSourceDefinition, UpsertOutcome};

impl GrafanaClient {
    /// Make sure a data source with `datasource.uid` exists with these settings.
    ///
    /// Tries an update by uid first. A 404 or 400 answer means the uid is
    /// unknown, so the data source is created instead. Any other failure is
    /// returned unchanged. Repeated calls are idempotent.
    pub async fn ensure_datasource(&self, datasource: &DataSourceDefinition) -> Result<UpsertOutcome> {
        match endpoints::update_datasource_by_uid(&self.http, &self.base_url, &self.auth, datasource)
            .await
        {
            Ok(()) => {
                info!(uid = %datasource.uid, "Data source updated");
                Ok(UpsertOutcome::Updated)
            }
            Err(ClientError::ApiError { status, .. })
                if ClientError::is_upsert_fallback_status(status) =>
            {
                debug!(uid = %datasource.uid, status, "Data source update rejected, creating");
                endpoints::create_datasource(&self.http, &self.base_url, &self.auth, datasource)
                    .await?;
                info!(uid = %datasource.uid, "Data source created");
                Ok(UpsertOutcome::Created)
            }
            Err(e) => Err(e),
        }
    }
}
