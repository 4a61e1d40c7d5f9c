//! Dashboard import endpoint.

use reqwest::Client;

use crate::auth::AuthStrategy;
use crate::endpoints::send_request;
use crate::error::Result;
use crate::models::{DashboardDefinition, ImportRequest, ImportResponse};

/// Import a dashboard with `POST {base}/api/dashboards/db`.
///
/// The body is always `{dashboard, overwrite: true, folderId: 0}`.
pub async fn import_dashboard(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    dashboard: &DashboardDefinition,
) -> Result<ImportResponse> {
    let url = format!("{}/api/dashboards/db", base_url);

    let builder = auth
        .apply(client.post(&url))
        .json(&ImportRequest::new(dashboard));

    let response = send_request(builder, "/api/dashboards/db", "POST").await?;
    let status = response.status().as_u16();
    let body = response.text().await?;

    Ok(ImportResponse { status, body })
}
