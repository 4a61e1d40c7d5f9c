//! Data source endpoints.

use reqwest::Client;

use crate::auth::AuthStrategy;
use crate::endpoints::send_request;
use crate::error::Result;
use crate::models::DataSourceDefinition;

/// Update an existing data source with `PUT {base}/api/datasources/uid/{uid}`.
pub async fn update_datasource_by_uid(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    datasource: &DataSourceDefinition,
) -> Result<()> {
    let endpoint = format!("/api/datasources/uid/{}", datasource.uid);
    let url = format!("{}{}", base_url, endpoint);

    let builder = auth.apply(client.put(&url)).json(datasource);
    send_request(builder, &endpoint, "PUT").await?;

    Ok(())
}

/// Create a data source with `POST {base}/api/datasources`.
pub async fn create_datasource(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    datasource: &DataSourceDefinition,
) -> Result<()> {
    let url = format!("{}/api/datasources", base_url);

    let builder = auth.apply(client.post(&url)).json(datasource);
    send_request(builder, "/api/datasources", "POST").await?;

    Ok(())
}
