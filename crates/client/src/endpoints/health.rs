//! Health endpoint.

use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};

/// Issue one `GET {base}/api/health`, bounded by `request_timeout`.
///
/// Succeeds only on `200 OK`; other success codes are reported as
/// [`ClientError::ApiError`]. No authentication is sent.
pub async fn check_health(client: &Client, base_url: &str, request_timeout: Duration) -> Result<()> {
    let url = format!("{}/api/health", base_url);

    let builder = client.get(&url).timeout(request_timeout);
    let response = send_request(builder, "/api/health", "GET").await?;

    if response.status() != StatusCode::OK {
        return Err(ClientError::ApiError {
            status: response.status().as_u16(),
            url,
            message: response.text().await.unwrap_or_default(),
        });
    }

    Ok(())
}
