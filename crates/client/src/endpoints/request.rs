//! Request execution and status handling.
//!
//! There is no retry here: the only repeated call in this workspace is the
//! fixed-interval readiness poll, which owns its own loop.

use reqwest::{RequestBuilder, Response};
use std::time::Instant;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::telemetry::inject_trace_context;

/// Send a request and turn non-success statuses into [`ClientError::ApiError`].
///
/// # Arguments
///
/// * `builder` - The prepared request (URL, auth, body)
/// * `endpoint` - Endpoint path used for logging, e.g. `/api/dashboards/db`
/// * `method` - HTTP method used for logging
///
/// # Errors
///
/// Returns `ClientError::HttpError` for transport failures and
/// `ClientError::ApiError` (carrying the raw body) for non-2xx responses.
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
) -> Result<Response> {
    let start = Instant::now();
    let response = inject_trace_context(builder).send().await?;
    let status = response.status();

    debug!(
        endpoint,
        method,
        status = status.as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Grafana request completed"
    );

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
    })
}
