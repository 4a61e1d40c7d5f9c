//! Delivery of the callback envelope.

use std::time::Duration;

use grafana_config::constants::DEFAULT_TIMEOUT_SECS;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

use crate::error::{ProvisionError, Result};
use crate::response::CallbackResponse;

/// Sends [`CallbackResponse`]s to pre-signed orchestrator URLs.
#[derive(Debug, Clone)]
pub struct CallbackClient {
    http: reqwest::Client,
}

impl CallbackClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ProvisionError::Callback(e.to_string()))?;
        Ok(Self { http })
    }

    /// PUT the envelope to `response_url`.
    ///
    /// The URL is pre-signed for an empty content type, so the header is
    /// sent explicitly empty. Without a URL nothing is sent.
    pub async fn send(&self, response_url: Option<&str>, response: &CallbackResponse) -> Result<()> {
        let Some(url) = response_url else {
            debug!("No ResponseURL on event, skipping callback");
            return Ok(());
        };

        let body =
            serde_json::to_vec(response).map_err(|e| ProvisionError::Callback(e.to_string()))?;

        let reply = self
            .http
            .put(url)
            .header(CONTENT_TYPE, "")
            .body(body)
            .send()
            .await
            .map_err(|e| ProvisionError::Callback(e.without_url().to_string()))?;

        let status = reply.status();
        if !status.is_success() {
            return Err(ProvisionError::Callback(format!(
                "orchestrator answered {}",
                status.as_u16()
            )));
        }

        info!(status = ?response.status, "Lifecycle callback delivered");
        Ok(())
    }
}
