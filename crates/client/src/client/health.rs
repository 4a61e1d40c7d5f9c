//! Health checks and the readiness waiter.

use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::{ClientError, Result};

impl GrafanaClient {
    /// Perform a single health check against `/api/health`.
    pub async fn check_health(&self) -> Result<()> {
        endpoints::check_health(&self.http, &self.base_url, self.health_request_timeout).await
    }

    /// Poll the health endpoint at a fixed interval until it succeeds.
    ///
    /// Individual failures (connection refused, non-200, per-request timeout)
    /// only mean "not ready yet" and are logged at debug level. The interval
    /// never grows.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Timeout`] if no check succeeded before `timeout` elapsed.
    pub async fn wait_until_ready(&self, timeout: Duration, poll_interval: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        let mut attempt: u32 = 0;

        while Instant::now() < deadline {
            attempt += 1;
            match self.check_health().await {
                Ok(()) => {
                    info!(attempt, base_url = %self.base_url, "Grafana is ready");
                    return Ok(());
                }
                Err(e) => {
                    debug!(attempt, error = %e, "Grafana not ready yet");
                }
            }
            tokio::time::sleep(poll_interval).await;
        }

        Err(ClientError::Timeout(timeout))
    }
}
