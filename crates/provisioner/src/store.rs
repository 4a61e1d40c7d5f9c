//! Dashboard object storage.

use std::future::Future;

use aws_sdk_s3::error::DisplayErrorContext;
use tracing::{debug, warn};

use crate::error::{ProvisionError, Result};
use crate::locator::ObjectLocator;

/// Source of dashboard documents.
pub trait DashboardStore: Send + Sync {
    /// Fetch the object at `locator` as UTF-8 text.
    fn fetch(&self, locator: &ObjectLocator) -> impl Future<Output = Result<String>> + Send;
}

/// [`DashboardStore`] backed by Amazon S3.
#[derive(Debug, Clone)]
pub struct S3DashboardStore {
    client: aws_sdk_s3::Client,
}

impl S3DashboardStore {
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self::from_client(aws_sdk_s3::Client::new(sdk_config))
    }

    pub fn from_client(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

impl DashboardStore for S3DashboardStore {
    async fn fetch(&self, locator: &ObjectLocator) -> Result<String> {
        let storage_error = |message: String| ProvisionError::Storage {
            locator: locator.to_string(),
            message,
        };

        let output = self
            .client
            .get_object()
            .bucket(&locator.bucket)
            .key(&locator.key)
            .send()
            .await
            .map_err(|e| storage_error(DisplayErrorContext(&e).to_string()))?;

        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| storage_error(e.to_string()))?
            .into_bytes();

        String::from_utf8(bytes.to_vec())
            .map_err(|_| storage_error("object is not valid UTF-8".to_string()))
    }
}

/// Resolve a raw locator string to a dashboard body.
///
/// Malformed locators and empty objects yield `Ok(None)` and are skipped by
/// the caller. Fetch failures are errors.
pub async fn fetch_dashboard_json<S: DashboardStore>(store: &S, raw: &str) -> Result<Option<String>> {
    let Some(locator) = ObjectLocator::parse(raw) else {
        warn!(locator = raw, "Skipping malformed dashboard locator");
        return Ok(None);
    };

    let body = store.fetch(&locator).await?;
    if body.is_empty() {
        debug!(%locator, "Skipping empty dashboard object");
        return Ok(None);
    }

    Ok(Some(body))
}
