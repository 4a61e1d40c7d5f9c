//! grafana-provisioner - Lambda entry point for stack-lifecycle events.
//!
//! Responsibilities:
//! - Initialize JSON logging for CloudWatch and optional OTLP export.
//! - Load configuration and AWS clients once per cold start.
//! - Hand every invocation to [`LifecycleHandler`].
//!
//! Invariants:
//! - Invocations never return an error; every failure, including a payload
//!   that does not deserialize, is reported through the callback.

use std::sync::Arc;

use aws_config::{BehaviorVersion, Region};
use grafana_client::TracingConfig;
use grafana_config::ConfigLoader;
use grafana_provisioner::{
    CallbackClient, GrafanaWorkspaceKeys, InvocationContext, LifecycleHandler, S3DashboardStore,
};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::error;

type Handler = LifecycleHandler<GrafanaWorkspaceKeys, S3DashboardStore>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let tracing_guard = TracingConfig::new()
        .with_service_name("grafana-provisioner")
        .with_json(true)
        .init()?;

    let config = ConfigLoader::new()
        .from_env()
        .and_then(|loader| loader.build_provisioner());
    if let Err(ref e) = config {
        error!(error = %e, "Provisioner configuration is incomplete");
    }

    let mut sdk_loader = aws_config::defaults(BehaviorVersion::latest());
    if let Ok(ref config) = config {
        sdk_loader = sdk_loader.region(Region::new(config.region.clone()));
    }
    let sdk_config = sdk_loader.load().await;

    let handler: Arc<Handler> = Arc::new(LifecycleHandler::new(
        config,
        GrafanaWorkspaceKeys::new(&sdk_config),
        S3DashboardStore::new(&sdk_config),
        CallbackClient::new()?,
    ));

    let result = lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let handler = Arc::clone(&handler);
        async move { handle_event(&handler, event).await }
    }))
    .await;

    tracing_guard.shutdown();
    result
}

async fn handle_event(handler: &Handler, event: LambdaEvent<Value>) -> Result<Value, Error> {
    let (payload, context) = event.into_parts();
    let context = InvocationContext::from(&context);

    let response = handler.handle_payload(&payload, &context).await;
    Ok(serde_json::to_value(response)?)
}
