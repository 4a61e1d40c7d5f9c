//! Lifecycle event and invocation context.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of lifecycle notification.
///
/// A missing `RequestType` means Create. Any value that is not recognized
/// deserializes to [`RequestType::Other`] and is handled like Delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RequestType {
    #[default]
    Create,
    Update,
    Delete,
    #[serde(other)]
    Other,
}

impl RequestType {
    /// Whether this event asks for resources to be provisioned.
    pub fn provisions(self) -> bool {
        matches!(self, RequestType::Create | RequestType::Update)
    }
}

/// Custom-resource event sent by the orchestrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LifecycleEvent {
    #[serde(default)]
    pub request_type: RequestType,
    /// Pre-signed callback URL. Absent when invoked by hand.
    #[serde(rename = "ResponseURL", default, skip_serializing_if = "Option::is_none")]
    pub response_url: Option<String>,
    #[serde(default)]
    pub stack_id: String,
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub logical_resource_id: String,
}

impl LifecycleEvent {
    /// Parse the raw invocation payload.
    pub fn from_payload(payload: &Value) -> serde_json::Result<Self> {
        Self::deserialize(payload)
    }

    /// Recover whatever string fields a payload has, ignoring the rest.
    ///
    /// Used when [`LifecycleEvent::from_payload`] rejects the payload, so the
    /// orchestrator can still be told about the failure.
    pub fn salvage(payload: &Value) -> Self {
        let text = |name: &str| payload.get(name).and_then(Value::as_str).map(str::to_string);

        Self {
            request_type: RequestType::default(),
            response_url: text("ResponseURL"),
            stack_id: text("StackId").unwrap_or_default(),
            request_id: text("RequestId").unwrap_or_default(),
            logical_resource_id: text("LogicalResourceId").unwrap_or_default(),
        }
    }
}

/// Per-invocation details taken from the runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    /// CloudWatch log stream of this invocation; doubles as the physical resource id.
    pub log_stream_name: String,
}

impl InvocationContext {
    pub fn new(log_stream_name: impl Into<String>) -> Self {
        Self {
            log_stream_name: log_stream_name.into(),
        }
    }
}

impl From<&lambda_runtime::Context> for InvocationContext {
    fn from(context: &lambda_runtime::Context) -> Self {
        Self::new(context.env_config.log_stream.clone())
    }
}
