//! Callback envelope reported to the orchestrator.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::event::{InvocationContext, LifecycleEvent};

/// Final status of a lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseStatus {
    Success,
    Failed,
}

/// Body of the PUT to the event's `ResponseURL`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallbackResponse {
    pub status: ResponseStatus,
    pub reason: String,
    pub physical_resource_id: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    pub data: Map<String, Value>,
}

impl CallbackResponse {
    /// SUCCESS envelope carrying `{"Status": <outcome>}` as data.
    pub fn success(event: &LifecycleEvent, context: &InvocationContext, outcome: &str) -> Self {
        let mut data = Map::new();
        data.insert("Status".to_string(), Value::String(outcome.to_string()));
        Self::build(event, context, ResponseStatus::Success, None, data)
    }

    /// FAILED envelope with `reason` and no data.
    pub fn failed(event: &LifecycleEvent, context: &InvocationContext, reason: impl Into<String>) -> Self {
        Self::build(
            event,
            context,
            ResponseStatus::Failed,
            Some(reason.into()),
            Map::new(),
        )
    }

    fn build(
        event: &LifecycleEvent,
        context: &InvocationContext,
        status: ResponseStatus,
        reason: Option<String>,
        data: Map<String, Value>,
    ) -> Self {
        let reason = reason.filter(|r| !r.is_empty()).unwrap_or_else(|| {
            format!(
                "See the details in CloudWatch Log Stream: {}",
                context.log_stream_name
            )
        });

        Self {
            status,
            reason,
            physical_resource_id: context.log_stream_name.clone(),
            stack_id: event.stack_id.clone(),
            request_id: event.request_id.clone(),
            logical_resource_id: event.logical_resource_id.clone(),
            data,
        }
    }
}
