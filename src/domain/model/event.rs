// src/domain/model/event.rs
//! Wire model for the PagerDuty Events API v2 `enqueue` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

use crate::domain::model::severity::Severity;

/// Only `trigger` is ever sent; acknowledge/resolve are not part of the workshop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventAction {
    Trigger,
}

/// Full request body posted to the enqueue endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRequest {
    pub routing_key: String,
    pub event_action: EventAction,
    pub dedup_key: String,
    pub payload: EventPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    pub summary: String,
    pub source: String,
    pub severity: Severity,
    /// ISO-8601 timestamp of the moment the event was built.
    pub timestamp: String,
    pub component: String,
    pub group: String,
    pub class: String,
    /// Flat map of strings and numbers. BTreeMap keeps the serialized order stable.
    pub custom_details: BTreeMap<String, JsonValue>,
}

/// Body returned by PagerDuty on an accepted event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResponse {
    pub status: String,
    pub message: String,
    pub dedup_key: String,
}

impl EventRequest {
    /// Copy of the request with the routing key masked, for logs.
    pub fn redacted(&self) -> JsonValue {
        let mut value = serde_json::to_value(self)
            .unwrap_or_else(|_| serde_json::json!({"error": "serialization_failed"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("routing_key".to_string(), JsonValue::from("[REDACTED]"));
        }
        value
    }
}
