// src/service/incident_dispatcher.rs
//! Incident dispatcher
//!
//! Responsibilities:
//! - Build a fresh trigger event for the chosen scenario.
//! - Hand it to the transport exactly once (no retries, no queueing).
//! - Return the service's answer or a normalized `DispatchError`.
//!
//! It never touches local state or the trigger history; recording the outcome
//! is the caller's job.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domain::error::DispatchError;
use crate::domain::model::event::{EventRequest, EventResponse};
use crate::domain::model::scenario::ScenarioDefinition;
use crate::service::payload_builder::build_event;

/// Delivers one event to the alerting service.
#[async_trait]
pub trait EventTransport: Send + Sync {
    async fn enqueue(&self, request: &EventRequest) -> Result<EventResponse, DispatchError>;
}

#[derive(Clone)]
pub struct IncidentDispatcher {
    transport: Arc<dyn EventTransport>,
}

impl IncidentDispatcher {
    pub fn new(transport: Arc<dyn EventTransport>) -> Self {
        Self { transport }
    }

    /// Sends one trigger for `scenario`. Concurrent calls are not deduplicated.
    #[instrument(skip(self, routing_key, scenario), fields(scenario = scenario.id))]
    pub async fn dispatch(
        &self,
        routing_key: &str,
        scenario: &ScenarioDefinition,
    ) -> Result<EventResponse, DispatchError> {
        let request = build_event(routing_key, scenario);
        info!(
            dedup_key = %request.dedup_key,
            severity = %request.payload.severity,
            "dispatching incident"
        );

        match self.transport.enqueue(&request).await {
            Ok(response) => {
                info!(
                    dedup_key = %response.dedup_key,
                    status = %response.status,
                    "incident accepted"
                );
                Ok(response)
            }
            Err(err) => {
                warn!(error = %err, "incident dispatch failed");
                Err(err)
            }
        }
    }
}
