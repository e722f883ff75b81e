// src/usecase/trigger_incident.rs
//! Trigger flow used by the front-end:
//! routing key check -> single dispatch -> exactly one history entry.
//!
//! Attempts blocked before the network (no key configured, same scenario
//! already in flight) leave the history untouched.

use std::collections::HashSet;
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

use crate::domain::model::history::{HistoryEntry, NewHistoryEntry};
use crate::domain::model::scenario::ScenarioDefinition;
use crate::repository::trigger_history::TriggerHistory;
use crate::service::incident_dispatcher::IncidentDispatcher;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A dispatch happened; this is the entry it produced.
    Recorded(HistoryEntry),
    /// No routing key configured.
    NotConfigured,
    /// A dispatch for this scenario is still pending.
    AlreadyPending,
}

pub struct TriggerConsole {
    dispatcher: IncidentDispatcher,
    history: Mutex<TriggerHistory>,
    pending: Arc<StdMutex<HashSet<&'static str>>>,
}

impl TriggerConsole {
    pub fn new(dispatcher: IncidentDispatcher) -> Self {
        Self::with_history(dispatcher, TriggerHistory::new())
    }

    pub fn with_history(dispatcher: IncidentDispatcher, history: TriggerHistory) -> Self {
        Self {
            dispatcher,
            history: Mutex::new(history),
            pending: Arc::new(StdMutex::new(HashSet::new())),
        }
    }

    /// Fires `scenario` once. The history entry is added when the dispatch
    /// completes, so history order follows completion order.
    #[instrument(skip(self, routing_key, scenario), fields(scenario = scenario.id))]
    pub async fn trigger(
        &self,
        routing_key: Option<&str>,
        scenario: &'static ScenarioDefinition,
    ) -> TriggerOutcome {
        let Some(routing_key) = routing_key.filter(|k| !k.is_empty()) else {
            warn!("trigger ignored: routing key not configured");
            return TriggerOutcome::NotConfigured;
        };

        let Some(_in_flight) = InFlight::acquire(&self.pending, scenario.id) else {
            warn!("trigger ignored: dispatch already pending for this scenario");
            return TriggerOutcome::AlreadyPending;
        };

        let entry = match self.dispatcher.dispatch(routing_key, scenario).await {
            Ok(response) => NewHistoryEntry::success(scenario.name, response.dedup_key),
            Err(err) => NewHistoryEntry::failed(scenario.name, err.failure_message()),
        };

        let stored = self.history.lock().await.record(entry);
        info!(status = %stored.status, "trigger recorded");
        TriggerOutcome::Recorded(stored)
    }

    /// Newest first.
    pub async fn history(&self) -> Vec<HistoryEntry> {
        self.history.lock().await.snapshot()
    }

    pub async fn clear_history(&self) {
        self.history.lock().await.clear();
        info!("trigger history cleared");
    }

    pub fn is_pending(&self, scenario_id: &str) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(scenario_id)
    }
}

/// Marks a scenario as in flight until dropped.
struct InFlight {
    pending: Arc<StdMutex<HashSet<&'static str>>>,
    id: &'static str,
}

impl InFlight {
    fn acquire(pending: &Arc<StdMutex<HashSet<&'static str>>>, id: &'static str) -> Option<Self> {
        let inserted = pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(id);
        inserted.then(|| Self {
            pending: Arc::clone(pending),
            id,
        })
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(self.id);
    }
}
