// src/domain/model/history.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single dispatch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerStatus {
    Success,
    Failed,
}

impl fmt::Display for TriggerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            TriggerStatus::Success => "success",
            TriggerStatus::Failed => "failed",
        })
    }
}

/// What the caller hands to the ledger; id and timestamp are assigned on record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryEntry {
    pub error_type: String,
    pub status: TriggerStatus,
    pub dedup_key: Option<String>,
    pub error_message: Option<String>,
}

impl NewHistoryEntry {
    pub fn success(error_type: impl Into<String>, dedup_key: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            status: TriggerStatus::Success,
            dedup_key: Some(dedup_key.into()),
            error_message: None,
        }
    }

    pub fn failed(error_type: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            status: TriggerStatus::Failed,
            dedup_key: None,
            error_message: Some(error_message.into()),
        }
    }
}

/// Immutable record of one dispatch attempt, owned by the trigger history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub error_type: String,
    pub timestamp: DateTime<Utc>,
    pub status: TriggerStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedup_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
