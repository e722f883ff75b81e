// src/domain/error.rs

use std::io;
use thiserror::Error;

/// Text recorded for a failure that carries no usable diagnostic.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Minimum plausible routing key length; anything shorter is almost certainly a typo.
pub const MIN_ROUTING_KEY_LEN: usize = 20;

/// Rejections of user-entered routing key text. Shown inline, never thrown further.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Routing key is required")]
    Required,

    #[error("Routing key appears to be invalid (too short)")]
    TooShort,
}

/// Failure of a single dispatch to the alerting service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The service answered with a non-2xx status.
    #[error("PagerDuty API error: {status} - {body}")]
    Api { status: u16, body: String },

    /// Network unreachable, malformed response, or anything else below HTTP semantics.
    #[error("{0}")]
    Transport(String),

    /// The failure carried no message at all.
    #[error("Unknown error")]
    Unknown,
}

impl DispatchError {
    /// Best-effort text for the trigger history.
    pub fn failure_message(&self) -> String {
        match self {
            DispatchError::Transport(msg) if msg.trim().is_empty() => UNKNOWN_ERROR.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for DispatchError {
    fn from(err: reqwest::Error) -> Self {
        DispatchError::Transport(err.to_string())
    }
}

/// Backing-store failures. Propagated to the caller untouched.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage i/o error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("storage file {path} is corrupt: {source}")]
    Serialization {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage lock poisoned")]
    Poisoned,
}
