// src/usecase/configure_routing_key.rs

use thiserror::Error;
use tracing::info;

use crate::domain::error::{CredentialError, StorageError, MIN_ROUTING_KEY_LEN};
use crate::repository::local_state::CredentialStore;

#[derive(Error, Debug)]
pub enum RoutingKeyError {
    #[error(transparent)]
    Invalid(#[from] CredentialError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Plausibility check for a user-entered routing key. Returns the trimmed key.
///
/// The 20-character floor only catches obvious typos; PagerDuty's real key
/// format is not checked.
pub fn validate_routing_key(raw: &str) -> Result<String, CredentialError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CredentialError::Required);
    }
    if trimmed.chars().count() < MIN_ROUTING_KEY_LEN {
        return Err(CredentialError::TooShort);
    }
    Ok(trimmed.to_string())
}

/// Routing key as seen by the front-end: cached value plus its session store.
pub struct RoutingKeyState {
    store: CredentialStore,
    routing_key: Option<String>,
}

impl RoutingKeyState {
    /// Picks up a key left in the session store, if any.
    pub fn load(store: CredentialStore) -> Result<Self, StorageError> {
        let routing_key = store.get()?;
        Ok(Self { store, routing_key })
    }

    pub fn routing_key(&self) -> Option<&str> {
        self.routing_key.as_deref()
    }

    /// A stored empty string does not count as configured.
    pub fn is_configured(&self) -> bool {
        self.routing_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Stores `key` as-is. Use `save_input` for raw user text.
    pub fn set(&mut self, key: &str) -> Result<(), StorageError> {
        self.store.set(key)?;
        self.routing_key = Some(key.to_string());
        info!("routing key saved for this session");
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.clear()?;
        self.routing_key = None;
        info!("routing key cleared");
        Ok(())
    }

    /// Validates raw input and saves the trimmed key. Nothing is stored on rejection.
    pub fn save_input(&mut self, raw: &str) -> Result<(), RoutingKeyError> {
        let key = validate_routing_key(raw)?;
        self.set(&key)?;
        Ok(())
    }
}
