// src/repository/local_state.rs
//! Typed accessors for the two pieces of local state the workshop keeps:
//! the routing key (session scope) and the theme preference (durable).

use std::sync::Arc;

use crate::domain::error::StorageError;
use crate::domain::model::theme::Theme;
use crate::repository::kv_store::KeyValueStore;

pub const ROUTING_KEY_STORAGE_KEY: &str = "pagerduty_routing_key";
pub const THEME_STORAGE_KEY: &str = "pagerduty_workshop_theme";

/// Routing key storage. Backed by a session-scoped store.
#[derive(Clone)]
pub struct CredentialStore {
    backend: Arc<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn get(&self) -> Result<Option<String>, StorageError> {
        self.backend.get(ROUTING_KEY_STORAGE_KEY)
    }

    pub fn set(&self, routing_key: &str) -> Result<(), StorageError> {
        self.backend.set(ROUTING_KEY_STORAGE_KEY, routing_key)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.backend.remove(ROUTING_KEY_STORAGE_KEY)
    }
}

/// Theme storage. Backed by a durable store.
#[derive(Clone)]
pub struct PreferenceStore {
    backend: Arc<dyn KeyValueStore>,
}

impl PreferenceStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Absent or unrecognized values read as `Theme::Dark`.
    pub fn get(&self) -> Result<Theme, StorageError> {
        Ok(self
            .backend
            .get(THEME_STORAGE_KEY)?
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_default())
    }

    pub fn set(&self, theme: Theme) -> Result<(), StorageError> {
        self.backend.set(THEME_STORAGE_KEY, theme.as_str())
    }
}
