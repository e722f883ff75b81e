// tests/unit/routing_key_test.rs

use std::sync::Arc;

use workshop_trigger::domain::error::CredentialError;
use workshop_trigger::repository::kv_store::{KeyValueStore, SessionStore};
use workshop_trigger::repository::local_state::{CredentialStore, ROUTING_KEY_STORAGE_KEY};
use workshop_trigger::usecase::configure_routing_key::{RoutingKeyError, RoutingKeyState};

fn fresh_state() -> (RoutingKeyState, SessionStore) {
    let backend = SessionStore::new();
    let state = RoutingKeyState::load(CredentialStore::new(Arc::new(backend.clone()))).unwrap();
    (state, backend)
}

#[test]
fn starts_unconfigured() {
    let (state, _) = fresh_state();
    assert_eq!(state.routing_key(), None);
    assert!(!state.is_configured());
}

#[test]
fn picks_up_stored_key() {
    let backend = SessionStore::new();
    backend.set(ROUTING_KEY_STORAGE_KEY, "stored-key").unwrap();
    let state = RoutingKeyState::load(CredentialStore::new(Arc::new(backend))).unwrap();
    assert_eq!(state.routing_key(), Some("stored-key"));
    assert!(state.is_configured());
}

#[test]
fn stored_empty_string_is_not_configured() {
    let backend = SessionStore::new();
    backend.set(ROUTING_KEY_STORAGE_KEY, "").unwrap();
    let state = RoutingKeyState::load(CredentialStore::new(Arc::new(backend))).unwrap();
    assert!(!state.is_configured());
}

#[test]
fn empty_input_is_required_and_not_saved() {
    let (mut state, backend) = fresh_state();
    let err = state.save_input("").unwrap_err();
    assert!(matches!(err, RoutingKeyError::Invalid(CredentialError::Required)));
    assert_eq!(err.to_string(), "Routing key is required");
    assert_eq!(backend.get(ROUTING_KEY_STORAGE_KEY).unwrap(), None);
}

#[test]
fn short_input_is_rejected_and_not_saved() {
    let (mut state, backend) = fresh_state();
    let err = state.save_input("short").unwrap_err();
    assert!(matches!(err, RoutingKeyError::Invalid(CredentialError::TooShort)));
    assert_eq!(err.to_string(), "Routing key appears to be invalid (too short)");
    assert!(!state.is_configured());
    assert_eq!(backend.get(ROUTING_KEY_STORAGE_KEY).unwrap(), None);
}

#[test]
fn valid_input_is_trimmed_and_saved() {
    let (mut state, backend) = fresh_state();
    state.save_input("  valid-routing-key-12345678  ").unwrap();
    assert_eq!(state.routing_key(), Some("valid-routing-key-12345678"));
    assert_eq!(
        backend.get(ROUTING_KEY_STORAGE_KEY).unwrap().as_deref(),
        Some("valid-routing-key-12345678")
    );
}

#[test]
fn clear_removes_key() {
    let (mut state, backend) = fresh_state();
    state.set("existing-key").unwrap();
    state.clear().unwrap();
    assert!(!state.is_configured());
    assert_eq!(backend.get(ROUTING_KEY_STORAGE_KEY).unwrap(), None);
}
