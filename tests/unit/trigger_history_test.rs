// tests/unit/trigger_history_test.rs

use std::collections::HashSet;

use workshop_trigger::domain::model::history::{NewHistoryEntry, TriggerStatus};
use workshop_trigger::repository::trigger_history::{TriggerHistory, MAX_HISTORY_ITEMS};

#[test]
fn keeps_five_newest_first() {
    let mut history = TriggerHistory::new();
    for i in 1..=7 {
        history.record(NewHistoryEntry::success(format!("Error {i}"), format!("dedup-{i}")));
    }

    let entries = history.snapshot();
    assert_eq!(entries.len(), MAX_HISTORY_ITEMS);
    assert_eq!(entries[0].error_type, "Error 7");
    assert_eq!(entries[4].error_type, "Error 3");
}

#[test]
fn prepends_new_items() {
    let mut history = TriggerHistory::new();
    history.record(NewHistoryEntry::success("First", "a"));
    history.record(NewHistoryEntry::success("Second", "b"));

    let types: Vec<&str> = history.entries().map(|e| e.error_type.as_str()).collect();
    assert_eq!(types, vec!["Second", "First"]);
}

#[test]
fn failed_entry_keeps_message() {
    let mut history = TriggerHistory::new();
    history.record(NewHistoryEntry::failed("OOMKilled", "Connection timeout"));

    let latest = history.latest().unwrap();
    assert_eq!(latest.status, TriggerStatus::Failed);
    assert_eq!(latest.error_message.as_deref(), Some("Connection timeout"));
    assert_eq!(latest.dedup_key, None);
}

#[test]
fn ids_are_unique() {
    let mut history = TriggerHistory::new();
    history.record(NewHistoryEntry::success("Test", "a"));
    history.record(NewHistoryEntry::success("Test", "a"));

    let ids: HashSet<String> = history.entries().map(|e| e.id.clone()).collect();
    assert_eq!(ids.len(), 2);
}

#[test]
fn clear_empties_everything() {
    let mut history = TriggerHistory::new();
    history.record(NewHistoryEntry::success("Test", "a"));
    history.record(NewHistoryEntry::failed("Test 2", "boom"));
    assert_eq!(history.len(), 2);

    history.clear();
    assert!(history.is_empty());
    assert!(history.snapshot().is_empty());
}

#[test]
fn serializes_with_camel_case_and_omits_absent_fields() {
    let mut history = TriggerHistory::new();
    let entry = history.record(NewHistoryEntry::success("CrashLoopBackOff", "k-1"));

    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value["errorType"], "CrashLoopBackOff");
    assert_eq!(value["status"], "success");
    assert_eq!(value["dedupKey"], "k-1");
    assert!(value.get("errorMessage").is_none());
}
