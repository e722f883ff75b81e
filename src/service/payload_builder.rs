// src/service/payload_builder.rs
//! Turns a scenario into a ready-to-send Events API v2 trigger.
//!
//! Every call produces a fresh request:
//! - a new dedup key (`workshop-<epoch-ms>-<base36>`), so PagerDuty opens a new incident each time;
//! - a synthetic resource name with a random suffix, so repeated triggers look like
//!   distinct resources;
//! - scenario-specific `custom_details` merged over the common cluster fields.
//!
//! Nothing here touches the network or storage; randomness is the only side effect.

use chrono::{Duration, SecondsFormat, Utc};
use rand::Rng;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

use crate::domain::model::event::{EventAction, EventPayload, EventRequest};
use crate::domain::model::scenario::ScenarioDefinition;

pub const DEDUP_PREFIX: &str = "workshop";
pub const NAMESPACE: &str = "production";
pub const CLUSTER: &str = "workshop-cluster";
pub const REGION: &str = "us-east-1";
pub const GROUP: &str = "kubernetes";
pub const SUMMARY_TAG: &str = "[K8s]";

const DEDUP_SUFFIX_LEN: usize = 9;
const NAME_SUFFIX_LEN: usize = 5;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Detail keys that carry the synthesized resource name, in lookup order.
const RESOURCE_NAME_KEYS: [&str; 7] = [
    "pod_name",
    "node_name",
    "pvc_name",
    "service_name",
    "deployment_name",
    "hpa_name",
    "secret_name",
];

/// Builds the trigger request for `scenario`, authorized by `routing_key`. Never fails.
pub fn build_event(routing_key: &str, scenario: &ScenarioDefinition) -> EventRequest {
    let custom_details = custom_details_for(scenario);
    let resource_name = RESOURCE_NAME_KEYS
        .iter()
        .find_map(|key| custom_details.get(*key).and_then(JsonValue::as_str))
        .map(str::to_owned)
        .unwrap_or_else(|| resource_name_for(scenario.component));

    EventRequest {
        routing_key: routing_key.to_string(),
        event_action: EventAction::Trigger,
        dedup_key: generate_dedup_key(),
        payload: EventPayload {
            summary: format!(
                "{SUMMARY_TAG} {} in namespace {NAMESPACE} - {resource_name}",
                scenario.name
            ),
            source: format!(
                "{GROUP}:{CLUSTER}:{NAMESPACE}:{}/{resource_name}",
                scenario.component
            ),
            severity: scenario.severity,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            component: scenario.component.to_string(),
            group: GROUP.to_string(),
            class: scenario.error_class.to_string(),
            custom_details,
        },
    }
}

/// `workshop-<epoch-ms>-<9 base36 chars>`. The random part keeps two keys
/// minted in the same millisecond apart.
pub fn generate_dedup_key() -> String {
    format!(
        "{DEDUP_PREFIX}-{}-{}",
        Utc::now().timestamp_millis(),
        random_base36(DEDUP_SUFFIX_LEN)
    )
}

/// Plausible Kubernetes-style name for a resource of kind `component`.
pub fn resource_name_for(component: &str) -> String {
    let suffix = random_base36(NAME_SUFFIX_LEN);
    match component {
        "pod" => format!("api-server-7d4f8c9b5-{suffix}"),
        "node" => format!("worker-node-{suffix}"),
        "container" => format!("web-app-{suffix}"),
        "pvc" => format!("data-volume-{suffix}"),
        "service" => format!("backend-svc-{suffix}"),
        "deployment" => format!("frontend-deploy-{suffix}"),
        "hpa" => format!("autoscaler-{suffix}"),
        "secret" => format!("tls-cert-{suffix}"),
        _ => format!("resource-{suffix}"),
    }
}

/// Base cluster fields plus whatever the scenario adds. Unknown ids get the base only.
pub fn custom_details_for(scenario: &ScenarioDefinition) -> BTreeMap<String, JsonValue> {
    let mut details: BTreeMap<String, JsonValue> = BTreeMap::new();
    details.insert("namespace".into(), NAMESPACE.into());
    details.insert("cluster".into(), CLUSTER.into());
    details.insert("region".into(), REGION.into());

    for (key, value) in scenario_details(scenario.id) {
        details.insert(key.to_string(), value);
    }
    details
}

fn scenario_details(id: &str) -> Vec<(&'static str, JsonValue)> {
    let mut rng = rand::thread_rng();
    match id {
        "crash-loop" => vec![
            ("pod_name", resource_name_for("pod").into()),
            ("container", "api-server".into()),
            ("restart_count", rng.gen_range(5..15_i64).into()),
            ("last_state", "Error".into()),
            ("exit_code", 1_i64.into()),
        ],
        "node-not-ready" => {
            let last_heartbeat = (Utc::now() - Duration::minutes(5))
                .to_rfc3339_opts(SecondsFormat::Millis, true);
            vec![
                ("node_name", resource_name_for("node").into()),
                ("condition", "NotReady".into()),
                ("last_heartbeat", last_heartbeat.into()),
                ("kubelet_status", "Unknown".into()),
            ]
        }
        "oom-killed" => vec![
            ("pod_name", resource_name_for("pod").into()),
            ("container", "worker".into()),
            ("memory_limit", "512Mi".into()),
            ("memory_usage", "548Mi".into()),
            ("exit_code", 137_i64.into()),
        ],
        "image-pull" => vec![
            ("pod_name", resource_name_for("pod").into()),
            ("image", "registry.example.com/app:v2.1.0".into()),
            ("reason", "ImagePullBackOff".into()),
            ("message", "Failed to pull image: unauthorized".into()),
        ],
        "pvc-pending" => vec![
            ("pvc_name", resource_name_for("pvc").into()),
            ("storage_class", "gp3".into()),
            ("requested_size", "100Gi".into()),
            ("reason", "ProvisioningFailed".into()),
        ],
        "endpoint-not-ready" => vec![
            ("service_name", resource_name_for("service").into()),
            ("port", 8080_i64.into()),
            ("ready_endpoints", 0_i64.into()),
            ("total_endpoints", 3_i64.into()),
        ],
        "rollout-failed" => vec![
            ("deployment_name", resource_name_for("deployment").into()),
            ("replicas_desired", 5_i64.into()),
            ("replicas_available", 2_i64.into()),
            ("reason", "ProgressDeadlineExceeded".into()),
        ],
        "hpa-max" => vec![
            ("hpa_name", resource_name_for("hpa").into()),
            ("min_replicas", 2_i64.into()),
            ("max_replicas", 10_i64.into()),
            ("current_replicas", 10_i64.into()),
            ("cpu_utilization", "95%".into()),
        ],
        "cert-expiring" => vec![
            ("secret_name", resource_name_for("secret").into()),
            ("days_remaining", 14_i64.into()),
            ("issuer", "workshop-ca".into()),
        ],
        _ => Vec::new(),
    }
}

fn random_base36(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}
