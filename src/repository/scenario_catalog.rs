// src/repository/scenario_catalog.rs
//! Read-only catalog of the Kubernetes fault scenarios offered in the workshop.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use thiserror::Error;

use crate::domain::model::scenario::ScenarioDefinition;
use crate::domain::model::severity::Severity;

const BUILTIN_SCENARIOS: &[ScenarioDefinition] = &[
    ScenarioDefinition {
        id: "crash-loop",
        name: "Pod CrashLoopBackOff",
        description: "Container repeatedly crashing and restarting",
        severity: Severity::Critical,
        component: "pod",
        error_class: "CrashLoopBackOff",
    },
    ScenarioDefinition {
        id: "node-not-ready",
        name: "Node NotReady",
        description: "Kubernetes node has stopped responding",
        severity: Severity::Critical,
        component: "node",
        error_class: "NotReady",
    },
    ScenarioDefinition {
        id: "oom-killed",
        name: "OOMKilled",
        description: "Container exceeded memory limits",
        severity: Severity::Critical,
        component: "container",
        error_class: "OOMKilled",
    },
    ScenarioDefinition {
        id: "image-pull",
        name: "ImagePullBackOff",
        description: "Failed to pull container image",
        severity: Severity::Warning,
        component: "pod",
        error_class: "ImagePullBackOff",
    },
    ScenarioDefinition {
        id: "pvc-pending",
        name: "PVC Pending",
        description: "Storage volume cannot be provisioned",
        severity: Severity::Warning,
        component: "pvc",
        error_class: "Pending",
    },
    ScenarioDefinition {
        id: "endpoint-not-ready",
        name: "Service Endpoint NotReady",
        description: "Service has no available endpoints",
        severity: Severity::Error,
        component: "service",
        error_class: "EndpointNotReady",
    },
    ScenarioDefinition {
        id: "rollout-failed",
        name: "Deployment Rollout Failed",
        description: "Deployment update failed to complete",
        severity: Severity::Error,
        component: "deployment",
        error_class: "ProgressDeadlineExceeded",
    },
    ScenarioDefinition {
        id: "hpa-max",
        name: "HPA Max Replicas",
        description: "Horizontal Pod Autoscaler at maximum capacity",
        severity: Severity::Warning,
        component: "hpa",
        error_class: "ScalingLimited",
    },
    ScenarioDefinition {
        id: "cert-expiring",
        name: "Certificate Expiring Soon",
        description: "TLS certificate will expire within 14 days",
        severity: Severity::Info,
        component: "secret",
        error_class: "CertificateExpiring",
    },
];

static BUILTIN: Lazy<ScenarioCatalog> = Lazy::new(|| {
    ScenarioCatalog::new(BUILTIN_SCENARIOS).expect("builtin scenario ids are unique")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate scenario id '{0}'")]
    DuplicateId(&'static str),
}

/// Ordered, immutable list of scenarios with unique ids.
#[derive(Debug)]
pub struct ScenarioCatalog {
    scenarios: &'static [ScenarioDefinition],
}

impl ScenarioCatalog {
    /// Validates id uniqueness once; the catalog cannot change afterwards.
    pub fn new(scenarios: &'static [ScenarioDefinition]) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(scenarios.len());
        for scenario in scenarios {
            if !seen.insert(scenario.id) {
                return Err(CatalogError::DuplicateId(scenario.id));
            }
        }
        Ok(Self { scenarios })
    }

    /// The workshop's built-in Kubernetes scenarios.
    pub fn builtin() -> &'static ScenarioCatalog {
        &BUILTIN
    }

    pub fn all(&self) -> &'static [ScenarioDefinition] {
        self.scenarios
    }

    pub fn find(&self, id: &str) -> Option<&'static ScenarioDefinition> {
        self.scenarios.iter().find(|s| s.id == id)
    }
}
