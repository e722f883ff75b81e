// src/domain/model/scenario.rs

use serde::Serialize;

use crate::domain::model::severity::Severity;

/// A canned fault condition the trainee can fire at PagerDuty.
///
/// Definitions are built once as static data and never mutated; the
/// catalog hands out shared references only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDefinition {
    /// Stable slug, unique within the catalog.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    /// Kubernetes resource kind ("pod", "node", ...). Drives synthetic naming.
    pub component: &'static str,
    /// Copied verbatim into the event `class` field.
    pub error_class: &'static str,
}
