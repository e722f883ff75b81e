// src/domain/model/severity.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a simulated incident, as understood by the PagerDuty Events API v2.
/// Serialized in lowercase, which is the literal the API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Service is down or about to go down.
    Critical,
    /// Something is broken but the blast radius is limited.
    Error,
    /// Degradation that needs attention soon.
    Warning,
    /// Informational, no action required right now.
    Info,
}

impl Severity {
    /// Literal used on the wire and in display badges.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
