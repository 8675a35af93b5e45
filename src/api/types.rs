//! JSON shapes exchanged with the uptime API.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque target identifier.
///
/// The API emits string identifiers, but numeric ones are accepted too and
/// compared by their textual form, so `7` and `"7"` name the same target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawTargetId")]
pub struct TargetId(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTargetId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawTargetId> for TargetId {
    fn from(raw: RawTargetId) -> Self {
        match raw {
            RawTargetId::Text(s) => TargetId(s),
            RawTargetId::Number(n) => TargetId(n.to_string()),
        }
    }
}

impl From<&str> for TargetId {
    fn from(s: &str) -> Self {
        TargetId(s.to_string())
    }
}

impl Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A monitored URL. Other fields the API sends (such as `created_at`) are
/// not displayed and are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: TargetId,
    pub url: String,
}

/// The latest known check of one target. Every field except the target
/// reference may be missing when the backend has no data for it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CheckResult {
    pub target_id: Option<TargetId>,
    #[serde(default)]
    pub up: Option<bool>,
    #[serde(default)]
    pub http_status: Option<i64>,
    #[serde(default)]
    pub latency_ms: Option<f64>,
    #[serde(default)]
    pub reason: Option<String>,
    /// Kept as text; parsed when the row is built so one malformed
    /// timestamp does not fail the whole payload.
    #[serde(default)]
    pub checked_at: Option<String>,
}

/// Body of `POST /api/targets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddTargetRequest<'a> {
    pub url: &'a str,
}
