//! Typed records for the two collections served by the triage backend.
//!
//! Both are read-only snapshots: the dashboard fetches them once per page
//! load, renders them, and discards them. The `status` and `severity`
//! domains are owned by the backend and are not validated here, but a
//! response missing a required field (or carrying the wrong type for one)
//! fails the fetch instead of rendering garbled output.

use serde::{Deserialize, Serialize};

/// A backend-originated notification record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,
    pub title: String,
    pub message: String,
    /// Lifecycle label, e.g. "firing".
    pub status: String,
    /// Priority label, e.g. "critical".
    pub severity: String,
    /// Emitting system, when the backend reports one.
    #[serde(default)]
    pub source: Option<String>,
    /// Backend triage pipeline state, when reported.
    #[serde(default)]
    pub triage_status: Option<String>,
}

/// A backend-originated prioritization rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageRule {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Display-only ranking; which end is "more urgent" is the backend's
    /// business.
    pub priority: i64,
    /// Rules can be disabled server-side; `Some(false)` renders an
    /// "inactive" tag.
    #[serde(default)]
    pub is_active: Option<bool>,
}
