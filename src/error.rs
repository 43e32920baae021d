//! Unified issue type returned by every validation check.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single validation finding. Messages are written for direct display in
/// the editor; `node_id` points at the offending node when there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub code: &'static str,
    pub severity: Severity,
    pub message: String,
    pub node_id: Option<String>,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.node_id {
            Some(id) => write!(f, "[{}] {} (node '{}')", self.code, self.message, id),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

impl std::error::Error for ValidationIssue {}

impl ValidationIssue {
    pub fn error(code: &'static str, message: impl Into<String>, node_id: Option<String>) -> Self {
        ValidationIssue {
            code,
            severity: Severity::Error,
            message: message.into(),
            node_id,
        }
    }

    pub fn warning(code: &'static str, message: impl Into<String>, node_id: Option<String>) -> Self {
        ValidationIssue {
            code,
            severity: Severity::Warning,
            message: message.into(),
            node_id,
        }
    }
}

/// Failure to deserialize an editor snapshot. The only fallible path that is
/// not a validation verdict; surfaced by the wasm shim as a `P001` issue.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to parse snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}
