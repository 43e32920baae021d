#![allow(dead_code)]

use validator::error::ValidationIssue;
use validator::model::*;

// =============================================================================
// Node & edge builders
// =============================================================================

pub fn op(id: &str, kind: OperatorKind) -> FlowNode {
    FlowNode {
        id: id.into(),
        label: None,
        kind: Some(kind),
        trigger: None,
        resumable: false,
    }
}

pub fn entry(id: &str, trigger: TriggerType) -> FlowNode {
    FlowNode {
        id: id.into(),
        label: None,
        kind: Some(OperatorKind::Start),
        trigger: Some(trigger),
        resumable: false,
    }
}

pub fn resumable_entry(id: &str, trigger: TriggerType) -> FlowNode {
    FlowNode {
        resumable: true,
        ..entry(id, trigger)
    }
}

/// Annotation-only canvas node (sticky note).
pub fn note(id: &str) -> FlowNode {
    FlowNode {
        id: id.into(),
        label: Some("note".into()),
        kind: None,
        trigger: None,
        resumable: false,
    }
}

pub fn edge(source: &str, target: &str) -> FlowEdge {
    FlowEdge {
        id: None,
        source: source.into(),
        target: target.into(),
        source_handle: None,
        target_handle: None,
    }
}

pub fn checkpointed() -> RuntimeSettings {
    RuntimeSettings {
        checkpointer_configured: true,
    }
}

// =============================================================================
// Assertions
// =============================================================================

pub fn has_code(issues: &[ValidationIssue], code: &str) -> bool {
    issues.iter().any(|i| i.code == code)
}
