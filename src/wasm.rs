//! WASM entry points for the browser-based graph editor.

use wasm_bindgen::prelude::*;

use crate::error::{Severity, ValidationIssue};
use crate::model::node_by_id;
use crate::validate;

/// Check one proposed edge against the connectivity policy.
/// Returns `{ok, reason?}`.
#[wasm_bindgen]
pub fn validate_connection(source_id: &str, target_id: &str, snapshot_json: &str) -> JsValue {
    let verdict = edge_verdict(source_id, target_id, snapshot_json, false);
    serde_wasm_bindgen::to_value(&verdict).unwrap_or(JsValue::NULL)
}

/// The full per-drag gate: policy check plus cycle guard.
/// Returns `{ok, reason?}`.
#[wasm_bindgen]
pub fn can_connect(source_id: &str, target_id: &str, snapshot_json: &str) -> JsValue {
    let verdict = edge_verdict(source_id, target_id, snapshot_json, true);
    serde_wasm_bindgen::to_value(&verdict).unwrap_or(JsValue::NULL)
}

fn edge_verdict(
    source_id: &str,
    target_id: &str,
    snapshot_json: &str,
    with_cycle_guard: bool,
) -> VerdictDto {
    let snapshot = match crate::model::parse(snapshot_json) {
        Ok(s) => s,
        Err(e) => return VerdictDto::reject(parse_issue(e)),
    };

    let Some(source) = node_by_id(&snapshot.nodes, source_id) else {
        return VerdictDto::reject(unknown_node(source_id));
    };
    let Some(target) = node_by_id(&snapshot.nodes, target_id) else {
        return VerdictDto::reject(unknown_node(target_id));
    };

    let result = if with_cycle_guard {
        validate::can_connect(
            source,
            target,
            &snapshot.nodes,
            &snapshot.edges,
            snapshot.runtime,
        )
    } else {
        validate::validate_connection(
            source,
            target,
            snapshot.runtime,
            crate::policy::ExpandContext {
                nodes: &snapshot.nodes,
                edges: &snapshot.edges,
            },
        )
    };

    match result {
        Ok(()) => VerdictDto::pass(),
        Err(issue) => VerdictDto::reject(issue.into()),
    }
}

/// Re-check an entry node after its trigger configuration changes.
/// Returns `{ok, reason?, warnings}`.
#[wasm_bindgen]
pub fn validate_entry(node_id: &str, snapshot_json: &str) -> JsValue {
    let report = entry_report(node_id, snapshot_json);
    serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL)
}

fn entry_report(node_id: &str, snapshot_json: &str) -> EntryDto {
    let snapshot = match crate::model::parse(snapshot_json) {
        Ok(s) => s,
        Err(e) => {
            return EntryDto {
                ok: false,
                reason: Some(parse_issue(e)),
                warnings: vec![],
            };
        }
    };

    let Some(node) = node_by_id(&snapshot.nodes, node_id) else {
        return EntryDto {
            ok: false,
            reason: Some(unknown_node(node_id)),
            warnings: vec![],
        };
    };

    let report = validate::validate_entry(
        node,
        &snapshot.nodes,
        &snapshot.edges,
        snapshot.runtime,
        &snapshot.settings,
    );
    EntryDto {
        ok: report.ok(),
        reason: report.reason.map(IssueDto::from),
        warnings: report.warnings.into_iter().map(IssueDto::from).collect(),
    }
}

/// Validate the whole graph ("validate workflow" / pre-export).
/// Returns `{ok, errors, warnings}`.
#[wasm_bindgen]
pub fn validate_graph(snapshot_json: &str) -> JsValue {
    let report = graph_report(snapshot_json);
    serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL)
}

fn graph_report(snapshot_json: &str) -> GraphDto {
    let snapshot = match crate::model::parse(snapshot_json) {
        Ok(s) => s,
        Err(e) => {
            return GraphDto {
                ok: false,
                errors: vec![parse_issue(e)],
                warnings: vec![],
            };
        }
    };

    let report = validate::validate_graph(
        &snapshot.nodes,
        &snapshot.edges,
        snapshot.runtime,
        &snapshot.settings,
    );
    GraphDto {
        ok: report.ok(),
        errors: report.errors.into_iter().map(IssueDto::from).collect(),
        warnings: report.warnings.into_iter().map(IssueDto::from).collect(),
    }
}

fn parse_issue(e: crate::error::ParseError) -> IssueDto {
    IssueDto {
        code: "P001".into(),
        severity: "error".into(),
        message: e.to_string(),
        node_id: None,
    }
}

fn unknown_node(id: &str) -> IssueDto {
    IssueDto {
        code: "P002".into(),
        severity: "error".into(),
        message: format!("Unknown node '{}'", id),
        node_id: Some(id.to_string()),
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueDto {
    code: String,
    severity: String,
    message: String,
    node_id: Option<String>,
}

impl From<ValidationIssue> for IssueDto {
    fn from(issue: ValidationIssue) -> Self {
        IssueDto {
            code: issue.code.into(),
            severity: match issue.severity {
                Severity::Error => "error".into(),
                Severity::Warning => "warning".into(),
            },
            message: issue.message,
            node_id: issue.node_id,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct VerdictDto {
    ok: bool,
    reason: Option<IssueDto>,
}

impl VerdictDto {
    fn pass() -> Self {
        VerdictDto { ok: true, reason: None }
    }

    fn reject(reason: IssueDto) -> Self {
        VerdictDto { ok: false, reason: Some(reason) }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct EntryDto {
    ok: bool,
    reason: Option<IssueDto>,
    warnings: Vec<IssueDto>,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct GraphDto {
    ok: bool,
    errors: Vec<IssueDto>,
    warnings: Vec<IssueDto>,
}
