//! Entry-node validation: trigger-specific edge shape, resume preconditions,
//! and runtime restrictions for the graph's Start node(s).

use crate::error::ValidationIssue;
use crate::model::{
    FlowEdge, FlowNode, OperatorKind, Runtime, RuntimeSettings, TriggerType, node_by_id,
};

/// Outcome of entry validation: at most one hard failure, plus advisory
/// warnings that never downgrade a pass.
#[derive(Debug, Clone, Default)]
pub struct EntryReport {
    pub reason: Option<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl EntryReport {
    pub fn ok(&self) -> bool {
        self.reason.is_none()
    }

    fn fail(self, reason: ValidationIssue) -> Self {
        EntryReport {
            reason: Some(reason),
            warnings: self.warnings,
        }
    }
}

/// Validate a Start node's trigger configuration and wiring. Non-entry nodes
/// pass trivially. Checks run in order; the first hard failure wins.
pub fn validate_entry(
    node: &FlowNode,
    nodes: &[FlowNode],
    edges: &[FlowEdge],
    runtime: Runtime,
    settings: &RuntimeSettings,
) -> EntryReport {
    let mut report = EntryReport::default();

    if !node.is_entry() {
        return report;
    }
    let name = node.display_name();

    let Some(trigger) = node.trigger else {
        return report.fail(ValidationIssue::error(
            "V002",
            format!("Entry node '{}' has no trigger type", name),
            Some(node.id.clone()),
        ));
    };

    if edges.iter().any(|e| e.target == node.id) {
        return report.fail(ValidationIssue::error(
            "V003",
            format!("Entry node '{}' must not have incoming edges", name),
            Some(node.id.clone()),
        ));
    }

    let outgoing: Vec<&FlowEdge> = edges.iter().filter(|e| e.source == node.id).collect();

    match trigger {
        TriggerType::Human => {
            if outgoing.is_empty() {
                return report.fail(ValidationIssue::error(
                    "V004",
                    format!("Human-triggered entry '{}' needs at least one outgoing edge", name),
                    Some(node.id.clone()),
                ));
            }
            match node_by_id(nodes, &outgoing[0].target) {
                Some(target) if target.kind == Some(OperatorKind::AgentCall) => {}
                Some(target) => {
                    return report.fail(ValidationIssue::error(
                        "V004",
                        format!(
                            "Human-triggered entry '{}' must connect first to an agentCall node, found {}",
                            name,
                            target.display_name()
                        ),
                        Some(node.id.clone()),
                    ));
                }
                None => {
                    return report.fail(ValidationIssue::error(
                        "V004",
                        format!(
                            "Human-triggered entry '{}' connects first to unknown node '{}'",
                            name, outgoing[0].target
                        ),
                        Some(node.id.clone()),
                    ));
                }
            }
            report.warnings.push(human_trigger_advisory(node, runtime));
        }
        TriggerType::System => {
            if outgoing.is_empty() {
                return report.fail(ValidationIssue::error(
                    "V004",
                    format!("System-triggered entry '{}' needs at least one outgoing edge", name),
                    Some(node.id.clone()),
                ));
            }
        }
        TriggerType::Event => {
            // The external scheduler selects the first real node.
            if !outgoing.is_empty() {
                return report.fail(ValidationIssue::error(
                    "V004",
                    format!(
                        "Event-triggered entry '{}' must have no outgoing edges, found {}",
                        name,
                        outgoing.len()
                    ),
                    Some(node.id.clone()),
                ));
            }
            if runtime == Runtime::Langgraph {
                report.warnings.push(ValidationIssue::warning(
                    "W002",
                    format!(
                        "LangGraph has no native scheduler; an external scheduler must dispatch '{}' to its first node",
                        name
                    ),
                    Some(node.id.clone()),
                ));
            }
        }
        TriggerType::Multi => {
            if outgoing.len() < 2 {
                return report.fail(ValidationIssue::error(
                    "V004",
                    format!(
                        "Fan-out entry '{}' needs at least 2 outgoing edges, found {}",
                        name,
                        outgoing.len()
                    ),
                    Some(node.id.clone()),
                ));
            }
        }
    }

    if node.resumable && !settings.checkpointer_configured {
        return report.fail(ValidationIssue::error(
            "V005",
            format!(
                "Entry node '{}' is resume-capable but no checkpoint store is configured",
                name
            ),
            Some(node.id.clone()),
        ));
    }

    if runtime == Runtime::Autogen {
        if node.resumable && trigger == TriggerType::System {
            return report.fail(ValidationIssue::error(
                "V006",
                format!(
                    "AutoGen does not support resume-capable entries with the system trigger ('{}')",
                    name
                ),
                Some(node.id.clone()),
            ));
        }
        if !matches!(trigger, TriggerType::Human | TriggerType::System) {
            return report.fail(ValidationIssue::error(
                "V006",
                format!(
                    "AutoGen only supports human and system triggers; entry '{}' uses {}",
                    name,
                    trigger.as_str()
                ),
                Some(node.id.clone()),
            ));
        }
    }

    report
}

fn human_trigger_advisory(node: &FlowNode, runtime: Runtime) -> ValidationIssue {
    let message = match runtime {
        Runtime::Langgraph => format!(
            "LangGraph human trigger: add an interrupt point after '{}' so the run suspends for input",
            node.display_name()
        ),
        Runtime::Autogen => format!(
            "AutoGen human trigger: wrap '{}' in a user-proxy agent so the human turn is routed through it",
            node.display_name()
        ),
    };
    ValidationIssue::warning("W001", message, Some(node.id.clone()))
}
