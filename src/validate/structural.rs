//! Whole-graph structural rules. Each rule appends to the issue list
//! independently so a single pass reports every problem.

use std::collections::HashSet;

use petgraph::algo::is_cyclic_directed;
use petgraph::visit::Bfs;

use super::connection::validate_connection;
use super::entry::validate_entry;
use crate::error::ValidationIssue;
use crate::model::{
    FlowEdge, FlowGraph, FlowNode, OperatorKind, Runtime, RuntimeSettings, TriggerType, node_by_id,
};
use crate::policy::{ExpandContext, policy_for};

pub fn check_entry_cardinality(
    nodes: &[FlowNode],
    runtime: Runtime,
    issues: &mut Vec<ValidationIssue>,
) {
    let entries: Vec<&FlowNode> = nodes.iter().filter(|n| n.is_entry()).collect();

    if entries.is_empty() {
        issues.push(ValidationIssue::error(
            "V001",
            "Workflow must have exactly one entry node, found 0",
            None,
        ));
        return;
    }

    if entries.len() > 1 {
        if runtime == Runtime::Autogen {
            issues.push(ValidationIssue::error(
                "V001",
                format!(
                    "AutoGen workflows support a single entry node, found {}",
                    entries.len()
                ),
                None,
            ));
        } else if !entries
            .iter()
            .all(|n| n.trigger == Some(TriggerType::Multi))
        {
            issues.push(ValidationIssue::error(
                "V001",
                format!(
                    "Multiple entry nodes require the fan-out (multi) trigger on every entry, found {}",
                    entries.len()
                ),
                None,
            ));
        }
    }
}

pub fn check_entries(
    nodes: &[FlowNode],
    edges: &[FlowEdge],
    runtime: Runtime,
    settings: &RuntimeSettings,
    errors: &mut Vec<ValidationIssue>,
    warnings: &mut Vec<ValidationIssue>,
) {
    for node in nodes.iter().filter(|n| n.is_entry()) {
        let report = validate_entry(node, nodes, edges, runtime, settings);
        if let Some(reason) = report.reason {
            errors.push(reason);
        }
        warnings.extend(report.warnings);
    }
}

pub fn check_exit_exists(nodes: &[FlowNode], issues: &mut Vec<ValidationIssue>) {
    if !nodes.iter().any(|n| n.is_exit()) {
        issues.push(ValidationIssue::error(
            "V007",
            "Workflow must have at least one exit node",
            None,
        ));
    }
}

pub fn check_incoming(
    nodes: &[FlowNode],
    edges: &[FlowEdge],
    graph: &FlowGraph,
    runtime: Runtime,
    issues: &mut Vec<ValidationIssue>,
) {
    let ctx = ExpandContext { nodes, edges };

    for node in nodes {
        if node.kind.is_none() || node.is_entry() {
            continue;
        }

        let sources = graph.predecessors(&node.id);
        if sources.is_empty() {
            issues.push(ValidationIssue::error(
                "V008",
                format!("Node '{}' has no incoming connection", node.display_name()),
                Some(node.id.clone()),
            ));
            continue;
        }

        for source_id in sources {
            let Some(source) = node_by_id(nodes, source_id) else {
                continue;
            };
            if let Err(mut issue) = validate_connection(source, node, runtime, ctx) {
                issue.message = format!(
                    "'{}' -> '{}': {}",
                    source.display_name(),
                    node.display_name(),
                    issue.message
                );
                issues.push(issue);
            }
        }
    }
}

pub fn check_outgoing(nodes: &[FlowNode], graph: &FlowGraph, issues: &mut Vec<ValidationIssue>) {
    for node in nodes {
        let Some(kind) = node.kind else { continue };
        // Entry outgoing shape is governed by the trigger rules.
        if node.is_exit() || node.is_entry() {
            continue;
        }

        let count = graph.outgoing_count(&node.id);
        if count == 0 {
            issues.push(ValidationIssue::error(
                "V010",
                format!("Node '{}' has no outgoing connection", node.display_name()),
                Some(node.id.clone()),
            ));
        }

        if let Some(min) = policy_for(kind).min_branches {
            if count < min {
                issues.push(ValidationIssue::error(
                    "V011",
                    format!(
                        "Node '{}' needs at least {} outgoing branches, found {}",
                        node.display_name(),
                        min,
                        count
                    ),
                    Some(node.id.clone()),
                ));
            }
        }
    }
}

/// A cycle is legal only when it re-enters through a Loop node, i.e. every
/// cycle must contain an edge whose source is a Loop. Dropping those edges
/// must leave the graph acyclic.
pub fn check_cycles(nodes: &[FlowNode], edges: &[FlowEdge], issues: &mut Vec<ValidationIssue>) {
    let forward: Vec<FlowEdge> = edges
        .iter()
        .filter(|e| {
            node_by_id(nodes, &e.source).and_then(|n| n.kind) != Some(OperatorKind::Loop)
        })
        .cloned()
        .collect();

    let graph = FlowGraph::build(nodes, &forward);
    if is_cyclic_directed(&graph.graph) {
        issues.push(ValidationIssue::error(
            "V012",
            "Workflow contains a cycle that does not pass through a loop node",
            None,
        ));
    }
}

pub fn check_dangling_edges(
    nodes: &[FlowNode],
    edges: &[FlowEdge],
    issues: &mut Vec<ValidationIssue>,
) {
    for edge in edges {
        for endpoint in [&edge.source, &edge.target] {
            if node_by_id(nodes, endpoint).is_none() {
                issues.push(ValidationIssue::error(
                    "V013",
                    format!(
                        "Edge '{}' references unknown node '{}'",
                        edge_name(edge),
                        endpoint
                    ),
                    None,
                ));
            }
        }
    }
}

pub fn check_duplicate_edges(edges: &[FlowEdge], issues: &mut Vec<ValidationIssue>) {
    let mut seen = HashSet::new();
    for edge in edges {
        let key = (
            edge.source.clone(),
            edge.target.clone(),
            edge.source_handle.clone(),
            edge.target_handle.clone(),
        );
        if !seen.insert(key) {
            issues.push(ValidationIssue::error(
                "V014",
                format!("Duplicate edge from '{}' to '{}'", edge.source, edge.target),
                None,
            ));
        }
    }
}

pub fn check_reachability(
    nodes: &[FlowNode],
    graph: &FlowGraph,
    issues: &mut Vec<ValidationIssue>,
) {
    let entries: Vec<&FlowNode> = nodes.iter().filter(|n| n.is_entry()).collect();
    if entries.is_empty() {
        return; // already reported by the cardinality rule
    }
    // Event-triggered entries are wired at dispatch time by an external
    // scheduler, so reachability from the entry is meaningless.
    if entries
        .iter()
        .any(|n| n.trigger == Some(TriggerType::Event))
    {
        return;
    }

    let mut reachable = HashSet::new();
    for entry in &entries {
        let Some(&idx) = graph.node_indices.get(&entry.id) else {
            continue;
        };
        let mut bfs = Bfs::new(&graph.graph, idx);
        while let Some(nx) = bfs.next(&graph.graph) {
            reachable.insert(nx);
        }
    }

    for node in nodes {
        if node.kind.is_none() {
            continue;
        }
        let Some(&idx) = graph.node_indices.get(&node.id) else {
            continue;
        };
        if !reachable.contains(&idx) {
            issues.push(ValidationIssue::error(
                "V015",
                format!(
                    "Node '{}' is not reachable from an entry node",
                    node.display_name()
                ),
                Some(node.id.clone()),
            ));
        }
    }
}

fn edge_name(edge: &FlowEdge) -> String {
    match &edge.id {
        Some(id) => id.clone(),
        None => format!("{}->{}", edge.source, edge.target),
    }
}
