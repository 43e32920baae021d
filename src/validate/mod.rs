//! Connectivity validation: per-edge gates and whole-graph checks.
//!
//! Every operation here is a pure read of the snapshot the editor passes in;
//! nothing mutates the graph and nothing panics.

pub mod connection;
pub mod cycle;
pub mod entry;
pub mod structural;

pub use connection::validate_connection;
pub use cycle::would_create_cycle;
pub use entry::{EntryReport, validate_entry};

use crate::error::ValidationIssue;
use crate::model::{FlowEdge, FlowGraph, FlowNode, Runtime, RuntimeSettings};
use crate::policy::ExpandContext;

/// Outcome of a whole-graph check. Always complete: every violation is
/// collected rather than failing at the first.
#[derive(Debug, Clone, Default)]
pub struct GraphReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl GraphReport {
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// The gate the editor calls on every proposed edge: policy check composed
/// with the cycle guard.
pub fn can_connect(
    source: &FlowNode,
    target: &FlowNode,
    nodes: &[FlowNode],
    edges: &[FlowEdge],
    runtime: Runtime,
) -> Result<(), ValidationIssue> {
    validate_connection(source, target, runtime, ExpandContext { nodes, edges })?;

    let graph = FlowGraph::build(nodes, edges);
    if would_create_cycle(source, target, &graph) {
        return Err(ValidationIssue::error(
            "V012",
            format!(
                "Connecting '{}' to '{}' would create a cycle",
                source.display_name(),
                target.display_name()
            ),
            Some(source.id.clone()),
        ));
    }

    Ok(())
}

/// Run every structural rule over the whole graph.
pub fn validate_graph(
    nodes: &[FlowNode],
    edges: &[FlowEdge],
    runtime: Runtime,
    settings: &RuntimeSettings,
) -> GraphReport {
    let mut report = GraphReport::default();
    let graph = FlowGraph::build(nodes, edges);

    structural::check_entry_cardinality(nodes, runtime, &mut report.errors);
    structural::check_entries(
        nodes,
        edges,
        runtime,
        settings,
        &mut report.errors,
        &mut report.warnings,
    );
    structural::check_exit_exists(nodes, &mut report.errors);
    structural::check_dangling_edges(nodes, edges, &mut report.errors);
    structural::check_duplicate_edges(edges, &mut report.errors);
    structural::check_incoming(nodes, edges, &graph, runtime, &mut report.errors);
    structural::check_outgoing(nodes, &graph, &mut report.errors);
    structural::check_cycles(nodes, edges, &mut report.errors);
    structural::check_reachability(nodes, &graph, &mut report.errors);

    report
}
