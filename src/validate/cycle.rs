//! Cycle guard for proposed edges.

use crate::model::{FlowGraph, FlowNode, OperatorKind};

/// Would adding `source -> target` close a directed cycle?
///
/// BFS from `target` over existing edges; reaching `source` means the new
/// edge would complete a loop. Loop nodes exist to re-enter earlier nodes,
/// so the check is skipped entirely when the source is one.
pub fn would_create_cycle(source: &FlowNode, target: &FlowNode, graph: &FlowGraph) -> bool {
    if source.kind == Some(OperatorKind::Loop) {
        return false;
    }
    graph.reaches(&target.id, &source.id)
}
