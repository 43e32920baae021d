//! Per-edge legality: mutual acceptance between two candidate-connected nodes.

use crate::error::ValidationIssue;
use crate::model::{FlowNode, Runtime};
use crate::policy::{ExpandContext, expand, policy_for};

/// Check whether an edge `source -> target` is permitted by the policy table.
///
/// Both directions must pass: the source's allowed successors must contain
/// the target's kind, and the target's allowed predecessors (runtime branch
/// selected) must contain the source's kind. The relation is not symmetric
/// from a single lookup.
pub fn validate_connection(
    source: &FlowNode,
    target: &FlowNode,
    runtime: Runtime,
    ctx: ExpandContext<'_>,
) -> Result<(), ValidationIssue> {
    // Annotation-only nodes are outside this engine's concern.
    let (Some(source_kind), Some(target_kind)) = (source.kind, target.kind) else {
        return Ok(());
    };

    let source_policy = policy_for(source_kind);
    let target_policy = policy_for(target_kind);

    let successors = expand(source_policy.successors.for_runtime(runtime), ctx);
    if !successors.contains(&target_kind) {
        return Err(ValidationIssue::error(
            "V009",
            format!("{} cannot connect to {}", source_kind, target_kind),
            Some(source.id.clone()),
        ));
    }

    let predecessors = expand(target_policy.predecessors.for_runtime(runtime), ctx);
    if !predecessors.contains(&source_kind) {
        return Err(ValidationIssue::error(
            "V009",
            format!("{} cannot accept input from {}", target_kind, source_kind),
            Some(target.id.clone()),
        ));
    }

    Ok(())
}
