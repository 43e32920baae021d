//! Cycle guard: proposed back-edges and the loop-node exception.

mod helpers;

use helpers::*;
use validator::model::{FlowGraph, OperatorKind, Runtime, TriggerType};
use validator::validate::{can_connect, would_create_cycle};

#[test]
fn back_edge_closes_a_cycle() {
    let nodes = vec![op("a", OperatorKind::AgentCall), op("b", OperatorKind::ToolCall)];
    let edges = vec![edge("a", "b")];
    let graph = FlowGraph::build(&nodes, &edges);

    assert!(would_create_cycle(&nodes[1], &nodes[0], &graph));
}

#[test]
fn loop_source_may_re_enter() {
    let nodes = vec![op("a", OperatorKind::AgentCall), op("l", OperatorKind::Loop)];
    let edges = vec![edge("a", "l")];
    let graph = FlowGraph::build(&nodes, &edges);

    assert!(!would_create_cycle(&nodes[1], &nodes[0], &graph));
}

#[test]
fn self_edge_is_a_cycle() {
    let nodes = vec![op("a", OperatorKind::ToolCall)];
    let graph = FlowGraph::build(&nodes, &[]);
    assert!(would_create_cycle(&nodes[0], &nodes[0], &graph));
}

#[test]
fn can_connect_rejects_cycle_with_message() {
    let nodes = vec![op("a", OperatorKind::AgentCall), op("b", OperatorKind::ToolCall)];
    let edges = vec![edge("a", "b")];

    let err = can_connect(&nodes[1], &nodes[0], &nodes, &edges, Runtime::Langgraph)
        .expect_err("b -> a closes a cycle");
    assert_eq!(err.code, "V012");
    assert!(err.message.contains("cycle"), "{}", err.message);
}

#[test]
fn can_connect_allows_loop_back_edge() {
    let nodes = vec![op("a", OperatorKind::AgentCall), op("l", OperatorKind::Loop)];
    let edges = vec![edge("a", "l")];

    assert!(can_connect(&nodes[1], &nodes[0], &nodes, &edges, Runtime::Langgraph).is_ok());
}

#[test]
fn can_connect_still_applies_policy() {
    // The cycle guard never rescues a policy-illegal edge.
    let nodes = vec![
        op("stop", OperatorKind::Stop),
        entry("start", TriggerType::System),
    ];
    let err = can_connect(&nodes[0], &nodes[1], &nodes, &[], Runtime::Langgraph)
        .expect_err("stop -> start is illegal");
    assert_eq!(err.code, "V009");
}

#[test]
fn forward_edge_passes_the_gate() {
    let nodes = vec![
        entry("start", TriggerType::System),
        op("agent", OperatorKind::AgentCall),
    ];
    assert!(can_connect(&nodes[0], &nodes[1], &nodes, &[], Runtime::Autogen).is_ok());
}
