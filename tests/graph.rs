//! Whole-graph validation: cardinality, connectivity, branch minimums,
//! cycles, and the supplementary hygiene rules.

mod helpers;

use helpers::*;
use validator::model::{FlowEdge, FlowNode, OperatorKind, Runtime, RuntimeSettings, TriggerType};
use validator::validate::validate_graph;

fn run(nodes: &[FlowNode], edges: &[FlowEdge], runtime: Runtime) -> validator::validate::GraphReport {
    validate_graph(nodes, edges, runtime, &RuntimeSettings::default())
}

#[test]
fn minimal_workflow_passes_on_both_runtimes() {
    let nodes = vec![
        entry("start", TriggerType::System),
        op("agent", OperatorKind::AgentCall),
        op("stop", OperatorKind::Stop),
    ];
    let edges = vec![edge("start", "agent"), edge("agent", "stop")];

    for runtime in [Runtime::Langgraph, Runtime::Autogen] {
        let report = run(&nodes, &edges, runtime);
        assert!(report.ok(), "expected a clean pass, got: {:?}", report.errors);
        assert!(report.errors.is_empty());
    }
}

#[test]
fn human_entry_straight_to_stop_fails() {
    let nodes = vec![entry("start", TriggerType::Human), op("stop", OperatorKind::Stop)];
    let edges = vec![edge("start", "stop")];

    let report = run(&nodes, &edges, Runtime::Langgraph);
    assert!(!report.ok());
    assert!(has_code(&report.errors, "V004"), "{:?}", report.errors);
}

#[test]
fn missing_entry_is_reported() {
    let nodes = vec![op("agent", OperatorKind::AgentCall), op("stop", OperatorKind::Stop)];
    let edges = vec![edge("agent", "stop")];
    let report = run(&nodes, &edges, Runtime::Langgraph);
    assert!(has_code(&report.errors, "V001"));
}

#[test]
fn missing_exit_is_reported() {
    let nodes = vec![
        entry("start", TriggerType::System),
        op("agent", OperatorKind::AgentCall),
    ];
    let edges = vec![edge("start", "agent")];
    let report = run(&nodes, &edges, Runtime::Langgraph);
    assert!(has_code(&report.errors, "V007"));
}

#[test]
fn multiple_entries_need_the_fan_out_trigger() {
    let nodes = vec![
        entry("s1", TriggerType::System),
        entry("s2", TriggerType::System),
        op("agent", OperatorKind::AgentCall),
        op("stop", OperatorKind::Stop),
    ];
    let edges = vec![edge("s1", "agent"), edge("s2", "agent"), edge("agent", "stop")];
    let report = run(&nodes, &edges, Runtime::Langgraph);
    assert!(has_code(&report.errors, "V001"));
}

#[test]
fn cooperating_fan_out_entries_are_tolerated() {
    let nodes = vec![
        entry("s1", TriggerType::Multi),
        entry("s2", TriggerType::Multi),
        op("a", OperatorKind::AgentCall),
        op("b", OperatorKind::ToolCall),
        op("stop", OperatorKind::Stop),
    ];
    let edges = vec![
        edge("s1", "a"),
        edge("s1", "b"),
        edge("s2", "a"),
        edge("s2", "b"),
        edge("a", "stop"),
        edge("b", "stop"),
    ];
    let report = run(&nodes, &edges, Runtime::Langgraph);
    assert!(!has_code(&report.errors, "V001"), "{:?}", report.errors);
}

#[test]
fn autogen_forbids_multiple_entries_outright() {
    let nodes = vec![
        entry("s1", TriggerType::Multi),
        entry("s2", TriggerType::Multi),
        op("a", OperatorKind::AgentCall),
        op("b", OperatorKind::ToolCall),
        op("stop", OperatorKind::Stop),
    ];
    let edges = vec![
        edge("s1", "a"),
        edge("s1", "b"),
        edge("s2", "a"),
        edge("s2", "b"),
        edge("a", "stop"),
        edge("b", "stop"),
    ];
    let report = run(&nodes, &edges, Runtime::Autogen);
    assert!(has_code(&report.errors, "V001"));
}

#[test]
fn decision_branch_minimum() {
    let nodes = vec![
        entry("start", TriggerType::System),
        op("decide", OperatorKind::Decision),
        op("a", OperatorKind::AgentCall),
        op("b", OperatorKind::ToolCall),
        op("stop", OperatorKind::Stop),
    ];

    let one_branch = vec![
        edge("start", "decide"),
        edge("decide", "a"),
        edge("a", "stop"),
        edge("b", "stop"),
    ];
    let report = run(&nodes, &one_branch, Runtime::Langgraph);
    assert!(has_code(&report.errors, "V011"), "{:?}", report.errors);

    let two_branches = vec![
        edge("start", "decide"),
        edge("decide", "a"),
        edge("decide", "b"),
        edge("a", "stop"),
        edge("b", "stop"),
    ];
    let report = run(&nodes, &two_branches, Runtime::Langgraph);
    assert!(!has_code(&report.errors, "V011"), "{:?}", report.errors);
    assert!(report.ok());
}

#[test]
fn orphan_node_lacks_incoming() {
    let nodes = vec![
        entry("start", TriggerType::System),
        op("agent", OperatorKind::AgentCall),
        op("orphan", OperatorKind::ToolCall),
        op("stop", OperatorKind::Stop),
    ];
    let edges = vec![edge("start", "agent"), edge("agent", "stop"), edge("orphan", "stop")];
    let report = run(&nodes, &edges, Runtime::Langgraph);
    assert!(has_code(&report.errors, "V008"));
    let orphan_error = report.errors.iter().find(|e| e.code == "V008").unwrap();
    assert!(orphan_error.message.contains("orphan"), "{}", orphan_error.message);
}

#[test]
fn dead_end_node_lacks_outgoing() {
    let nodes = vec![
        entry("start", TriggerType::System),
        op("agent", OperatorKind::AgentCall),
        op("stop", OperatorKind::Stop),
    ];
    let edges = vec![edge("start", "agent"), edge("start", "stop")];
    let report = run(&nodes, &edges, Runtime::Langgraph);
    assert!(has_code(&report.errors, "V010"));
}

#[test]
fn illegal_incoming_edge_is_named() {
    // toolCall -> humanPause is legal on LangGraph but not on AutoGen.
    let nodes = vec![
        entry("start", TriggerType::System),
        op("tool", OperatorKind::ToolCall),
        op("pause", OperatorKind::HumanPause),
        op("stop", OperatorKind::Stop),
    ];
    let edges = vec![
        edge("start", "tool"),
        edge("tool", "pause"),
        edge("pause", "stop"),
    ];

    assert!(run(&nodes, &edges, Runtime::Langgraph).ok());

    let report = run(&nodes, &edges, Runtime::Autogen);
    assert!(has_code(&report.errors, "V009"), "{:?}", report.errors);

    // The displayed text names the offending nodes, not just their kinds.
    let issue = report.errors.iter().find(|e| e.code == "V009").unwrap();
    assert!(issue.message.contains("toolCall (tool)"), "{}", issue.message);
    assert!(issue.message.contains("humanPause (pause)"), "{}", issue.message);
    assert!(
        issue.message.contains("humanPause cannot accept input from toolCall"),
        "{}",
        issue.message
    );
}

#[test]
fn cycle_without_loop_node_is_reported() {
    let nodes = vec![
        entry("start", TriggerType::System),
        op("a", OperatorKind::AgentCall),
        op("b", OperatorKind::ToolCall),
        op("stop", OperatorKind::Stop),
    ];
    let edges = vec![
        edge("start", "a"),
        edge("a", "b"),
        edge("b", "a"),
        edge("a", "stop"),
    ];
    let report = run(&nodes, &edges, Runtime::Langgraph);
    assert!(has_code(&report.errors, "V012"), "{:?}", report.errors);
}

#[test]
fn cycle_through_loop_node_is_legal() {
    let nodes = vec![
        entry("start", TriggerType::System),
        op("a", OperatorKind::AgentCall),
        op("l", OperatorKind::Loop),
        op("stop", OperatorKind::Stop),
    ];
    let edges = vec![
        edge("start", "a"),
        edge("a", "l"),
        edge("l", "a"),
        edge("a", "stop"),
    ];
    let report = run(&nodes, &edges, Runtime::Langgraph);
    assert!(!has_code(&report.errors, "V012"), "{:?}", report.errors);
}

#[test]
fn dangling_and_duplicate_edges_are_reported() {
    let nodes = vec![
        entry("start", TriggerType::System),
        op("agent", OperatorKind::AgentCall),
        op("stop", OperatorKind::Stop),
    ];
    let edges = vec![
        edge("start", "agent"),
        edge("agent", "stop"),
        edge("agent", "stop"),
        edge("agent", "ghost"),
    ];
    let report = run(&nodes, &edges, Runtime::Langgraph);
    assert!(has_code(&report.errors, "V013"), "{:?}", report.errors);
    assert!(has_code(&report.errors, "V014"), "{:?}", report.errors);
}

#[test]
fn unreachable_island_is_reported() {
    let nodes = vec![
        entry("start", TriggerType::System),
        op("agent", OperatorKind::AgentCall),
        op("stop", OperatorKind::Stop),
        op("x", OperatorKind::ToolCall),
        op("y", OperatorKind::MemoryWrite),
    ];
    let edges = vec![
        edge("start", "agent"),
        edge("agent", "stop"),
        edge("x", "y"),
        edge("y", "x"),
    ];
    let report = run(&nodes, &edges, Runtime::Langgraph);
    assert!(has_code(&report.errors, "V015"), "{:?}", report.errors);
}

#[test]
fn warnings_never_downgrade_a_pass() {
    let nodes = vec![
        entry("start", TriggerType::Human),
        op("agent", OperatorKind::AgentCall),
        op("stop", OperatorKind::Stop),
    ];
    let edges = vec![edge("start", "agent"), edge("agent", "stop")];
    let report = run(&nodes, &edges, Runtime::Langgraph);
    assert!(report.ok());
    assert!(report.warnings.iter().any(|w| w.code == "W001"));
}

#[test]
fn resume_without_checkpointer_fails_graph_validation() {
    let nodes = vec![
        resumable_entry("start", TriggerType::System),
        op("agent", OperatorKind::AgentCall),
        op("stop", OperatorKind::Stop),
    ];
    let edges = vec![edge("start", "agent"), edge("agent", "stop")];
    let report = run(&nodes, &edges, Runtime::Langgraph);
    assert!(has_code(&report.errors, "V005"));
}

#[test]
fn annotation_nodes_are_ignored() {
    let nodes = vec![
        entry("start", TriggerType::System),
        op("agent", OperatorKind::AgentCall),
        op("stop", OperatorKind::Stop),
        note("sticky"),
    ];
    let edges = vec![edge("start", "agent"), edge("agent", "stop")];
    let report = run(&nodes, &edges, Runtime::Langgraph);
    assert!(report.ok(), "{:?}", report.errors);
}
