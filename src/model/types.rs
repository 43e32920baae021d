//! Rust types mirroring the editor's canvas model.
//!
//! These types are the serde target for the snapshot JSON the graph editor
//! sends on every validation call. SYNC NOTE: keep `OperatorKind` and
//! `TriggerType` aligned with the editor's node registry; when a kind is
//! added, also review `policy/table.rs`.

use serde::{Deserialize, Serialize};

// =============================================================================
// OPERATOR KINDS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperatorKind {
    Start,
    Stop,
    AgentCall,
    ToolCall,
    MemoryRead,
    MemoryWrite,
    Decision,
    ParallelFork,
    ParallelJoin,
    Loop,
    ErrorRetry,
    Timeout,
    HumanPause,
    SubGraph,
}

impl OperatorKind {
    /// Every operator kind, in declaration order.
    pub const ALL: [OperatorKind; 14] = [
        OperatorKind::Start,
        OperatorKind::Stop,
        OperatorKind::AgentCall,
        OperatorKind::ToolCall,
        OperatorKind::MemoryRead,
        OperatorKind::MemoryWrite,
        OperatorKind::Decision,
        OperatorKind::ParallelFork,
        OperatorKind::ParallelJoin,
        OperatorKind::Loop,
        OperatorKind::ErrorRetry,
        OperatorKind::Timeout,
        OperatorKind::HumanPause,
        OperatorKind::SubGraph,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorKind::Start => "start",
            OperatorKind::Stop => "stop",
            OperatorKind::AgentCall => "agentCall",
            OperatorKind::ToolCall => "toolCall",
            OperatorKind::MemoryRead => "memoryRead",
            OperatorKind::MemoryWrite => "memoryWrite",
            OperatorKind::Decision => "decision",
            OperatorKind::ParallelFork => "parallelFork",
            OperatorKind::ParallelJoin => "parallelJoin",
            OperatorKind::Loop => "loop",
            OperatorKind::ErrorRetry => "errorRetry",
            OperatorKind::Timeout => "timeout",
            OperatorKind::HumanPause => "humanPause",
            OperatorKind::SubGraph => "subGraph",
        }
    }

    /// Start and Stop are the two terminal kinds.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OperatorKind::Start | OperatorKind::Stop)
    }
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// TRIGGERS & RUNTIME
// =============================================================================

/// Sub-classification of the Start node governing its edge-shape rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerType {
    Human,
    System,
    Event,
    /// Fan-out: several cooperating Start nodes, each so marked.
    Multi,
}

impl TriggerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerType::Human => "human",
            TriggerType::System => "system",
            TriggerType::Event => "event",
            TriggerType::Multi => "multi",
        }
    }
}

/// The two target execution semantics a graph may be validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Runtime {
    Langgraph,
    Autogen,
}

impl Runtime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Runtime::Langgraph => "LangGraph",
            Runtime::Autogen => "AutoGen",
        }
    }
}

/// Caller-supplied deployment configuration consulted by entry validation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeSettings {
    #[serde(default)]
    pub checkpointer_configured: bool,
}

// =============================================================================
// NODES & EDGES
// =============================================================================

/// A canvas node as the editor serializes it. `kind: None` is an
/// annotation-only node (sticky note); every check accepts it trivially.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub kind: Option<OperatorKind>,
    /// Set on Start nodes only.
    #[serde(default)]
    pub trigger: Option<TriggerType>,
    #[serde(default)]
    pub resumable: bool,
}

impl FlowNode {
    /// Editor-assigned display name, falling back to `kind (id)`.
    pub fn display_name(&self) -> String {
        match (&self.label, self.kind) {
            (Some(label), _) if !label.trim().is_empty() => label.clone(),
            (_, Some(kind)) => format!("{} ({})", kind.as_str(), self.id),
            (_, None) => self.id.clone(),
        }
    }

    pub fn is_entry(&self) -> bool {
        self.kind == Some(OperatorKind::Start)
    }

    pub fn is_exit(&self) -> bool {
        self.kind == Some(OperatorKind::Stop)
    }
}

/// A directed connection. Handles name connector slots in the editor and are
/// irrelevant to validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    #[serde(default)]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub source_handle: Option<String>,
    #[serde(default)]
    pub target_handle: Option<String>,
}

/// The full payload the editor sends for a whole-graph check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowSnapshot {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
    pub runtime: Runtime,
    #[serde(default)]
    pub settings: RuntimeSettings,
}

/// Find a node by id.
pub fn node_by_id<'a>(nodes: &'a [FlowNode], id: &str) -> Option<&'a FlowNode> {
    nodes.iter().find(|n| n.id == id)
}
