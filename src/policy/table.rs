//! Static connectivity policy: which kinds may precede / follow each kind.
//!
//! The table is pure data. Symbolic tokens are resolved by `policy::expand`;
//! runtime-dual entries force every call site through `RuleSet::for_runtime`.

use crate::model::{OperatorKind, Runtime};

/// One element of an allowed-predecessor or allowed-successor specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindToken {
    /// A concrete operator kind.
    Kind(OperatorKind),
    /// Every operator kind.
    Any,
    /// Every kind except Start and Stop.
    AnyNonTerminal,
    /// Every kind except Start.
    AnyNonTerminalOrStop,
    /// A node inside one of the corresponding fork's branches.
    BranchMember,
    /// A node that appears earlier on the current path.
    PathAncestor,
    /// The node that originated the current error.
    ErrorOrigin,
}

/// An allowed-kind specification: one shared token list, or one per runtime.
#[derive(Debug, Clone, Copy)]
pub enum RuleSet {
    Uniform(&'static [KindToken]),
    PerRuntime {
        langgraph: &'static [KindToken],
        autogen: &'static [KindToken],
    },
}

impl RuleSet {
    pub fn for_runtime(&self, runtime: Runtime) -> &'static [KindToken] {
        match self {
            RuleSet::Uniform(tokens) => tokens,
            RuleSet::PerRuntime { langgraph, autogen } => match runtime {
                Runtime::Langgraph => langgraph,
                Runtime::Autogen => autogen,
            },
        }
    }
}

/// Connectivity rules for one operator kind.
#[derive(Debug, Clone, Copy)]
pub struct PolicyEntry {
    pub predecessors: RuleSet,
    pub successors: RuleSet,
    /// Smallest number of outgoing edges a fan-out-style kind must have.
    pub min_branches: Option<usize>,
}

const NONE: &[KindToken] = &[];
const ANY: &[KindToken] = &[KindToken::Any];
const NON_TERMINAL: &[KindToken] = &[KindToken::AnyNonTerminal];
const NON_TERMINAL_OR_STOP: &[KindToken] = &[KindToken::AnyNonTerminalOrStop];

const FLOW_NODE: PolicyEntry = PolicyEntry {
    predecessors: RuleSet::Uniform(ANY),
    successors: RuleSet::Uniform(NON_TERMINAL_OR_STOP),
    min_branches: None,
};

const START: PolicyEntry = PolicyEntry {
    predecessors: RuleSet::Uniform(NONE),
    successors: RuleSet::Uniform(NON_TERMINAL_OR_STOP),
    min_branches: None,
};

const STOP: PolicyEntry = PolicyEntry {
    predecessors: RuleSet::Uniform(ANY),
    successors: RuleSet::Uniform(NONE),
    min_branches: None,
};

const DECISION: PolicyEntry = PolicyEntry {
    predecessors: RuleSet::Uniform(ANY),
    successors: RuleSet::Uniform(NON_TERMINAL_OR_STOP),
    min_branches: Some(2),
};

// AutoGen parallel branches must start with a callable unit.
const PARALLEL_FORK: PolicyEntry = PolicyEntry {
    predecessors: RuleSet::Uniform(ANY),
    successors: RuleSet::PerRuntime {
        langgraph: NON_TERMINAL,
        autogen: &[
            KindToken::Kind(OperatorKind::AgentCall),
            KindToken::Kind(OperatorKind::ToolCall),
            KindToken::Kind(OperatorKind::SubGraph),
        ],
    },
    min_branches: Some(2),
};

const PARALLEL_JOIN: PolicyEntry = PolicyEntry {
    predecessors: RuleSet::Uniform(&[KindToken::BranchMember]),
    successors: RuleSet::Uniform(NON_TERMINAL_OR_STOP),
    min_branches: None,
};

const LOOP: PolicyEntry = PolicyEntry {
    predecessors: RuleSet::Uniform(ANY),
    successors: RuleSet::Uniform(&[
        KindToken::PathAncestor,
        KindToken::Kind(OperatorKind::Stop),
    ]),
    min_branches: None,
};

const ERROR_RETRY: PolicyEntry = PolicyEntry {
    predecessors: RuleSet::Uniform(&[KindToken::ErrorOrigin]),
    successors: RuleSet::Uniform(NON_TERMINAL_OR_STOP),
    min_branches: None,
};

// AutoGen only takes human input after an agent turn or a branch point.
const HUMAN_PAUSE: PolicyEntry = PolicyEntry {
    predecessors: RuleSet::PerRuntime {
        langgraph: NON_TERMINAL,
        autogen: &[
            KindToken::Kind(OperatorKind::Start),
            KindToken::Kind(OperatorKind::AgentCall),
            KindToken::Kind(OperatorKind::Decision),
        ],
    },
    successors: RuleSet::Uniform(NON_TERMINAL_OR_STOP),
    min_branches: None,
};

/// Look up the policy entry for a kind. Total over the enumeration.
pub fn policy_for(kind: OperatorKind) -> &'static PolicyEntry {
    match kind {
        OperatorKind::Start => &START,
        OperatorKind::Stop => &STOP,
        OperatorKind::AgentCall
        | OperatorKind::ToolCall
        | OperatorKind::MemoryRead
        | OperatorKind::MemoryWrite
        | OperatorKind::Timeout
        | OperatorKind::SubGraph => &FLOW_NODE,
        OperatorKind::Decision => &DECISION,
        OperatorKind::ParallelFork => &PARALLEL_FORK,
        OperatorKind::ParallelJoin => &PARALLEL_JOIN,
        OperatorKind::Loop => &LOOP,
        OperatorKind::ErrorRetry => &ERROR_RETRY,
        OperatorKind::HumanPause => &HUMAN_PAUSE,
    }
}
