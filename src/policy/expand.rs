//! Symbolic token expansion: policy tokens → concrete kind sets.

use std::collections::HashSet;

use super::table::KindToken;
use crate::model::{FlowEdge, FlowNode, OperatorKind};

/// Graph snapshot handed to the expander. Expansion is a pure function of
/// the token and this context; nothing else is consulted.
#[derive(Debug, Clone, Copy)]
pub struct ExpandContext<'a> {
    pub nodes: &'a [FlowNode],
    pub edges: &'a [FlowEdge],
}

/// Resolve one token to the set of operator kinds it stands for.
///
/// `BranchMember`, `PathAncestor`, and `ErrorOrigin` are approximated as any
/// non-terminal kind: branch membership, path history, and error origins are
/// not tracked in the snapshot, so a precise expansion is not yet possible.
/// The context parameter is what a precise expansion would consume.
pub fn expand_token(token: KindToken, _ctx: ExpandContext<'_>) -> HashSet<OperatorKind> {
    match token {
        KindToken::Kind(kind) => HashSet::from([kind]),
        KindToken::Any => OperatorKind::ALL.into_iter().collect(),
        KindToken::AnyNonTerminal
        | KindToken::BranchMember
        | KindToken::PathAncestor
        | KindToken::ErrorOrigin => OperatorKind::ALL
            .into_iter()
            .filter(|k| !k.is_terminal())
            .collect(),
        KindToken::AnyNonTerminalOrStop => OperatorKind::ALL
            .into_iter()
            .filter(|k| *k != OperatorKind::Start)
            .collect(),
    }
}

/// Resolve a whole token list to the union of its expansions.
pub fn expand(tokens: &[KindToken], ctx: ExpandContext<'_>) -> HashSet<OperatorKind> {
    let mut kinds = HashSet::new();
    for &token in tokens {
        kinds.extend(expand_token(token, ctx));
    }
    kinds
}
