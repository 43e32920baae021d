//! Declarative connectivity policy: static rule table + token expansion.

pub mod expand;
pub mod table;

pub use expand::{ExpandContext, expand, expand_token};
pub use table::{KindToken, PolicyEntry, RuleSet, policy_for};
