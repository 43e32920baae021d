//! Editor snapshot model: JSON → Rust types + graph construction.

pub mod graph;
pub mod types;

pub use graph::FlowGraph;
pub use types::*;

use crate::error::ParseError;

/// Deserialize a snapshot JSON string from the editor.
pub fn parse(json: &str) -> Result<FlowSnapshot, ParseError> {
    Ok(serde_json::from_str::<FlowSnapshot>(json)?)
}
