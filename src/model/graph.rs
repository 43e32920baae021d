//! petgraph-based directed graph wrapper over the editor's node/edge lists.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;

use super::types::{FlowEdge, FlowNode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeLabel {
    pub source_handle: Option<String>,
    pub target_handle: Option<String>,
}

pub struct FlowGraph {
    pub graph: DiGraph<String, EdgeLabel>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl FlowGraph {
    /// Build the graph. Total: edges whose endpoints match no node are
    /// skipped here and reported by the graph validator.
    pub fn build(nodes: &[FlowNode], edges: &[FlowEdge]) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        for node in nodes {
            let idx = graph.add_node(node.id.clone());
            node_indices.insert(node.id.clone(), idx);
        }

        for edge in edges {
            if let (Some(&s), Some(&t)) = (
                node_indices.get(&edge.source),
                node_indices.get(&edge.target),
            ) {
                graph.add_edge(
                    s,
                    t,
                    EdgeLabel {
                        source_handle: edge.source_handle.clone(),
                        target_handle: edge.target_handle.clone(),
                    },
                );
            }
        }

        FlowGraph { graph, node_indices }
    }

    /// Source ids of every edge into `node_id`, one entry per edge.
    pub fn predecessors(&self, node_id: &str) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return vec![];
        };
        self.graph
            .neighbors_directed(idx, petgraph::Direction::Incoming)
            .map(|n| self.graph[n].as_str())
            .collect()
    }

    pub fn outgoing_count(&self, node_id: &str) -> usize {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return 0;
        };
        self.graph
            .neighbors_directed(idx, petgraph::Direction::Outgoing)
            .count()
    }

    /// Whether `to` is reachable from `from` over directed edges.
    /// A node always reaches itself.
    pub fn reaches(&self, from: &str, to: &str) -> bool {
        let (Some(&from_idx), Some(&to_idx)) =
            (self.node_indices.get(from), self.node_indices.get(to))
        else {
            return false;
        };

        let mut bfs = Bfs::new(&self.graph, from_idx);
        while let Some(nx) = bfs.next(&self.graph) {
            if nx == to_idx {
                return true;
            }
        }
        false
    }
}
