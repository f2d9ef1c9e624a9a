//! Runtime playbook representation using a directed graph.
//!
//! This module wraps a playbook in a petgraph directed graph for
//! traversal. Unlike the editor-facing [`Playbook`] value, the graph view
//! is index-based: building it validates that every edge endpoint
//! references an existing node.

use std::collections::HashMap;

use petgraph::{
    Direction,
    graph::{DiGraph, EdgeIndex, NodeIndex},
    visit::EdgeRef,
};

use crate::{
    Result, SoarflowError,
    model::{edge::Edge, node::Node, playbook::Playbook},
};

/// Read-only directed-graph view of a playbook.
///
/// Node and edge indices follow declaration order in the source playbook,
/// which is what makes traversal over this view deterministic.
#[derive(Debug)]
pub struct PlaybookGraph {
    graph: DiGraph<Node, Edge>,
}

impl PlaybookGraph {
    /// Node weight by index.
    pub fn node(
        &self,
        idx: NodeIndex,
    ) -> &Node {
        &self.graph[idx]
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All trigger node indices in declaration order.
    pub fn trigger_nodes(&self) -> Vec<NodeIndex> {
        self.graph.node_indices().filter(|idx| self.graph[*idx].is_trigger()).collect()
    }

    /// Successors of a node in edge-declaration order.
    ///
    /// `edges_directed` iterates most-recently-added first, so the edge
    /// references are sorted by edge index to restore insertion order.
    pub fn ordered_successors(
        &self,
        idx: NodeIndex,
    ) -> Vec<NodeIndex> {
        let mut edges: Vec<(EdgeIndex, NodeIndex)> = self.graph.edges_directed(idx, Direction::Outgoing).map(|e| (e.id(), e.target())).collect();
        edges.sort_by_key(|(eidx, _)| *eidx);
        edges.into_iter().map(|(_, target)| target).collect()
    }

    /// Output a human-readable representation of the playbook graph.
    pub fn schema(&self) -> String {
        let graph = &self.graph;
        let mut lines = Vec::new();

        lines.push("=== Playbook Graph ===".to_string());
        lines.push(format!("Nodes: {}, Edges: {}", graph.node_count(), graph.edge_count()));
        lines.push(String::new());

        lines.push("--- Nodes ---".to_string());
        for idx in graph.node_indices() {
            let node = &graph[idx];
            lines.push(format!("[{}] {} (kind: {})", node.id, node.label, node.kind().as_ref()));
        }
        lines.push(String::new());

        lines.push("--- Structure ---".to_string());
        for idx in graph.node_indices() {
            let node = &graph[idx];
            let outgoing: Vec<String> = self
                .ordered_successors(idx)
                .into_iter()
                .map(|target| graph[target].id.clone())
                .collect();

            if outgoing.is_empty() {
                lines.push(format!("{} -> (end)", node.id));
            } else {
                lines.push(format!("{} -> {}", node.id, outgoing.join(", ")));
            }
        }

        lines.join("\n")
    }
}

impl TryFrom<&Playbook> for PlaybookGraph {
    type Error = SoarflowError;

    fn try_from(playbook: &Playbook) -> Result<Self> {
        let mut graph: DiGraph<Node, Edge> = DiGraph::new();

        let mut nodes = HashMap::new();

        for node in playbook.nodes.iter() {
            let nid = node.id.clone();
            let node_idx = graph.add_node(node.clone());
            nodes.insert(nid, node_idx);
        }
        for edge in playbook.edges.iter() {
            let source = nodes.get(&edge.source).ok_or(SoarflowError::Edge(format!("source node {} not found", edge.source)))?;
            let target = nodes.get(&edge.target).ok_or(SoarflowError::Edge(format!("target node {} not found", edge.target)))?;
            graph.add_edge(*source, *target, edge.clone());
        }
        Ok(Self { graph })
    }
}
