//! Playbook definition: a named directed graph of trigger, condition,
//! and action nodes.
//!
//! A playbook is constructed wholesale (from a template, a saved file, or
//! an editor session) and treated as immutable by the resolver, simulator,
//! and exporter; none of them mutate it.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{
    Result, SoarflowError,
    model::{
        edge::{Branch, Edge},
        node::{Node, NodeId},
    },
};

/// A directed graph describing an automated incident-response procedure.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Playbook {
    pub name: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Playbook {
    pub fn from_json(s: &str) -> Result<Self> {
        let playbook = serde_json::from_str::<Playbook>(s);
        match playbook {
            Ok(v) => Ok(v),
            Err(e) => Err(SoarflowError::Playbook(format!("{}", e))),
        }
    }

    /// Validates the playbook eagerly, failing fast with the offending id.
    ///
    /// Checks:
    /// - node ids are unique
    /// - every edge endpoint references an existing node
    /// - a condition node has at most one outgoing edge per branch value
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for node in self.nodes.iter() {
            if !ids.insert(node.id.as_str()) {
                return Err(SoarflowError::Playbook(format!("duplicate node id {}", node.id)));
            }
        }

        for edge in self.edges.iter() {
            if !ids.contains(edge.source.as_str()) {
                return Err(SoarflowError::Edge(format!("edge {} references missing source node {}", edge.id, edge.source)));
            }
            if !ids.contains(edge.target.as_str()) {
                return Err(SoarflowError::Edge(format!("edge {} references missing target node {}", edge.id, edge.target)));
            }
        }

        // One edge per branch value on a condition node; a condition with
        // zero or one outgoing edge is a legal dead end.
        let mut branches: HashMap<(&str, Branch), u32> = HashMap::new();
        for node in self.nodes.iter().filter(|n| n.is_condition()) {
            for edge in self.edges.iter().filter(|e| e.source == node.id) {
                if let Some(branch) = edge.branch {
                    let count = branches.entry((node.id.as_str(), branch)).or_insert(0);
                    *count += 1;
                    if *count > 1 {
                        return Err(SoarflowError::Edge(format!(
                            "condition node {} has more than one '{}' branch edge",
                            node.id,
                            branch.as_ref()
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// get node by id
    pub fn get_node(
        &self,
        id: &str,
    ) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// All trigger nodes in declaration order.
    pub fn trigger_nodes(&self) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.is_trigger()).collect()
    }

    /// Outgoing edges of a node in declaration order.
    pub fn outgoing_edges(
        &self,
        id: &str,
    ) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.source == id).collect()
    }

    /// Out-degree of a node.
    pub fn out_degree(
        &self,
        id: &str,
    ) -> usize {
        self.edges.iter().filter(|e| e.source == id).count()
    }
}
