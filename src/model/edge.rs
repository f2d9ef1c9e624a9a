//! Playbook edge definitions for connecting nodes.
//!
//! Edges define the flow between nodes. Edges leaving a condition node
//! may carry a branch discriminator (true/false); all other edges leave
//! it unset.

use serde::{Deserialize, Serialize};

use crate::{
    Result, SoarflowError,
    model::node::NodeId,
};

/// Unique identifier for an edge within a playbook.
pub type EdgeId = String;

/// Branch discriminator for a condition node's outgoing edges.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Branch {
    /// Followed when the condition evaluates to true.
    True,
    /// Followed when the condition evaluates to false.
    False,
}

/// Directed link between two playbook nodes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Edge {
    /// Unique edge identifier.
    pub id: EdgeId,
    /// ID of the source node.
    pub source: NodeId,
    /// ID of the target node.
    pub target: NodeId,
    /// Branch discriminator, set only on edges leaving a condition node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<Branch>,
}

impl Edge {
    /// Creates a new edge from a JSON value.
    pub fn new(input: serde_json::Value) -> Result<Self> {
        serde_json::from_value(input).map_err(|e| SoarflowError::Edge(format!("invalid edge input: {}", e)))
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_edge_with_branch() {
        let edge = Edge::new(json!({
            "id": "e1",
            "source": "c1",
            "target": "a1",
            "branch": "true"
        }))
        .unwrap();
        assert_eq!(edge.branch, Some(Branch::True));
    }

    #[test]
    fn test_edge_without_branch_omits_field() {
        let edge = Edge::new(json!({ "id": "e1", "source": "t1", "target": "a1" })).unwrap();
        assert_eq!(edge.branch, None);

        let value = serde_json::to_value(&edge).unwrap();
        assert!(value.get("branch").is_none());
    }
}
