mod edge;
mod graph;
mod node;
mod playbook;

pub use edge::{Branch, Edge, EdgeId};
pub use graph::PlaybookGraph;
pub use node::{ActionConfig, ActionType, ConditionConfig, ConditionType, Node, NodeConfig, NodeId, NodeKind, Position, TriggerConfig, TriggerType};
pub use playbook::Playbook;
