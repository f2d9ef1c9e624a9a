use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Result, SoarflowError};

/// node id
pub type NodeId = String;

/// The three node kinds of a playbook step.
///
/// Triggers start a run, conditions branch, actions represent an
/// effectful step on a downstream system.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NodeKind {
    Trigger,
    Condition,
    Action,
}

/// Event source that starts a playbook run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TriggerType {
    #[default]
    Alert,
    Email,
    Schedule,
    Webhook,
    Database,
}

/// Evaluation style of a condition node's expression.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ConditionType {
    #[default]
    Comparison,
    Threshold,
    TimeWindow,
    Regex,
}

/// Kind of effect an action node represents.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ActionType {
    #[default]
    Email,
    Ticket,
    Isolate,
    Block,
    Database,
    Api,
    Enrichment,
    Script,
    Notify,
}

/// Canvas coordinate carried for the editor; irrelevant to execution
/// and export semantics.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Configuration payload of a trigger node.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TriggerConfig {
    pub trigger_type: TriggerType,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

/// Configuration payload of a condition node.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConditionConfig {
    pub condition_type: ConditionType,
    #[serde(default)]
    pub expression: String,
}

/// Configuration payload of an action node.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActionConfig {
    pub action_type: ActionType,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

/// Kind-specific payload, tagged by the node kind.
///
/// Adjacent tagging means a node whose `config` shape disagrees with its
/// `kind` is rejected at deserialization rather than silently coerced.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", content = "config", rename_all = "snake_case")]
pub enum NodeConfig {
    Trigger(TriggerConfig),
    Condition(ConditionConfig),
    Action(ActionConfig),
}

/// One step of a playbook.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Node {
    /// node id, stable within a playbook
    pub id: NodeId,
    /// display name
    pub label: String,
    /// free-text description
    #[serde(default)]
    pub description: String,
    /// editor canvas position
    #[serde(default)]
    pub position: Position,
    /// kind tag plus kind-specific configuration
    #[serde(flatten)]
    pub config: NodeConfig,
}

impl Node {
    /// Creates a node from a JSON value, rejecting kind/config mismatches.
    pub fn new(input: serde_json::Value) -> Result<Self> {
        serde_json::from_value(input).map_err(|e| SoarflowError::Node(format!("invalid node input: {}", e)))
    }

    /// The node kind, derived from the configuration arm.
    pub fn kind(&self) -> NodeKind {
        match &self.config {
            NodeConfig::Trigger(_) => NodeKind::Trigger,
            NodeConfig::Condition(_) => NodeKind::Condition,
            NodeConfig::Action(_) => NodeKind::Action,
        }
    }

    pub fn is_trigger(&self) -> bool {
        self.kind() == NodeKind::Trigger
    }

    pub fn is_condition(&self) -> bool {
        self.kind() == NodeKind::Condition
    }
}
