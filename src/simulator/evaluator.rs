//! Outcome generation for simulated node execution.
//!
//! Result text lives behind the [`Evaluator`] seam so a real rule engine
//! can replace the simulated one without touching the state-machine
//! scaffolding in the run loop.

use std::collections::BTreeMap;

use async_trait::async_trait;
use rand::Rng;
use regex::Regex;

use crate::model::{ConditionType, Node, NodeConfig};

/// Outcome text for a condition that took the true branch.
pub const CONDITION_TRUE: &str = "Condition evaluated to true";
/// Outcome text for a condition that took the false branch.
pub const CONDITION_FALSE: &str = "Condition evaluated to false";

/// Produces one terminal textual result per node.
#[async_trait]
pub trait Evaluator: Send + Sync {
    /// Evaluates a node and returns its outcome text.
    async fn evaluate(
        &self,
        node: &Node,
    ) -> String;
}

/// Default evaluator used for dry-run previews.
///
/// Triggers and actions yield fixed kind-specific text. Conditions draw a
/// weighted random branch — flavor text, not a real evaluation — except
/// regex-type conditions, which are genuinely matched against the fact
/// context when one is supplied.
pub struct SimulatedEvaluator {
    true_branch_weight: f64,
    facts: Option<BTreeMap<String, String>>,
}

impl SimulatedEvaluator {
    pub fn new(true_branch_weight: f64) -> Self {
        Self {
            true_branch_weight,
            facts: None,
        }
    }

    /// Supplies a fact context for regex-type conditions.
    pub fn with_facts(
        mut self,
        facts: BTreeMap<String, String>,
    ) -> Self {
        self.facts = Some(facts);
        self
    }

    fn condition_outcome(
        &self,
        condition_type: ConditionType,
        expression: &str,
    ) -> bool {
        if condition_type == ConditionType::Regex {
            if let (Some(facts), Ok(re)) = (&self.facts, Regex::new(expression)) {
                return facts.values().any(|v| re.is_match(v));
            }
        }
        rand::thread_rng().gen_bool(self.true_branch_weight.clamp(0.0, 1.0))
    }
}

impl Default for SimulatedEvaluator {
    fn default() -> Self {
        Self::new(0.7)
    }
}

#[async_trait]
impl Evaluator for SimulatedEvaluator {
    async fn evaluate(
        &self,
        node: &Node,
    ) -> String {
        match &node.config {
            NodeConfig::Trigger(cfg) => format!("Trigger fired ({})", cfg.trigger_type.as_ref()),
            NodeConfig::Action(cfg) => format!("Action completed: {}", cfg.action_type.as_ref()),
            NodeConfig::Condition(cfg) => {
                if self.condition_outcome(cfg.condition_type, &cfg.expression) {
                    CONDITION_TRUE.to_string()
                } else {
                    CONDITION_FALSE.to_string()
                }
            }
        }
    }
}
