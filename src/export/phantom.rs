//! Phantom-style generator: a flat array of blocks, each carrying custom
//! fields keyed by its node kind, linked by a branch-agnostic `next`
//! array of block ids.

use serde_json::json;

use crate::model::{NodeConfig, Playbook};

use super::{next_indices, node_index_map};

pub(crate) fn generate(
    name: &str,
    playbook: &Playbook,
) -> String {
    let index = node_index_map(playbook);

    let blocks: Vec<serde_json::Value> = playbook
        .nodes
        .iter()
        .map(|node| {
            let id = index[node.id.as_str()];
            let next = next_indices(playbook, &index, &node.id);

            let mut block = json!({
                "id": id,
                "name": node.label,
                "notes": node.description,
                "next": next,
            });

            match &node.config {
                NodeConfig::Trigger(cfg) => {
                    block["type"] = json!("start");
                    block["trigger"] = json!(cfg.trigger_type.as_ref());
                    block["parameters"] = json!(cfg.parameters);
                }
                NodeConfig::Condition(cfg) => {
                    block["type"] = json!("decision");
                    block["conditions"] = json!([cfg.expression]);
                }
                NodeConfig::Action(cfg) => {
                    block["type"] = json!("action");
                    block["action"] = json!(cfg.action_type.as_ref());
                    block["parameters"] = json!(cfg.parameters);
                }
            }

            block
        })
        .collect();

    let doc = json!({
        "playbook_name": name,
        "blocks": blocks,
    });

    serde_json::to_string_pretty(&doc).expect("serializable export document")
}
