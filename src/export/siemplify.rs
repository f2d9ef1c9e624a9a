//! Siemplify-style generator: a flat array of blocks with PascalCase
//! fields, linked by a branch-agnostic `NextBlocks` id array.

use serde_json::json;

use crate::model::{NodeKind, Playbook};

use super::{next_indices, node_index_map};

fn block_type(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Trigger => "Trigger",
        NodeKind::Condition => "Condition",
        NodeKind::Action => "Action",
    }
}

pub(crate) fn generate(
    name: &str,
    playbook: &Playbook,
) -> String {
    let index = node_index_map(playbook);

    let blocks: Vec<serde_json::Value> = playbook
        .nodes
        .iter()
        .map(|node| {
            json!({
                "Id": index[node.id.as_str()],
                "Type": block_type(node.kind()),
                "Name": node.label,
                "Description": node.description,
                "NextBlocks": next_indices(playbook, &index, &node.id),
            })
        })
        .collect();

    let doc = json!({
        "Name": name,
        "Blocks": blocks,
    });

    serde_json::to_string_pretty(&doc).expect("serializable export document")
}
