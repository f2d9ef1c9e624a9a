//! Swimlane-style generator: a flat array of steps linked by a
//! `transitions` array of `{to, type: "default"}` records.

use serde_json::json;

use crate::model::{NodeKind, Playbook};

use super::{next_indices, node_index_map};

fn step_type(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Trigger => "trigger",
        NodeKind::Condition => "decision",
        NodeKind::Action => "task",
    }
}

pub(crate) fn generate(
    name: &str,
    playbook: &Playbook,
) -> String {
    let index = node_index_map(playbook);

    let steps: Vec<serde_json::Value> = playbook
        .nodes
        .iter()
        .map(|node| {
            let transitions: Vec<serde_json::Value> = next_indices(playbook, &index, &node.id)
                .into_iter()
                .map(|to| json!({ "to": to, "type": "default" }))
                .collect();

            json!({
                "id": index[node.id.as_str()],
                "type": step_type(node.kind()),
                "name": node.label,
                "description": node.description,
                "transitions": transitions,
            })
        })
        .collect();

    let doc = json!({
        "name": name,
        "steps": steps,
    });

    serde_json::to_string_pretty(&doc).expect("serializable export document")
}

#[cfg(test)]
mod test {
    use crate::export::test::phishing_playbook;

    use super::*;

    #[test]
    fn test_swimlane_vocabulary_and_transitions() {
        let playbook = phishing_playbook();
        let doc: serde_json::Value = serde_json::from_str(&generate("Phishing Email Response", &playbook)).unwrap();

        let steps = doc["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 4);

        assert_eq!(steps[0]["type"], "trigger");
        assert_eq!(steps[1]["type"], "decision");
        assert_eq!(steps[2]["type"], "task");

        assert_eq!(steps[1]["transitions"], json!([{ "to": 2, "type": "default" }, { "to": 3, "type": "default" }]));
        assert_eq!(steps[2]["transitions"], json!([]));
    }
}
