//! XSOAR-style generator: YAML-shaped text with tasks keyed by integer
//! index.
//!
//! Linkage is rendered single-branch only: both true and false edges of
//! a condition collapse into one `#default#` next-task list, matching the
//! upstream tool's schema. The text is assembled by hand; the stack
//! carries no YAML serializer and the document shape is fixed.

use crate::model::{NodeKind, Playbook};

use super::{next_indices, node_index_map, slugify};

fn task_type(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Trigger => "start",
        NodeKind::Condition => "condition",
        NodeKind::Action => "regular",
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

pub(crate) fn generate(
    name: &str,
    playbook: &Playbook,
) -> String {
    let index = node_index_map(playbook);

    let start_task = playbook.nodes.iter().position(|n| n.is_trigger()).unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("id: {}\n", slugify(name)));
    out.push_str("version: -1\n");
    out.push_str(&format!("name: {}\n", quote(name)));
    out.push_str(&format!("starttaskid: \"{}\"\n", start_task));
    out.push_str("tasks:\n");

    for node in playbook.nodes.iter() {
        let id = index[node.id.as_str()];
        out.push_str(&format!("  \"{}\":\n", id));
        out.push_str(&format!("    id: \"{}\"\n", id));
        out.push_str(&format!("    taskid: \"{}\"\n", id));
        out.push_str(&format!("    type: {}\n", task_type(node.kind())));
        out.push_str("    task:\n");
        out.push_str(&format!("      name: {}\n", quote(&node.label)));
        out.push_str(&format!("      description: {}\n", quote(&node.description)));

        let next = next_indices(playbook, &index, &node.id);
        if !next.is_empty() {
            out.push_str("    nexttasks:\n");
            out.push_str("      '#default#':\n");
            for target in next {
                out.push_str(&format!("      - \"{}\"\n", target));
            }
        }
    }

    out
}
