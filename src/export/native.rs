//! Native generator: the playbook verbatim, wrapped in a metadata
//! envelope. The only target that preserves edge ids and branch
//! discriminators.

use serde_json::json;

use crate::{model::Playbook, utils};

pub(crate) fn generate(
    name: &str,
    playbook: &Playbook,
) -> String {
    let doc = json!({
        "name": name,
        "nodes": playbook.nodes,
        "edges": playbook.edges,
        "timestamp": utils::time::time_millis(),
        "version": env!("CARGO_PKG_VERSION"),
        "platform": "soarflow",
    });

    serde_json::to_string_pretty(&doc).expect("serializable export document")
}
