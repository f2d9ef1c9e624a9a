//! Multi-target playbook export.
//!
//! Each target translates the same playbook graph into a different
//! downstream automation-platform schema, with its own node-type
//! vocabulary and linkage representation. Exporting is a pure
//! transformation: no I/O, and by policy it never fails — an unknown
//! target id falls back to the native format.

mod native;
mod phantom;
mod siemplify;
mod swimlane;
mod xsoar;

use std::{collections::HashMap, str::FromStr};

use crate::model::Playbook;

/// Result of an export: serialized content plus a suggested filename.
#[derive(Debug, Clone, PartialEq)]
pub struct Export {
    pub content: String,
    pub filename: String,
}

/// The five downstream schemas the exporter can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ExportTarget {
    Phantom,
    Xsoar,
    Siemplify,
    Swimlane,
    Native,
}

impl ExportTarget {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportTarget::Xsoar => "yml",
            _ => "json",
        }
    }
}

/// Catalog entry describing one export target for a selection UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub extension: &'static str,
}

const TARGETS: [TargetInfo; 5] = [
    TargetInfo {
        id: "phantom",
        name: "Splunk SOAR (Phantom)",
        description: "Flat block list with per-kind custom fields",
        extension: "json",
    },
    TargetInfo {
        id: "xsoar",
        name: "Cortex XSOAR",
        description: "YAML task map keyed by integer index",
        extension: "yml",
    },
    TargetInfo {
        id: "siemplify",
        name: "Google SecOps (Siemplify)",
        description: "Block array with NextBlocks linkage",
        extension: "json",
    },
    TargetInfo {
        id: "swimlane",
        name: "Swimlane",
        description: "Step array with default transitions",
        extension: "json",
    },
    TargetInfo {
        id: "native",
        name: "Native",
        description: "Verbatim playbook with a metadata envelope",
        extension: "json",
    },
];

/// Static catalog of the available export targets.
pub fn targets() -> &'static [TargetInfo] {
    &TARGETS
}

/// Exports a playbook to the selected target schema.
///
/// Unknown target ids degrade to the native format rather than failing.
pub fn export(
    target_id: &str,
    name: &str,
    playbook: &Playbook,
) -> Export {
    let target = ExportTarget::from_str(target_id).unwrap_or(ExportTarget::Native);

    let content = match target {
        ExportTarget::Phantom => phantom::generate(name, playbook),
        ExportTarget::Xsoar => xsoar::generate(name, playbook),
        ExportTarget::Siemplify => siemplify::generate(name, playbook),
        ExportTarget::Swimlane => swimlane::generate(name, playbook),
        ExportTarget::Native => native::generate(name, playbook),
    };

    Export {
        content,
        filename: format!("{}.{}", slugify(name), target.extension()),
    }
}

/// Lowercases a playbook name and turns whitespace runs into hyphens.
fn slugify(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

/// Node-id → generator-index mapping, computed once per export and shared
/// between a block's own id and every link reference to it.
pub(crate) fn node_index_map(playbook: &Playbook) -> HashMap<&str, usize> {
    playbook.nodes.iter().enumerate().map(|(i, n)| (n.id.as_str(), i)).collect()
}

/// Indices of the nodes reachable by a node's outgoing edges, in edge
/// declaration order. Edges whose target is not in the map are skipped
/// rather than emitted as null entries.
pub(crate) fn next_indices(
    playbook: &Playbook,
    index: &HashMap<&str, usize>,
    node_id: &str,
) -> Vec<usize> {
    playbook
        .edges
        .iter()
        .filter(|e| e.source == node_id)
        .filter_map(|e| index.get(e.target.as_str()).copied())
        .collect()
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::model::Edge;

    pub(crate) fn phishing_playbook() -> Playbook {
        Playbook::from_json(
            &json!({
                "name": "Phishing Email Response",
                "nodes": [
                    { "id": "t1", "label": "Suspicious email reported", "kind": "trigger",
                      "config": { "triggerType": "email", "parameters": {} } },
                    { "id": "c1", "label": "Known-bad sender?", "kind": "condition",
                      "config": { "conditionType": "comparison", "expression": "sender in blocklist" } },
                    { "id": "a1", "label": "Block sender", "kind": "action",
                      "config": { "actionType": "block", "parameters": { "scope": "mail-gateway" } } },
                    { "id": "a2", "label": "Notify analyst", "kind": "action",
                      "config": { "actionType": "notify", "parameters": {} } }
                ],
                "edges": [
                    { "id": "e1", "source": "t1", "target": "c1" },
                    { "id": "e2", "source": "c1", "target": "a1", "branch": "true" },
                    { "id": "e3", "source": "c1", "target": "a2", "branch": "false" }
                ]
            })
            .to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_filename_slug() {
        let playbook = phishing_playbook();
        let export = export("phantom", "Phishing Email Response", &playbook);
        assert_eq!(export.filename, "phishing-email-response.json");

        let export = export_xsoar_name(&playbook);
        assert_eq!(export.filename, "phishing-email-response.yml");
    }

    fn export_xsoar_name(playbook: &Playbook) -> Export {
        export("xsoar", "Phishing   Email Response", playbook)
    }

    #[test]
    fn test_unknown_target_falls_back_to_native() {
        let playbook = phishing_playbook();
        let unknown = export("tines", "Phishing Email Response", &playbook);
        let native = export("native", "Phishing Email Response", &playbook);

        // compare modulo the envelope timestamp
        let mut unknown_doc: serde_json::Value = serde_json::from_str(&unknown.content).unwrap();
        let mut native_doc: serde_json::Value = serde_json::from_str(&native.content).unwrap();
        unknown_doc["timestamp"] = json!(0);
        native_doc["timestamp"] = json!(0);
        assert_eq!(unknown_doc, native_doc);
        assert_eq!(unknown.filename, "phishing-email-response.json");
    }

    #[test]
    fn test_catalog_lists_five_targets() {
        let catalog = targets();
        assert_eq!(catalog.len(), 5);
        let ids: Vec<&str> = catalog.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["phantom", "xsoar", "siemplify", "swimlane", "native"]);
    }

    #[test]
    fn test_dangling_edge_target_is_skipped_not_null() {
        let mut playbook = phishing_playbook();
        playbook.edges.push(Edge {
            id: "e4".to_string(),
            source: "a1".to_string(),
            target: "ghost".to_string(),
            branch: None,
        });

        let index = node_index_map(&playbook);
        assert_eq!(next_indices(&playbook, &index, "a1"), Vec::<usize>::new());

        let doc: serde_json::Value = serde_json::from_str(&export("phantom", "x", &playbook).content).unwrap();
        for block in doc["blocks"].as_array().unwrap() {
            assert!(block["next"].as_array().unwrap().iter().all(|v| v.is_u64()));
        }
    }
}
