//! Deterministic linearization of a playbook graph.
//!
//! The resolver turns a playbook into the sequence the simulator walks:
//! a depth-first visitation starting from every trigger node, following
//! outgoing edges in declaration order. A visited set breaks cycles and
//! keeps diamond-shaped graphs from duplicating a node in the output.
//!
//! The resolver does not evaluate conditions; both branch edges of a
//! condition node are traversed. This is a static reachability
//! linearization, not a runtime path — committing to a single branch is
//! the simulator's job.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;

use crate::{
    Result,
    model::{Node, Playbook, PlaybookGraph},
};

/// Computes the visitation order for a playbook.
///
/// Seeds are all trigger nodes in declaration order; a playbook without
/// trigger nodes legally resolves to an empty sequence. Fails fast on a
/// malformed playbook.
pub fn resolve_order(playbook: &Playbook) -> Result<Vec<Node>> {
    playbook.validate()?;
    let graph = PlaybookGraph::try_from(playbook)?;

    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut order = Vec::with_capacity(graph.node_count());

    for seed in graph.trigger_nodes() {
        visit(&graph, seed, &mut visited, &mut order);
    }

    Ok(order)
}

fn visit(
    graph: &PlaybookGraph,
    idx: NodeIndex,
    visited: &mut HashSet<NodeIndex>,
    order: &mut Vec<Node>,
) {
    if !visited.insert(idx) {
        return;
    }
    order.push(graph.node(idx).clone());

    for next in graph.ordered_successors(idx) {
        visit(graph, next, visited, order);
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn branching_playbook() -> Playbook {
        Playbook::from_json(
            &json!({
                "name": "Branching",
                "nodes": [
                    { "id": "t1", "label": "Alert received", "kind": "trigger",
                      "config": { "triggerType": "alert", "parameters": {} } },
                    { "id": "c1", "label": "Severity high?", "kind": "condition",
                      "config": { "conditionType": "threshold", "expression": "severity >= 8" } },
                    { "id": "a1", "label": "Isolate host", "kind": "action",
                      "config": { "actionType": "isolate", "parameters": {} } },
                    { "id": "a2", "label": "Open ticket", "kind": "action",
                      "config": { "actionType": "ticket", "parameters": {} } }
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

    fn ids(order: &[Node]) -> Vec<&str> {
        order.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_no_triggers_resolves_empty() {
        let playbook = Playbook::from_json(
            &json!({
                "name": "No Triggers",
                "nodes": [
                    { "id": "a1", "label": "Orphan action", "kind": "action",
                      "config": { "actionType": "email", "parameters": {} } }
                ],
                "edges": []
            })
            .to_string(),
        )
        .unwrap();

        assert!(resolve_order(&playbook).unwrap().is_empty());
    }

    #[test]
    fn test_both_branches_in_declaration_order() {
        let order = resolve_order(&branching_playbook()).unwrap();
        assert_eq!(ids(&order), vec!["t1", "c1", "a1", "a2"]);
    }

    #[test]
    fn test_resolver_is_deterministic() {
        let playbook = branching_playbook();
        let first = resolve_order(&playbook).unwrap();
        let second = resolve_order(&playbook).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cycle_visits_each_node_once() {
        let playbook = Playbook::from_json(
            &json!({
                "name": "Cycle",
                "nodes": [
                    { "id": "t1", "label": "Start", "kind": "trigger",
                      "config": { "triggerType": "schedule", "parameters": {} } },
                    { "id": "a1", "label": "A", "kind": "action",
                      "config": { "actionType": "api", "parameters": {} } },
                    { "id": "a2", "label": "B", "kind": "action",
                      "config": { "actionType": "script", "parameters": {} } }
                ],
                "edges": [
                    { "id": "e1", "source": "t1", "target": "a1" },
                    { "id": "e2", "source": "a1", "target": "a2" },
                    { "id": "e3", "source": "a2", "target": "a1" }
                ]
            })
            .to_string(),
        )
        .unwrap();

        let order = resolve_order(&playbook).unwrap();
        assert_eq!(ids(&order), vec!["t1", "a1", "a2"]);
    }

    #[test]
    fn test_diamond_deduplicates_join_node() {
        let playbook = Playbook::from_json(
            &json!({
                "name": "Diamond",
                "nodes": [
                    { "id": "t1", "label": "Start", "kind": "trigger",
                      "config": { "triggerType": "webhook", "parameters": {} } },
                    { "id": "c1", "label": "Fork", "kind": "condition",
                      "config": { "conditionType": "comparison", "expression": "a == b" } },
                    { "id": "a1", "label": "Left", "kind": "action",
                      "config": { "actionType": "enrichment", "parameters": {} } },
                    { "id": "a2", "label": "Right", "kind": "action",
                      "config": { "actionType": "database", "parameters": {} } },
                    { "id": "a3", "label": "Join", "kind": "action",
                      "config": { "actionType": "notify", "parameters": {} } }
                ],
                "edges": [
                    { "id": "e1", "source": "t1", "target": "c1" },
                    { "id": "e2", "source": "c1", "target": "a1", "branch": "true" },
                    { "id": "e3", "source": "c1", "target": "a2", "branch": "false" },
                    { "id": "e4", "source": "a1", "target": "a3" },
                    { "id": "e5", "source": "a2", "target": "a3" }
                ]
            })
            .to_string(),
        )
        .unwrap();

        let order = resolve_order(&playbook).unwrap();
        // depth-first: the join is reached through the left branch first
        assert_eq!(ids(&order), vec!["t1", "c1", "a1", "a3", "a2"]);
    }

    #[test]
    fn test_multiple_triggers_seed_in_declaration_order() {
        let playbook = Playbook::from_json(
            &json!({
                "name": "Two Triggers",
                "nodes": [
                    { "id": "t1", "label": "First", "kind": "trigger",
                      "config": { "triggerType": "alert", "parameters": {} } },
                    { "id": "t2", "label": "Second", "kind": "trigger",
                      "config": { "triggerType": "email", "parameters": {} } },
                    { "id": "a1", "label": "Shared", "kind": "action",
                      "config": { "actionType": "notify", "parameters": {} } }
                ],
                "edges": [
                    { "id": "e1", "source": "t1", "target": "a1" },
                    { "id": "e2", "source": "t2", "target": "a1" }
                ]
            })
            .to_string(),
        )
        .unwrap();

        let order = resolve_order(&playbook).unwrap();
        assert_eq!(ids(&order), vec!["t1", "a1", "t2"]);
    }

    #[test]
    fn test_malformed_playbook_fails_fast() {
        let mut playbook = branching_playbook();
        playbook.edges.push(crate::model::Edge {
            id: "e4".to_string(),
            source: "missing".to_string(),
            target: "a1".to_string(),
            branch: None,
        });
        assert!(resolve_order(&playbook).is_err());
    }
}
