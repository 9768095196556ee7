//! Text serialization contract
//!
//! A graph serializes to one line per node (its label, in store order)
//! followed by one line per edge (`"<source> <target>"` plus a trailing
//! `" <weight>"` when present). Parsing is tolerant: malformed lines are
//! skipped, never reported as failures.

use crate::graph::{GraphData, GraphStore, GraphType, IndexingMode};

/// Serialize a graph to its text form
///
/// Nodes appear first in store order, then edges in store order. No
/// blank lines are emitted.
pub fn serialize(data: &GraphData) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(data.nodes.len() + data.edges.len());

    for node in &data.nodes {
        lines.push(node.label().to_string());
    }
    for edge in &data.edges {
        match &edge.weight {
            Some(weight) => lines.push(format!("{} {} {}", edge.source, edge.target, weight)),
            None => lines.push(format!("{} {}", edge.source, edge.target)),
        }
    }

    lines.join("\n")
}

/// Parse a text form into a graph
///
/// Each non-empty line is trimmed, whitespace-collapsed, and classified
/// by token count: 1 token declares a node, 2 or 3 tokens declare an
/// edge (third token is the weight), anything longer is dropped. Edge
/// lines auto-create undeclared endpoints. Re-declarations of a node or
/// an endpoint pair within the same text are ignored. There is no
/// failure mode for structurally odd input.
pub fn parse(text: &str, graph_type: GraphType, indexing_mode: IndexingMode) -> GraphData {
    // Replaying through the store makes its own duplicate/self-loop
    // rules do the skipping.
    let mut store = GraphStore::with_config(graph_type, indexing_mode, usize::MAX);

    for line in text.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => {}
            [label] => {
                store.add_node(*label, None);
            }
            [source, target] => {
                ensure_endpoints(&mut store, source, target);
                store.add_edge(source, target, None);
            }
            [source, target, weight] => {
                ensure_endpoints(&mut store, source, target);
                store.add_edge(source, target, Some((*weight).to_string()));
            }
            _ => {}
        }
    }

    store.clear_error();
    store.data()
}

fn ensure_endpoints(store: &mut GraphStore, source: &str, target: &str) {
    if !store.has_node(source) {
        store.add_node(source, None);
    }
    if !store.has_node(target) {
        store.add_node(target, None);
    }
}

/// Trim and collapse internal whitespace, for comparison only
pub fn normalize_line(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode an edge line into `(source, target, weight)`
///
/// Returns `None` when the line does not carry 2 or 3 tokens.
pub fn decode_edge_line(line: &str) -> Option<(String, String, Option<String>)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [source, target] => Some((source.to_string(), target.to_string(), None)),
        [source, target, weight] => Some((
            source.to_string(),
            target.to_string(),
            Some(weight.to_string()),
        )),
        _ => None,
    }
}
