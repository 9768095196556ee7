//! In-memory graph storage
//!
//! The store owns the canonical node and edge collections and enforces
//! the structural invariants:
//!
//! - node labels are unique within one instance
//! - every edge endpoint references an existing node; removing a node
//!   cascades removal of every edge touching it
//! - undirected graphs forbid self-loops
//! - no two edges share an endpoint pair (orientation-insensitive for
//!   undirected graphs)
//! - the node count never exceeds the configured maximum
//!
//! No operation raises. Every mutation returns a success value or
//! `None`/`false`, with the failure reason parked in a single error
//! slot that is cleared at the start of the next mutation attempt.

use super::edge::Edge;
use super::node::Node;
use super::types::{GraphType, IndexingMode, Label, NodePosition, Position};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Default cap on the node collection
pub const DEFAULT_MAX_NODES: usize = 100;

/// Failure reasons for graph mutations
///
/// All of these are recoverable: they surface through the store's error
/// slot, never as a panic or early return to the caller's caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node '{0}' already exists")]
    DuplicateNode(Label),

    #[error("node limit of {0} reached")]
    NodeLimitReached(usize),

    #[error("node '{0}' not found")]
    NodeNotFound(Label),

    #[error("edge endpoint '{0}' does not exist")]
    MissingEndpoint(Label),

    #[error("self-loop on '{0}' is not allowed in an undirected graph")]
    SelfLoop(Label),

    #[error("edge between '{0}' and '{1}' already exists")]
    DuplicateEdge(Label, Label),

    #[error("edge between '{0}' and '{1}' not found")]
    EdgeNotFound(Label, Label),
}

/// The canonical graph collections plus configuration
///
/// Node insertion order is significant: it determines auto-generated
/// labels and the order of the text serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub graph_type: GraphType,
    pub indexing_mode: IndexingMode,
    pub max_nodes: usize,
}

impl GraphData {
    pub fn new(graph_type: GraphType, indexing_mode: IndexingMode, max_nodes: usize) -> Self {
        GraphData {
            nodes: Vec::new(),
            edges: Vec::new(),
            graph_type,
            indexing_mode,
            max_nodes,
        }
    }
}

impl Default for GraphData {
    fn default() -> Self {
        GraphData::new(
            GraphType::default(),
            IndexingMode::default(),
            DEFAULT_MAX_NODES,
        )
    }
}

/// The live graph store: `GraphData` plus a modified flag and the
/// last-operation error slot
///
/// Single-writer by contract. Read accessors hand out defensive copies,
/// never live references, so callers cannot bypass the invariant checks.
#[derive(Debug, Clone)]
pub struct GraphStore {
    data: GraphData,
    /// Label -> position in `data.nodes`
    label_index: FxHashMap<Label, usize>,
    modified: bool,
    last_error: Option<GraphError>,
}

impl GraphStore {
    /// Create an empty store of the given type with default configuration
    pub fn new(graph_type: GraphType) -> Self {
        GraphStore::with_config(graph_type, IndexingMode::default(), DEFAULT_MAX_NODES)
    }

    /// Create an empty store with explicit configuration
    pub fn with_config(
        graph_type: GraphType,
        indexing_mode: IndexingMode,
        max_nodes: usize,
    ) -> Self {
        GraphStore {
            data: GraphData::new(graph_type, indexing_mode, max_nodes),
            label_index: FxHashMap::default(),
            modified: false,
            last_error: None,
        }
    }

    /// Build a store from seed data
    ///
    /// The seed is replayed through the normal mutation path, so entries
    /// that would violate an invariant (duplicate labels, dangling
    /// endpoints, over-limit nodes) are dropped rather than admitted.
    pub fn with_data(data: GraphData) -> Self {
        let mut store =
            GraphStore::with_config(data.graph_type, data.indexing_mode, data.max_nodes);
        for node in data.nodes {
            store.add_node(node.label, node.position);
        }
        for edge in data.edges {
            store.add_edge(edge.source.as_str(), edge.target.as_str(), edge.weight);
        }
        store.modified = false;
        store.last_error = None;
        store
    }

    // ============================================================
    // Node mutations
    // ============================================================

    /// Add a node. Returns the new node, or `None` if the label is taken
    /// or the node limit is reached.
    pub fn add_node(
        &mut self,
        label: impl Into<Label>,
        position: Option<Position>,
    ) -> Option<Node> {
        self.last_error = None;
        let label = label.into();

        if self.label_index.contains_key(label.as_str()) {
            self.last_error = Some(GraphError::DuplicateNode(label));
            return None;
        }
        if self.data.nodes.len() >= self.data.max_nodes {
            self.last_error = Some(GraphError::NodeLimitReached(self.data.max_nodes));
            return None;
        }

        let node = Node { label: label.clone(), position };
        self.label_index.insert(label, self.data.nodes.len());
        self.data.nodes.push(node.clone());
        self.modified = true;
        Some(node)
    }

    /// Remove a node and every edge touching it
    pub fn remove_node(&mut self, label: &str) -> bool {
        self.last_error = None;
        let Some(&idx) = self.label_index.get(label) else {
            self.last_error = Some(GraphError::NodeNotFound(Label::new(label)));
            return false;
        };

        self.data.nodes.remove(idx);
        let before = self.data.edges.len();
        self.data.edges.retain(|e| !e.touches(label));
        let cascaded = before - self.data.edges.len();
        if cascaded > 0 {
            debug!(label, cascaded, "node removal cascaded edge removal");
        }

        self.rebuild_index();
        self.modified = true;
        true
    }

    /// Rename a node, rewriting edge endpoint references in the same pass
    ///
    /// Fails when the node is unknown or the new label collides with a
    /// different existing node. Edges that the rewrite would make invalid
    /// (an undirected self-loop, or a duplicate of a surviving edge) are
    /// dropped to keep the invariants intact.
    pub fn update_node(&mut self, label: &str, new_label: impl Into<Label>) -> Option<Node> {
        self.last_error = None;
        let new_label = new_label.into();

        let Some(&idx) = self.label_index.get(label) else {
            self.last_error = Some(GraphError::NodeNotFound(Label::new(label)));
            return None;
        };
        if new_label.as_str() != label && self.label_index.contains_key(new_label.as_str()) {
            self.last_error = Some(GraphError::DuplicateNode(new_label));
            return None;
        }
        if new_label.as_str() == label {
            return Some(self.data.nodes[idx].clone());
        }

        self.data.nodes[idx].label = new_label.clone();
        self.label_index.remove(label);
        self.label_index.insert(new_label.clone(), idx);

        for edge in &mut self.data.edges {
            if edge.source.as_str() == label {
                edge.source = new_label.clone();
            }
            if edge.target.as_str() == label {
                edge.target = new_label.clone();
            }
        }
        self.prune_invalid_edges();

        self.modified = true;
        Some(self.data.nodes[idx].clone())
    }

    /// Apply layout positions in bulk; unknown labels are skipped.
    /// Returns the number of nodes updated. Positions are presentation
    /// state and do not set the modified flag.
    pub fn update_node_positions(&mut self, positions: &[NodePosition]) -> usize {
        let mut applied = 0;
        for update in positions {
            if let Some(&idx) = self.label_index.get(update.label.as_str()) {
                self.data.nodes[idx].position = Some(Position::new(update.x, update.y));
                applied += 1;
            }
        }
        applied
    }

    // ============================================================
    // Edge mutations
    // ============================================================

    /// Add an edge. Returns the new edge, or `None` on a missing
    /// endpoint, a self-loop in an undirected graph, or a duplicate pair.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        weight: Option<String>,
    ) -> Option<Edge> {
        self.last_error = None;

        if !self.label_index.contains_key(source) {
            self.last_error = Some(GraphError::MissingEndpoint(Label::new(source)));
            return None;
        }
        if !self.label_index.contains_key(target) {
            self.last_error = Some(GraphError::MissingEndpoint(Label::new(target)));
            return None;
        }
        if source == target && self.data.graph_type == GraphType::Undirected {
            self.last_error = Some(GraphError::SelfLoop(Label::new(source)));
            return None;
        }
        if self
            .data
            .edges
            .iter()
            .any(|e| e.matches(source, target, self.data.graph_type))
        {
            self.last_error = Some(GraphError::DuplicateEdge(
                Label::new(source),
                Label::new(target),
            ));
            return None;
        }

        let edge = Edge::new(source, target, weight);
        self.data.edges.push(edge.clone());
        self.modified = true;
        Some(edge)
    }

    /// Remove the edge matching the endpoint pair under the current
    /// direction-sensitivity rule
    pub fn remove_edge(&mut self, source: &str, target: &str) -> bool {
        self.last_error = None;
        let Some(pos) = self
            .data
            .edges
            .iter()
            .position(|e| e.matches(source, target, self.data.graph_type))
        else {
            self.last_error = Some(GraphError::EdgeNotFound(
                Label::new(source),
                Label::new(target),
            ));
            return false;
        };

        self.data.edges.remove(pos);
        self.modified = true;
        true
    }

    /// Remove every edge connecting two labels, regardless of
    /// orientation. Returns the number removed.
    pub fn remove_edges_between(&mut self, a: &str, b: &str) -> usize {
        self.last_error = None;
        let before = self.data.edges.len();
        self.data.edges.retain(|e| !e.connects(a, b));
        let removed = before - self.data.edges.len();
        if removed > 0 {
            self.modified = true;
        } else {
            self.last_error = Some(GraphError::EdgeNotFound(Label::new(a), Label::new(b)));
        }
        removed
    }

    /// Change the weight of an existing edge
    pub fn update_edge_weight(
        &mut self,
        source: &str,
        target: &str,
        weight: Option<String>,
    ) -> bool {
        self.last_error = None;
        let graph_type = self.data.graph_type;
        let Some(edge) = self
            .data
            .edges
            .iter_mut()
            .find(|e| e.matches(source, target, graph_type))
        else {
            self.last_error = Some(GraphError::EdgeNotFound(
                Label::new(source),
                Label::new(target),
            ));
            return false;
        };

        edge.weight = weight;
        self.modified = true;
        true
    }

    // ============================================================
    // Configuration mutations
    // ============================================================

    /// Change direction sensitivity
    ///
    /// Switching to undirected drops self-loops and collapses
    /// orientation-duplicate pairs (the first-declared edge wins) so the
    /// undirected invariants hold immediately after the switch.
    pub fn set_graph_type(&mut self, graph_type: GraphType) {
        self.last_error = None;
        if self.data.graph_type == graph_type {
            return;
        }
        self.data.graph_type = graph_type;

        if graph_type == GraphType::Undirected {
            let before = self.data.edges.len();
            let mut seen: FxHashSet<(Label, Label)> = FxHashSet::default();
            self.data.edges.retain(|e| {
                if e.is_self_loop() {
                    return false;
                }
                let key = if e.source <= e.target {
                    (e.source.clone(), e.target.clone())
                } else {
                    (e.target.clone(), e.source.clone())
                };
                seen.insert(key)
            });
            let dropped = before - self.data.edges.len();
            if dropped > 0 {
                debug!(dropped, "undirected switch dropped conflicting edges");
            }
        }
        self.modified = true;
    }

    /// Change the indexing mode
    ///
    /// For the positional modes this triggers a full relabel pass: every
    /// node label is regenerated from its sequence position and all edge
    /// endpoint references are rewritten in the same pass. `Custom`
    /// preserves the existing labels.
    pub fn set_indexing_mode(&mut self, mode: IndexingMode) {
        self.last_error = None;
        self.data.indexing_mode = mode;

        let offset = match mode {
            IndexingMode::ZeroIndexed => 0,
            IndexingMode::OneIndexed => 1,
            IndexingMode::Custom => {
                self.modified = true;
                return;
            }
        };

        let mut mapping: FxHashMap<Label, Label> = FxHashMap::default();
        for (i, node) in self.data.nodes.iter_mut().enumerate() {
            let new_label = Label::new((i + offset).to_string());
            mapping.insert(node.label.clone(), new_label.clone());
            node.label = new_label;
        }
        for edge in &mut self.data.edges {
            if let Some(new_source) = mapping.get(&edge.source) {
                edge.source = new_source.clone();
            }
            if let Some(new_target) = mapping.get(&edge.target) {
                edge.target = new_target.clone();
            }
        }

        self.rebuild_index();
        self.modified = true;
    }

    /// The label the store would assign to the next UI-created node
    pub fn next_auto_label(&self) -> Label {
        match self.data.indexing_mode {
            IndexingMode::ZeroIndexed => self.next_numeric_label(0),
            IndexingMode::OneIndexed => self.next_numeric_label(1),
            IndexingMode::Custom => self.next_letter_label(),
        }
    }

    fn next_numeric_label(&self, offset: usize) -> Label {
        let mut candidate = self.data.nodes.len() + offset;
        loop {
            let label = candidate.to_string();
            if !self.label_index.contains_key(label.as_str()) {
                return Label::new(label);
            }
            candidate += 1;
        }
    }

    fn next_letter_label(&self) -> Label {
        let mut candidate = self.data.nodes.len();
        loop {
            let label = column_letters(candidate);
            if !self.label_index.contains_key(label.as_str()) {
                return Label::new(label);
            }
            candidate += 1;
        }
    }

    /// Empty nodes and edges, preserving type/indexing/max configuration
    pub fn reset(&mut self) {
        self.data.nodes.clear();
        self.data.edges.clear();
        self.label_index.clear();
        self.modified = true;
        self.last_error = None;
    }

    // ============================================================
    // Queries (defensive copies only)
    // ============================================================

    /// A fresh snapshot of the full graph data
    pub fn data(&self) -> GraphData {
        self.data.clone()
    }

    pub fn nodes(&self) -> Vec<Node> {
        self.data.nodes.clone()
    }

    pub fn edges(&self) -> Vec<Edge> {
        self.data.edges.clone()
    }

    pub fn node_count(&self) -> usize {
        self.data.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.data.edges.len()
    }

    pub fn graph_type(&self) -> GraphType {
        self.data.graph_type
    }

    pub fn indexing_mode(&self) -> IndexingMode {
        self.data.indexing_mode
    }

    pub fn max_nodes(&self) -> usize {
        self.data.max_nodes
    }

    pub fn has_node(&self, label: &str) -> bool {
        self.label_index.contains_key(label)
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.data
            .edges
            .iter()
            .any(|e| e.matches(source, target, self.data.graph_type))
    }

    pub fn get_node(&self, label: &str) -> Option<Node> {
        self.label_index
            .get(label)
            .map(|&idx| self.data.nodes[idx].clone())
    }

    pub fn get_edge(&self, source: &str, target: &str) -> Option<Edge> {
        self.data
            .edges
            .iter()
            .find(|e| e.matches(source, target, self.data.graph_type))
            .cloned()
    }

    /// Number of edges touching a node, or `None` for an unknown label
    pub fn degree(&self, label: &str) -> Option<usize> {
        if !self.label_index.contains_key(label) {
            return None;
        }
        Some(self.data.edges.iter().filter(|e| e.touches(label)).count())
    }

    // ============================================================
    // Error slot and modified flag
    // ============================================================

    /// The reason the last mutation failed, if it did
    pub fn last_error(&self) -> Option<&GraphError> {
        self.last_error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn clear_modified(&mut self) {
        self.modified = false;
    }

    /// Check every structural invariant, returning the first violation
    ///
    /// The mutation API keeps these true by construction; this exists so
    /// callers and tests can audit the store after arbitrary sequences.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.data.nodes.len() > self.data.max_nodes {
            return Err(GraphError::NodeLimitReached(self.data.max_nodes));
        }

        let mut labels: FxHashSet<&str> = FxHashSet::default();
        for node in &self.data.nodes {
            if !labels.insert(node.label.as_str()) {
                return Err(GraphError::DuplicateNode(node.label.clone()));
            }
        }

        for (i, edge) in self.data.edges.iter().enumerate() {
            if !labels.contains(edge.source.as_str()) {
                return Err(GraphError::MissingEndpoint(edge.source.clone()));
            }
            if !labels.contains(edge.target.as_str()) {
                return Err(GraphError::MissingEndpoint(edge.target.clone()));
            }
            if edge.is_self_loop() && self.data.graph_type == GraphType::Undirected {
                return Err(GraphError::SelfLoop(edge.source.clone()));
            }
            if self.data.edges[i + 1..].iter().any(|other| {
                other.matches(
                    edge.source.as_str(),
                    edge.target.as_str(),
                    self.data.graph_type,
                )
            }) {
                return Err(GraphError::DuplicateEdge(
                    edge.source.clone(),
                    edge.target.clone(),
                ));
            }
        }

        Ok(())
    }

    // ============================================================
    // Internals
    // ============================================================

    fn rebuild_index(&mut self) {
        self.label_index.clear();
        for (idx, node) in self.data.nodes.iter().enumerate() {
            self.label_index.insert(node.label.clone(), idx);
        }
    }

    /// Drop edges that a rename made invalid: undirected self-loops and
    /// duplicates of an earlier edge.
    fn prune_invalid_edges(&mut self) {
        let graph_type = self.data.graph_type;
        let mut kept: Vec<Edge> = Vec::with_capacity(self.data.edges.len());
        for edge in self.data.edges.drain(..) {
            if edge.is_self_loop() && graph_type == GraphType::Undirected {
                continue;
            }
            if kept
                .iter()
                .any(|k| k.matches(edge.source.as_str(), edge.target.as_str(), graph_type))
            {
                continue;
            }
            kept.push(edge);
        }
        self.data.edges = kept;
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        GraphStore::new(GraphType::default())
    }
}

/// Spreadsheet-style letter sequence: 0 -> A, 25 -> Z, 26 -> AA, ...
fn column_letters(mut n: usize) -> String {
    let mut out = Vec::new();
    n += 1;
    while n > 0 {
        n -= 1;
        out.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get_node() {
        let mut store = GraphStore::new(GraphType::Undirected);
        let node = store.add_node("Alice", None).unwrap();

        assert_eq!(node.label(), "Alice");
        assert_eq!(store.node_count(), 1);
        assert!(store.has_node("Alice"));
        assert!(store.last_error().is_none());
        assert!(store.is_modified());
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut store = GraphStore::new(GraphType::Undirected);
        store.add_node("Alice", None).unwrap();

        let result = store.add_node("Alice", None);
        assert!(result.is_none());
        assert_eq!(
            store.last_error(),
            Some(&GraphError::DuplicateNode(Label::new("Alice")))
        );
        assert_eq!(store.node_count(), 1);
    }

    #[test]
    fn test_node_limit() {
        let mut store = GraphStore::with_config(GraphType::Directed, IndexingMode::Custom, 2);
        store.add_node("A", None).unwrap();
        store.add_node("B", None).unwrap();

        assert!(store.add_node("C", None).is_none());
        assert_eq!(store.last_error(), Some(&GraphError::NodeLimitReached(2)));
        assert_eq!(store.node_count(), 2);
    }

    #[test]
    fn test_error_slot_cleared_on_next_mutation() {
        let mut store = GraphStore::new(GraphType::Undirected);
        store.add_node("Alice", None).unwrap();
        assert!(store.add_node("Alice", None).is_none());
        assert!(store.last_error().is_some());

        store.add_node("Bob", None).unwrap();
        assert!(store.last_error().is_none());
    }

    #[test]
    fn test_remove_node_cascades_edges() {
        let mut store = GraphStore::new(GraphType::Undirected);
        store.add_node("A", None).unwrap();
        store.add_node("B", None).unwrap();
        store.add_node("C", None).unwrap();
        store.add_edge("A", "B", None).unwrap();
        store.add_edge("B", "C", None).unwrap();
        store.add_edge("A", "C", None).unwrap();

        assert_eq!(store.degree("B"), Some(2));
        assert!(store.remove_node("B"));
        assert_eq!(store.node_count(), 2);
        assert_eq!(store.edge_count(), 1);
        assert!(store.has_edge("A", "C"));
        store.validate().unwrap();
    }

    #[test]
    fn test_remove_unknown_node() {
        let mut store = GraphStore::new(GraphType::Undirected);
        assert!(!store.remove_node("ghost"));
        assert_eq!(
            store.last_error(),
            Some(&GraphError::NodeNotFound(Label::new("ghost")))
        );
    }

    #[test]
    fn test_update_node_rewrites_edges() {
        let mut store = GraphStore::new(GraphType::Undirected);
        store.add_node("A", None).unwrap();
        store.add_node("B", None).unwrap();
        store.add_edge("A", "B", Some("3".into())).unwrap();

        let renamed = store.update_node("A", "Start").unwrap();
        assert_eq!(renamed.label(), "Start");
        assert!(store.has_edge("Start", "B"));
        assert_eq!(
            store.get_edge("Start", "B").unwrap().weight.as_deref(),
            Some("3")
        );
        store.validate().unwrap();
    }

    #[test]
    fn test_update_node_collision() {
        let mut store = GraphStore::new(GraphType::Undirected);
        store.add_node("A", None).unwrap();
        store.add_node("B", None).unwrap();

        assert!(store.update_node("A", "B").is_none());
        assert_eq!(
            store.last_error(),
            Some(&GraphError::DuplicateNode(Label::new("B")))
        );
        assert!(store.has_node("A"));
    }

    #[test]
    fn test_add_edge_requires_endpoints() {
        let mut store = GraphStore::new(GraphType::Undirected);
        store.add_node("A", None).unwrap();

        assert!(store.add_edge("A", "B", None).is_none());
        assert_eq!(
            store.last_error(),
            Some(&GraphError::MissingEndpoint(Label::new("B")))
        );
        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn test_self_loop_rules() {
        let mut undirected = GraphStore::new(GraphType::Undirected);
        undirected.add_node("A", None).unwrap();
        assert!(undirected.add_edge("A", "A", None).is_none());
        assert_eq!(
            undirected.last_error(),
            Some(&GraphError::SelfLoop(Label::new("A")))
        );

        let mut directed = GraphStore::new(GraphType::Directed);
        directed.add_node("A", None).unwrap();
        assert!(directed.add_edge("A", "A", None).is_some());
        directed.validate().unwrap();
    }

    #[test]
    fn test_duplicate_edge_direction_sensitivity() {
        // Undirected: (A,B) and (B,A) are the same edge
        let mut undirected = GraphStore::new(GraphType::Undirected);
        undirected.add_node("A", None).unwrap();
        undirected.add_node("B", None).unwrap();
        undirected.add_edge("A", "B", None).unwrap();
        assert!(undirected.add_edge("B", "A", None).is_none());
        assert_eq!(undirected.edge_count(), 1);

        // Directed: they are distinct
        let mut directed = GraphStore::new(GraphType::Directed);
        directed.add_node("A", None).unwrap();
        directed.add_node("B", None).unwrap();
        directed.add_edge("A", "B", None).unwrap();
        assert!(directed.add_edge("B", "A", None).is_some());
        assert!(directed.add_edge("A", "B", None).is_none());
        assert_eq!(directed.edge_count(), 2);
    }

    #[test]
    fn test_remove_edge_and_edges_between() {
        let mut store = GraphStore::new(GraphType::Directed);
        store.add_node("A", None).unwrap();
        store.add_node("B", None).unwrap();
        store.add_edge("A", "B", None).unwrap();
        store.add_edge("B", "A", None).unwrap();

        assert!(store.remove_edge("A", "B"));
        assert_eq!(store.edge_count(), 1);

        store.add_edge("A", "B", None).unwrap();
        assert_eq!(store.remove_edges_between("A", "B"), 2);
        assert_eq!(store.edge_count(), 0);

        assert_eq!(store.remove_edges_between("A", "B"), 0);
        assert!(store.last_error().is_some());
    }

    #[test]
    fn test_update_edge_weight() {
        let mut store = GraphStore::new(GraphType::Undirected);
        store.add_node("A", None).unwrap();
        store.add_node("B", None).unwrap();
        store.add_edge("A", "B", Some("5".into())).unwrap();

        assert!(store.update_edge_weight("A", "B", Some("10".into())));
        assert_eq!(
            store.get_edge("A", "B").unwrap().weight.as_deref(),
            Some("10")
        );

        assert!(!store.update_edge_weight("A", "C", None));
        assert_eq!(
            store.last_error(),
            Some(&GraphError::EdgeNotFound(Label::new("A"), Label::new("C")))
        );
    }

    #[test]
    fn test_set_graph_type_collapses_conflicts() {
        let mut store = GraphStore::new(GraphType::Directed);
        store.add_node("A", None).unwrap();
        store.add_node("B", None).unwrap();
        store.add_edge("A", "A", None).unwrap();
        store.add_edge("A", "B", Some("1".into())).unwrap();
        store.add_edge("B", "A", Some("2".into())).unwrap();

        store.set_graph_type(GraphType::Undirected);
        assert_eq!(store.edge_count(), 1);
        // First-declared orientation and weight win
        let edge = store.get_edge("A", "B").unwrap();
        assert_eq!(edge.weight.as_deref(), Some("1"));
        store.validate().unwrap();
    }

    #[test]
    fn test_relabel_pass() {
        let mut store = GraphStore::with_config(GraphType::Directed, IndexingMode::Custom, 100);
        store.add_node("Alice", None).unwrap();
        store.add_node("Bob", None).unwrap();
        store.add_node("Carol", None).unwrap();
        store.add_edge("Alice", "Bob", Some("2".into())).unwrap();
        store.add_edge("Bob", "Carol", None).unwrap();

        store.set_indexing_mode(IndexingMode::OneIndexed);

        let labels: Vec<String> = store
            .nodes()
            .iter()
            .map(|n| n.label().to_string())
            .collect();
        assert_eq!(labels, vec!["1", "2", "3"]);
        assert!(store.has_edge("1", "2"));
        assert!(store.has_edge("2", "3"));
        assert_eq!(store.get_edge("1", "2").unwrap().weight.as_deref(), Some("2"));
        store.validate().unwrap();
    }

    #[test]
    fn test_relabel_to_custom_preserves_labels() {
        let mut store = GraphStore::new(GraphType::Undirected);
        store.add_node("Alice", None).unwrap();
        store.set_indexing_mode(IndexingMode::Custom);
        assert!(store.has_node("Alice"));
    }

    #[test]
    fn test_next_auto_label() {
        let mut store = GraphStore::new(GraphType::Undirected);
        assert_eq!(store.next_auto_label().as_str(), "0");
        store.add_node("0", None).unwrap();
        assert_eq!(store.next_auto_label().as_str(), "1");

        store.set_indexing_mode(IndexingMode::OneIndexed);
        assert_eq!(store.next_auto_label().as_str(), "2");

        let mut custom = GraphStore::with_config(GraphType::Undirected, IndexingMode::Custom, 100);
        assert_eq!(custom.next_auto_label().as_str(), "A");
        custom.add_node("A", None).unwrap();
        assert_eq!(custom.next_auto_label().as_str(), "B");
    }

    #[test]
    fn test_auto_label_skips_taken() {
        let mut store = GraphStore::new(GraphType::Undirected);
        store.add_node("1", None).unwrap();
        // One node; candidate "1" is taken, so the next free is "2"
        assert_eq!(store.next_auto_label().as_str(), "2");
    }

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(25), "Z");
        assert_eq!(column_letters(26), "AA");
        assert_eq!(column_letters(27), "AB");
        assert_eq!(column_letters(51), "AZ");
        assert_eq!(column_letters(52), "BA");
    }

    #[test]
    fn test_reset_preserves_config() {
        let mut store = GraphStore::with_config(GraphType::Directed, IndexingMode::OneIndexed, 7);
        store.add_node("A", None).unwrap();
        store.reset();

        assert_eq!(store.node_count(), 0);
        assert_eq!(store.edge_count(), 0);
        assert_eq!(store.graph_type(), GraphType::Directed);
        assert_eq!(store.indexing_mode(), IndexingMode::OneIndexed);
        assert_eq!(store.max_nodes(), 7);
    }

    #[test]
    fn test_with_data_sanitizes_seed() {
        let mut data = GraphData::default();
        data.nodes.push(Node::new("A"));
        data.nodes.push(Node::new("A")); // duplicate
        data.nodes.push(Node::new("B"));
        data.edges.push(Edge::new("A", "B", None));
        data.edges.push(Edge::new("A", "ghost", None)); // dangling

        let store = GraphStore::with_data(data);
        assert_eq!(store.node_count(), 2);
        assert_eq!(store.edge_count(), 1);
        assert!(!store.is_modified());
        store.validate().unwrap();
    }

    #[test]
    fn test_accessors_return_copies() {
        let mut store = GraphStore::new(GraphType::Undirected);
        store.add_node("A", None).unwrap();

        let mut snapshot = store.data();
        snapshot.nodes.clear();
        assert_eq!(store.node_count(), 1);

        let mut nodes = store.nodes();
        nodes[0].label = Label::new("hacked");
        assert!(store.has_node("A"));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut store = GraphStore::new(GraphType::Undirected);
        store.add_node("A", None).unwrap();

        let mut copy = store.clone();
        copy.add_node("B", None).unwrap();

        assert_eq!(store.node_count(), 1);
        assert_eq!(copy.node_count(), 2);
    }

    #[test]
    fn test_invariants_hold_after_failed_mutations() {
        let mut store = GraphStore::with_config(GraphType::Undirected, IndexingMode::Custom, 3);
        store.add_node("A", None).unwrap();
        store.add_node("B", None).unwrap();
        store.add_edge("A", "B", None).unwrap();

        store.add_node("A", None); // duplicate
        store.validate().unwrap();
        store.add_edge("A", "B", None); // duplicate
        store.validate().unwrap();
        store.add_edge("A", "A", None); // self-loop
        store.validate().unwrap();
        store.remove_node("ghost");
        store.validate().unwrap();

        assert_eq!(store.node_count(), 2);
        assert_eq!(store.edge_count(), 1);
    }
}
