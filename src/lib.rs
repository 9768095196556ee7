//! Textgraph
//!
//! An in-memory graph store kept synchronized with a free-form textual
//! representation that a user edits directly.
//!
//! # Architecture
//!
//! Two components, the second depending on the first:
//!
//! - [`graph`] — the canonical node/edge collections behind a
//!   non-throwing mutation API with a single-slot error contract
//! - [`reconcile`] — line diffing, semantic interpretation, and
//!   best-effort patch application from text edits to graph mutations
//!
//! Everything is synchronous and single-writer by contract. Rendering,
//! layout, and editing surfaces are external collaborators that consume
//! snapshots from [`GraphStore::data`] and feed edits through
//! [`reconcile::reconcile`].
//!
//! # Example
//!
//! ```rust
//! use textgraph::graph::{GraphStore, GraphType};
//! use textgraph::reconcile;
//!
//! let mut store = GraphStore::new(GraphType::Undirected);
//! store.add_node("Alice", None).unwrap();
//! store.add_node("Bob", None).unwrap();
//! store.add_edge("Alice", "Bob", Some("5".to_string())).unwrap();
//!
//! // The user edits the text form: reweight the edge, add a node
//! let report = reconcile::reconcile(&mut store, "Alice\nBob\nCarol\nAlice Bob 10");
//! assert!(report.success);
//! assert_eq!(store.node_count(), 3);
//! assert_eq!(
//!     store.get_edge("Alice", "Bob").unwrap().weight.as_deref(),
//!     Some("10")
//! );
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;
pub mod reconcile;

// Re-export main types for convenience
pub use graph::{
    Edge, GraphData, GraphError, GraphStore, GraphType, IndexingMode, Label, Node, NodePosition,
    Position,
};

pub use reconcile::{
    apply_changes, compute_changes, diff_lines, parse, reconcile, serialize, ApplyReport,
    ChangeOp, LineOp,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
