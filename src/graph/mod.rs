//! Core graph store implementation
//!
//! This module implements the label-identified graph data model:
//! - Nodes identified by unique string labels, with optional layout positions
//! - Directed or undirected edges with optional string weights
//! - An in-memory store with a non-throwing mutation API and a
//!   single-slot last-error contract

pub mod edge;
pub mod node;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use node::Node;
pub use store::{GraphData, GraphError, GraphStore, DEFAULT_MAX_NODES};
pub use types::{GraphType, IndexingMode, Label, NodePosition, Position};
