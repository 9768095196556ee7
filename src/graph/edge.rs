//! Edge implementation
//!
//! An edge is identified by its (source, target) label pair. Under an
//! undirected graph the pair is orientation-insensitive for duplicate
//! detection and lookup, though only the declared orientation is stored.

use super::types::{GraphType, Label};
use serde::{Deserialize, Serialize};

/// An edge between two nodes, with an optional string weight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Source node label (edge goes FROM this node)
    pub source: Label,

    /// Target node label (edge goes TO this node)
    pub target: Label,

    /// Optional weight, kept as the literal token from the text form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

impl Edge {
    /// Create a new edge
    pub fn new(
        source: impl Into<Label>,
        target: impl Into<Label>,
        weight: Option<String>,
    ) -> Self {
        Edge {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// Check if this edge connects two specific labels (either direction)
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source.as_str() == a && self.target.as_str() == b)
            || (self.source.as_str() == b && self.target.as_str() == a)
    }

    /// Check if this edge matches an endpoint pair under the given
    /// direction-sensitivity rule
    pub fn matches(&self, source: &str, target: &str, graph_type: GraphType) -> bool {
        match graph_type {
            GraphType::Directed => {
                self.source.as_str() == source && self.target.as_str() == target
            }
            GraphType::Undirected => self.connects(source, target),
        }
    }

    /// Check if this edge touches a specific label at either end
    pub fn touches(&self, label: &str) -> bool {
        self.source.as_str() == label || self.target.as_str() == label
    }

    /// Check if this edge is a self-loop
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.target == other.target
    }
}

impl Eq for Edge {}
