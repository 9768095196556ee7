//! Node implementation
//!
//! A node is identified by its label alone. The optional position is
//! layout feedback from the rendering collaborator and never
//! participates in identity or invariant checks.

use super::types::{Label, Position};
use serde::{Deserialize, Serialize};

/// A node in the graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique label; doubles as the display name
    pub label: Label,

    /// Layout position, written only via bulk position updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Node {
    /// Create a new node with no position
    pub fn new(label: impl Into<Label>) -> Self {
        Node {
            label: label.into(),
            position: None,
        }
    }

    /// Create a new node at a known position
    pub fn with_position(label: impl Into<Label>, position: Position) -> Self {
        Node {
            label: label.into(),
            position: Some(position),
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_str()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}
