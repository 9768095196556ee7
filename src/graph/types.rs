//! Core type definitions for the graph store

use serde::{Deserialize, Serialize};
use std::fmt;

/// Node label (e.g., "Alice", "0", "B")
///
/// The label is both the unique identity of a node within one graph
/// instance and its human-visible name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Label(String);

impl Label {
    pub fn new(label: impl Into<String>) -> Self {
        Label(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label(s)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label(s.to_string())
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Whether edges are direction-sensitive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphType {
    Directed,
    #[default]
    Undirected,
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphType::Directed => write!(f, "directed"),
            GraphType::Undirected => write!(f, "undirected"),
        }
    }
}

/// Scheme governing auto-generated labels for newly created nodes
///
/// `ZeroIndexed` and `OneIndexed` label nodes by sequence position;
/// `Custom` leaves labels under user control and generates
/// spreadsheet-style letters (A, B, ..., Z, AA, ...) when asked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndexingMode {
    #[default]
    ZeroIndexed,
    OneIndexed,
    Custom,
}

impl fmt::Display for IndexingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexingMode::ZeroIndexed => write!(f, "0-indexed"),
            IndexingMode::OneIndexed => write!(f, "1-indexed"),
            IndexingMode::Custom => write!(f, "custom"),
        }
    }
}

/// Layout position of a node
///
/// Positions are written only by the rendering collaborator through
/// `GraphStore::update_node_positions`; the core never computes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

/// A position update for one node, as submitted by the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub label: Label,
    pub x: f64,
    pub y: f64,
}
