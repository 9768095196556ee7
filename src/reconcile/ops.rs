//! Semantic interpretation of line operations
//!
//! Re-classifies each diffed line by token count (one token declares a
//! node, two or three an edge) and converts it into zero or more change
//! operations against the graph. Edge modifications decompose: a
//! weight-only change is a single reweight, while an endpoint change
//! becomes remove + (node adds) + add. An endpoint rename inside an
//! edge line is never treated as an implicit node rename.

use super::diff::{diff_lines, LineOp};
use crate::graph::{Edge, GraphData, GraphType};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One atomic semantic edit derived from a text-line diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeOp {
    NodeAdd {
        label: String,
    },
    NodeRemove {
        label: String,
    },
    NodeLabelChange {
        old: String,
        new: String,
    },
    EdgeAdd {
        source: String,
        target: String,
        weight: Option<String>,
    },
    EdgeRemove {
        source: String,
        target: String,
        weight: Option<String>,
    },
    EdgeWeightChange {
        source: String,
        target: String,
        original: Option<String>,
        new: Option<String>,
    },
}

impl fmt::Display for ChangeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeOp::NodeAdd { label } => write!(f, "add node '{label}'"),
            ChangeOp::NodeRemove { label } => write!(f, "remove node '{label}'"),
            ChangeOp::NodeLabelChange { old, new } => {
                write!(f, "rename node '{old}' to '{new}'")
            }
            ChangeOp::EdgeAdd { source, target, .. } => {
                write!(f, "add edge '{source}' -> '{target}'")
            }
            ChangeOp::EdgeRemove { source, target, .. } => {
                write!(f, "remove edge '{source}' -> '{target}'")
            }
            ChangeOp::EdgeWeightChange { source, target, .. } => {
                write!(f, "reweight edge '{source}' -> '{target}'")
            }
        }
    }
}

/// What one side of a line operation declares
enum LineMeaning {
    Node(String),
    Edge(String, String, Option<String>),
    Nothing,
}

fn classify(line: &str) -> LineMeaning {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [label] => LineMeaning::Node((*label).to_string()),
        [source, target] => LineMeaning::Edge(source.to_string(), target.to_string(), None),
        [source, target, weight] => LineMeaning::Edge(
            source.to_string(),
            target.to_string(),
            Some(weight.to_string()),
        ),
        _ => LineMeaning::Nothing,
    }
}

/// The pre-edit snapshot advanced by the effect of already-emitted
/// operations
///
/// Label-keyed, never positional, so kept entities retain their
/// identity across the pass. Tracking node removals here is what keeps
/// the emitted set minimal: an edge the store will cascade away is
/// never also removed explicitly.
struct SnapshotView {
    labels: FxHashSet<String>,
    edges: Vec<Edge>,
    graph_type: GraphType,
}

impl SnapshotView {
    fn from_snapshot(snapshot: &GraphData) -> Self {
        SnapshotView {
            labels: snapshot
                .nodes
                .iter()
                .map(|n| n.label().to_string())
                .collect(),
            edges: snapshot.edges.clone(),
            graph_type: snapshot.graph_type,
        }
    }

    fn track(&mut self, op: &ChangeOp) {
        match op {
            ChangeOp::NodeAdd { label } => {
                self.labels.insert(label.clone());
            }
            ChangeOp::NodeRemove { label } => {
                self.labels.remove(label);
                // The store cascades these; drop them so later edge
                // removes cannot double-report
                self.edges.retain(|e| !e.touches(label));
            }
            ChangeOp::NodeLabelChange { old, new } => {
                self.labels.remove(old);
                self.labels.insert(new.clone());
                for edge in &mut self.edges {
                    if edge.source.as_str() == old.as_str() {
                        edge.source = new.as_str().into();
                    }
                    if edge.target.as_str() == old.as_str() {
                        edge.target = new.as_str().into();
                    }
                }
            }
            ChangeOp::EdgeAdd { source, target, weight } => {
                // Applying an edge add auto-creates missing endpoints
                self.labels.insert(source.clone());
                self.labels.insert(target.clone());
                self.edges.push(Edge::new(
                    source.as_str(),
                    target.as_str(),
                    weight.clone(),
                ));
            }
            ChangeOp::EdgeRemove { source, target, .. } => {
                let graph_type = self.graph_type;
                if let Some(pos) = self
                    .edges
                    .iter()
                    .position(|e| e.matches(source, target, graph_type))
                {
                    self.edges.remove(pos);
                }
            }
            ChangeOp::EdgeWeightChange { .. } => {}
        }
    }

    fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Locate the matching prior edge and build its removal; a remove
    /// with no matching edge left is dropped so the apply step only
    /// reports real conflicts.
    fn edge_remove(&self, source: &str, target: &str) -> Option<ChangeOp> {
        self.edges
            .iter()
            .find(|e| e.matches(source, target, self.graph_type))
            .map(|e| ChangeOp::EdgeRemove {
                source: source.to_string(),
                target: target.to_string(),
                weight: e.weight.clone(),
            })
    }
}

/// Compute the change operations that reconcile the previous text with
/// the new text, interpreted against the pre-edit graph snapshot
pub fn compute_changes(
    new_text: &str,
    previous_text: &str,
    snapshot: &GraphData,
) -> Vec<ChangeOp> {
    let mut changes = Vec::new();
    let mut known = SnapshotView::from_snapshot(snapshot);

    let emit = |changes: &mut Vec<ChangeOp>, known: &mut SnapshotView, op: ChangeOp| {
        known.track(&op);
        changes.push(op);
    };

    for line_op in diff_lines(previous_text, new_text) {
        match line_op {
            LineOp::Keep { .. } => {}

            LineOp::Add { line } => match classify(&line) {
                LineMeaning::Node(label) => {
                    emit(&mut changes, &mut known, ChangeOp::NodeAdd { label });
                }
                LineMeaning::Edge(source, target, weight) => {
                    emit(
                        &mut changes,
                        &mut known,
                        ChangeOp::EdgeAdd { source, target, weight },
                    );
                }
                LineMeaning::Nothing => {}
            },

            LineOp::Remove { line } => match classify(&line) {
                LineMeaning::Node(label) => {
                    emit(&mut changes, &mut known, ChangeOp::NodeRemove { label });
                }
                LineMeaning::Edge(source, target, _) => {
                    if let Some(op) = known.edge_remove(&source, &target) {
                        emit(&mut changes, &mut known, op);
                    }
                }
                LineMeaning::Nothing => {}
            },

            LineOp::Modify { old, new } => {
                match (classify(&old), classify(&new)) {
                    // Node line edited in place: a rename when the old
                    // label is real, otherwise just a new node
                    (LineMeaning::Node(old_label), LineMeaning::Node(new_label)) => {
                        if known.contains(&old_label) {
                            emit(
                                &mut changes,
                                &mut known,
                                ChangeOp::NodeLabelChange { old: old_label, new: new_label },
                            );
                        } else {
                            emit(
                                &mut changes,
                                &mut known,
                                ChangeOp::NodeAdd { label: new_label },
                            );
                        }
                    }

                    (
                        LineMeaning::Edge(old_source, old_target, old_weight),
                        LineMeaning::Edge(new_source, new_target, new_weight),
                    ) => {
                        if old_source == new_source && old_target == new_target {
                            if old_weight != new_weight {
                                emit(
                                    &mut changes,
                                    &mut known,
                                    ChangeOp::EdgeWeightChange {
                                        source: new_source,
                                        target: new_target,
                                        original: old_weight,
                                        new: new_weight,
                                    },
                                );
                            }
                        } else {
                            // Endpoint change: old edge out, unseen
                            // endpoints in, new edge in
                            if let Some(op) =
                                known.edge_remove(&old_source, &old_target)
                            {
                                emit(&mut changes, &mut known, op);
                            }
                            for endpoint in [&new_source, &new_target] {
                                if !known.contains(endpoint) {
                                    emit(
                                        &mut changes,
                                        &mut known,
                                        ChangeOp::NodeAdd { label: endpoint.clone() },
                                    );
                                }
                            }
                            emit(
                                &mut changes,
                                &mut known,
                                ChangeOp::EdgeAdd {
                                    source: new_source,
                                    target: new_target,
                                    weight: new_weight,
                                },
                            );
                        }
                    }

                    // Cross-arity edits decompose into the removes of
                    // the old interpretation plus the adds of the new
                    (LineMeaning::Node(old_label), LineMeaning::Edge(source, target, weight)) => {
                        emit(
                            &mut changes,
                            &mut known,
                            ChangeOp::NodeRemove { label: old_label },
                        );
                        emit(
                            &mut changes,
                            &mut known,
                            ChangeOp::EdgeAdd { source, target, weight },
                        );
                    }
                    (LineMeaning::Edge(old_source, old_target, _), LineMeaning::Node(label)) => {
                        if let Some(op) = known.edge_remove(&old_source, &old_target) {
                            emit(&mut changes, &mut known, op);
                        }
                        emit(&mut changes, &mut known, ChangeOp::NodeAdd { label });
                    }

                    (LineMeaning::Nothing, meaning) => match meaning {
                        LineMeaning::Node(label) => {
                            emit(&mut changes, &mut known, ChangeOp::NodeAdd { label });
                        }
                        LineMeaning::Edge(source, target, weight) => {
                            emit(
                                &mut changes,
                                &mut known,
                                ChangeOp::EdgeAdd { source, target, weight },
                            );
                        }
                        LineMeaning::Nothing => {}
                    },
                    (meaning, LineMeaning::Nothing) => match meaning {
                        LineMeaning::Node(label) => {
                            emit(&mut changes, &mut known, ChangeOp::NodeRemove { label });
                        }
                        LineMeaning::Edge(source, target, _) => {
                            if let Some(op) = known.edge_remove(&source, &target) {
                                emit(&mut changes, &mut known, op);
                            }
                        }
                        LineMeaning::Nothing => {}
                    },
                }
            }
        }
    }

    changes
}
