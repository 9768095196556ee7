//! Best-effort application of change operations
//!
//! Operations are applied in emitted order directly against a live
//! store. A failed operation is recorded and the loop continues; there
//! is no rollback. Callers that need atomicity clone the store first
//! and swap the clone in only when the report comes back clean.

use super::ops::ChangeOp;
use crate::graph::GraphStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Aggregate outcome of one apply pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyReport {
    /// True iff every operation applied cleanly
    pub success: bool,
    /// One entry per failed operation, in application order
    pub errors: Vec<String>,
}

impl ApplyReport {
    fn from_errors(errors: Vec<String>) -> Self {
        ApplyReport {
            success: errors.is_empty(),
            errors,
        }
    }
}

/// Apply change operations in order against a live store
///
/// The store may come back partially mutated: every operation is
/// attempted regardless of earlier failures.
pub fn apply_changes(store: &mut GraphStore, changes: &[ChangeOp]) -> ApplyReport {
    let mut errors = Vec::new();

    for op in changes {
        let applied = match op {
            ChangeOp::NodeAdd { label } => store.add_node(label.as_str(), None).is_some(),
            ChangeOp::NodeRemove { label } => store.remove_node(label),
            ChangeOp::NodeLabelChange { old, new } => {
                store.update_node(old, new.as_str()).is_some()
            }
            ChangeOp::EdgeAdd { source, target, weight } => {
                // Endpoints introduced by an edge line are auto-created
                if !store.has_node(source) {
                    store.add_node(source.as_str(), None);
                }
                if !store.has_node(target) {
                    store.add_node(target.as_str(), None);
                }
                store.add_edge(source, target, weight.clone()).is_some()
            }
            ChangeOp::EdgeRemove { source, target, .. } => store.remove_edge(source, target),
            ChangeOp::EdgeWeightChange { source, target, new, .. } => {
                store.update_edge_weight(source, target, new.clone())
            }
        };

        if !applied {
            let reason = store
                .last_error()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown failure".to_string());
            debug!(op = %op, reason = %reason, "change operation failed");
            errors.push(format!("{op}: {reason}"));
        }
    }

    ApplyReport::from_errors(errors)
}

/// Convenience loop: serialize the store's current state as the
/// previous text, compute the changes against the new text, and apply
/// them. Returns the (possibly partial) apply report.
pub fn reconcile(store: &mut GraphStore, new_text: &str) -> ApplyReport {
    let snapshot = store.data();
    let previous_text = super::text::serialize(&snapshot);
    let changes = super::ops::compute_changes(new_text, &previous_text, &snapshot);
    apply_changes(store, &changes)
}
