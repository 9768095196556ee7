//! Text-to-graph reconciliation engine
//!
//! Translates an arbitrary line-level edit of the text buffer into the
//! minimal set of structural graph mutations and applies them against a
//! live store, tolerating partial failure. Entities untouched by the
//! edit are never recreated, so external references to them by label
//! stay valid.
//!
//! The pipeline: text edit -> line diff -> change operations -> store
//! mutation calls -> fresh snapshot for the rendering layer.

pub mod apply;
pub mod diff;
pub mod ops;
pub mod text;

// Re-export the engine surface
pub use apply::{apply_changes, reconcile, ApplyReport};
pub use diff::{diff_lines, LineOp};
pub use ops::{compute_changes, ChangeOp};
pub use text::{decode_edge_line, normalize_line, parse, serialize};
