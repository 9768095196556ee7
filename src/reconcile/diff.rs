//! Line-level diff between two text buffers
//!
//! Builds an edit-distance table over the normalized line sequences and
//! backtracks it into an ordered list of line operations. Ties are
//! broken keep > modify > remove > add so the reported structural edit
//! count is minimal (a changed line is one `modify`, never a
//! `remove` + `add` pair).

use super::text::normalize_line;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A raw diff operation over one line (two for `Modify`)
///
/// Operations carry the original line text; normalization is applied
/// for comparison only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum LineOp {
    Keep { line: String },
    Add { line: String },
    Remove { line: String },
    Modify { old: String, new: String },
}

/// Diff the previous text against the new text, line by line
pub fn diff_lines(previous: &str, new: &str) -> Vec<LineOp> {
    let old_lines: Vec<&str> = previous.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();
    let old_norm: Vec<String> = old_lines.iter().map(|l| normalize_line(l)).collect();
    let new_norm: Vec<String> = new_lines.iter().map(|l| normalize_line(l)).collect();

    let m = old_lines.len();
    let n = new_lines.len();

    // dp[i][j]: edit distance between the first i old lines and the
    // first j new lines
    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        dp[0][j] = j;
    }
    for i in 1..=m {
        for j in 1..=n {
            if old_norm[i - 1] == new_norm[j - 1] {
                dp[i][j] = dp[i - 1][j - 1];
            } else {
                let substitute = dp[i - 1][j - 1];
                let delete = dp[i - 1][j];
                let insert = dp[i][j - 1];
                dp[i][j] = 1 + substitute.min(delete).min(insert);
            }
        }
    }

    // Backtrack, preferring keep > modify > remove > add at ties
    let mut ops = Vec::with_capacity(m.max(n));
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old_norm[i - 1] == new_norm[j - 1] && dp[i][j] == dp[i - 1][j - 1] {
            ops.push(LineOp::Keep {
                line: new_lines[j - 1].to_string(),
            });
            i -= 1;
            j -= 1;
        } else if i > 0 && j > 0 && dp[i][j] == dp[i - 1][j - 1] + 1 {
            ops.push(LineOp::Modify {
                old: old_lines[i - 1].to_string(),
                new: new_lines[j - 1].to_string(),
            });
            i -= 1;
            j -= 1;
        } else if i > 0 && dp[i][j] == dp[i - 1][j] + 1 {
            ops.push(LineOp::Remove {
                line: old_lines[i - 1].to_string(),
            });
            i -= 1;
        } else {
            ops.push(LineOp::Add {
                line: new_lines[j - 1].to_string(),
            });
            j -= 1;
        }
    }
    ops.reverse();

    trace!(
        old_lines = m,
        new_lines = n,
        distance = dp[m][n],
        ops = ops.len(),
        "line diff computed"
    );
    ops
}
