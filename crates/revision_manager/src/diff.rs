//! Line-level diff between two text versions, rendered for review.

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

/// Classification of one segment of the edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    Unchanged,
    Added,
    Removed,
}

/// One contiguous run of the edit script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    pub kind: DiffKind,
    pub content: String,
}

/// Computes reviewable edit scripts between two versions of a text.
pub struct DiffEngine;

impl DiffEngine {
    /// Compute the line-level edit script from `before` to `after`.
    ///
    /// The script covers both texts with no gaps: concatenating the
    /// `Unchanged` and `Removed` segments reconstructs `before` exactly, and
    /// the `Unchanged` and `Added` segments reconstruct `after` exactly.
    /// The same input pair always yields the same script.
    pub fn diff(before: &str, after: &str) -> Vec<DiffSegment> {
        let text_diff = TextDiff::from_lines(before, after);
        let mut segments: Vec<DiffSegment> = Vec::new();

        for change in text_diff.iter_all_changes() {
            let kind = match change.tag() {
                ChangeTag::Equal => DiffKind::Unchanged,
                ChangeTag::Insert => DiffKind::Added,
                ChangeTag::Delete => DiffKind::Removed,
            };
            match segments.last_mut() {
                Some(last) if last.kind == kind => last.content.push_str(change.value()),
                _ => segments.push(DiffSegment {
                    kind,
                    content: change.value().to_string(),
                }),
            }
        }

        segments
    }

    /// Render the edit script with review signs, one prefixed line per change.
    pub fn render(before: &str, after: &str) -> String {
        let text_diff = TextDiff::from_lines(before, after);
        let mut output = Vec::new();

        for change in text_diff.iter_all_changes() {
            let sign = match change.tag() {
                ChangeTag::Delete => "-",
                ChangeTag::Insert => "+",
                ChangeTag::Equal => " ",
            };
            output.push(format!("{}{}", sign, change.value()));
        }

        output.join("")
    }
}
