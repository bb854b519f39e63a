//! Paragraph - splitting a document into addressable units
//!
//! A paragraph index is only meaningful against the exact text snapshot it
//! was computed from. Consumers re-index per snapshot instead of carrying
//! indices across revisions.

use serde::{Deserialize, Serialize};

/// Canonical separator used when paragraphs are joined back into a document.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// A zero-based, order-preserving unit of a document's text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paragraph {
    pub index: usize,
    pub text: String,
}

/// Split `text` into trimmed, non-empty paragraphs on blank-line boundaries.
///
/// One or more consecutive blank lines end a paragraph. Each paragraph is
/// trimmed of leading/trailing whitespace; empty paragraphs are dropped and
/// indices are assigned in document order starting at 0.
///
/// Total over any input (the empty string yields an empty sequence) and
/// idempotent: re-splitting the same text yields the same sequence.
pub fn split_paragraphs(text: &str) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            flush(&mut current, &mut paragraphs);
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    flush(&mut current, &mut paragraphs);

    paragraphs
}

fn flush(current: &mut String, paragraphs: &mut Vec<Paragraph>) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        paragraphs.push(Paragraph {
            index: paragraphs.len(),
            text: trimmed.to_string(),
        });
    }
    current.clear();
}

/// Join paragraph texts with the canonical separator.
pub fn join_paragraphs(paragraphs: &[Paragraph]) -> String {
    paragraphs
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}
