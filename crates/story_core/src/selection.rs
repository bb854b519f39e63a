//! ContextSelectionSession - paragraphs pinned as context for the next request
//!
//! Selection state is scoped to one chat session and one generation snapshot.
//! Paragraph indices are not meaningful across snapshots, so binding the
//! session to a different generation invalidates the current selection.
//! Sessions are transient value objects and are never persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::paragraph::Paragraph;

/// A paragraph pinned for the next revision request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectedParagraph {
    pub index: usize,
    pub text: String,
}

/// Ordered view of the current selection, handed to the orchestrator.
///
/// `paragraphs` is always sorted ascending by index; downstream consumers
/// rely on that ordering to reconstruct a spatially coherent context window.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub paragraphs: Vec<SelectedParagraph>,
    pub highlights: Vec<String>,
}

impl SelectionSnapshot {
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.highlights.is_empty()
    }
}

/// Tracks which paragraphs and raw highlights are pinned for the next request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextSelectionSession {
    generation_id: Option<Uuid>,
    paragraphs: BTreeMap<usize, String>,
    highlights: Vec<String>,
}

impl ContextSelectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The generation the pinned indices refer to, if bound
    pub fn generation_id(&self) -> Option<Uuid> {
        self.generation_id
    }

    /// Bind the session to the generation its indices refer to.
    ///
    /// Rebinding to a different generation clears the selection, since the
    /// indices would address paragraphs of a text that no longer exists.
    pub fn bind(&mut self, generation_id: Uuid) {
        if self.generation_id != Some(generation_id) {
            self.clear();
            self.generation_id = Some(generation_id);
        }
    }

    /// Pin a paragraph. Pinning an index that is already present is a no-op.
    pub fn add(&mut self, paragraph: &Paragraph) {
        self.paragraphs
            .entry(paragraph.index)
            .or_insert_with(|| paragraph.text.clone());
    }

    /// Unpin the paragraph at `index`. Returns whether anything was removed.
    pub fn remove(&mut self, index: usize) -> bool {
        self.paragraphs.remove(&index).is_some()
    }

    /// Record a raw highlighted substring alongside the pinned paragraphs.
    pub fn add_highlight(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.trim().is_empty() {
            self.highlights.push(text);
        }
    }

    /// Drop all pinned paragraphs and highlights. Called on submit or reset.
    pub fn clear(&mut self) {
        self.paragraphs.clear();
        self.highlights.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.highlights.is_empty()
    }

    /// Entries sorted ascending by index, regardless of insertion order.
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            paragraphs: self
                .paragraphs
                .iter()
                .map(|(&index, text)| SelectedParagraph {
                    index,
                    text: text.clone(),
                })
                .collect(),
            highlights: self.highlights.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(index: usize, text: &str) -> Paragraph {
        Paragraph {
            index,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_snapshot_is_sorted_regardless_of_insertion_order() {
        let mut session = ContextSelectionSession::new();
        session.add(&paragraph(4, "fifth"));
        session.add(&paragraph(0, "first"));
        session.add(&paragraph(2, "third"));

        let snapshot = session.snapshot();
        let indices: Vec<_> = snapshot.paragraphs.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 2, 4]);
    }

    #[test]
    fn test_duplicate_add_is_a_no_op() {
        let mut session = ContextSelectionSession::new();
        session.add(&paragraph(1, "original"));
        session.add(&paragraph(1, "other text for the same index"));

        let snapshot = session.snapshot();
        assert_eq!(snapshot.paragraphs.len(), 1);
        assert_eq!(snapshot.paragraphs[0].text, "original");
    }

    #[test]
    fn test_remove_unpins_a_paragraph() {
        let mut session = ContextSelectionSession::new();
        session.add(&paragraph(0, "a"));
        session.add(&paragraph(1, "b"));

        assert!(session.remove(0));
        assert!(!session.remove(0));
        assert_eq!(session.snapshot().paragraphs.len(), 1);
    }

    #[test]
    fn test_rebinding_to_another_generation_clears_selection() {
        let mut session = ContextSelectionSession::new();
        let first = Uuid::new_v4();
        session.bind(first);
        session.add(&paragraph(0, "a"));
        session.add_highlight("a fragment");

        // Same generation: selection survives.
        session.bind(first);
        assert!(!session.is_empty());

        // Different generation: stale indices are dropped.
        session.bind(Uuid::new_v4());
        assert!(session.is_empty());
    }

    #[test]
    fn test_blank_highlights_are_ignored() {
        let mut session = ContextSelectionSession::new();
        session.add_highlight("   ");
        assert!(session.is_empty());
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut session = ContextSelectionSession::new();
        session.add(&paragraph(0, "a"));
        session.add_highlight("fragment");
        session.clear();
        assert!(session.is_empty());
        assert!(session.snapshot().is_empty());
    }
}
