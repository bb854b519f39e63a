//! Applying an edit proposal to a base text.
//!
//! A pure text transformation: the caller decides whether to persist the
//! result as a new generation.

use story_core::{split_paragraphs, EditProposal, ParagraphEdit, PARAGRAPH_SEPARATOR};

use crate::error::{Result, RevisionError};

/// Apply `proposal` to `base_text`, returning the resulting text.
///
/// `Full` proposals replace the text verbatim. `Patch` proposals are
/// validated as a single atomic batch against a fresh paragraph index of
/// `base_text`: an edit whose index is out of range fails with `StaleIndex`,
/// and an edit whose recorded `old_text` no longer matches the current
/// paragraph fails with `PatchConflict` naming the first conflicting index.
/// If any edit fails, none are applied.
pub fn apply_proposal(proposal: &EditProposal, base_text: &str) -> Result<String> {
    match proposal {
        EditProposal::Full { text } => Ok(text.clone()),
        EditProposal::Patch { edits } => apply_patch(edits, base_text),
    }
}

fn apply_patch(edits: &[ParagraphEdit], base_text: &str) -> Result<String> {
    let paragraphs = split_paragraphs(base_text);

    // Validate the whole batch before touching anything.
    for edit in edits {
        let current = paragraphs.get(edit.paragraph_index).ok_or_else(|| {
            tracing::warn!(
                index = edit.paragraph_index,
                paragraph_count = paragraphs.len(),
                "apply: patch index out of range"
            );
            RevisionError::StaleIndex {
                index: edit.paragraph_index,
                paragraph_count: paragraphs.len(),
            }
        })?;

        if current.text != edit.old_text {
            tracing::warn!(
                index = edit.paragraph_index,
                "apply: paragraph changed since the patch was computed"
            );
            return Err(RevisionError::PatchConflict {
                index: edit.paragraph_index,
            });
        }
    }

    let mut texts: Vec<String> = paragraphs.into_iter().map(|p| p.text).collect();
    for edit in edits {
        texts[edit.paragraph_index] = edit.new_text.clone();
    }

    tracing::debug!(edits = edits.len(), "apply: patch applied");
    Ok(texts.join(PARAGRAPH_SEPARATOR))
}
