//! EditProposal - structured revision proposals
//!
//! The generation collaborator answers a revision request with either a full
//! replacement text or a batch of paragraph-level edits. The shape is a
//! tagged variant so a mismatched payload is a deserialization error at the
//! boundary, not a silently mis-read response.

use serde::{Deserialize, Serialize};

/// One localized edit against a specific paragraph of the base text.
///
/// `old_text` records the paragraph as it read when the edit was computed;
/// application re-checks it against the current text before changing anything.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParagraphEdit {
    pub paragraph_index: usize,
    pub old_text: String,
    pub new_text: String,
}

/// The collaborator's response to a revision request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EditProposal {
    /// A complete replacement for the accepted text
    Full { text: String },

    /// Localized edits tied to paragraph indices of the accepted text
    Patch { edits: Vec<ParagraphEdit> },
}

impl EditProposal {
    /// Create a full-replacement proposal
    pub fn full(text: impl Into<String>) -> Self {
        Self::Full { text: text.into() }
    }

    /// Create a patch proposal
    pub fn patch(edits: Vec<ParagraphEdit>) -> Self {
        Self::Patch { edits }
    }

    /// Tag name of this proposal, for logging
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Full { .. } => "full",
            Self::Patch { .. } => "patch",
        }
    }
}
