use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use story_core::StoryPlacement;

use crate::structs::state::ReviewStatus;

/// A node in the lineage tree: one generated snapshot of the text.
///
/// Nodes are append-only. The parent link and the generated text never change
/// after creation; a revision always produces a new child node.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Generation {
    pub id: Uuid,

    /// The generation this one was derived from; `None` for a root.
    pub parent_id: Option<Uuid>,

    /// Where this generation sits within the surrounding work, if anywhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<StoryPlacement>,

    /// Seed content the generation was requested from.
    pub synopsis: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_note: Option<String>,

    /// Requested length in words.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_length: Option<u32>,

    /// The fully assembled request sent to the generation collaborator.
    pub prompt: String,

    /// The produced content for this node.
    pub generated_text: String,

    /// Why this child was requested; roots carry none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_feedback: Option<String>,

    #[serde(default)]
    pub status: ReviewStatus,

    pub created_at: DateTime<Utc>,
}

impl Generation {
    pub(crate) fn new(parent_id: Option<Uuid>, params: GenerationParams) -> Self {
        Self {
            id: Uuid::new_v4(),
            parent_id,
            placement: params.placement,
            synopsis: params.synopsis,
            style_note: params.style_note,
            requested_length: params.requested_length,
            prompt: params.prompt,
            generated_text: params.generated_text,
            iteration_feedback: params.iteration_feedback,
            status: ReviewStatus::Proposed,
            created_at: Utc::now(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn is_accepted(&self) -> bool {
        self.status.is_accepted()
    }

    pub fn word_count(&self) -> usize {
        self.generated_text.split_whitespace().count()
    }

    /// Compact view for history listings.
    pub fn summary(&self) -> GenerationSummary {
        GenerationSummary {
            id: self.id,
            parent_id: self.parent_id,
            status: self.status,
            word_count: self.word_count(),
            iteration_feedback: self.iteration_feedback.clone(),
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a generation node. Immutable once the node exists.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    pub placement: Option<StoryPlacement>,
    pub synopsis: String,
    pub style_note: Option<String>,
    pub requested_length: Option<u32>,
    pub prompt: String,
    pub generated_text: String,
    pub iteration_feedback: Option<String>,
}

impl GenerationParams {
    /// Start from the seed synopsis
    pub fn new(synopsis: impl Into<String>) -> Self {
        Self {
            synopsis: synopsis.into(),
            ..Default::default()
        }
    }

    pub fn with_placement(mut self, placement: StoryPlacement) -> Self {
        self.placement = Some(placement);
        self
    }

    pub fn with_style_note(mut self, style_note: impl Into<String>) -> Self {
        self.style_note = Some(style_note.into());
        self
    }

    pub fn with_requested_length(mut self, words: u32) -> Self {
        self.requested_length = Some(words);
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_generated_text(mut self, text: impl Into<String>) -> Self {
        self.generated_text = text.into();
        self
    }

    pub fn with_iteration_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.iteration_feedback = Some(feedback.into());
        self
    }
}

/// Compact, display-oriented view of a generation.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GenerationSummary {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub status: ReviewStatus,
    pub word_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}
