//! The external text-generation collaborator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use story_core::SelectionSnapshot;

use crate::structs::generation::Generation;

/// One prior turn of the lineage, carried for context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub generation_id: Uuid,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_feedback: Option<String>,
}

impl From<&Generation> for HistoryEntry {
    fn from(generation: &Generation) -> Self {
        Self {
            generation_id: generation.id,
            prompt: generation.prompt.clone(),
            iteration_feedback: generation.iteration_feedback.clone(),
        }
    }
}

/// The assembled bundle handed to the generation collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub accepted_text: String,
    /// Pinned paragraphs and highlights, sorted ascending by index.
    pub selection: SelectionSnapshot,
    pub user_request: String,
    /// Root-to-leaf context of the branch being revised, oldest first.
    pub prior_history: Vec<HistoryEntry>,
}

impl GenerationRequest {
    /// Deterministic plain-text rendering of the bundle.
    ///
    /// Recorded as `Generation::prompt` when an accepted proposal is
    /// materialized into a node, so the lineage keeps the exact request each
    /// text was produced from.
    pub fn render_prompt(&self) -> String {
        let mut sections = Vec::new();

        if !self.accepted_text.trim().is_empty() {
            sections.push(format!("Current text:\n{}", self.accepted_text));
        }

        if !self.selection.paragraphs.is_empty() {
            let pinned = self
                .selection
                .paragraphs
                .iter()
                .map(|p| format!("[{}] {}", p.index, p.text))
                .collect::<Vec<_>>()
                .join("\n");
            sections.push(format!("Focus on these paragraphs:\n{pinned}"));
        }

        if !self.selection.highlights.is_empty() {
            let highlighted = self
                .selection
                .highlights
                .iter()
                .map(|h| format!("\"{h}\""))
                .collect::<Vec<_>>()
                .join("\n");
            sections.push(format!("Highlighted passages:\n{highlighted}"));
        }

        let feedback_lines: Vec<String> = self
            .prior_history
            .iter()
            .filter_map(|entry| entry.iteration_feedback.as_deref())
            .map(|feedback| format!("- {feedback}"))
            .collect();
        if !feedback_lines.is_empty() {
            sections.push(format!(
                "Feedback from earlier revisions:\n{}",
                feedback_lines.join("\n")
            ));
        }

        if !self.user_request.trim().is_empty() {
            sections.push(format!("Request:\n{}", self.user_request));
        }

        sections.join("\n\n")
    }
}

/// Errors a generation collaborator may surface.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The collaborator could not be reached
    #[error("generator unreachable: {0}")]
    Unreachable(String),

    /// The collaborator was reached but failed to produce a response
    #[error("generator backend error: {0}")]
    Backend(String),
}

/// External text-generation collaborator.
///
/// Implementations consume the full request bundle and return a raw JSON
/// payload; the orchestrator validates it into an `EditProposal`, so a
/// collaborator that violates the shape contract is caught at the boundary.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest)
        -> std::result::Result<Value, GeneratorError>;
}
