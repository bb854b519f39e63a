//! Composes selection, accepted text and lineage history into a generation
//! request, and validates the collaborator's response.
//!
//! The orchestrator never mutates the lineage: reviewing a proposal's diff
//! and committing an accepted proposal as a new generation are separate,
//! explicit caller actions.

use std::sync::Arc;

use serde_json::Value;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use story_core::{EditProposal, SelectionSnapshot};

use crate::error::{Result, RevisionError};
use crate::structs::lineage::RevisionLineage;
use crate::traits::{GenerationRequest, HistoryEntry, TextGenerator};

/// Tuning knobs for request assembly.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Most recent lineage turns carried in the request bundle. The context
    /// window is finite; older turns are dropped first.
    pub max_history: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self { max_history: 20 }
    }
}

/// A revision request as issued by the user interface.
#[derive(Debug, Clone)]
pub struct RevisionRequest {
    pub accepted_text: String,
    pub selection: SelectionSnapshot,
    pub user_request: String,
    /// The generation the selection indices refer to, if any.
    pub generation_id: Option<Uuid>,
}

/// Builds generation requests and validates proposals.
pub struct RevisionOrchestrator {
    generator: Arc<dyn TextGenerator>,
    config: OrchestratorConfig,
}

impl RevisionOrchestrator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self::with_config(generator, OrchestratorConfig::default())
    }

    pub fn with_config(generator: Arc<dyn TextGenerator>, config: OrchestratorConfig) -> Self {
        Self { generator, config }
    }

    /// Request a revision of the current accepted text.
    ///
    /// Fails with `EmptyRequest` before any collaborator call if neither a
    /// user request nor a selection is present. Concurrent calls are
    /// independent; a proposal arriving after the text moved on is caught by
    /// the apply-time staleness checks, not by sequencing here.
    pub async fn request_revision(
        &self,
        lineage: &RevisionLineage,
        request: RevisionRequest,
    ) -> Result<EditProposal> {
        self.request_revision_with_cancel(lineage, request, &CancellationToken::new())
            .await
    }

    /// Cancellable variant of [`request_revision`](Self::request_revision).
    ///
    /// Cancelling abandons the pending collaborator call; no selection or
    /// lineage state is touched by an abandoned request.
    pub async fn request_revision_with_cancel(
        &self,
        lineage: &RevisionLineage,
        request: RevisionRequest,
        cancel: &CancellationToken,
    ) -> Result<EditProposal> {
        let RevisionRequest {
            accepted_text,
            mut selection,
            user_request,
            generation_id,
        } = request;

        if user_request.trim().is_empty() && selection.is_empty() {
            return Err(RevisionError::EmptyRequest);
        }

        // The session keeps entries sorted, but the bundle contract holds for
        // snapshots from any source.
        selection.paragraphs.sort_by_key(|p| p.index);

        let prior_history = match generation_id {
            Some(id) => {
                let path = lineage.history(id)?;
                let skip = path.len().saturating_sub(self.config.max_history);
                path.into_iter().skip(skip).map(HistoryEntry::from).collect()
            }
            None => Vec::new(),
        };

        let bundle = GenerationRequest {
            accepted_text,
            selection,
            user_request,
            prior_history,
        };

        tracing::info!(
            generation_id = ?generation_id,
            selected_paragraphs = bundle.selection.paragraphs.len(),
            highlights = bundle.selection.highlights.len(),
            history_turns = bundle.prior_history.len(),
            "orchestrator: dispatching revision request"
        );

        let payload = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!(generation_id = ?generation_id, "orchestrator: revision request cancelled");
                return Err(RevisionError::Cancelled);
            }
            result = self.generator.generate(&bundle) => {
                result.map_err(|err| RevisionError::GenerationUnavailable(err.to_string()))?
            }
        };

        let proposal = validate_proposal(payload)?;
        tracing::debug!(mode = proposal.mode(), "orchestrator: proposal validated");
        Ok(proposal)
    }
}

/// Validate a raw collaborator payload into a typed proposal.
///
/// Fails with `MalformedProposal` if the payload is neither a `full` nor a
/// well-formed `patch` shape.
pub fn validate_proposal(payload: Value) -> Result<EditProposal> {
    let proposal: EditProposal = serde_json::from_value(payload)
        .map_err(|err| RevisionError::MalformedProposal(err.to_string()))?;

    match &proposal {
        EditProposal::Full { text } if text.trim().is_empty() => Err(
            RevisionError::MalformedProposal("full proposal carries no text".to_string()),
        ),
        EditProposal::Patch { edits } if edits.is_empty() => Err(
            RevisionError::MalformedProposal("patch proposal carries no edits".to_string()),
        ),
        _ => Ok(proposal),
    }
}
