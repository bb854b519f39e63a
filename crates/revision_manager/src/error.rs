//! Error types for lineage mutation, proposal application and orchestration.
//!
//! Paragraph indexing and diffing are total and never fail; failure is
//! concentrated here, with enough context (conflicting index, missing id)
//! for the caller to decide between retry and abort.

use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the revision engine.
#[derive(Debug, Error)]
pub enum RevisionError {
    /// Required input was missing or malformed; user-correctable
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced generation does not exist
    #[error("generation {0} not found")]
    NotFound(Uuid),

    /// A patch edit addressed a paragraph index that no longer exists
    #[error("paragraph index {index} is out of range for the current text ({paragraph_count} paragraphs)")]
    StaleIndex {
        index: usize,
        paragraph_count: usize,
    },

    /// A patch edit's recorded text no longer matches the current paragraph
    #[error("paragraph {index} has changed since the patch was computed")]
    PatchConflict { index: usize },

    /// The collaborator's response matched neither proposal shape
    #[error("malformed proposal: {0}")]
    MalformedProposal(String),

    /// A revision request carried neither a user request nor a selection
    #[error("revision request is empty: provide a request or select paragraphs")]
    EmptyRequest,

    /// The generation collaborator failed or was unreachable
    #[error("generation collaborator unavailable: {0}")]
    GenerationUnavailable(String),

    /// The pending revision request was cancelled by the caller
    #[error("revision request cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, RevisionError>;
