//! `revision_manager` is a crate for managing the revision lineage of
//! AI-drafted narrative text: a tree of generations with branch-exclusive
//! acceptance, the diff review surface between a proposal and the accepted
//! text, and the orchestration of revision requests against an external
//! generation collaborator.

// Declare the modules
pub mod apply;
pub mod diff;
pub mod error;
pub mod orchestrator;
pub mod structs;
pub mod traits;

// Re-export the public API
pub use apply::apply_proposal;
pub use diff::{DiffEngine, DiffKind, DiffSegment};
pub use error::{Result, RevisionError};
pub use orchestrator::{validate_proposal, OrchestratorConfig, RevisionOrchestrator, RevisionRequest};
pub use structs::generation::{Generation, GenerationParams, GenerationSummary};
pub use structs::lineage::RevisionLineage;
pub use structs::state::ReviewStatus;
pub use traits::{GenerationRequest, GeneratorError, HistoryEntry, TextGenerator};
