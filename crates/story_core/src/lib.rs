//! story_core - Core types for the story revision system
//!
//! This crate provides the foundational types used across the revision crates:
//! - `paragraph` - paragraph splitting and per-snapshot addressing
//! - `selection` - session-scoped selection of paragraphs pinned as context
//! - `proposal` - edit proposals returned by the generation collaborator
//! - `placement` - references into the surrounding structured work

pub mod paragraph;
pub mod placement;
pub mod proposal;
pub mod selection;

// Re-export commonly used types
pub use paragraph::{join_paragraphs, split_paragraphs, Paragraph, PARAGRAPH_SEPARATOR};
pub use placement::StoryPlacement;
pub use proposal::{EditProposal, ParagraphEdit};
pub use selection::{ContextSelectionSession, SelectedParagraph, SelectionSnapshot};
