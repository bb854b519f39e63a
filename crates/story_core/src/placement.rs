//! StoryPlacement - references into the surrounding structured work
//!
//! Stories, chapters and parts are owned elsewhere; the revision core only
//! carries their identifiers and never inspects them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placement of a generation within a larger work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoryPlacement {
    /// ID of the story this generation belongs to
    pub story_id: Uuid,

    /// Chapter within the story, if the story is decomposed that far
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_number: Option<u32>,

    /// Part within the chapter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_number: Option<u32>,
}

impl StoryPlacement {
    /// Create a placement referencing a story only
    pub fn new(story_id: Uuid) -> Self {
        Self {
            story_id,
            chapter_number: None,
            part_number: None,
        }
    }

    /// Narrow the placement to a chapter
    pub fn with_chapter(mut self, chapter_number: u32) -> Self {
        self.chapter_number = Some(chapter_number);
        self
    }

    /// Narrow the placement to a part within a chapter
    pub fn with_part(mut self, part_number: u32) -> Self {
        self.part_number = Some(part_number);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_builders() {
        let placement = StoryPlacement::new(Uuid::new_v4()).with_chapter(3).with_part(1);
        assert_eq!(placement.chapter_number, Some(3));
        assert_eq!(placement.part_number, Some(1));
    }
}
