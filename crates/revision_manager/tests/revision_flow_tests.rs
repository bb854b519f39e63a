//! End-to-end revision loop: select, request, review, apply, accept

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use revision_manager::{
    apply_proposal, DiffEngine, DiffKind, GenerationParams, GenerationRequest, GeneratorError,
    RevisionLineage, RevisionOrchestrator, RevisionRequest, TextGenerator,
};
use story_core::{split_paragraphs, ContextSelectionSession};

/// Proposes a patch that rewrites whichever paragraph was pinned first.
struct RewritePinnedParagraph;

#[async_trait]
impl TextGenerator for RewritePinnedParagraph {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> std::result::Result<Value, GeneratorError> {
        let pinned = request
            .selection
            .paragraphs
            .first()
            .ok_or_else(|| GeneratorError::Backend("nothing selected".to_string()))?;

        Ok(json!({
            "mode": "patch",
            "edits": [{
                "paragraph_index": pinned.index,
                "old_text": pinned.text,
                "new_text": format!("{} And the tide kept rising.", pinned.text),
            }]
        }))
    }
}

#[tokio::test]
async fn test_full_revision_loop() {
    let mut lineage = RevisionLineage::new();
    let root = lineage
        .create_root(
            GenerationParams::new("A harbor town holds its breath before the flood.")
                .with_prompt("write the opening scene")
                .with_generated_text("The pier creaked at dawn.\n\nNobody watched the water."),
        )
        .unwrap();
    lineage.accept(root).unwrap();

    let accepted_text = lineage.get(root).unwrap().generated_text.clone();

    // Pin the second paragraph for the follow-up request.
    let mut session = ContextSelectionSession::new();
    session.bind(root);
    let paragraphs = split_paragraphs(&accepted_text);
    session.add(&paragraphs[1]);

    let orchestrator = RevisionOrchestrator::new(Arc::new(RewritePinnedParagraph));
    let bundle_selection = session.snapshot();
    let proposal = orchestrator
        .request_revision(
            &lineage,
            RevisionRequest {
                accepted_text: accepted_text.clone(),
                selection: bundle_selection,
                user_request: "raise the stakes in this paragraph".to_string(),
                generation_id: Some(root),
            },
        )
        .await
        .unwrap();

    // Selection is cleared on submit.
    session.clear();
    assert!(session.is_empty());

    // Review: the diff touches only the pinned paragraph.
    let revised = apply_proposal(&proposal, &accepted_text).unwrap();
    assert_eq!(
        revised,
        "The pier creaked at dawn.\n\nNobody watched the water. And the tide kept rising."
    );
    let segments = DiffEngine::diff(&accepted_text, &revised);
    assert!(segments.iter().any(|s| s.kind == DiffKind::Unchanged));
    assert!(segments.iter().any(|s| s.kind == DiffKind::Added));

    // Commit: the accepted proposal becomes a new generation.
    let child = lineage
        .create_child(
            root,
            GenerationParams::new("A harbor town holds its breath before the flood.")
                .with_prompt("raise the stakes in this paragraph")
                .with_generated_text(revised.clone())
                .with_iteration_feedback("raise the stakes in this paragraph"),
        )
        .unwrap();
    lineage.accept(child).unwrap();

    // Exactly one accepted node on the branch, and it is the child.
    let accepted: Vec<_> = lineage
        .branch_of(root)
        .unwrap()
        .into_iter()
        .filter(|n| n.is_accepted())
        .collect();
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].id, child);
    assert_eq!(accepted[0].generated_text, revised);

    // A patch computed against the old text now conflicts instead of applying.
    let stale = apply_proposal(&proposal, &revised);
    assert!(stale.is_err());
}
