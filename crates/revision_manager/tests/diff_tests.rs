//! Tests for the diff engine's edit scripts

use revision_manager::{DiffEngine, DiffKind, DiffSegment};

fn reconstruct(segments: &[DiffSegment], keep: DiffKind) -> String {
    segments
        .iter()
        .filter(|s| s.kind == DiffKind::Unchanged || s.kind == keep)
        .map(|s| s.content.as_str())
        .collect()
}

fn assert_reconstructs(before: &str, after: &str) {
    let segments = DiffEngine::diff(before, after);
    assert_eq!(reconstruct(&segments, DiffKind::Removed), before);
    assert_eq!(reconstruct(&segments, DiffKind::Added), after);
}

#[test]
fn test_script_reconstructs_both_sides() {
    assert_reconstructs(
        "Para one.\n\nPara two.\n\nPara three.\n",
        "Para one.\n\nPara two revised.\n\nPara three.\n",
    );
}

#[test]
fn test_script_reconstructs_without_trailing_newline() {
    assert_reconstructs("line one\nline two", "line one\nline two changed");
}

#[test]
fn test_script_covers_empty_inputs() {
    assert_reconstructs("", "fresh text\n");
    assert_reconstructs("old text\n", "");
    assert_eq!(DiffEngine::diff("", ""), vec![]);
}

#[test]
fn test_script_covers_disjoint_texts() {
    assert_reconstructs("completely different\n", "nothing in common\n");
}

#[test]
fn test_identical_texts_yield_one_unchanged_segment() {
    let text = "same\nlines\nhere\n";
    let segments = DiffEngine::diff(text, text);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].kind, DiffKind::Unchanged);
    assert_eq!(segments[0].content, text);
}

#[test]
fn test_changed_line_yields_removed_then_added() {
    let segments = DiffEngine::diff("keep\nold line\nkeep too\n", "keep\nnew line\nkeep too\n");
    let kinds: Vec<_> = segments.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            DiffKind::Unchanged,
            DiffKind::Removed,
            DiffKind::Added,
            DiffKind::Unchanged,
        ]
    );
    assert_eq!(segments[1].content, "old line\n");
    assert_eq!(segments[2].content, "new line\n");
}

#[test]
fn test_adjacent_changes_coalesce_into_runs() {
    let segments = DiffEngine::diff("a\nb\nc\n", "a\nx\ny\nz\n");
    let removed: Vec<_> = segments
        .iter()
        .filter(|s| s.kind == DiffKind::Removed)
        .collect();
    let added: Vec<_> = segments
        .iter()
        .filter(|s| s.kind == DiffKind::Added)
        .collect();
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].content, "b\nc\n");
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].content, "x\ny\nz\n");
}

#[test]
fn test_diff_is_deterministic() {
    let before = "one\ntwo\nthree\nfour\n";
    let after = "one\ntwo changed\nthree\nfive\n";
    assert_eq!(DiffEngine::diff(before, after), DiffEngine::diff(before, after));
}

#[test]
fn test_render_prefixes_review_signs() {
    let rendered = DiffEngine::render("keep\nold\n", "keep\nnew\n");
    assert_eq!(rendered, " keep\n-old\n+new\n");
}
