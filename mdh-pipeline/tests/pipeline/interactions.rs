//! Stage ordering effects that the pipeline reproduces on purpose.
//!
//! The paragraph wrapper treats every non-blank line as text, including the
//! list tags emitted before it and heading lines converted after it.

use mdh_pipeline::blocks::{group_list, wrap_paragraphs, ListKind};
use mdh_pipeline::{convert, Document};

#[test]
fn test_list_is_wrapped_in_paragraph() {
    let html = convert("- a\n");
    assert_eq!(html, "<p>\n<ul>\n<li>a</li>\n</ul>\n</p>\n");
}

#[test]
fn test_heading_is_wrapped_in_paragraph() {
    let html = convert("### Deep\n");
    assert_eq!(html, "<p>\n<h3>Deep</h3>\n</p>\n");
}

#[test]
fn test_list_directly_after_text_shares_its_paragraph() {
    let html = convert("intro\n- a\n- b\noutro\n");
    assert_eq!(
        html,
        "<p>\nintro\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>\noutro\n</p>\n"
    );
}

#[test]
fn test_star_bullet_is_an_ordered_list_not_emphasis() {
    let html = convert("* not emphasis*\n");
    assert_eq!(html, "<p>\n<ol>\n<li>not emphasis*</li>\n</ol>\n</p>\n");
}

#[test]
fn test_adjacent_lists_of_both_kinds() {
    let html = convert("- u\n* o\n");
    assert_eq!(
        html,
        "<p>\n<ul>\n<li>u</li>\n</ul>\n<ol>\n<li>o</li>\n</ol>\n</p>\n"
    );
}

#[test]
fn test_indented_bullet_becomes_paragraph_text() {
    // Grouping runs before trimming, so the indented marker is never seen.
    let html = convert("  - nested\n");
    assert_eq!(html, "<p>\n- nested\n</p>\n");
}

#[test]
fn test_paragraphs_before_lists_changes_output() {
    let doc = Document::from_source("  - x\n");
    let documented = wrap_paragraphs(&group_list(&doc, ListKind::Unordered, "- "));
    let reversed = group_list(&wrap_paragraphs(&doc), ListKind::Unordered, "- ");
    assert_eq!(documented.lines(), &["<p>", "- x", "</p>"]);
    assert_eq!(reversed.lines(), &["<p>", "<ul>", "<li>x</li>", "</ul>", "</p>"]);
}
