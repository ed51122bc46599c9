//! Paragraph wrapping
//!
//! Every maximal run of non-blank lines becomes one `<p>` block with each line
//! trimmed. Blank lines separate runs and are dropped.
//!
//! Lines are not classified beyond blank/non-blank: list tags from the
//! grouping stages and unconverted headings are paragraph content like any
//! other text.

use super::RunGrouper;
use crate::document::Document;

pub const PARAGRAPH_OPEN: &str = "<p>";
pub const PARAGRAPH_CLOSE: &str = "</p>";

pub fn wrap_paragraphs(doc: &Document) -> Document {
    let mut grouper = RunGrouper::new(PARAGRAPH_OPEN, PARAGRAPH_CLOSE);
    for line in doc {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            grouper.boundary();
        } else {
            grouper.member(trimmed.to_string());
        }
    }
    grouper.finish()
}
