//! List grouping
//!
//! Wraps every maximal run of lines starting with a bullet marker in a list
//! container. Each line in the run becomes `<li>` with the marker stripped and
//! the rest trimmed. Lines that don't start with the marker pass through.
//!
//! The pipeline runs this twice, unordered first. A line rewritten to `<li>..`
//! by the first pass no longer carries a marker, so the second pass leaves it
//! alone.

use super::RunGrouper;
use crate::document::Document;
use log::trace;

/// Which list container a grouping pass emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

/// Group runs of `marker`-prefixed lines into a `kind` list.
pub fn group_list(doc: &Document, kind: ListKind, marker: &str) -> Document {
    let mut grouper = RunGrouper::new(kind.open_tag(), kind.close_tag());
    for line in doc {
        match line.strip_prefix(marker) {
            Some(rest) => {
                trace!("{kind:?} item: {rest:?}");
                grouper.member(format!("<li>{}</li>", rest.trim()));
            }
            None => grouper.passthrough(line.clone()),
        }
    }
    grouper.finish()
}
