//! Block grouping: lists and paragraphs.
//!
//! # The High-Level Concept
//!
//! Both block stages walk the document once and wrap every maximal run of
//! matching lines in an opening and closing tag. There is no nesting, so the
//! only state a pass needs is whether a container is currently open.
//!
//! # The Algorithm
//!
//! 1. **Initialization:**
//!    - Start [`Container::Outside`] with an empty output document
//!
//! 2. **Member Lines:**
//!    - If outside, emit the opening tag and move inside
//!    - Emit the (rewritten) line
//!
//! 3. **Other Lines:**
//!    - If inside, emit the closing tag and move outside
//!    - Lists keep the line, paragraphs drop it
//!
//! 4. **Completion:**
//!    - If still inside, emit the closing tag
//!
//! Step 4 guarantees no container is left open in the output.

pub mod lists;
pub mod paragraphs;

pub use lists::{group_list, ListKind};
pub use paragraphs::wrap_paragraphs;

use crate::document::Document;

/// Open/close state of the container a grouping pass is building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Container {
    #[default]
    Outside,
    Inside,
}

/// Emits container tags around runs of member lines.
///
/// Drives the [`Container`] state machine for a single pass.
#[derive(Debug)]
pub(crate) struct RunGrouper<'a> {
    open: &'a str,
    close: &'a str,
    state: Container,
    out: Document,
}

impl<'a> RunGrouper<'a> {
    pub(crate) fn new(open: &'a str, close: &'a str) -> Self {
        Self {
            open,
            close,
            state: Container::Outside,
            out: Document::new(),
        }
    }

    /// Emit a line that belongs to the current run, opening it if needed.
    pub(crate) fn member(&mut self, line: String) {
        if self.state == Container::Outside {
            self.out.push(self.open);
            self.state = Container::Inside;
        }
        self.out.push(line);
    }

    /// End the current run, if any.
    pub(crate) fn boundary(&mut self) {
        if self.state == Container::Inside {
            self.out.push(self.close);
            self.state = Container::Outside;
        }
    }

    /// End the current run and emit `line` outside of it.
    pub(crate) fn passthrough(&mut self, line: String) {
        self.boundary();
        self.out.push(line);
    }

    pub(crate) fn finish(mut self) -> Document {
        self.boundary();
        self.out
    }
}
