//! Line-based conversion of a small Markdown subset into HTML
//!
//!     This crate turns a Markdown document into HTML one line at a time. There is no document
//!     tree: a [`Document`] is an ordered list of lines, and every stage takes one in and hands
//!     a new one out. That keeps each stage a pure function, testable on its own.
//!
//!     This is a pure lib, that is, it powers the markdown2html binary but is shell agnostic: no
//!     code here reads files, env vars or prints to std streams. Progress is reported through the
//!     `log` facade only.
//!
//!     The file structure :
//!     .
//!     ├── document.rs             # Document: the ordered line sequence
//!     ├── rules.rs                # ConversionRules: markers and levels
//!     ├── pipeline.rs             # Pipeline: runs the stages in order
//!     ├── blocks
//!     │   ├── mod.rs              # Container state + run grouping
//!     │   ├── lists.rs            # <ul>/<ol> grouping
//!     │   └── paragraphs.rs       # <p> wrapping
//!     ├── headings.rs             # # .. ###### → <h1> .. <h6>
//!     └── inline
//!         ├── mod.rs              # Per-line inline conversion
//!         ├── emphasis.rs         # **bold** and __em__
//!         └── directives.rs       # [[md5]] and ((strip c))
//!
//! Stage Order
//!
//!     1. Unordered list grouping (`- `)
//!     2. Ordered list grouping (`* `), over the output of 1
//!     3. Paragraph wrapping, over the output of 2
//!     4. Heading conversion, per line
//!     5. Inline conversion, per line
//!
//!     Order matters. The paragraph wrapper does not know about list tags, so `<ul>`/`<li>` lines
//!     end up inside paragraphs, and so do headings, which are only converted afterwards.
//!
//! Testing
//!     tests
//!     └── pipeline
//!         ├── <stage>.rs
//!         └── end_to_end.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include
//!     these in the mod.

pub mod blocks;
pub mod document;
pub mod headings;
pub mod inline;
pub mod pipeline;
pub mod rules;

pub use document::Document;
pub use pipeline::Pipeline;
pub use rules::{ConversionRules, RulesError};

/// Converts Markdown source to HTML using the default rules.
///
/// Every output line is terminated by a single `\n`.
pub fn convert(source: &str) -> String {
    Pipeline::default().run_source(source).render()
}
