//! Stage orchestration
//!
//! Runs the block stages over whole documents, then the line stages over each
//! resulting line. Each stage returns a new [`Document`].

use crate::blocks::{group_list, wrap_paragraphs, ListKind};
use crate::document::Document;
use crate::headings::convert_heading_with;
use crate::inline::convert_inline_with;
use crate::rules::{ConversionRules, RulesError};
use log::debug;

/// The five conversion stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    UnorderedLists,
    OrderedLists,
    Paragraphs,
    Headings,
    Inline,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::UnorderedLists,
        Stage::OrderedLists,
        Stage::Paragraphs,
        Stage::Headings,
        Stage::Inline,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::UnorderedLists => "unordered-lists",
            Stage::OrderedLists => "ordered-lists",
            Stage::Paragraphs => "paragraphs",
            Stage::Headings => "headings",
            Stage::Inline => "inline",
        }
    }
}

/// Markdown → HTML conversion with a fixed set of rules.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    rules: ConversionRules,
}

impl Pipeline {
    /// Build a pipeline, rejecting invalid rules.
    pub fn new(rules: ConversionRules) -> Result<Self, RulesError> {
        rules.validate()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &ConversionRules {
        &self.rules
    }

    pub fn run_source(&self, source: &str) -> Document {
        self.run(&Document::from_source(source))
    }

    pub fn run(&self, doc: &Document) -> Document {
        Stage::ALL
            .iter()
            .fold(doc.clone(), |current, &stage| {
                let next = self.run_stage(stage, &current);
                debug!(
                    "stage {}: {} lines in, {} lines out",
                    stage.name(),
                    current.len(),
                    next.len()
                );
                next
            })
    }

    /// Run a single stage.
    pub fn run_stage(&self, stage: Stage, doc: &Document) -> Document {
        let rules = &self.rules;
        match stage {
            Stage::UnorderedLists => group_list(doc, ListKind::Unordered, &rules.unordered_marker),
            Stage::OrderedLists => group_list(doc, ListKind::Ordered, &rules.ordered_marker),
            Stage::Paragraphs => wrap_paragraphs(doc),
            Stage::Headings => doc.map_lines(|line| {
                convert_heading_with(line, rules.heading_marker, rules.max_heading_level)
            }),
            Stage::Inline => doc.map_lines(|line| convert_inline_with(line, rules.strip_char)),
        }
    }
}
