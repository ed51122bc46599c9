use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest heading level HTML knows about.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Markers and limits used by the conversion stages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRules {
    /// Line prefix that starts an unordered (`<ul>`) list item
    pub unordered_marker: String,

    /// Line prefix that starts an ordered (`<ol>`) list item
    pub ordered_marker: String,

    /// Character repeated at line start to form a heading
    pub heading_marker: char,

    /// Longest heading marker run recognized (1..=6)
    pub max_heading_level: usize,

    /// Character removed, in both cases, by the `((...))` directive
    pub strip_char: char,
}

impl Default for ConversionRules {
    fn default() -> Self {
        Self {
            unordered_marker: "- ".to_string(),
            ordered_marker: "* ".to_string(),
            heading_marker: '#',
            max_heading_level: MAX_HEADING_LEVEL,
            strip_char: 'c',
        }
    }
}

/// Rejected rule combinations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("{0} list marker must not be blank")]
    BlankListMarker(&'static str),
    #[error("unordered and ordered list markers are both '{0}'")]
    SameListMarkers(String),
    #[error("heading level {0} is outside 1..=6")]
    HeadingLevel(usize),
    #[error("heading marker must not be whitespace")]
    BlankHeadingMarker,
}

impl ConversionRules {
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.unordered_marker.trim().is_empty() {
            return Err(RulesError::BlankListMarker("unordered"));
        }
        if self.ordered_marker.trim().is_empty() {
            return Err(RulesError::BlankListMarker("ordered"));
        }
        if self.unordered_marker == self.ordered_marker {
            return Err(RulesError::SameListMarkers(self.ordered_marker.clone()));
        }
        if !(1..=MAX_HEADING_LEVEL).contains(&self.max_heading_level) {
            return Err(RulesError::HeadingLevel(self.max_heading_level));
        }
        if self.heading_marker.is_whitespace() {
            return Err(RulesError::BlankHeadingMarker);
        }
        Ok(())
    }
}
