//! Heading conversion
//!
//! A line opening with N heading markers and a space becomes `<hN>`. Runs are
//! tried longest first, so `### Title` is level 3 rather than level 1 with a
//! literal `##` in its text.

use crate::rules::MAX_HEADING_LEVEL;

/// Convert `line` with the default `#` marker and levels 1 to 6.
pub fn convert_heading(line: &str) -> String {
    convert_heading_with(line, '#', MAX_HEADING_LEVEL)
}

/// Convert `line` using `marker`, recognizing levels `1..=max_level`.
///
/// `max_level` is capped at 6. Lines that match no level are returned as is.
pub fn convert_heading_with(line: &str, marker: char, max_level: usize) -> String {
    match heading_level(line, marker, max_level) {
        Some((level, rest)) => format!("<h{level}>{}</h{level}>", rest.trim()),
        None => line.to_string(),
    }
}

/// Level and remaining text of a heading line, if it is one.
pub fn heading_level(line: &str, marker: char, max_level: usize) -> Option<(usize, &str)> {
    let max_level = max_level.min(MAX_HEADING_LEVEL);
    (1..=max_level).rev().find_map(|level| {
        let prefix: String = std::iter::repeat(marker)
            .take(level)
            .chain(std::iter::once(' '))
            .collect();
        line.strip_prefix(prefix.as_str()).map(|rest| (level, rest))
    })
}
