//! The ordered line sequence passed between pipeline stages.

/// An ordered sequence of text lines.
///
/// Lines are kept in input order and never deduplicated. Stages do not
/// mutate a document in place; they build a new one from the old.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split source text into lines.
    ///
    /// `\n`, `\r\n` and a lone `\r` each end a line and are not kept. A final
    /// terminator does not add an empty trailing line.
    pub fn from_source(source: &str) -> Self {
        let mut lines = Vec::new();
        let mut rest = source;
        while !rest.is_empty() {
            match rest.find(|c: char| c == '\r' || c == '\n') {
                Some(end) => {
                    lines.push(rest[..end].to_string());
                    let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                    rest = &rest[end + terminator..];
                }
                None => {
                    lines.push(rest.to_string());
                    break;
                }
            }
        }
        Self { lines }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.lines.iter()
    }

    /// Build a new document by applying `f` to every line.
    pub fn map_lines<F>(&self, f: F) -> Document
    where
        F: FnMut(&str) -> String,
    {
        self.lines.iter().map(String::as_str).map(f).collect()
    }

    /// Join the lines, terminating each with a single `\n`.
    pub fn render(&self) -> String {
        let capacity = self.lines.iter().map(|line| line.len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl FromIterator<String> for Document {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for Document {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

impl IntoIterator for Document {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_source_drops_terminators() {
        let doc = Document::from_source("one\r\ntwo\n\nthree\n");
        assert_eq!(doc.lines(), &["one", "two", "", "three"]);
    }

    #[test]
    fn from_source_splits_on_lone_carriage_return() {
        let doc = Document::from_source("- a\r- b\n\rlast\r");
        assert_eq!(doc.lines(), &["- a", "- b", "", "last"]);
    }

    #[test]
    fn from_source_without_final_terminator() {
        let doc = Document::from_source("one\ntwo");
        assert_eq!(doc.lines(), &["one", "two"]);
    }

    #[test]
    fn from_source_keeps_trailing_whitespace() {
        let doc = Document::from_source("- item  \n");
        assert_eq!(doc.lines(), &["- item  "]);
    }

    #[test]
    fn empty_source_is_empty_document() {
        assert!(Document::from_source("").is_empty());
        assert_eq!(Document::new().render(), "");
    }

    #[test]
    fn render_terminates_every_line() {
        let doc: Document = ["<p>", "text", "</p>"].into_iter().collect();
        assert_eq!(doc.render(), "<p>\ntext\n</p>\n");
    }

    #[test]
    fn map_lines_leaves_source_untouched() {
        let doc: Document = ["a", "b"].into_iter().collect();
        let upper = doc.map_lines(|line| line.to_uppercase());
        assert_eq!(upper.lines(), &["A", "B"]);
        assert_eq!(doc.lines(), &["a", "b"]);
    }
}
