use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").unwrap());

/// `**text**` → `<b>text</b>`
pub fn bold(line: &str) -> String {
    BOLD.replace_all(line, "<b>$1</b>").into_owned()
}

/// `__text__` → `<em>text</em>`
pub fn emphasis(line: &str) -> String {
    EMPHASIS.replace_all(line, "<em>$1</em>").into_owned()
}
