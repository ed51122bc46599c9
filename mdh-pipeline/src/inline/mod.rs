//! Inline conversion
//!
//! Applied to each line after heading conversion, in this order:
//!
//! 1. `**bold**` → `<b>bold</b>`
//! 2. `__em__` → `<em>em</em>`
//! 3. `[[text]]` → lowercase hex MD5 of `text`
//! 4. `((text))` → `text` without `c`/`C`
//!
//! Every substitution replaces all non-greedy, non-overlapping matches on the
//! line. An unterminated delimiter never matches and is left as written.
//! Nesting one delimiter inside another is not supported.

pub mod directives;
pub mod emphasis;

pub use directives::{hash_directive, strip_directive, strip_directive_with};
pub use emphasis::{bold, emphasis};

/// Run all inline substitutions with the default strip character.
pub fn convert_inline(line: &str) -> String {
    convert_inline_with(line, 'c')
}

/// Run all inline substitutions, removing `strip_char` in `((...))`.
pub fn convert_inline_with(line: &str, strip_char: char) -> String {
    let line = bold(line);
    let line = emphasis(&line);
    let line = hash_directive(&line);
    strip_directive_with(&line, strip_char)
}
