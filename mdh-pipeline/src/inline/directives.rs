//! Custom inline directives
//!
//! - `[[text]]` is replaced by the MD5 digest of `text`, lowercase hex.
//! - `((text))` is replaced by `text` with every `c` and `C` removed.

use md5::{Digest, Md5};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static HASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[(.+?)\]\]").unwrap());
static STRIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\((.+?)\)\)").unwrap());

/// Lowercase hex MD5 of the UTF-8 bytes of `text`.
pub fn md5_hex(text: &str) -> String {
    hex::encode(Md5::digest(text.as_bytes()))
}

pub fn hash_directive(line: &str) -> String {
    HASH.replace_all(line, |caps: &Captures| md5_hex(&caps[1]))
        .into_owned()
}

pub fn strip_directive(line: &str) -> String {
    strip_directive_with(line, 'c')
}

/// Replace `((text))` with `text` minus every case variant of `strip`.
pub fn strip_directive_with(line: &str, strip: char) -> String {
    STRIP
        .replace_all(line, |caps: &Captures| strip_char(&caps[1], strip))
        .into_owned()
}

fn strip_char(text: &str, strip: char) -> String {
    text.chars()
        .filter(|c| !c.to_lowercase().eq(strip.to_lowercase()))
        .collect()
}
