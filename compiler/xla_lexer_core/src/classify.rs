//! Atom classification.
//!
//! Every atom the collector flushes is tagged with an [`AtomPattern`]. The
//! checks run in a fixed priority order and the first match wins:
//!
//! 1. signed integer with optional `_` separators between 3-digit groups
//! 2. `0x` hexadecimal
//! 3. `0b` binary
//! 4. floating-point literal
//! 5. URL with a host
//! 6. absolute path, or any text containing a path separator
//! 7. untyped
//!
//! [`classify_atom`] additionally recognizes `:tag` markers before running
//! the chain; [`classify`] is the chain alone, used when re-classifying text
//! produced at runtime.

use std::fmt;
use std::path::{Path, MAIN_SEPARATOR};

use crate::TAG_PREFIX;

/// Semantic subtype of an atom.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AtomPattern {
    Integer,
    Hex,
    Binary,
    Real,
    Url,
    FilePath,
    /// `:name` marker, removed by tag collapse.
    Tag,
    #[default]
    None,
}

impl AtomPattern {
    /// Lowercase name used in debug dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            AtomPattern::Integer => "integer",
            AtomPattern::Hex => "hex",
            AtomPattern::Binary => "binary",
            AtomPattern::Real => "real",
            AtomPattern::Url => "url",
            AtomPattern::FilePath => "file_path",
            AtomPattern::Tag => "tag",
            AtomPattern::None => "none",
        }
    }

    /// Whether this pattern is one of the numeric literal forms.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            AtomPattern::Integer | AtomPattern::Hex | AtomPattern::Binary | AtomPattern::Real
        )
    }
}

impl fmt::Display for AtomPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an atom as written in source, recognizing `:tag` markers.
pub fn classify_atom(text: &str) -> AtomPattern {
    if text.starts_with(TAG_PREFIX) {
        return AtomPattern::Tag;
    }
    classify(text)
}

/// Run the classification chain on `text`.
pub fn classify(text: &str) -> AtomPattern {
    if text.is_empty() {
        return AtomPattern::None;
    }
    if is_integer(text) {
        AtomPattern::Integer
    } else if is_prefixed(text, "0x", |c| c.is_ascii_hexdigit()) {
        AtomPattern::Hex
    } else if is_prefixed(text, "0b", |c| c == '0' || c == '1') {
        AtomPattern::Binary
    } else if is_real(text) {
        AtomPattern::Real
    } else if is_url(text) {
        AtomPattern::Url
    } else if is_file_path(text) {
        AtomPattern::FilePath
    } else {
        AtomPattern::None
    }
}

fn strip_sign(text: &str) -> &str {
    text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text)
}

/// `[-+]?digits(_ddd)*`. The leading group may be any length; every group
/// after an underscore is exactly three digits.
fn is_integer(text: &str) -> bool {
    let mut groups = strip_sign(text).split('_');
    let Some(lead) = groups.next() else {
        return false;
    };
    if lead.is_empty() || !lead.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    groups.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()))
}

fn is_prefixed(text: &str, prefix: &str, digit: impl Fn(char) -> bool) -> bool {
    match text.strip_prefix(prefix) {
        Some(rest) => !rest.is_empty() && rest.chars().all(digit),
        None => false,
    }
}

/// `[-+]? digits? ('.' digits?)? ([eE] [-+]? digits)?` with at least one
/// mantissa digit. Words like `inf` and `nan` are not literals here even
/// though `f64::from_str` accepts them.
fn is_real(text: &str) -> bool {
    let bytes = strip_sign(text).as_bytes();
    let mut i = 0;
    let mut mantissa_digits = 0;

    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        mantissa_digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return false;
    }
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == bytes.len() && text.parse::<f64>().is_ok()
}

fn is_url(text: &str) -> bool {
    url::Url::parse(text).is_ok_and(|u| u.has_host())
}

fn is_file_path(text: &str) -> bool {
    Path::new(text).is_absolute() || text.contains(MAIN_SEPARATOR) || text.contains('/')
}
