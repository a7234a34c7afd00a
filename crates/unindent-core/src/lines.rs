//! Line-level primitives: splitting, indent measurement and classification.
//!
//! Notes:
//! - Only `' '` and `'\t'` count as indentation whitespace.
//! - Tabs are counted positionally (one character each), never expanded to columns.
//! - A bare `'\r'` that is not followed by `'\n'` is an ordinary character.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Whether `b` is an indentation character (space or tab).
#[inline]
pub const fn is_indent_byte(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Split `input` into lines for indent measurement.
///
/// `"\r\n"` is one terminator, not two. Terminators are discarded, and so are
/// empty entries: consecutive, leading or trailing terminators never yield a
/// zero-length line.
pub fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    input
        .split_inclusive('\n')
        .map(line_text)
        .filter(|line| !line.is_empty())
}

/// Strip the terminator from a `'\n'`-inclusive segment.
///
/// A `'\r'` is only removed as part of `"\r\n"`; on a final segment with no
/// `'\n'` it stays in the line.
pub fn line_text(segment: &str) -> &str {
    segment
        .strip_suffix("\r\n")
        .or_else(|| segment.strip_suffix('\n'))
        .unwrap_or(segment)
}

/// Length of the leading space/tab run of a line (or line segment).
///
/// Both indent characters are ASCII, so the byte count equals the character count.
pub fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|&b| is_indent_byte(b)).count()
}

/// Index of the first non-whitespace character, or `None` for a blank line.
pub fn indent_level(line: &str) -> Option<usize> {
    line.bytes().position(|b| !is_indent_byte(b))
}

/// Content vs. blank classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// At least one character other than space or tab.
    Content,
    /// Empty, or spaces/tabs only.
    Blank,
}

impl LineKind {
    /// Stable lowercase name, as used in reports and the `inspect` table.
    pub const fn as_str(self) -> &'static str {
        match self {
            LineKind::Content => "content",
            LineKind::Blank => "blank",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Classify a line (without its terminator).
pub fn classify(line: &str) -> LineKind {
    match indent_level(line) {
        Some(_) => LineKind::Content,
        None => LineKind::Blank,
    }
}

/// Which terminator convention(s) a text uses.
///
/// Informational only: unindenting never rewrites terminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewlineStyle {
    /// No terminator at all (single line or empty input).
    None,
    Lf,
    CrLf,
    /// Both `"\n"` and `"\r\n"` occur.
    Mixed,
}

impl NewlineStyle {
    /// Stable lowercase name, matching the serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            NewlineStyle::None => "none",
            NewlineStyle::Lf => "lf",
            NewlineStyle::CrLf => "crlf",
            NewlineStyle::Mixed => "mixed",
        }
    }
}

impl fmt::Display for NewlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).as_str())
    }
}

pub fn newline_style(input: &str) -> NewlineStyle {
    let bytes = input.as_bytes();
    let mut lf = 0usize;
    let mut crlf = 0usize;

    for (i, &b) in bytes.iter().enumerate() {
        if b != b'\n' {
            continue;
        }
        if i > 0 && bytes[i - 1] == b'\r' {
            crlf += 1;
        } else {
            lf += 1;
        }
    }

    match (lf, crlf) {
        (0, 0) => NewlineStyle::None,
        (_, 0) => NewlineStyle::Lf,
        (0, _) => NewlineStyle::CrLf,
        _ => NewlineStyle::Mixed,
    }
}
