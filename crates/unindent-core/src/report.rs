use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lines::{
    LineKind, NewlineStyle, indent_level, leading_whitespace, line_text, newline_style,
};
use crate::strip::{UnindentOptions, min_indent, strip_indent};

/// Report format version.
///
/// Bump this if fields are renamed or removed.
pub const REPORT_V: u8 = 1;

/// Per-line view of what unindenting does to a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineInfo {
    /// 1-based line number in the original text.
    pub number: usize,
    pub kind: LineKind,
    /// Indent level (content lines only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<usize>,
    /// Characters removed from the start of this line.
    pub stripped: usize,
    /// Line text without its terminator.
    pub text: String,
}

/// Analyze every line of `input` against the common indent.
///
/// Lines are the `'\n'`-inclusive segments of the original string, so `""` has
/// no lines and `"a\n"` has exactly one.
pub fn inspect_lines(input: &str, opts: UnindentOptions) -> Vec<LineInfo> {
    let width = min_indent(input);

    input
        .split_inclusive('\n')
        .enumerate()
        .map(|(i, segment)| {
            let text = line_text(segment);
            let indent = indent_level(text);
            LineInfo {
                number: i + 1,
                kind: if indent.is_some() { LineKind::Content } else { LineKind::Blank },
                indent,
                stripped: opts.strip_count(leading_whitespace(segment), width),
                text: text.to_string(),
            }
        })
        .collect()
}

/// Deterministic summary of a single unindent run.
///
/// Contains no wall-clock data, so identical input always yields an identical report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnindentReport {
    /// Report format version.
    pub v: u8,
    pub lines: usize,
    pub content_lines: usize,
    pub blank_lines: usize,
    /// Common indent removed from every content line.
    pub min_indent: usize,
    pub newline: NewlineStyle,
    pub input_chars: usize,
    pub output_chars: usize,
    /// Whether output differs from input.
    pub changed: bool,
}

/// Unindent `input` and describe what was done.
pub fn unindent_with_report(input: &str, opts: UnindentOptions) -> (String, UnindentReport) {
    let width = min_indent(input);
    let output = strip_indent(input, width, opts);

    let rows = inspect_lines(input, opts);
    let content_lines = rows.iter().filter(|r| r.kind == LineKind::Content).count();

    let report = UnindentReport {
        v: REPORT_V,
        lines: rows.len(),
        content_lines,
        blank_lines: rows.len() - content_lines,
        min_indent: width,
        newline: newline_style(input),
        input_chars: input.chars().count(),
        output_chars: output.chars().count(),
        changed: output != input,
    };
    debug!(?report, "unindent finished");

    (output, report)
}
