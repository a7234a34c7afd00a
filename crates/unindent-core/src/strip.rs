use tracing::trace;

use crate::lines::{indent_level, leading_whitespace, split_lines};

/// What to do with a whitespace-only line whose run is shorter than the width
/// being removed.
///
/// Content lines never hit this case: their run is always at least the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortBlankLines {
    /// Strip whatever whitespace the line has (`min(width, run)` characters).
    #[default]
    Trim,
    /// Leave the line untouched (anchored exact-width match).
    Keep,
}

/// Unindent configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnindentOptions {
    pub short_blank_lines: ShortBlankLines,
}

impl UnindentOptions {
    /// Number of characters to remove from a line with a leading run of `run`.
    pub fn strip_count(&self, run: usize, width: usize) -> usize {
        match self.short_blank_lines {
            ShortBlankLines::Trim => run.min(width),
            ShortBlankLines::Keep if run >= width => width,
            ShortBlankLines::Keep => 0,
        }
    }
}

/// Smallest indent level across all content lines, or 0 when there are none.
pub fn min_indent(input: &str) -> usize {
    let min: Option<usize> = split_lines(input).filter_map(indent_level).min();
    min.unwrap_or(0)
}

/// Remove up to `width` leading space/tab characters from every line of `input`.
///
/// Operates on the original text: a line starts at the beginning of the string
/// and after every `'\n'`. Terminators, trailing content and blank lines are
/// otherwise copied verbatim.
pub fn strip_indent(input: &str, width: usize, opts: UnindentOptions) -> String {
    if width == 0 {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    for segment in input.split_inclusive('\n') {
        let n = opts.strip_count(leading_whitespace(segment), width);
        out.push_str(&segment[n..]);
    }
    out
}

/// Remove the common leading whitespace shared by all non-blank lines.
///
/// ```text
/// "\tabc\n\t\tabc"  ->  "abc\n\tabc"
/// ```
pub fn unindent(input: &str) -> String {
    unindent_with_options(input, UnindentOptions::default())
}

/// [`unindent`] with configurable blank-line handling.
pub fn unindent_with_options(input: &str, opts: UnindentOptions) -> String {
    let width = min_indent(input);
    trace!(width, len = input.len(), "computed common indent");
    strip_indent(input, width, opts)
}

/// Method-call form of [`unindent`].
pub trait Unindent {
    type Output;

    fn unindent(&self) -> Self::Output;
}

impl Unindent for str {
    type Output = String;

    fn unindent(&self) -> Self::Output {
        unindent(self)
    }
}

impl Unindent for String {
    type Output = String;

    fn unindent(&self) -> Self::Output {
        unindent(self)
    }
}

impl<T: ?Sized + Unindent> Unindent for &T {
    type Output = T::Output;

    fn unindent(&self) -> Self::Output {
        (**self).unindent()
    }
}
