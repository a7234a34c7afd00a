//! `unindent-io` is the single supported public entrypoint for the unindent transform,
//! its per-line analysis, and the file/stdin plumbing used by the CLI.
//!
//! The transform itself is pure and total; everything fallible lives in
//! [`source`] and is reported through [`Error`].

// -----------------------------------------------------------------------------
// Public API contract
// -----------------------------------------------------------------------------
//
// Consumers SHOULD import from `unindent_io::prelude::*`.
// Anything not re-exported via the prelude is considered internal and may change
// without notice.

#[doc(hidden)]
pub mod core {
    pub use unindent_core::lines::{
        LineKind, NewlineStyle, classify, indent_level, leading_whitespace, line_text,
        newline_style, split_lines,
    };
    pub use unindent_core::report::{
        LineInfo, REPORT_V, UnindentReport, inspect_lines, unindent_with_report,
    };
    pub use unindent_core::strip::{
        ShortBlankLines, Unindent, UnindentOptions, min_indent, strip_indent, unindent,
        unindent_with_options,
    };
}

pub mod error;

/// Stable JSON rendering of [`UnindentReport`](crate::core::UnindentReport).
pub mod report_json;

/// Whole-input readers and verbatim writers.
pub mod source;

pub use error::{Error, Result};

/// Convenience prelude for consumers.
///
/// This is the **only supported** import surface for external users.
pub mod prelude {
    pub use crate::core::{LineInfo, LineKind, NewlineStyle, UnindentReport};
    pub use crate::core::{ShortBlankLines, Unindent, UnindentOptions};
    pub use crate::core::{inspect_lines, min_indent, unindent, unindent_with_options};
    pub use crate::core::unindent_with_report;
    pub use crate::source::{Sink, Source, unindent_file};
    pub use crate::{Error, Result, report_json};
}
