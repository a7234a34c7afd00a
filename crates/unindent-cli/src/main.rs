use std::io::{self, Write};
use std::process;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use unindent_io::prelude::*;

mod telemetry;

/// Preview column bound (characters), including the ellipsis.
const PREVIEW_MAX: usize = 40;

#[derive(Debug, Parser)]
#[command(name = "unindent", version, about = "Remove common leading whitespace from text")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Args)]
struct PolicyArgs {
    /// Leave whitespace-only lines shorter than the common indent untouched
    #[arg(long, env = "UNINDENT_KEEP_SHORT_BLANK_LINES")]
    keep_short_blank_lines: bool,
}

impl PolicyArgs {
    fn options(&self) -> UnindentOptions {
        let short_blank_lines = if self.keep_short_blank_lines {
            ShortBlankLines::Keep
        } else {
            ShortBlankLines::Trim
        };
        UnindentOptions { short_blank_lines }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Unindent text and write the result verbatim.
    Strip {
        /// Input file (`-` or omitted for stdin)
        input: Option<String>,
        /// Output file (`-` or omitted for stdout)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        policy: PolicyArgs,
        /// Print a JSON report of the run to stderr
        #[arg(long)]
        report_json: bool,
        /// Minify the JSON report
        #[arg(long, requires = "report_json")]
        min: bool,
    },
    /// Print a per-line indent table (TSV).
    Inspect {
        /// Input file (`-` or omitted for stdin)
        input: Option<String>,
        #[command(flatten)]
        policy: PolicyArgs,
    },
    /// Exit 2 when the text still has a common indent.
    Check {
        /// Input file (`-` or omitted for stdin)
        input: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::setup_logger();

    match cli.cmd {
        Command::Strip { input, output, policy, report_json: emit_report, min } => {
            let source = Source::from_arg(input.as_deref());
            let text = source.read_to_string()?;

            let (out, report) = unindent_with_report(&text, policy.options());
            info!(min_indent = report.min_indent, lines = report.lines, "unindented {}", source.label());

            Sink::from_arg(output.as_deref()).write_str(&out)?;

            if emit_report {
                let json = if min {
                    report_json::to_minified_json(&report)
                } else {
                    report_json::to_pretty_json(&report)
                }
                .with_context(|| format!("failed to serialize report for {}", source.label()))?;
                eprintln!("{json}");
            }
        }
        Command::Inspect { input, policy } => {
            let text = Source::from_arg(input.as_deref()).read_to_string()?;
            let rows = inspect_lines(&text, policy.options());
            debug!(rows = rows.len(), "inspected lines");

            let mut out = io::stdout().lock();
            writeln!(out, "line\tkind\tindent\tstrip\tpreview")?;
            for row in &rows {
                let indent = row.indent.map_or_else(|| "-".to_string(), |n| n.to_string());
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}\t{}",
                    row.number,
                    row.kind,
                    indent,
                    row.stripped,
                    preview(&row.text)
                )?;
            }
        }
        Command::Check { input } => {
            let source = Source::from_arg(input.as_deref());
            let text = source.read_to_string()?;

            let width = min_indent(&text);
            if width == 0 {
                println!("OK");
            } else {
                // Stable message for CI / integrations.
                eprintln!("{}: common indent of {width} character(s)", source.label());
                process::exit(2);
            }
        }
    }

    Ok(())
}

/// Single-line preview: tabs and carriage returns escaped, bounded with an ellipsis.
fn preview(text: &str) -> String {
    let escaped = text.replace('\t', "\\t").replace('\r', "\\r");
    if escaped.chars().count() <= PREVIEW_MAX {
        return escaped;
    }
    let mut out: String = escaped.chars().take(PREVIEW_MAX - 1).collect();
    out.push('…');
    out
}
