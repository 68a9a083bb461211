//! Terminal output for conversion results and errors.
//!
//! Successes go to stdout, errors to stderr. Kept apart from the core so the
//! library never prints.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::ConvertSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Shown when an error renders as an empty message.
const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Print the result of a successful conversion to stdout.
pub fn print_summary(summary: &ConvertSummary, verbose: bool) {
    print_summary_to(summary, verbose, &mut io::stdout().lock());
}

/// Print a conversion summary to a custom writer.
pub fn print_summary_to<W: Write>(summary: &ConvertSummary, verbose: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        "Conversion completed successfully!".green()
    );
    let _ = writeln!(writer, "Input: {}", summary.input.display());
    let _ = writeln!(writer, "Output: {}", summary.output.display());

    if !verbose {
        return;
    }

    let _ = writeln!(
        writer,
        "Exported {} as {} from {} {}",
        plural(summary.groups.len(), "group"),
        summary.export_name.bold(),
        summary.variable_count,
        if summary.variable_count == 1 {
            "variable"
        } else {
            "variables"
        }
    );
    for group in &summary.groups {
        let _ = writeln!(
            writer,
            "  {} {}",
            group.const_name.cyan(),
            format!("({})", plural(group.variable_count, "variable")).dimmed()
        );
    }
    if !summary.skipped.is_empty() {
        let _ = writeln!(
            writer,
            "{} skipped {} without a group: {}",
            "warning:".bold().yellow(),
            plural(summary.skipped.len(), "variable"),
            summary.skipped.join(", ")
        );
    }
}

/// Print an error to stderr.
pub fn print_error(err: &anyhow::Error) {
    print_error_to(err, &mut io::stderr().lock());
}

/// Print an error, including its context chain, to a custom writer.
pub fn print_error_to<W: Write>(err: &anyhow::Error, writer: &mut W) {
    print_error_message_to(&format!("{:#}", err), writer);
}

/// Print a plain error message to stderr.
pub fn print_error_message(message: &str) {
    print_error_message_to(message, &mut io::stderr().lock());
}

fn print_error_message_to<W: Write>(message: &str, writer: &mut W) {
    let message = if message.trim().is_empty() {
        UNKNOWN_ERROR
    } else {
        message
    };
    let _ = writeln!(
        writer,
        "{} {} {}",
        FAILURE_MARK.red(),
        "Error:".bold().red(),
        message
    );
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
