//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow rcstrings to be used as a library.
//! Extracted strings go to stdout; diagnostics go to stderr.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, InitSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::extraction::{FileExtraction, RcEntry};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout/stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    print_file_errors(&result.files, err);

    match &result.summary {
        CommandSummary::Init(summary) => print_init(summary, out, err),
        CommandSummary::Extract(summary) => match summary.format {
            OutputFormat::Text => print_extract_text(&result.files, summary.context, out),
            OutputFormat::Json => print_extract_json(&result.files, summary.context, out, err),
        },
        CommandSummary::Scan(summary) => {
            match summary.format {
                OutputFormat::Text => print_scan_text(result, out, err),
                OutputFormat::Json => {
                    let report = ScanReport {
                        files: &result.files,
                        total_strings: result.string_count(),
                        skipped_count: summary.skipped_count,
                    };
                    print_json(&report, out, err);
                }
            }
            print_skipped_warning(summary.skipped_count, verbose, err);
        }
    }
}

// ============================================================
// Internal Functions
// ============================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanReport<'a> {
    files: &'a [FileExtraction],
    total_strings: usize,
    skipped_count: usize,
}

fn print_init<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            err,
            "{}: {} already exists",
            "error".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}

fn print_file_errors<E: Write>(files: &[FileExtraction], err: &mut E) {
    for message in files.iter().filter_map(|f| f.error.as_deref()) {
        let _ = writeln!(err, "{}: {}", "error".bold().red(), message);
    }
}

fn print_extract_text<W: Write>(files: &[FileExtraction], context: bool, out: &mut W) {
    let with_headers = files.len() > 1;
    let readable = files.iter().filter(|f| f.error.is_none());

    for (i, file) in readable.enumerate() {
        if with_headers {
            if i > 0 {
                let _ = writeln!(out);
            }
            let _ = writeln!(out, "{} {}", "-->".blue(), file.path);
        }

        if context {
            print_entries(&file.entries, out);
        } else {
            for entry in &file.entries {
                let _ = writeln!(out, "{}", escape_control(&entry.text));
            }
        }
    }
}

fn print_extract_json<W: Write, E: Write>(
    files: &[FileExtraction],
    context: bool,
    out: &mut W,
    err: &mut E,
) {
    match files {
        [file] if context => print_json(&file.entries, out, err),
        [file] => print_json(&file.texts().collect::<Vec<_>>(), out, err),
        _ => print_json(&files, out, err),
    }
}

fn print_scan_text<W: Write, E: Write>(result: &CommandResult, out: &mut W, err: &mut E) {
    let readable: Vec<&FileExtraction> =
        result.files.iter().filter(|f| f.error.is_none()).collect();

    if result.files.is_empty() {
        let _ = writeln!(
            err,
            "{} no resource scripts found",
            "warning:".bold().yellow()
        );
        return;
    }

    for file in readable.iter().filter(|f| !f.entries.is_empty()) {
        let _ = writeln!(out, "{} {}", "-->".blue(), file.path);
        print_entries(&file.entries, out);
        let _ = writeln!(out);
    }

    let strings = result.string_count();
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} {} from {} {}",
            strings,
            if strings == 1 { "string" } else { "strings" },
            readable.len(),
            if readable.len() == 1 { "file" } else { "files" }
        )
        .green()
    );

    if result.error_count > 0 {
        let _ = writeln!(
            out,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} file(s) could not be read", result.error_count).red()
        );
    }
}

fn print_skipped_warning<E: Write>(count: usize, verbose: bool, err: &mut E) {
    if count > 0 {
        let _ = writeln!(
            err,
            "{} {} path(s) skipped due to access errors{}",
            "warning:".bold().yellow(),
            count,
            if verbose { "" } else { " (use -v for details)" }
        );
    }
}

/// Print entries as `line | label  "text"` rows with aligned columns.
fn print_entries<W: Write>(entries: &[RcEntry], out: &mut W) {
    let line_width = entries
        .iter()
        .map(|e| e.line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);
    let label_width = entries
        .iter()
        .map(|e| UnicodeWidthStr::width(entry_label(e)))
        .max()
        .unwrap_or(1);

    for entry in entries {
        let label = entry_label(entry);
        let padding = label_width - UnicodeWidthStr::width(label);
        let _ = writeln!(
            out,
            "{:>width$} {} {}{:padding$}  \"{}\"",
            entry.line.to_string().blue(),
            "|".blue(),
            label.cyan(),
            "",
            escape_control(&entry.text),
            width = line_width,
            padding = padding
        );
    }
}

fn entry_label(entry: &RcEntry) -> &str {
    entry
        .hint
        .as_deref()
        .or(entry.id.as_deref())
        .unwrap_or("-")
}

fn print_json<T: Serialize + ?Sized, W: Write, E: Write>(value: &T, out: &mut W, err: &mut E) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let _ = writeln!(out, "{}", json);
        }
        Err(e) => {
            let _ = writeln!(err, "{}: Failed to serialize JSON: {}", "error".bold().red(), e);
        }
    }
}

/// Make line breaks and tabs visible so every string stays on one line.
fn escape_control(text: &str) -> String {
    text.replace('\r', r"\r")
        .replace('\n', r"\n")
        .replace('\t', r"\t")
}
