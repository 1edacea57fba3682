//! Report formatting and printing utilities.
//!
//! Kept separate from the engine so xtext can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary};
use crate::core::DuplicateReport;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    print_to(result, verbose, &mut stdout, &mut stderr);
}

/// Print a command result to custom writers.
///
/// `out` receives the summary, `log` the verbose per-file lines.
pub fn print_to<W: Write, L: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut W,
    log: &mut L,
) {
    match &result.summary {
        CommandSummary::Extract(summary) => {
            if verbose {
                print_extract_details(summary, log);
            }
            print_extract(summary, out);
        }
        CommandSummary::CheckDuplicates(report) => print_duplicates(report, out),
        CommandSummary::Init(summary) => print_init(summary, out),
    }
}

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

fn print_extract_details<L: Write>(summary: &ExtractSummary, log: &mut L) {
    if let Some(path) = &summary.config_path {
        let _ = writeln!(log, "Using config {}", path.display());
    }
    for file in &summary.scan.files {
        let _ = writeln!(
            log,
            "  {} {} ({} found, {} new)",
            "scanned".dimmed(),
            file.path.display(),
            file.extracted,
            file.added
        );
    }
}

fn print_extract<W: Write>(summary: &ExtractSummary, out: &mut W) {
    let scan = &summary.scan;
    let scanned = scan.files_scanned();
    let added = scan.entries_added();

    let msg = if added == 0 {
        format!(
            "Scanned {} source {} - no new entries for {}",
            scanned,
            plural(scanned, "file", "files"),
            scan.catalog_path.display()
        )
    } else {
        let contributing = scan.contributing_files().count();
        format!(
            "{} {} new {} from {} {} to {} (scanned {} source {})",
            if scan.catalog_existed { "Appended" } else { "Wrote" },
            added,
            plural(added, "entry", "entries"),
            contributing,
            plural(contributing, "file", "files"),
            scan.catalog_path.display(),
            scanned,
            plural(scanned, "file", "files")
        )
    };
    let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn print_duplicates<W: Write>(report: &DuplicateReport, out: &mut W) {
    let path = report.catalog_path.display();

    for dup in &report.duplicates {
        let _ = writeln!(
            out,
            "{}: duplicated msgid \"{}\"",
            "warning".bold().yellow(),
            dup.key
        );
        let _ = writeln!(out, "  {} {}:{}", "-->".blue(), path, dup.line);
        let _ = writeln!(
            out,
            "  {} {} line {}",
            "=".blue(),
            "first defined on".bold(),
            dup.first_line
        );
        let _ = writeln!(out);
    }

    if report.is_clean() {
        let msg = format!(
            "Checked {} {} in {} - no duplicates found",
            report.key_count,
            plural(report.key_count, "msgid", "msgids"),
            path
        );
        let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), msg.green());
    } else {
        let count = report.duplicates.len();
        let _ = writeln!(
            out,
            "{} {} duplicated {} in {}",
            FAILURE_MARK.red(),
            count,
            plural(count, "msgid", "msgids"),
            path
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, out: &mut W) {
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}
