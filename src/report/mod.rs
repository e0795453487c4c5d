//! # Report Generation Module
//!
//! Groups scan results into a structured report and renders it in
//! multiple formats: terminal output, JSON, and Markdown.
//!
//! Building a report is a pure function over the ordered scan results:
//! no I/O, no timestamps, no randomness. The same results always produce
//! the same report, so presentation stays a separate concern.
//!
//! ## Key Types
//!
//! - [`Report`] - Complete scan report with grouping and summary
//! - [`Violation`] - Individual dangerous-call occurrence
//! - [`Severity`] - Severity classification for violations

mod formatter;
mod violation;

pub use formatter::to_markdown;
pub use violation::{Severity, Violation};

use crate::parser::SyntaxDiagnostic;
use crate::scanner::ScanResult;
use colored::*;
use serde::{Deserialize, Serialize};

/// Complete report over one batch of scanned units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Units with at least one violation, in scan order.
    pub files: Vec<FileViolations>,

    /// Units that failed to parse, in scan order.
    pub diagnostics: Vec<FileDiagnostic>,

    /// Aggregate statistics over the whole batch.
    pub summary: ReportSummary,
}

/// Violations grouped under one source unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileViolations {
    /// Identifier of the source unit.
    pub unit_id: String,

    /// Violations in source order (non-decreasing line numbers).
    pub violations: Vec<Violation>,
}

/// A source unit that could not be parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileDiagnostic {
    /// Identifier of the source unit.
    pub unit_id: String,

    /// The parse failure for this unit.
    pub diagnostic: SyntaxDiagnostic,
}

/// Summary statistics over a scan batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Total units submitted to the scan, including clean ones.
    pub units_scanned: usize,

    /// Units with at least one violation.
    pub units_with_violations: usize,

    /// Units that failed to parse.
    pub units_failed: usize,

    /// Total violations across all units.
    pub total_violations: usize,

    /// Count of critical severity violations.
    pub critical: usize,

    /// Count of high severity violations.
    pub high: usize,

    /// Count of medium severity violations.
    pub medium: usize,

    /// Count of low severity violations.
    pub low: usize,

    /// Count of informational violations.
    pub info: usize,
}

impl Report {
    /// Builds a report from ordered scan results.
    ///
    /// Units with zero violations and no parse failure are omitted from
    /// both lists but still counted in `summary.units_scanned`. Input
    /// order is preserved in both groupings.
    ///
    /// # Arguments
    ///
    /// * `results` - One `(unit_id, ScanResult)` pair per scanned unit
    ///
    /// # Returns
    ///
    /// A fully populated `Report`.
    pub fn build(results: &[(String, ScanResult)]) -> Self {
        let mut files = Vec::new();
        let mut diagnostics = Vec::new();

        for (unit_id, result) in results {
            match result {
                Ok(violations) if violations.is_empty() => {}
                Ok(violations) => files.push(FileViolations {
                    unit_id: unit_id.clone(),
                    violations: violations.clone(),
                }),
                Err(diagnostic) => diagnostics.push(FileDiagnostic {
                    unit_id: unit_id.clone(),
                    diagnostic: diagnostic.clone(),
                }),
            }
        }

        let summary = ReportSummary::from_groups(results.len(), &files, &diagnostics);

        Self {
            files,
            diagnostics,
            summary,
        }
    }

    /// Iterates over every violation in the report, in report order.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.files.iter().flat_map(|f| f.violations.iter())
    }

    /// Returns whether the scan found any violations.
    pub fn has_violations(&self) -> bool {
        self.summary.total_violations > 0
    }

    /// Prints colorized output to the terminal.
    ///
    /// Displays violations grouped by file, then any parse diagnostics.
    pub fn print_terminal(&self) {
        if self.files.is_empty() {
            println!("\n{}", "[+] No dangerous calls found.".green().bold());
        } else {
            println!("\n{}", "[!] Dangerous calls:".red().bold());
            println!("{}", "=".repeat(60).cyan());

            for file in &self.files {
                println!(
                    "\n{} {} ({} violation(s))",
                    "[file]".dimmed(),
                    file.unit_id.blue().bold(),
                    file.violations.len()
                );
                for (i, violation) in file.violations.iter().enumerate() {
                    violation.print_terminal(i + 1);
                }
            }
        }

        if !self.diagnostics.is_empty() {
            println!("\n{}", "[!] Files that failed to parse:".yellow().bold());
            for entry in &self.diagnostics {
                println!(
                    "  {} {} ({})",
                    "[syntax]".yellow(),
                    entry.unit_id.blue(),
                    entry.diagnostic
                );
            }
        }
    }

    /// Prints summary statistics to the terminal.
    pub fn print_summary(&self) {
        println!(
            "{}",
            format!(
                "[*] Summary: {} Critical | {} High | {} Medium | {} Low | {} Info",
                self.summary.critical,
                self.summary.high,
                self.summary.medium,
                self.summary.low,
                self.summary.info
            )
            .bold()
        );
        println!(
            "    {} file(s) scanned, {} with violations, {} failed to parse",
            self.summary.units_scanned,
            self.summary.units_with_violations,
            self.summary.units_failed
        );

        if self.summary.total_violations == 0 {
            println!("{}", "[+] No issues found.".green().bold());
        } else {
            let message = format!(
                "[!] Total: {} violation(s) found",
                self.summary.total_violations
            );
            if self.summary.critical > 0 {
                println!("{}", message.red().bold());
            } else if self.summary.high > 0 {
                println!("{}", message.yellow().bold());
            } else {
                println!("{}", message.blue().bold());
            }
        }
    }

    /// Converts the report to Markdown format.
    pub fn to_markdown(&self) -> String {
        formatter::to_markdown(self)
    }
}

impl ReportSummary {
    /// Computes summary statistics from the grouped results.
    fn from_groups(
        units_scanned: usize,
        files: &[FileViolations],
        diagnostics: &[FileDiagnostic],
    ) -> Self {
        let mut summary = ReportSummary {
            units_scanned,
            units_with_violations: files.len(),
            units_failed: diagnostics.len(),
            total_violations: 0,
            critical: 0,
            high: 0,
            medium: 0,
            low: 0,
            info: 0,
        };

        for violation in files.iter().flat_map(|f| f.violations.iter()) {
            summary.total_violations += 1;
            match violation.severity {
                Severity::Critical => summary.critical += 1,
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
                Severity::Info => summary.info += 1,
            }
        }

        summary
    }
}
