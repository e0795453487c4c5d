//! # Report Formatters
//!
//! Presentation-layer rendering of a [`Report`]. The report itself is a
//! plain data structure; everything here is formatting only.

use super::Report;

/// Renders the report as a Markdown document.
///
/// # Arguments
///
/// * `report` - The report to render
///
/// # Returns
///
/// A Markdown-formatted string with a summary table, a violations table
/// per file, and a section for parse failures.
pub fn to_markdown(report: &Report) -> String {
    let mut md = String::new();

    md.push_str("# PySentinel Security Report\n\n");

    md.push_str("## Summary\n\n");
    md.push_str("| Metric | Count |\n");
    md.push_str("|--------|-------|\n");
    md.push_str(&format!(
        "| Files scanned | {} |\n",
        report.summary.units_scanned
    ));
    md.push_str(&format!(
        "| Files with violations | {} |\n",
        report.summary.units_with_violations
    ));
    md.push_str(&format!(
        "| Files failed to parse | {} |\n",
        report.summary.units_failed
    ));
    md.push_str(&format!(
        "| Total violations | {} |\n\n",
        report.summary.total_violations
    ));

    if report.files.is_empty() {
        md.push_str("No dangerous calls found.\n");
    } else {
        md.push_str("## Violations\n\n");
        for file in &report.files {
            md.push_str(&format!("### `{}`\n\n", file.unit_id));
            md.push_str("| Line | Column | Function | Severity |\n");
            md.push_str("|------|--------|----------|----------|\n");
            for violation in &file.violations {
                md.push_str(&format!(
                    "| {} | {} | `{}` | {} |\n",
                    violation.line, violation.column, violation.function_name, violation.severity
                ));
            }
            md.push('\n');
        }
    }

    if !report.diagnostics.is_empty() {
        md.push_str("## Parse Failures\n\n");
        for entry in &report.diagnostics {
            md.push_str(&format!(
                "- `{}`: {}\n",
                entry.unit_id, entry.diagnostic
            ));
        }
    }

    md
}
