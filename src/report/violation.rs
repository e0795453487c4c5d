//! # Violation and Severity Definitions
//!
//! Defines the core data structures for representing detected dangerous
//! calls and their severity classification.

use colored::*;
use serde::{Deserialize, Serialize};

/// Severity level classification for violations.
///
/// Ordered from lowest to highest severity. Severity is a tag carried on
/// each taxonomy entry; the matching logic itself is severity-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational finding, no direct security impact.
    Info = 0,

    /// Low severity, broadly-used functions that warrant review.
    Low = 1,

    /// Medium severity, moderate security impact.
    Medium = 2,

    /// High severity, significant security impact.
    High = 3,

    /// Critical severity, direct code or command execution.
    Critical = 4,
}

impl Severity {
    /// Parses a severity level from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - String representation of severity
    ///
    /// # Returns
    ///
    /// The corresponding `Severity` variant, defaulting to `Info` for
    /// unknown values.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "critical" => Severity::Critical,
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            _ => Severity::Info,
        }
    }

    /// Returns a colored label for terminal output.
    pub fn colored_label(&self) -> ColoredString {
        match self {
            Severity::Critical => "CRITICAL".white().on_red().bold(),
            Severity::High => "HIGH".black().on_yellow().bold(),
            Severity::Medium => "MEDIUM".white().on_bright_blue().bold(),
            Severity::Low => "LOW".black().on_white().bold(),
            Severity::Info => "INFO".black().on_bright_white(),
        }
    }

    /// Returns a text indicator for the severity.
    pub fn indicator(&self) -> &'static str {
        match self {
            Severity::Critical => "[!!]",
            Severity::High => "[!]",
            Severity::Medium => "[~]",
            Severity::Low => "[-]",
            Severity::Info => "[i]",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "Critical"),
            Severity::High => write!(f, "High"),
            Severity::Medium => write!(f, "Medium"),
            Severity::Low => write!(f, "Low"),
            Severity::Info => write!(f, "Info"),
        }
    }
}

/// A detected occurrence of a dangerous call.
///
/// Immutable once created; identity is structural. Produced by the call
/// visitor, grouped by the report builder, never mutated in between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Identifier of the source unit containing the call.
    pub unit_id: String,

    /// Line number of the call expression (1-indexed).
    pub line: u32,

    /// Column offset of the call expression (0-indexed).
    pub column: u32,

    /// Canonical dotted name of the matched callee, e.g. `os.system`.
    pub function_name: String,

    /// Severity tag from the matching taxonomy entry.
    pub severity: Severity,
}

impl Violation {
    /// Prints the violation to terminal with color formatting.
    ///
    /// # Arguments
    ///
    /// * `index` - The violation number for display.
    pub fn print_terminal(&self, index: usize) {
        println!(
            "  {} {} {} {}:{}:{}",
            format!("#{}", index).cyan().bold(),
            self.severity.colored_label(),
            self.function_name.yellow().bold(),
            self.unit_id.blue(),
            self.line.to_string().cyan(),
            self.column.to_string().dimmed(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
        assert!(Severity::Low > Severity::Info);
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!(Severity::from_str("critical"), Severity::Critical);
        assert_eq!(Severity::from_str("HIGH"), Severity::High);
        assert_eq!(Severity::from_str("unknown"), Severity::Info);
    }

    #[test]
    fn test_severity_serde_lowercase() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        let back: Severity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Severity::Critical);
    }
}
