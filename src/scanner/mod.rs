//! # Scan Orchestrator
//!
//! Wraps parse + visit for one source unit and aggregates results across
//! a batch. A syntax error in one unit becomes that unit's result value;
//! it never aborts the batch, so a multi-unit scan always produces a
//! complete, ordered result set.

use crate::analysis::collect_violations;
use crate::parser::{self, SyntaxDiagnostic};
use crate::report::Violation;
use crate::taxonomy::DangerousFunctions;

/// Outcome of scanning one source unit.
///
/// Either the ordered violations found in the unit, or the diagnostic
/// explaining why it could not be parsed.
pub type ScanResult = Result<Vec<Violation>, SyntaxDiagnostic>;

/// Scanner configured with a dangerous-function taxonomy.
///
/// Holds only the read-only taxonomy; each scan is independent and
/// side-effect-free, so one scanner can serve any number of units.
///
/// # Example
///
/// ```rust,ignore
/// let scanner = Scanner::new(DangerousFunctions::builtin());
/// let result = scanner.scan_unit("app.py", source);
/// ```
pub struct Scanner {
    taxonomy: DangerousFunctions,
}

impl Scanner {
    /// Creates a scanner with the given taxonomy.
    pub fn new(taxonomy: DangerousFunctions) -> Self {
        Self { taxonomy }
    }

    /// Returns the taxonomy this scanner matches against.
    pub fn taxonomy(&self) -> &DangerousFunctions {
        &self.taxonomy
    }

    /// Scans a single source unit.
    ///
    /// # Arguments
    ///
    /// * `unit_id` - Identifier recorded on violations and diagnostics
    /// * `source` - Raw Python source text
    ///
    /// # Returns
    ///
    /// `Ok(violations)` in source order for a unit that parses, or
    /// `Err(diagnostic)` for one that does not. Never panics and never
    /// propagates a parser fault as a fatal error.
    pub fn scan_unit(&self, unit_id: &str, source: &str) -> ScanResult {
        let tree = parser::parse(source, unit_id)?;
        Ok(collect_violations(&tree, unit_id, &self.taxonomy))
    }

    /// Scans a batch of source units, preserving input order.
    ///
    /// Units are independent: a diagnostic on one never affects the
    /// others, and no deduplication is applied.
    ///
    /// # Arguments
    ///
    /// * `units` - Ordered `(unit_id, source)` pairs
    ///
    /// # Returns
    ///
    /// One `(unit_id, ScanResult)` pair per input unit, in input order.
    pub fn scan_many<'a, I>(&self, units: I) -> Vec<(String, ScanResult)>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        units
            .into_iter()
            .map(|(unit_id, source)| (unit_id.to_string(), self.scan_unit(unit_id, source)))
            .collect()
    }
}
