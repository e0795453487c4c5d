//! # Dangerous Function Taxonomy
//!
//! The set of canonical dotted names the scanner flags, each tagged with
//! a severity tier. The taxonomy is configuration, not logic: it is built
//! once at startup (from the built-in defaults or a JSON file) and shared
//! read-only across every scanned unit. An empty taxonomy is valid and
//! simply yields zero violations.
//!
//! ## Taxonomy File Format
//!
//! ```json
//! [
//!   { "name": "eval", "severity": "critical" },
//!   { "name": "django.utils.safestring.mark_safe", "severity": "medium" }
//! ]
//! ```

use crate::report::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a taxonomy file.
///
/// These are the only fatal errors in the scanner, and they can occur
/// only at startup, before any unit has been scanned.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    /// The taxonomy file could not be read.
    #[error("failed to read taxonomy file `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The taxonomy file is not valid JSON or has the wrong shape.
    #[error("invalid taxonomy file `{path}`: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One configured dangerous function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    /// Canonical dotted name, e.g. `eval` or `pickle.loads`.
    pub name: String,

    /// Severity tier assigned to calls of this function.
    pub severity: Severity,
}

/// Immutable set of dangerous function names with severity tags.
///
/// Lookup is by exact canonical dotted name. The map is ordered so that
/// listings and serialized output are deterministic.
#[derive(Debug, Clone, Default)]
pub struct DangerousFunctions {
    entries: BTreeMap<String, Severity>,
}

impl DangerousFunctions {
    /// Creates an empty taxonomy.
    ///
    /// Valid configuration: every scan completes with zero violations.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the built-in default taxonomy.
    ///
    /// Covers dynamic evaluation, arbitrary code execution, unsafe
    /// deserialization, process/shell invocation, and unauthenticated
    /// file/input access. `open` and `input` are flagged at `Low`: they
    /// are broadly used and not inherently dangerous, but worth review.
    pub fn builtin() -> Self {
        let defaults: [(&str, Severity); 12] = [
            ("eval", Severity::Critical),
            ("exec", Severity::Critical),
            ("compile", Severity::High),
            ("__import__", Severity::High),
            ("pickle.load", Severity::High),
            ("pickle.loads", Severity::High),
            ("os.system", Severity::Critical),
            ("os.popen", Severity::High),
            ("subprocess.call", Severity::High),
            ("subprocess.Popen", Severity::High),
            ("open", Severity::Low),
            ("input", Severity::Low),
        ];

        Self {
            entries: defaults
                .iter()
                .map(|(name, severity)| (name.to_string(), *severity))
                .collect(),
        }
    }

    /// Builds a taxonomy from explicit entries.
    ///
    /// Duplicate names keep the last entry's severity.
    pub fn from_entries(entries: impl IntoIterator<Item = TaxonomyEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|e| (e.name, e.severity))
                .collect(),
        }
    }

    /// Loads a taxonomy from a JSON file, replacing the defaults.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a JSON array of taxonomy entries
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError`] if the file cannot be read or does not
    /// contain a valid entry array.
    pub fn load(path: &Path) -> Result<Self, TaxonomyError> {
        let text = std::fs::read_to_string(path).map_err(|source| TaxonomyError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let entries: Vec<TaxonomyEntry> =
            serde_json::from_str(&text).map_err(|source| TaxonomyError::Format {
                path: path.to_path_buf(),
                source,
            })?;

        log::info!("loaded {} taxonomy entries from {}", entries.len(), path.display());
        Ok(Self::from_entries(entries))
    }

    /// Returns the taxonomy extended with one additional entry.
    pub fn with_entry(mut self, name: &str, severity: Severity) -> Self {
        self.entries.insert(name.to_string(), severity);
        self
    }

    /// Returns the severity tag for a canonical name, if it is flagged.
    pub fn severity_of(&self, name: &str) -> Option<Severity> {
        self.entries.get(name).copied()
    }

    /// Returns whether a canonical name is flagged.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterates over entries in name order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Severity)> {
        self.entries.iter().map(|(name, sev)| (name.as_str(), *sev))
    }

    /// Number of configured entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the taxonomy has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
