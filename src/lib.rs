//! # PySentinel Library
//!
//! A static analysis security scanner for Python source code.
//!
//! This library parses Python source text into a syntax tree, walks every
//! call expression, resolves the callee's fully-qualified dotted name, and
//! flags calls matching a configurable taxonomy of dangerous operations.
//! It is a syntactic pattern matcher: no taint tracking, no data-flow
//! analysis, no cross-file symbol resolution.
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface definitions and argument parsing
//! - [`parser`] - Python parsing adapter over tree-sitter
//! - [`analysis`] - Callee name resolution and call-expression traversal
//! - [`scanner`] - Per-unit and batch scan orchestration
//! - [`taxonomy`] - The configurable dangerous-function set
//! - [`report`] - Report grouping and output formats
//!
//! ## Example
//!
//! ```rust,ignore
//! use pysentinel::{DangerousFunctions, Report, Scanner};
//!
//! let scanner = Scanner::new(DangerousFunctions::builtin());
//! let results = scanner.scan_many(vec![("app.py", source.as_str())]);
//! let report = Report::build(&results);
//! ```

pub mod analysis;
pub mod cli;
pub mod parser;
pub mod report;
pub mod scanner;
pub mod taxonomy;

pub use cli::Cli;
pub use parser::{CalleeExpr, SyntaxDiagnostic};
pub use report::{Report, Severity, Violation};
pub use scanner::{ScanResult, Scanner};
pub use taxonomy::DangerousFunctions;
