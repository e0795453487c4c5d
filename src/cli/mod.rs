//! # CLI Module
//!
//! This module defines the command-line interface for PySentinel using
//! the `clap` derive macros for declarative argument parsing.
//!
//! ## Commands
//!
//! - `scan` - Analyze Python source files for dangerous calls
//! - `list` - Display the active dangerous-function taxonomy
//! - `version` - Show version information

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// PySentinel command-line interface.
///
/// A static analysis security scanner for Python source code. Detects
/// calls to dangerous functions such as `eval`, `exec`, `os.system`,
/// and `pickle.loads`.
#[derive(Parser, Debug)]
#[command(name = "pysentinel")]
#[command(version)]
#[command(about = "Static analysis security scanner for dangerous calls in Python code")]
#[command(long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the PySentinel CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan Python source files for dangerous function calls.
    ///
    /// Analyzes every `.py` file under the given path, flags calls
    /// matching the dangerous-function taxonomy, and reports them
    /// grouped by file.
    Scan {
        /// Path to the file or directory to scan.
        ///
        /// If a directory is specified, all `.py` files within it are
        /// analyzed.
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Do not descend into subdirectories.
        ///
        /// Directories are scanned recursively by default; housekeeping
        /// directories (`.git`, `__pycache__`, `venv`, `env`) are always
        /// skipped either way.
        #[arg(long)]
        no_recursive: bool,

        /// Output format for the report.
        ///
        /// Supported formats:
        /// - `terminal`: Colorized console output (default)
        /// - `json`: Machine-readable JSON format
        /// - `markdown`: Human-readable Markdown report
        #[arg(short, long, default_value = "terminal")]
        format: String,

        /// Output directory for the Markdown report.
        ///
        /// If not specified, reports are printed to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minimum severity level to include in results.
        ///
        /// Valid values: critical, high, medium, low, info
        #[arg(short, long)]
        severity: Option<String>,

        /// Path to a JSON taxonomy file replacing the built-in
        /// dangerous-function set.
        #[arg(short, long)]
        taxonomy: Option<PathBuf>,
    },

    /// List the active dangerous-function taxonomy.
    ///
    /// Displays each flagged name and its severity tier, honoring
    /// `--taxonomy` overrides.
    List {
        /// Path to a JSON taxonomy file replacing the built-in set.
        #[arg(short, long)]
        taxonomy: Option<PathBuf>,
    },

    /// Print version information.
    Version,
}
