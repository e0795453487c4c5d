//! # PySentinel CLI Entry Point
//!
//! This module provides the main entry point for the PySentinel
//! command-line security scanner: file discovery, batch scanning,
//! and report output.

use anyhow::Result;
use clap::Parser;
use colored::*;
use pysentinel::{Cli, DangerousFunctions, Report, Scanner, Severity};
use std::path::{Path, PathBuf};

/// ASCII art banner displayed at startup.
const BANNER: &str = r#"
  ____        ____             _   _            _
 |  _ \ _   _/ ___|  ___ _ __ | |_(_)_ __   ___| |
 | |_) | | | \___ \ / _ \ '_ \| __| | '_ \ / _ \ |
 |  __/| |_| |___) |  __/ | | | |_| | | | |  __/ |
 |_|    \__, |____/ \___|_| |_|\__|_|_| |_|\___|_|
        |___/
           Python Dangerous-Call Security Scanner
"#;

/// Directories never descended into during discovery.
const SKIPPED_DIRS: &[&str] = &[".git", "__pycache__", "venv", "env", ".venv", "node_modules"];

/// Application entry point.
///
/// Initializes the logging system, parses command-line arguments, and
/// dispatches to the appropriate command handler.
///
/// # Returns
///
/// Returns `Ok(())` on successful execution, or an error if any
/// operation fails.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        pysentinel::cli::Commands::Scan {
            path,
            no_recursive,
            format,
            output,
            severity,
            taxonomy,
        } => {
            run_scan(path, !no_recursive, format, output, severity, taxonomy)?;
        }
        pysentinel::cli::Commands::List { taxonomy } => {
            list_taxonomy(taxonomy)?;
        }
        pysentinel::cli::Commands::Version => {
            println!(
                "{} {}",
                "PySentinel version:".green(),
                env!("CARGO_PKG_VERSION").yellow()
            );
        }
    }

    Ok(())
}

/// Executes the scan operation.
///
/// Orchestrates the complete scanning workflow:
/// 1. Loads the dangerous-function taxonomy
/// 2. Collects Python source files from the specified path
/// 3. Scans each file, tolerating per-file syntax errors
/// 4. Builds and renders the report in the requested format
///
/// Exits with a non-zero status when violations are found, so the
/// scanner can gate CI pipelines.
///
/// # Arguments
///
/// * `path` - The file or directory path to scan
/// * `recursive` - Whether to scan directories recursively
/// * `format` - Output format: "terminal", "json", or "markdown"
/// * `output` - Optional output directory for the Markdown report
/// * `min_severity` - Optional minimum severity level to include
/// * `taxonomy_path` - Optional JSON taxonomy file replacing defaults
fn run_scan(
    path: PathBuf,
    recursive: bool,
    format: String,
    output: Option<PathBuf>,
    min_severity: Option<String>,
    taxonomy_path: Option<PathBuf>,
) -> Result<()> {
    let taxonomy = load_taxonomy(taxonomy_path)?;
    let scanner = Scanner::new(taxonomy);

    if format == "terminal" {
        println!("{}", BANNER.cyan().bold());
        println!(
            "{} {}",
            "[*] Scanning:".green().bold(),
            path.display().to_string().yellow()
        );
        println!(
            "{} {} dangerous function(s) configured",
            "[*] Taxonomy:".green().bold(),
            scanner.taxonomy().len()
        );
    }

    let mut results = perform_scan(&scanner, &path, recursive, format == "terminal")?;

    // Drop violations below the requested severity floor; diagnostics
    // are unaffected.
    if let Some(ref min_sev) = min_severity {
        let min = Severity::from_str(min_sev);
        for (_, result) in results.iter_mut() {
            if let Ok(violations) = result {
                violations.retain(|v| v.severity >= min);
            }
        }
    }

    let report = Report::build(&results);

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "markdown" => {
            let md = report.to_markdown();
            if let Some(ref out_path) = output {
                let report_path = out_path.join("security_report.md");
                std::fs::write(&report_path, &md)?;
                println!(
                    "{} {}",
                    "[+] Report saved to:".green(),
                    report_path.display().to_string().yellow()
                );
            } else {
                println!("{}", md);
            }
        }
        _ => {
            report.print_terminal();
            println!("\n{}", "=".repeat(60).cyan());
            report.print_summary();
        }
    }

    if report.has_violations() {
        std::process::exit(1);
    }

    Ok(())
}

/// Scans every Python file under a path.
///
/// Files that cannot be read are logged and skipped; files that cannot
/// be parsed surface as per-file diagnostics inside the results. Input
/// order follows the sorted file listing, so repeated runs over the same
/// tree produce identical reports.
fn perform_scan(
    scanner: &Scanner,
    path: &Path,
    recursive: bool,
    show_progress: bool,
) -> Result<Vec<(String, pysentinel::ScanResult)>> {
    use indicatif::{ProgressBar, ProgressStyle};

    let files = if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        collect_python_files(path, recursive)
    };

    if files.is_empty() {
        log::warn!("no Python files found under {}", path.display());
        return Ok(Vec::new());
    }

    let pb = if show_progress {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut results = Vec::with_capacity(files.len());

    for file_path in &files {
        if let Some(ref pb) = pb {
            pb.set_message(format!(
                "Analyzing {}",
                file_path.file_name().unwrap_or_default().to_string_lossy()
            ));
        }

        let unit_id = file_path.display().to_string();
        match std::fs::read_to_string(file_path) {
            Ok(source) => {
                let result = scanner.scan_unit(&unit_id, &source);
                if result.is_err() {
                    log::warn!("failed to parse {}", unit_id);
                }
                results.push((unit_id, result));
            }
            Err(e) => {
                log::warn!("failed to read {}: {}", unit_id, e);
            }
        }

        if let Some(ref pb) = pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    Ok(results)
}

/// Collects Python source files from a directory.
///
/// Skips housekeeping directories and sorts the listing so discovery
/// order is stable across repeated runs.
fn collect_python_files(dir: &Path, recursive: bool) -> Vec<PathBuf> {
    use walkdir::WalkDir;

    let walker = if recursive {
        WalkDir::new(dir)
    } else {
        WalkDir::new(dir).max_depth(1)
    };

    let mut files: Vec<PathBuf> = walker
        .into_iter()
        .filter_entry(|e| {
            e.file_name()
                .to_str()
                .map_or(true, |name| !SKIPPED_DIRS.contains(&name))
        })
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().is_file()
                && e.path().extension().map_or(false, |ext| ext == "py")
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    files
}

/// Loads the taxonomy from a file, or falls back to the built-in set.
fn load_taxonomy(path: Option<PathBuf>) -> Result<DangerousFunctions> {
    match path {
        Some(path) => Ok(DangerousFunctions::load(&path)?),
        None => Ok(DangerousFunctions::builtin()),
    }
}

/// Displays the active dangerous-function taxonomy.
fn list_taxonomy(taxonomy_path: Option<PathBuf>) -> Result<()> {
    let taxonomy = load_taxonomy(taxonomy_path)?;

    println!("{}", "[*] Dangerous function taxonomy:".green().bold());
    println!("{}", "-".repeat(60).cyan());

    for (name, severity) in taxonomy.entries() {
        println!(
            "  {} {} {}",
            severity.indicator().yellow(),
            format!("{:<10}", severity.to_string()).white(),
            name.cyan().bold()
        );
    }

    println!("\n  {} entries", taxonomy.len());
    Ok(())
}
