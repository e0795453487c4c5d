//! End-to-end tests driving the compiled `pysentinel` binary against the
//! fixture scripts under `tests/test_scripts/`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn pysentinel() -> Command {
    Command::cargo_bin("pysentinel").expect("binary builds")
}

fn fixture(name: &str) -> String {
    format!("{}/tests/test_scripts/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn scan_vulnerable_file_reports_violations_and_fails() {
    pysentinel()
        .args(["scan", &fixture("vulnerable_script.py")])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("os.system"))
        .stdout(predicate::str::contains("pickle.loads"));
}

#[test]
fn scan_clean_file_succeeds() {
    pysentinel()
        .args(["scan", &fixture("clean_script.py")])
        .assert()
        .success()
        .stdout(predicate::str::contains("No dangerous calls found"));
}

#[test]
fn scan_broken_file_reports_diagnostic_without_crashing() {
    pysentinel()
        .args(["scan", &fixture("broken_script.py")])
        .assert()
        .success()
        .stdout(predicate::str::contains("failed to parse"));
}

#[test]
fn scan_directory_covers_all_fixtures() {
    let fixtures_dir = format!("{}/tests/test_scripts", env!("CARGO_MANIFEST_DIR"));

    let output = pysentinel()
        .args(["scan", &fixtures_dir, "--format", "json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON report");

    assert_eq!(report["summary"]["units_scanned"], 3);
    assert_eq!(report["summary"]["units_with_violations"], 1);
    assert_eq!(report["summary"]["units_failed"], 1);
    assert_eq!(report["summary"]["total_violations"], 3);

    // The broken fixture contributes a diagnostic, not violations.
    let diagnostics = report["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0]["unit_id"]
        .as_str()
        .unwrap()
        .ends_with("broken_script.py"));
}

#[test]
fn json_violations_are_line_ordered() {
    let output = pysentinel()
        .args(["scan", &fixture("vulnerable_script.py"), "--format", "json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON report");
    let violations = report["files"][0]["violations"].as_array().unwrap();

    let lines: Vec<u64> = violations
        .iter()
        .map(|v| v["line"].as_u64().unwrap())
        .collect();
    let mut sorted = lines.clone();
    sorted.sort_unstable();
    assert_eq!(lines, sorted);
}

#[test]
fn severity_floor_filters_low_findings() {
    let mut file = tempfile::Builder::new().suffix(".py").tempfile().unwrap();
    writeln!(file, "data = open(path).read()").unwrap();
    writeln!(file, "eval(data)").unwrap();
    file.flush().unwrap();

    let output = pysentinel()
        .args([
            "scan",
            file.path().to_str().unwrap(),
            "--format",
            "json",
            "--severity",
            "high",
        ])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON report");
    assert_eq!(report["summary"]["total_violations"], 1);
    assert_eq!(
        report["files"][0]["violations"][0]["function_name"],
        "eval"
    );
}

#[test]
fn custom_taxonomy_replaces_builtin_set() {
    let mut taxonomy = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        taxonomy,
        r#"[{{ "name": "yaml.load", "severity": "high" }}]"#
    )
    .unwrap();
    taxonomy.flush().unwrap();

    let mut script = tempfile::Builder::new().suffix(".py").tempfile().unwrap();
    writeln!(script, "config = yaml.load(stream)").unwrap();
    writeln!(script, "eval(config)").unwrap();
    script.flush().unwrap();

    let output = pysentinel()
        .args([
            "scan",
            script.path().to_str().unwrap(),
            "--format",
            "json",
            "--taxonomy",
            taxonomy.path().to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON report");
    assert_eq!(report["summary"]["total_violations"], 1);
    // eval is no longer flagged once the custom taxonomy replaces defaults.
    assert_eq!(
        report["files"][0]["violations"][0]["function_name"],
        "yaml.load"
    );
}

#[test]
fn scan_skips_housekeeping_directories() {
    let dir = tempfile::tempdir().unwrap();

    std::fs::create_dir(dir.path().join("__pycache__")).unwrap();
    std::fs::write(
        dir.path().join("__pycache__").join("cached.py"),
        "eval(payload)\n",
    )
    .unwrap();

    std::fs::create_dir(dir.path().join("venv")).unwrap();
    std::fs::write(dir.path().join("venv").join("lib.py"), "os.system(cmd)\n").unwrap();

    std::fs::write(dir.path().join("app.py"), "eval(data)\n").unwrap();

    let output = pysentinel()
        .args(["scan", dir.path().to_str().unwrap(), "--format", "json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON report");

    // Only app.py is discovered; __pycache__ and venv are never descended into.
    assert_eq!(report["summary"]["units_scanned"], 1);
    assert_eq!(report["summary"]["total_violations"], 1);
    assert!(report["files"][0]["unit_id"]
        .as_str()
        .unwrap()
        .ends_with("app.py"));
}

#[test]
fn no_recursive_limits_scan_to_top_level() {
    let dir = tempfile::tempdir().unwrap();

    std::fs::write(dir.path().join("top.py"), "eval(data)\n").unwrap();
    std::fs::create_dir(dir.path().join("nested")).unwrap();
    std::fs::write(dir.path().join("nested").join("deep.py"), "os.system(cmd)\n").unwrap();

    let flat = pysentinel()
        .args([
            "scan",
            dir.path().to_str().unwrap(),
            "--format",
            "json",
            "--no-recursive",
        ])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let flat_report: serde_json::Value = serde_json::from_slice(&flat).expect("valid JSON report");
    assert_eq!(flat_report["summary"]["units_scanned"], 1);
    assert!(flat_report["files"][0]["unit_id"]
        .as_str()
        .unwrap()
        .ends_with("top.py"));

    // Without the flag the nested file is scanned too.
    let deep = pysentinel()
        .args(["scan", dir.path().to_str().unwrap(), "--format", "json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let deep_report: serde_json::Value = serde_json::from_slice(&deep).expect("valid JSON report");
    assert_eq!(deep_report["summary"]["units_scanned"], 2);
}

#[test]
fn list_prints_builtin_taxonomy() {
    pysentinel()
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("os.system"))
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("12 entries"));
}

#[test]
fn markdown_report_written_to_output_dir() {
    let out_dir = tempfile::tempdir().unwrap();

    pysentinel()
        .args([
            "scan",
            &fixture("vulnerable_script.py"),
            "--format",
            "markdown",
            "--output",
            out_dir.path().to_str().unwrap(),
        ])
        .assert()
        .code(1);

    let report = std::fs::read_to_string(out_dir.path().join("security_report.md")).unwrap();
    assert!(report.contains("# PySentinel Security Report"));
    assert!(report.contains("`eval`"));
}
