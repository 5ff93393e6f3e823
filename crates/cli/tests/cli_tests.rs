// End-to-end tests for the `bideval` binary: exit codes, the --json stdout
// contract, and --output-dir artifacts.
//
// Run with: cargo test -p bideval-cli --test cli_tests -- --nocapture

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn bideval() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bideval"));
    cmd.env_remove("BIDEVAL_LOG");
    cmd
}

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../evaluator/tests/fixtures")
}

fn fixture(name: &str) -> String {
    fixtures().join(name).to_string_lossy().into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Assert stdout is a single, parseable JSON value with no extra lines.
fn assert_single_json(stdout: &[u8]) -> serde_json::Value {
    let text = String::from_utf8_lossy(stdout);
    let trimmed = text.trim();
    assert!(!trimmed.is_empty(), "stdout should not be empty");
    serde_json::from_str(trimmed)
        .unwrap_or_else(|e| panic!("stdout must be one JSON value.\nerror: {e}\nstdout:\n{trimmed}"))
}

/// Write a config plus spec table into a fresh temp dir.
fn scratch_config(config: &str, spec_csv: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("spec.csv"), spec_csv).unwrap();
    let config_path = dir.path().join("test.eval.toml");
    std::fs::write(&config_path, config).unwrap();
    (dir, config_path)
}

const SMALL_SPEC: &str = "line_code,item,spec_value\nL1,Flow,100 m3/h\nL2,Material,Duplex SS\n";

// ===========================================================================
// bideval run --json
// ===========================================================================

#[test]
fn run_json_is_single_array() {
    let output = bideval()
        .args([
            "run",
            &fixture("pump.eval.toml"),
            &fixture("vendor_a.csv"),
            &fixture("vendor_b.csv"),
            "--json",
        ])
        .output()
        .expect("bideval run --json");

    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let val = assert_single_json(&output.stdout);
    let docs = val.as_array().expect("top level must be an array");
    assert_eq!(docs.len(), 2);

    assert_eq!(docs[0]["meta"]["vendor"], "vendor_a");
    assert_eq!(docs[0]["meta"]["config_name"], "Centrifugal pump bid evaluation");
    assert_eq!(docs[0]["summary"]["total"], 10);
    assert_eq!(docs[0]["summary"]["compliant"], 10);

    let rows = docs[1]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0]["line_code"], "P01");
    assert_eq!(rows[0]["compliance"], "N");
    assert_eq!(rows[4]["compliance"], "C");
    assert_eq!(docs[1]["summary"]["unmatched_vendor_lines"], 1);
}

#[test]
fn run_table_goes_to_stdout() {
    let output = bideval()
        .args(["run", &fixture("pump.eval.toml"), &fixture("vendor_c.csv")])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("== vendor_c"), "stdout:\n{stdout}");
    assert_eq!(stdout.lines().filter(|l| l.starts_with('P')).count(), 10);
    assert!(stdout.lines().any(|l| l.starts_with("legend: Y = compliant")));
    assert!(stderr(&output).contains("vendor_c: 10 lines: 1 Y, 2 A, 0 N, 7 C"));
}

#[test]
fn quiet_suppresses_table_and_summary() {
    let output = bideval()
        .args(["run", "-q", &fixture("pump.eval.toml"), &fixture("vendor_a.csv")])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!stderr(&output).contains("lines:"));
}

// ===========================================================================
// --strict
// ===========================================================================

#[test]
fn strict_passes_clean_document() {
    let output = bideval()
        .args(["run", &fixture("pump.eval.toml"), &fixture("vendor_a.csv"), "--strict"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
}

#[test]
fn strict_fails_on_deviation() {
    let output = bideval()
        .args([
            "run",
            &fixture("pump.eval.toml"),
            &fixture("vendor_a.csv"),
            &fixture("vendor_b.csv"),
            "--strict",
            "--json",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(5));
    // JSON still printed before the strict check
    let val = assert_single_json(&output.stdout);
    assert_eq!(val.as_array().unwrap().len(), 2);
    assert!(stderr(&output).contains("--strict"));
}

// ===========================================================================
// Failure exit codes
// ===========================================================================

#[test]
fn inverted_band_is_invalid_config() {
    let (_dir, config) = scratch_config(
        "name = \"bad\"\n[spec]\nfile = \"spec.csv\"\n[tolerance]\nstrict = 0.2\nlenient = 0.1\n",
        SMALL_SPEC,
    );
    let output = bideval()
        .args(["validate", config.to_str().unwrap()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let err = stderr(&output);
    assert!(err.contains("lenient"), "stderr: {err}");
    assert!(err.contains("hint:"));
}

#[test]
fn unknown_key_is_invalid_config() {
    let (_dir, config) = scratch_config(
        "name = \"bad\"\n[spec]\nfile = \"spec.csv\"\n[tolerances]\nstrict = 0.1\n",
        SMALL_SPEC,
    );
    let output = bideval()
        .args(["validate", config.to_str().unwrap()])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn missing_spec_column_is_runtime_error() {
    let (_dir, config) = scratch_config(
        "name = \"t\"\n[spec]\nfile = \"spec.csv\"\n",
        "code,item,spec_value\nL1,Flow,100\n",
    );
    let output = bideval()
        .args(["validate", config.to_str().unwrap()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("line_code"));
}

#[test]
fn blank_spec_value_is_runtime_error() {
    let (_dir, config) = scratch_config(
        "name = \"t\"\n[spec]\nfile = \"spec.csv\"\n",
        "line_code,item,spec_value\nL1,Flow,100 m3/h\nL2,Driver,\n",
    );
    let output = bideval()
        .args(["validate", config.to_str().unwrap()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("row 2: empty 'spec_value'"));
}

#[test]
fn zero_reference_is_runtime_error() {
    let (dir, config) = scratch_config(
        "name = \"t\"\n[spec]\nfile = \"spec.csv\"\n",
        "line_code,item,spec_value\nL1,Leakage,0 ml/h\n",
    );
    let vendor = dir.path().join("acme.csv");
    std::fs::write(&vendor, "line_code,item,vendor_value\nL1,Leakage,2 ml/h\n").unwrap();

    let output = bideval()
        .args(["run", config.to_str().unwrap(), vendor.to_str().unwrap()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(4));
    let err = stderr(&output);
    assert!(err.contains("L1"), "stderr: {err}");
    assert!(err.contains("zero_reference"), "stderr: {err}");
}

#[test]
fn missing_vendor_file_is_runtime_error() {
    let output = bideval()
        .args(["run", &fixture("pump.eval.toml"), "no_such_vendor.csv"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn run_without_vendors_is_usage_error() {
    let output = bideval()
        .args(["run", &fixture("pump.eval.toml")])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

// ===========================================================================
// validate / --output-dir
// ===========================================================================

#[test]
fn validate_reports_counts() {
    let output = bideval()
        .args(["validate", &fixture("pump.eval.toml")])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("10 spec lines"));
}

#[test]
fn output_dir_receives_csv_and_json() {
    let out = tempfile::tempdir().unwrap();
    let target = out.path().join("results");

    let output = bideval()
        .args([
            "run",
            "-q",
            &fixture("pump.eval.toml"),
            &fixture("vendor_b.csv"),
            "--output-dir",
            target.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let csv = std::fs::read_to_string(target.join("vendor_b_eval.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("line_code,item,spec_value,vendor_value,vendor,compliance")
    );
    assert_eq!(lines.count(), 10);

    let json = std::fs::read_to_string(target.join("vendor_b_eval.json")).unwrap();
    let val: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(val["summary"]["compliant"], 1);
    assert_eq!(val["summary"]["non_compliant"], 7);
    assert_eq!(val["summary"]["clarification"], 2);
}

#[test]
fn output_dir_that_is_a_file_is_usage_error() {
    let out = tempfile::tempdir().unwrap();
    let file = out.path().join("taken");
    std::fs::write(&file, "x").unwrap();

    let output = bideval()
        .args([
            "run",
            &fixture("pump.eval.toml"),
            &fixture("vendor_a.csv"),
            "--output-dir",
            file.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}
