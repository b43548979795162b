use indoc::indoc;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Run the binary inside `dir` with a clean environment
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_linesift"))
        .args(args)
        .current_dir(dir)
        .env_remove("LINESIFT_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute linesift")
}

fn fixture_args() -> (String, String) {
    (
        fixture("in1.txt").display().to_string(),
        fixture("in2.txt").display().to_string(),
    )
}

#[test]
fn test_cli_writes_files_and_prints_short_stats() {
    let temp_dir = TempDir::new().unwrap();
    let (in1, in2) = fixture_args();

    let output = run_in(
        temp_dir.path(),
        &["-s", "-o", "out", "-p", "sample-", &in1, &in2],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        indoc! {"
            Short statistics:
            Integers: 3
            Floats: 3
            Strings: 6
        "}
    );

    let out_dir = temp_dir.path().join("out");
    let integers = fs::read_to_string(out_dir.join("sample-integers.txt")).unwrap();
    assert_eq!(
        integers.lines().collect::<Vec<_>>(),
        vec!["45", "100500", "1234567890123456789"]
    );
    assert!(out_dir.join("sample-floats.txt").exists());
    assert!(out_dir.join("sample-strings.txt").exists());
}

#[test]
fn test_cli_full_stats_include_exact_sums() {
    let temp_dir = TempDir::new().unwrap();
    let (in1, in2) = fixture_args();

    let output = run_in(temp_dir.path(), &["-f", &in1, &in2]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(stdout.starts_with("Full statistics:\n"));
    assert!(stdout.contains(
        "Integers: 3 (Min: 45, Max: 1234567890123456789, Sum: 1234567890123557334, Avg: 411522630041185778)"
    ));
    assert!(stdout.contains("Strings: 6 (Min Length: 4, Max Length: 42)"));
    assert!(!stdout.contains("Short statistics"));
}

#[test]
fn test_cli_json_stats() {
    let temp_dir = TempDir::new().unwrap();
    let (in1, in2) = fixture_args();

    let output = run_in(temp_dir.path(), &["-f", "--stats-format", "json", &in1, &in2]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["float_count"], 3);
    assert_eq!(
        value["full"]["floats"]["sum"],
        "3.1405000000000000000000001528535047"
    );
    assert_eq!(
        value["full"]["floats"]["average"],
        "1.0468333333333333333333333842845016"
    );
}

#[test]
fn test_cli_without_files_prints_usage() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &["-s"]);
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("No input files given"));
    assert!(stderr.contains("Usage:"));
}

#[test]
fn test_cli_missing_file_is_reported_and_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let (_, in2) = fixture_args();

    let output = run_in(temp_dir.path(), &["-s", "missing.txt", &in2]);
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(output.status.success());
    assert!(stderr.contains("Input file not found: missing.txt"));
    assert!(String::from_utf8(output.stdout).unwrap().contains("Integers: 1"));
}

#[test]
fn test_cli_rejects_malformed_arguments() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &["--stats-format", "yaml", "in.txt"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_cli_append_mode_accumulates_runs() {
    let temp_dir = TempDir::new().unwrap();
    let (_, in2) = fixture_args();

    run_in(temp_dir.path(), &[&in2]);
    run_in(temp_dir.path(), &["-a", &in2]);

    let strings = fs::read_to_string(temp_dir.path().join("strings.txt")).unwrap();
    assert_eq!(strings.lines().count(), 4);
}

#[test]
fn test_cli_reads_config_file_from_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    let (in1, _) = fixture_args();
    fs::write(
        temp_dir.path().join(".linesift.toml"),
        indoc! {r#"
            [output]
            path = "results"
            prefix = "cfg-"

            [stats]
            short = true
        "#},
    )
    .unwrap();

    let output = run_in(temp_dir.path(), &["-p", "flag-", &in1]);

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().starts_with("Short statistics:"));
    // Flags win over the config file
    assert!(temp_dir.path().join("results/flag-integers.txt").exists());
    assert!(!temp_dir.path().join("results/cfg-integers.txt").exists());
}

#[test]
fn test_cli_reports_write_failure() {
    let temp_dir = TempDir::new().unwrap();
    let (in1, _) = fixture_args();
    fs::write(temp_dir.path().join("blocker"), "").unwrap();

    let output = run_in(temp_dir.path(), &["-o", "blocker/out", &in1]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr).unwrap().contains("Failed to write"));
}

#[test]
fn test_cli_rejects_prefix_with_path_separator() {
    let temp_dir = TempDir::new().unwrap();
    let (in1, _) = fixture_args();

    let output = run_in(temp_dir.path(), &["-p", "nested/run-", &in1]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr).unwrap().contains("must not contain a path separator"));
    assert!(!temp_dir.path().join("nested").exists());
}
