//! Integration tests for the `sfx` command line.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Run sfx with an isolated (absent) config file
fn run_sfx(args: &[&str], config_dir: &Path) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_sfx"))
        .args(args)
        .arg("--color=never")
        .env("SFX_CONFIG", config_dir.join("config.json"))
        .output()
        .expect("Failed to run sfx");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

fn fixture() -> (TempDir, String) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("seq.txt");
    fs::write(&path, "GATATATGCA\nTATACTT\n").unwrap();
    let path = path.to_string_lossy().to_string();
    (dir, path)
}

#[test]
fn test_find_sorted_positions() {
    let (dir, path) = fixture();
    let (stdout, _, code) = run_sfx(&["find", "--strip-newlines", &path, "ATAT", "GG"], dir.path());

    assert_eq!(code, 0);
    assert_eq!(stdout, "ATAT:1 3 9\nGG:\n");
}

#[test]
fn test_count_literal() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_sfx(&["count", "--literal", "aaaa", "aa", "a", "b"], dir.path());

    assert_eq!(code, 0);
    assert_eq!(stdout, "aa:3\na:4\nb:0\n");
}

#[test]
fn test_contains_exit_status() {
    let dir = TempDir::new().unwrap();

    let (stdout, _, code) = run_sfx(&["contains", "--literal", "banana", "nan"], dir.path());
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "true");

    let (stdout, _, code) = run_sfx(&["contains", "--literal", "banana", "nab"], dir.path());
    assert_eq!(code, 1);
    assert_eq!(stdout.trim(), "false");
}

#[test]
fn test_lrs_and_lcs() {
    let dir = TempDir::new().unwrap();

    let (stdout, _, code) = run_sfx(&["lrs", "--literal", "mississippi"], dir.path());
    assert_eq!(code, 0);
    assert!(stdout.starts_with("issi (len 4"), "{}", stdout);

    let (stdout, _, code) = run_sfx(&["lcs", "--literal", "hello", "yellow"], dir.path());
    assert_eq!(code, 0);
    assert!(stdout.starts_with("ello (len 4"), "{}", stdout);
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_sfx(&["find", "--json", "--literal", "banana", "ana"], dir.path());
    assert_eq!(code, 0);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value[0]["pattern"], "ana");
    assert_eq!(value[0]["count"], 2);
    assert_eq!(value[0]["positions"], serde_json::json!([1, 3]));
}

#[test]
fn test_stats_json() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_sfx(&["stats", "--json", "--literal", "abcabc"], dir.path());
    assert_eq!(code, 0);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["text_len"], 6);
    assert_eq!(value["max_repeat_len"], 3);
}

#[test]
fn test_ignore_case_flag() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, _) = run_sfx(&["count", "-i", "--literal", "AcGtacgt", "ACGT"], dir.path());
    assert_eq!(stdout, "ACGT:2\n");
}

#[test]
fn test_config_file_is_honored() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), r#"{"tree": {"case_insensitive": true}}"#).unwrap();

    let (stdout, _, _) = run_sfx(&["count", "--literal", "ACGT", "acgt"], dir.path());
    assert_eq!(stdout, "acgt:1\n");
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");
    let (_, stderr, code) = run_sfx(&["stats", missing.to_str().unwrap()], dir.path());

    assert_eq!(code, 2);
    assert!(stderr.contains("Failed to open"), "{}", stderr);
}

#[test]
fn test_terminator_in_input_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.bin");
    fs::write(&path, b"AC\x00GT").unwrap();

    let (_, stderr, code) = run_sfx(&["stats", path.to_str().unwrap()], dir.path());
    assert_eq!(code, 2);
    assert!(stderr.contains("Invalid input"), "{}", stderr);
}
