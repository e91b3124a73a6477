use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use def_rewrite::{Preset, checksum};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Copy a fixture into a scratch directory so runs can rewrite it
fn scratch_copy(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &path).expect("Failed to copy fixture");
    (dir, path)
}

fn run(file: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_def-rewrite"))
        .arg("--file")
        .arg(file)
        .args(extra)
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn test_default_preset_rewrites_validator() {
    let (_dir, path) = scratch_copy("rules.bzl");
    let original = fs::read_to_string(&path).unwrap();

    let output = run(&path, &[]);

    assert!(output.status.success(), "Binary failed: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Replaced _validate_provisioning_profile (lines 3-9)"),
        "Unexpected output: {}",
        stdout
    );

    let rewritten = fs::read_to_string(&path).unwrap();
    let expected = format!(
        "load(\"@bazel_skylib//lib:paths.bzl\", \"paths\")\n\n{}\n{}",
        Preset::ValidateProvisioningProfile.replacement(),
        "def _codesigning_command(ctx, entitlements):\n    return paths.join(ctx.label.package, entitlements)\n"
    );
    assert_eq!(rewritten, expected);
    assert!(stdout.contains(&format!("Final checksum: {}", checksum(&rewritten))));
    assert_ne!(checksum(&original), checksum(&rewritten));
}

#[test]
fn test_second_run_leaves_file_stable() {
    let (_dir, path) = scratch_copy("rules.bzl");

    assert!(run(&path, &[]).status.success());
    let first = fs::read_to_string(&path).unwrap();
    assert!(run(&path, &[]).status.success());
    let second = fs::read_to_string(&path).unwrap();

    assert_eq!(second, first);
}

#[test]
fn test_dry_run_does_not_write() {
    let (_dir, path) = scratch_copy("rules.bzl");
    let original = fs::read_to_string(&path).unwrap();

    let output = run(&path, &["--dry-run"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Would replace"), "Unexpected output: {}", stdout);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_default_preset_skips_trailing_validator() {
    let (_dir, path) = scratch_copy("trailing.bzl");
    let original = fs::read_to_string(&path).unwrap();

    let output = run(&path, &[]);

    assert!(output.status.success(), "No match must not be an error");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("file unchanged"), "Unexpected output: {}", stdout);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_tail_preset_rewrites_trailing_validator() {
    let (_dir, path) = scratch_copy("trailing.bzl");

    let output = run(&path, &["--preset", "validate-provisioning-profile-tail"]);

    assert!(output.status.success(), "Binary failed: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!(
            "_DEVICE_PLATFORMS = [\"ios_device\"]\n\n{}",
            Preset::ValidateProvisioningProfileTail.replacement()
        )
    );
}

#[test]
fn test_custom_name_and_replacement() {
    let (_dir, path) = scratch_copy("unrelated.bzl");

    let output = run(
        &path,
        &[
            "--name",
            "_codesigning_command",
            "--replacement",
            "def _codesigning_command(ctx, entitlements):\n    return None\n",
            "--span-end",
            "next-definition-or-eof",
        ],
    );

    assert!(output.status.success(), "Binary failed: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "def _codesigning_command(ctx, entitlements):\n    return None\n"
    );
}

#[test]
fn test_checksum_mismatch() {
    let (_dir, path) = scratch_copy("rules.bzl");
    let original = fs::read_to_string(&path).unwrap();

    let output = run(&path, &["--expected-checksum", "af1234567890abcdef"]);

    assert!(!output.status.success(), "Binary should have failed with checksum mismatch");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Checksum mismatch"), "Expected checksum error, got: {}", stdout);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_matching_checksum_allows_rewrite() {
    let (_dir, path) = scratch_copy("rules.bzl");
    let original = fs::read_to_string(&path).unwrap();

    let sum = checksum(&original);

    let output = run(&path, &["--expected-checksum", sum.as_str()]);

    assert!(output.status.success());
    assert_ne!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_json_output() {
    let (_dir, path) = scratch_copy("rules.bzl");

    let output = run(&path, &["--json"]);

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    assert_eq!(report["success"], true);
    assert_eq!(report["status"], "replaced");
    assert_eq!(report["target"], "_validate_provisioning_profile");
    assert_eq!(report["start_line"], 3);
    assert_eq!(report["end_line"], 9);
    assert!(report["span"]["start"].as_u64().is_some());
    assert!(report["span"]["end"].as_u64() > report["span"]["start"].as_u64());
    assert!(report["execution_id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[test]
fn test_output_to_file() {
    let (dir, path) = scratch_copy("unrelated.bzl");
    let report_path = dir.path().join("report.json");

    let output = run(&path, &["--json", "--output", report_path.to_str().unwrap()]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "Report should not go to stdout");
    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["status"], "unchanged");
}

#[test]
fn test_missing_file() {
    let output = run(Path::new("/nonexistent/rules.bzl"), &[]);

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("File not found"), "Unexpected output: {}", stdout);
}

#[test]
fn test_invalid_name_fails() {
    let (_dir, path) = scratch_copy("rules.bzl");

    let output = run(&path, &["--name", "not a name"]);

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Invalid function name"), "Unexpected output: {}", stdout);
}
