//! Integration tests for the tasty-new CLI.
//!
//! Each test runs the binary inside a fresh temporary project tree.

#![allow(deprecated)] // cargo_bin is deprecated but works fine for standard builds

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const LAYOUT_DIRS: [&str; 4] = ["include/tastylib", "src/tastylib", "src/benchmark", "test"];

fn project() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for sub in LAYOUT_DIRS {
        fs::create_dir_all(dir.path().join(sub)).expect("Failed to create layout");
    }
    dir
}

fn tasty_new(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tasty-new").unwrap();
    cmd.current_dir(root);
    cmd
}

fn file_count(root: &Path) -> usize {
    LAYOUT_DIRS
        .iter()
        .map(|sub| {
            fs::read_dir(root.join(sub))
                .map(|entries| {
                    entries
                        .filter_map(|e| e.ok())
                        .filter(|e| e.path().is_file())
                        .count()
                })
                .unwrap_or(0)
        })
        .sum()
}

// ============================================================================
// Help and usage
// ============================================================================

#[test]
fn test_help_shows_all_options() {
    Command::cargo_bin("tasty-new")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("<NAME>"))
        .stdout(predicate::str::contains("-s"))
        .stdout(predicate::str::contains("-b"))
        .stdout(predicate::str::contains("--no-color"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_version() {
    Command::cargo_bin("tasty-new")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_name_is_usage_error() {
    let dir = project();
    tasty_new(dir.path())
        .arg("-s")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
    assert_eq!(file_count(dir.path()), 0);
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let dir = project();
    tasty_new(dir.path())
        .args(["-x", "foo"])
        .assert()
        .code(2);
    assert_eq!(file_count(dir.path()), 0);
}

#[test]
fn test_invalid_name_is_usage_error() {
    let dir = project();
    tasty_new(dir.path())
        .arg("../foo")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid name"));
    assert_eq!(file_count(dir.path()), 0);
}

// ============================================================================
// Generation
// ============================================================================

#[test]
fn test_name_only_creates_header_and_test() {
    let dir = project();
    tasty_new(dir.path())
        .args(["-n", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating include/tastylib/foo.h ..."))
        .stdout(predicate::str::contains("Creating test/test_foo.cpp ..."));

    assert_eq!(file_count(dir.path()), 2);

    let header = fs::read_to_string(dir.path().join("include/tastylib/foo.h")).unwrap();
    assert!(header.contains("#ifndef TASTYLIB_FOO_H_"));
    assert!(header.contains("#define TASTYLIB_FOO_H_"));

    let test = fs::read_to_string(dir.path().join("test/test_foo.cpp")).unwrap();
    assert!(test.contains("#include \"gtest/gtest.h\""));
    assert!(test.contains("#include \"tastylib/foo.h\""));
}

#[test]
fn test_source_flag_adds_source() {
    let dir = project();
    tasty_new(dir.path()).args(["-s", "foo"]).assert().success();

    assert_eq!(file_count(dir.path()), 3);
    assert!(dir.path().join("src/tastylib/foo.cpp").is_file());
}

#[test]
fn test_benchmark_flag_adds_benchmark() {
    let dir = project();
    tasty_new(dir.path()).args(["-b", "foo"]).assert().success();

    assert_eq!(file_count(dir.path()), 3);
    assert!(dir.path().join("src/benchmark/benchmark_foo.cpp").is_file());
}

#[test]
fn test_both_flags_create_four_files() {
    let dir = project();
    tasty_new(dir.path())
        .args(["-n", "-s", "-b", "bar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating src/tastylib/bar.cpp ..."))
        .stdout(predicate::str::contains("Creating src/benchmark/benchmark_bar.cpp ..."));

    assert_eq!(file_count(dir.path()), 4);

    let source = fs::read_to_string(dir.path().join("src/tastylib/bar.cpp")).unwrap();
    assert!(source.contains("#include \"tastylib/bar.h\""));

    let bench = fs::read_to_string(dir.path().join("src/benchmark/benchmark_bar.cpp")).unwrap();
    assert!(bench.contains("int main()"));
}

#[test]
fn test_rerun_is_deterministic() {
    let dir = project();
    let header = dir.path().join("include/tastylib/foo.h");

    tasty_new(dir.path()).arg("foo").assert().success();
    let first = fs::read_to_string(&header).unwrap();

    tasty_new(dir.path()).arg("foo").assert().success();
    let second = fs::read_to_string(&header).unwrap();

    assert_eq!(first, second);
    assert_eq!(file_count(dir.path()), 2);
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = project();
    tasty_new(dir.path())
        .args(["--verbose", "--no-color", "foo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration"));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("include/tastylib")).unwrap();

    tasty_new(dir.path())
        .args(["-n", "foo"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Creating include/tastylib/foo.h ..."))
        .stdout(predicate::str::contains("Creating test/test_foo.cpp ..."))
        .stderr(predicate::str::contains("Cannot write test/test_foo.cpp"));

    // The header precedes the failing write and stays on disk.
    assert!(dir.path().join("include/tastylib/foo.h").is_file());
}
