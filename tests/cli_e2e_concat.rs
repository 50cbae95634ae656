//! End-to-end tests for the `concat` command
//!
//! These tests invoke the actual CLI binary and validate its behavior
//! from a user's perspective.

mod common;

use common::prelude::*;
use std::fs;

/// Test that --help flag shows help information
#[test]
fn test_concat_help() {
    let mut cmd = cargo_bin_cmd!("depcat");

    cmd.arg("concat")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Resolve require dependencies and concatenate files",
        ));
}

/// Test that a missing root directory produces an error
#[test]
fn test_concat_missing_root() {
    let fixture = TestFixture::new();
    let mut cmd = cargo_bin_cmd!("depcat");

    cmd.arg("concat")
        .arg("--root")
        .arg(fixture.path("nope"))
        .arg("--output")
        .arg(fixture.path("bundle.out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid root directory path"));
}

/// Test the full pipeline on the standard chain
#[test]
fn test_concat_chain() {
    let fixture = TestFixture::new().with_chain();
    let output = fixture.path("bundle.out");

    let mut cmd = cargo_bin_cmd!("depcat");
    cmd.arg("concat")
        .arg("--root")
        .arg(fixture.root())
        .arg("--output")
        .arg(&output)
        .arg("--quiet")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "alpha\nrequire \"a.txt\"\nbeta\nrequire \"b.txt\"\ngamma\n"
    );
}

/// Test that a cyclic tree fails and prints the cycle error
#[test]
fn test_concat_cycle_fails() {
    let fixture = TestFixture::new().with_cycle();

    let mut cmd = cargo_bin_cmd!("depcat");
    cmd.arg("concat")
        .arg("--root")
        .arg(fixture.root())
        .arg("--output")
        .arg(fixture.path("bundle.out"))
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cyclic dependency detected"));

    assert!(!fixture.path("bundle.out").exists());
}

/// Test that a dangling reference is a warning, not a failure
#[test]
fn test_concat_dangling_reference_warns() {
    let fixture = TestFixture::new()
        .write("a.txt", "alpha\n")
        .write("b.txt", "require \"gone.txt\"\nrequire \"a.txt\"\n");

    let mut cmd = cargo_bin_cmd!("depcat");
    cmd.arg("concat")
        .arg("--root")
        .arg(fixture.root())
        .arg("--output")
        .arg(fixture.path("bundle.out"))
        .arg("--color")
        .arg("never")
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid reference \"gone.txt\""));

    assert!(fixture.path("bundle.out").exists());
}

/// Test that --verbose lists the resolved order
#[test]
fn test_concat_verbose_lists_order() {
    let fixture = TestFixture::new().with_chain();

    let mut cmd = cargo_bin_cmd!("depcat");
    cmd.arg("concat")
        .arg("--root")
        .arg(fixture.root())
        .arg("--output")
        .arg(fixture.path("bundle.out"))
        .arg("--verbose")
        .arg("--color")
        .arg("never")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("Concatenated 3 files"));
}

/// Test that --quiet suppresses the summary
#[test]
fn test_concat_quiet() {
    let fixture = TestFixture::new().with_chain();

    let mut cmd = cargo_bin_cmd!("depcat");
    cmd.arg("concat")
        .arg("--root")
        .arg(fixture.root())
        .arg("--output")
        .arg(fixture.path("bundle.out"))
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

/// Test that running twice produces identical output (idempotence)
#[test]
fn test_concat_idempotent() {
    let fixture = TestFixture::new().with_chain();
    let output = fixture.path("bundle.out");

    for _ in 0..2 {
        let mut cmd = cargo_bin_cmd!("depcat");
        cmd.arg("concat")
            .arg("--root")
            .arg(fixture.root())
            .arg("--output")
            .arg(&output)
            .arg("--quiet")
            .assert()
            .success();
    }

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "alpha\nrequire \"a.txt\"\nbeta\nrequire \"b.txt\"\ngamma\n"
    );
}
