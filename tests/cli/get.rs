//! Tests for reading secrets through the binary.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_get_root_entry_password() {
    let t = Test::new();

    let output = t.get("My GMail password");
    assert_success(&output);
    assert_eq!(stdout(&output), "hunter2\n");
}

#[test]
fn test_get_root_entry_field() {
    let t = Test::new();

    let output = t.get("My GMail password:UserName");
    assert_success(&output);
    assert_eq!(stdout(&output), "example@gmail.com\n");
}

#[test]
fn test_get_sub_group_entry() {
    let t = Test::new();

    let output = t.get("sub group/Another password");
    assert_success(&output);
    assert_eq!(stdout(&output), "123456\n");

    let output = t.get("sub group/Another password:Title");
    assert_success(&output);
    assert_eq!(stdout(&output), "Another password\n");
}

#[test]
fn test_get_missing_field_prints_empty_line() {
    let t = Test::new();

    let output = t.get("My GMail password:NoSuchField");
    assert_success(&output);
    assert_eq!(stdout(&output), "\n");
}

#[test]
fn test_verbose_keeps_stdout_clean() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--verbose", "sub group/Another password"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "123456\n");
}

#[test]
fn test_version_flag_prints_bare_version() {
    let t = Test::new();

    for flag in ["-V", "--version"] {
        t.bare_cmd()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::diff(format!("{}\n", env!("CARGO_PKG_VERSION"))));
    }
}

#[test]
fn test_help_lists_environment() {
    let t = Test::new();

    let output = t.bare_cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("KEEPASS_FILE_PATH"));
    assert!(out.contains("KEEPASS_PASSWORD"));
}
