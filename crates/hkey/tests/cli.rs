#![allow(missing_docs, clippy::tests_outside_test_module)]

use std::process::Command;

use assert_cmd::{
    assert::{Assert, OutputAssertExt},
    cargo::CommandCargoExt,
};

#[allow(deprecated)]
fn hkey(args: &[&str]) -> Assert {
    let mut cmd = Command::cargo_bin("hkey").expect("binary exists");
    cmd.args(args);
    cmd.assert()
}

fn stdout_of(assert: Assert) -> String {
    String::from_utf8(assert.success().get_output().stdout.clone()).expect("utf8 output")
}

fn stderr_of(assert: Assert) -> String {
    String::from_utf8(assert.failure().get_output().stderr.clone()).expect("utf8 output")
}

#[test]
fn enumerate_unit_square_matches_golden_output() {
    let out = stdout_of(hkey(&["enumerate", "-d", "2", "-m", "1"]));
    assert_eq!(
        out,
        "0 0 0\n3 0 1\n1 1 0\n2 1 1\n\n0 0 0\n1 1 0\n2 1 1\n3 0 1\n"
    );
}

#[test]
fn enumerate_lists_every_key_once() {
    let out = stdout_of(hkey(&["enumerate", "-d", "3", "-m", "2"]));
    let (by_cell, by_key) = out.split_once("\n\n").expect("two sections");

    let mut keys: Vec<u64> = by_cell
        .lines()
        .map(|l| l.split(' ').next().expect("key").parse().expect("number"))
        .collect();
    keys.sort_unstable();
    assert_eq!(keys, (0..64).collect::<Vec<u64>>());

    let lines: Vec<&str> = by_key.lines().collect();
    assert_eq!(lines.len(), 64);
    assert_eq!(lines[0], "0 0 0 0");
    for (i, line) in lines.iter().enumerate() {
        assert!(line.starts_with(&format!("{i} ")), "line {i}: {line}");
    }
}

#[test]
fn integer_key_and_back() {
    assert_eq!(stdout_of(hkey(&["key", "-d", "2", "-m", "3", "--int", "5", "6"])), "45\n");
    assert_eq!(stdout_of(hkey(&["coord", "-d", "2", "-m", "3", "--int", "45"])), "5 6\n");
}

#[test]
fn box_key_and_back() {
    let out = stdout_of(hkey(&["key", "-d", "3", "-m", "4", "-b", "100", "50", "25", "99.9"]));
    assert_eq!(out, "3081\n");
    let out = stdout_of(hkey(&["coord", "-d", "3", "-m", "4", "-b", "100", "100"]));
    assert_eq!(out, "12.5 18.75 31.25\n");
}

#[test]
fn one_dimension_is_identity() {
    assert_eq!(stdout_of(hkey(&["key", "-d", "1", "-m", "10", "--int", "777"])), "777\n");
}

#[test]
fn too_many_dimensions_fail() {
    let err = stderr_of(hkey(&["key", "-d", "11", "-m", "1", "--int", "0"]));
    assert!(err.contains("exceeds the supported maximum"), "stderr: {err}");
}

#[test]
fn out_of_range_key_fails() {
    let err = stderr_of(hkey(&["coord", "-d", "2", "-m", "2", "--int", "16"]));
    assert!(err.contains("out of range"), "stderr: {err}");
}

#[test]
fn negative_coordinate_fails() {
    let err = stderr_of(hkey(&["key", "-d", "2", "-m", "3", "0.5", "-0.25"]));
    assert!(err.contains("finite and non-negative"), "stderr: {err}");
}

#[test]
fn wrong_coordinate_count_fails() {
    let err = stderr_of(hkey(&["key", "-d", "3", "-m", "2", "--int", "1", "2"]));
    assert!(err.contains("expected 3 coordinates, got 2"), "stderr: {err}");
}

#[test]
fn huge_enumeration_is_refused() {
    let err = stderr_of(hkey(&["enumerate", "-d", "4", "-m", "8"]));
    assert!(err.contains("refusing to enumerate"), "stderr: {err}");
}
