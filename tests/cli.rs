//! End-to-end tests for the jsonv binary
//!
//! stdout is piped under the test harness, so the binary always takes
//! the static-tree path; the interactive loop is covered by the viewer
//! unit tests instead.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn payload_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write payload");
    file
}

#[test]
fn valid_payload_prints_a_tree() {
    let file = payload_file(r#"{"orderId": 42, "status": "delivered"}"#);

    Command::cargo_bin("jsonv")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("orderId: 42"))
        .stdout(predicate::str::contains("status: \"delivered\""));
}

#[test]
fn plain_flag_forces_static_output() {
    let file = payload_file("[1, 2, 3]");

    Command::cargo_bin("jsonv")
        .unwrap()
        .arg("--plain")
        .arg(file.path())
        .assert()
        .success()
        .stdout("☰ [3]\n├─ # [0]: 1\n├─ # [1]: 2\n└─ # [2]: 3\n");
}

#[test]
fn invalid_payload_prints_raw_text_and_warns() {
    let file = payload_file("not valid json");

    Command::cargo_bin("jsonv")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout("not valid json\n")
        .stderr(predicate::str::contains("could not be parsed"));
}

#[test]
fn stdin_payload_is_supported() {
    Command::cargo_bin("jsonv")
        .unwrap()
        .arg("-")
        .write_stdin(r#"{"nested": {"b": true}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("b: true"));
}

#[test]
fn empty_payload_produces_no_output() {
    let file = payload_file("");

    Command::cargo_bin("jsonv")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("could not be parsed").not());
}

#[test]
fn missing_file_is_an_io_error() {
    Command::cargo_bin("jsonv")
        .unwrap()
        .arg("/nonexistent/payload.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
