//! Integration tests for the `shadow` CLI binary.
//!
//! Exercises the get, update, and send subcommands through the actual
//! binary with `assert_cmd` and `predicates`, including stdin piping,
//! file I/O, ack event lines, and the bridge routing rules.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the nested-form batch fixture.
fn update_batch_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/update_batch.json")
}

/// Helper: path to the flat-form batch fixture.
fn flat_batch_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/flat_batch.json")
}

// ─────────────────────────────────────────────────────────────────────────────
// Get subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn get_prints_seed_payload() {
    Command::cargo_bin("shadow")
        .unwrap()
        .arg("get")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""version":1"#))
        .stdout(predicate::str::contains(r#""powerSwitch":0"#))
        .stdout(predicate::str::contains(r#""errorCodeArr":[]"#));
}

#[test]
fn get_payload_does_not_name_the_device() {
    Command::cargo_bin("shadow")
        .unwrap()
        .arg("get")
        .assert()
        .success()
        .stdout(predicate::str::contains("debug-device-1").not());
}

// ─────────────────────────────────────────────────────────────────────────────
// Update subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn update_from_stdin_emits_ack_and_payload() {
    Command::cargo_bin("shadow")
        .unwrap()
        .arg("update")
        .write_stdin(r#"[{"state":{"desired":{"powerSwitch":1}}}]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("onRemoteMessage"))
        .stdout(predicate::str::contains(
            "$aws/things/debug-device-1/shadow/get/accepted",
        ))
        .stdout(predicate::str::contains(r#""version":2"#));
}

#[test]
fn update_from_file_rewrites_alias() {
    Command::cargo_bin("shadow")
        .unwrap()
        .args(["update", "-i", update_batch_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""targetTemperature":20"#))
        .stdout(predicate::str::contains("targetCelsiusDegree").not());
}

#[test]
fn update_last_write_wins_across_requests() {
    Command::cargo_bin("shadow")
        .unwrap()
        .args(["update", "-i", flat_batch_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""windSpeed":2"#))
        .stdout(predicate::str::contains(r#""sleep":1"#));
}

#[test]
fn update_writes_payload_to_file() {
    let output_path = "/tmp/shadow-test-update-output.json";
    let _ = std::fs::remove_file(output_path);

    Command::cargo_bin("shadow")
        .unwrap()
        .args(["update", "-i", update_batch_path(), "-o", output_path])
        .assert()
        .success();

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    assert!(content.contains(r#""version":2"#));
    assert!(content.starts_with(r#"{"state":{"reported":"#));

    let _ = std::fs::remove_file(output_path);
}

#[test]
fn update_empty_batch_keeps_version_1() {
    Command::cargo_bin("shadow")
        .unwrap()
        .arg("update")
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::contains("onRemoteMessage").not())
        .stdout(predicate::str::contains(r#""version":1"#));
}

#[test]
fn update_rejects_non_array_input() {
    Command::cargo_bin("shadow")
        .unwrap()
        .arg("update")
        .write_stdin(r#"{"powerSwitch":1}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode update batch"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Send subcommand (bridge routing)
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn send_shadow_update_path_applies() {
    Command::cargo_bin("shadow")
        .unwrap()
        .args(["send", "--path", "panel/shadow/update"])
        .write_stdin(r#"[{"powerSwitch":1}]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("onRemoteMessage"))
        .stdout(predicate::str::contains(r#""version":2"#));
}

#[test]
fn send_other_path_is_display_only() {
    Command::cargo_bin("shadow")
        .unwrap()
        .args(["send", "--path", "panel/telemetry/upload"])
        .write_stdin(r#"[{"powerSwitch":1}]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("onRemoteMessage").not())
        .stdout(predicate::str::contains(r#""version":1"#));
}

#[test]
fn send_logs_pretty_payload_when_tracing_enabled() {
    Command::cargo_bin("shadow")
        .unwrap()
        .env("RUST_LOG", "shadow_engine=info")
        .args(["send", "--path", "panel/telemetry/upload"])
        .write_stdin(r#"[{"powerSwitch":1}]"#)
        .assert()
        .success()
        .stderr(predicate::str::contains("SEND path=panel/telemetry/upload"))
        .stderr(predicate::str::contains(r#"{"powerSwitch":1}"#));
}
