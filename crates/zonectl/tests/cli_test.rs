//! Integration tests for the `zonectl` CLI binary.
//!
//! These tests validate argument parsing, record building, report output,
//! config handling, and error diagnostics. Every test points the config at
//! its own temp directory so the user's real configuration is never read.
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `zonectl` binary with env isolation.
///
/// Clears all `ZONECTL_*` env vars and points the config file into `dir`.
fn zonectl_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("zonectl");
    cmd.env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir)
        .env("ZONECTL_CONFIG", config_file(dir))
        .env("NO_COLOR", "1")
        .env_remove("ZONECTL_OUTPUT")
        .env_remove("ZONECTL_DEFAULTS__OUTPUT")
        .env_remove("ZONECTL_DEFAULTS__COLOR")
        .env_remove("ZONECTL_DEFAULTS__RECORDS_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn config_file(dir: &Path) -> PathBuf {
    dir.join("config.toml")
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// A descriptor file with a good A record, an unknown type, and a
/// truncated A body.
fn write_records(dir: &Path) -> PathBuf {
    let path = dir.join("records.json");
    let json = serde_json::json!([
        { "name": "example.com", "type": 1, "dclass": 1, "ttl": 3600, "rawData": "0a000005" },
        { "name": "example.com.", "type": 99, "dclass": 1, "ttl": 60, "rawData": "010203" },
        { "name": "broken.example.com", "type": 1, "dclass": 1, "ttl": 30, "rawData": "0a00" }
    ]);
    std::fs::write(&path, json.to_string()).unwrap();
    path
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let dir = TempDir::new().unwrap();
    let output = zonectl_cmd(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    let dir = TempDir::new().unwrap();
    zonectl_cmd(dir.path()).arg("--help").assert().success().stdout(
        predicate::str::contains("DNS")
            .and(predicate::str::contains("record"))
            .and(predicate::str::contains("records"))
            .and(predicate::str::contains("config")),
    );
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    zonectl_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("zonectl"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    zonectl_cmd(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    let dir = TempDir::new().unwrap();
    zonectl_cmd(dir.path())
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── record ──────────────────────────────────────────────────────────

#[test]
fn test_record_a_report() {
    let dir = TempDir::new().unwrap();
    zonectl_cmd(dir.path())
        .args(["record", "a", "example.com", "10.0.0.5", "3600"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Record Name: example.com.")
                .and(predicate::str::contains("Type: A"))
                .and(predicate::str::contains("TTL: 3600"))
                .and(predicate::str::contains("IPAddress: 10.0.0.5")),
        );
}

#[test]
fn test_record_a_json_descriptor() {
    let dir = TempDir::new().unwrap();
    let output = zonectl_cmd(dir.path())
        .args(["--output", "json", "record", "a", "example.com", "10.0.0.5", "3600"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "example.com.");
    assert_eq!(value["type"], 1);
    assert_eq!(value["dclass"], 1);
    assert_eq!(value["ttl"], 3600);
    assert_eq!(value["rawData"], "0a000005");
}

#[test]
fn test_record_soa_defaults() {
    let dir = TempDir::new().unwrap();
    zonectl_cmd(dir.path())
        .args([
            "record",
            "soa",
            "zone.example.",
            "ns1.example.",
            "admin.example.",
            "5",
            "3600",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Primary Name Server: ns1.example.")
                .and(predicate::str::contains("Domain Manager: admin.example."))
                .and(predicate::str::contains("Refresh: 0"))
                .and(predicate::str::contains("Minimum: 0")),
        );
}

#[test]
fn test_record_plain_prints_name() {
    let dir = TempDir::new().unwrap();
    zonectl_cmd(dir.path())
        .args(["-o", "plain", "record", "txt", "example.com", "v=spf1 -all", "60"])
        .assert()
        .success()
        .stdout("example.com.\n");
}

#[test]
fn test_record_missing_argument() {
    let dir = TempDir::new().unwrap();
    let output = zonectl_cmd(dir.path())
        .args(["record", "soa", "zone.example.", "ns1.example.", "admin.example."])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("missing_argument"), "{text}");
    assert!(text.contains("<serial>"), "{text}");
}

#[test]
fn test_record_invalid_address() {
    let dir = TempDir::new().unwrap();
    let output = zonectl_cmd(dir.path())
        .args(["record", "a", "example.com", "not-an-ip", "3600"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("invalid_address"), "{text}");
    assert!(text.contains("not-an-ip"), "{text}");
    assert!(text.contains("<address>"), "{text}");
}

#[test]
fn test_record_classless_reverse_cname() {
    let dir = TempDir::new().unwrap();
    zonectl_cmd(dir.path())
        .args(["record", "cname", "5.0/25.2.0.192.in-addr.arpa", "-host.example", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record Name: 5.0/25.2.0.192.in-addr.arpa."))
        .stdout(predicate::str::contains("Alias value: -host.example."));
}

#[test]
fn test_record_invalid_number() {
    let dir = TempDir::new().unwrap();
    let output = zonectl_cmd(dir.path())
        .args(["record", "mx", "example.com", "mail.example.com", "-1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("invalid_number"), "{text}");
}

#[test]
fn test_record_help_shows_positional_usage() {
    let dir = TempDir::new().unwrap();
    zonectl_cmd(dir.path())
        .args(["record", "srv", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<name> <target> <port> <priority> <weight> <ttl>",
        ));
}

// ── records ─────────────────────────────────────────────────────────

#[test]
fn test_records_show_report() {
    let dir = TempDir::new().unwrap();
    let records = write_records(dir.path());
    let output = zonectl_cmd(dir.path())
        .args(["records", "show", "--from-file"])
        .arg(&records)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("-----------\n").count(), 3, "{stdout}");
    assert!(stdout.contains("IPAddress: 10.0.0.5"), "{stdout}");
    assert!(stdout.contains("Type: Unknown"), "{stdout}");
    assert!(stdout.contains("Malformed Record Body"), "{stdout}");
}

#[test]
fn test_records_show_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.json");
    std::fs::write(&path, "[]").unwrap();
    zonectl_cmd(dir.path())
        .args(["records", "show", "-f"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Empty record list\n");
}

#[test]
fn test_records_show_without_file() {
    let dir = TempDir::new().unwrap();
    let output = zonectl_cmd(dir.path())
        .args(["records", "show"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("no_records_file"));
}

#[test]
fn test_records_show_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{\"not\": \"an array\"}").unwrap();
    let output = zonectl_cmd(dir.path())
        .args(["records", "show", "-f"])
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(combined_output(&output).contains("invalid_records"));
}

#[test]
fn test_records_list_table() {
    let dir = TempDir::new().unwrap();
    let records = write_records(dir.path());
    zonectl_cmd(dir.path())
        .args(["records", "list", "-f"])
        .arg(&records)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("example.com.")
                .and(predicate::str::contains("A (1)"))
                .and(predicate::str::contains("Unknown (99)")),
        );
}

#[test]
fn test_records_show_plain() {
    let dir = TempDir::new().unwrap();
    let records = write_records(dir.path());
    zonectl_cmd(dir.path())
        .args(["-o", "plain", "records", "show", "-f"])
        .arg(&records)
        .assert()
        .success()
        .stdout("example.com.\nexample.com.\nbroken.example.com.\n");
}

// ── config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_follows_flag() {
    let dir = TempDir::new().unwrap();
    zonectl_cmd(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_defaults() {
    let dir = TempDir::new().unwrap();
    zonectl_cmd(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[defaults]")
                .and(predicate::str::contains("output = \"table\"")),
        );
}

#[test]
fn test_config_set_persists_and_applies() {
    let dir = TempDir::new().unwrap();
    let records = write_records(dir.path());

    zonectl_cmd(dir.path())
        .args(["config", "set", "output", "plain"])
        .assert()
        .success();
    zonectl_cmd(dir.path())
        .args(["config", "set", "records_file"])
        .arg(&records)
        .assert()
        .success();

    let saved = std::fs::read_to_string(config_file(dir.path())).unwrap();
    assert!(saved.contains("output = \"plain\""), "{saved}");

    zonectl_cmd(dir.path())
        .args(["records", "show"])
        .assert()
        .success()
        .stdout("example.com.\nexample.com.\nbroken.example.com.\n");
}

#[test]
fn test_config_set_rejects_bad_value() {
    let dir = TempDir::new().unwrap();
    let output = zonectl_cmd(dir.path())
        .args(["config", "set", "output", "xml"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(!config_file(dir.path()).exists());
}

#[test]
fn test_env_overrides_config_output() {
    let dir = TempDir::new().unwrap();
    let records = write_records(dir.path());
    zonectl_cmd(dir.path())
        .env("ZONECTL_DEFAULTS__OUTPUT", "plain")
        .args(["records", "show", "-f"])
        .arg(&records)
        .assert()
        .success()
        .stdout("example.com.\nexample.com.\nbroken.example.com.\n");
}

#[test]
fn test_flag_overrides_config_output() {
    let dir = TempDir::new().unwrap();
    let records = write_records(dir.path());
    zonectl_cmd(dir.path())
        .env("ZONECTL_DEFAULTS__OUTPUT", "plain")
        .args(["-o", "json-compact", "records", "list", "-f"])
        .arg(&records)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[{\"name\":\"example.com\""));
}
