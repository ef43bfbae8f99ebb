//! Integration tests for the tasktrack CLI
//!
//! These tests exercise the configuration lifecycle end to end:
//! init → re-init guard → forced overwrite → commands picking the
//! config up. Store-backed flows stop at the transport boundary (the
//! configured endpoint is never listening), which is exactly the
//! failure the error taxonomy must surface.

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn tasktrack() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("tasktrack"))
}

fn init_args(url: &str) -> Vec<String> {
    vec![
        "init".to_string(),
        "--url".to_string(),
        url.to_string(),
        "--api-key".to_string(),
        "test-key".to_string(),
        "--access-token".to_string(),
        "token".to_string(),
        "--user-id".to_string(),
        "user-1".to_string(),
    ]
}

#[test]
fn test_init_writes_config() {
    let temp = TempDir::new().unwrap();

    tasktrack()
        .env("TASKTRACK_CONFIG_DIR", temp.path())
        .args(init_args("https://xyz.example.co"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration written"));

    let content = std::fs::read_to_string(temp.path().join("config.toml")).unwrap();
    assert!(content.contains("https://xyz.example.co"));
    assert!(content.contains("test-key"));
}

#[test]
fn test_init_strips_trailing_slash_from_url() {
    let temp = TempDir::new().unwrap();

    tasktrack()
        .env("TASKTRACK_CONFIG_DIR", temp.path())
        .args(init_args("https://xyz.example.co/"))
        .assert()
        .success();

    let content = std::fs::read_to_string(temp.path().join("config.toml")).unwrap();
    assert!(content.contains("\"https://xyz.example.co\""));
}

#[test]
fn test_init_twice_requires_force() {
    let temp = TempDir::new().unwrap();

    tasktrack()
        .env("TASKTRACK_CONFIG_DIR", temp.path())
        .args(init_args("https://first.example.co"))
        .assert()
        .success();

    // Second init without --force leaves the config untouched
    tasktrack()
        .env("TASKTRACK_CONFIG_DIR", temp.path())
        .args(init_args("https://second.example.co"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Already configured"));

    let content = std::fs::read_to_string(temp.path().join("config.toml")).unwrap();
    assert!(content.contains("first.example.co"));
    assert!(!content.contains("second.example.co"));
}

#[test]
fn test_init_force_overwrites() {
    let temp = TempDir::new().unwrap();

    tasktrack()
        .env("TASKTRACK_CONFIG_DIR", temp.path())
        .args(init_args("https://first.example.co"))
        .assert()
        .success();

    let mut args = init_args("https://second.example.co");
    args.push("--force".to_string());
    tasktrack()
        .env("TASKTRACK_CONFIG_DIR", temp.path())
        .args(args)
        .assert()
        .success();

    let content = std::fs::read_to_string(temp.path().join("config.toml")).unwrap();
    assert!(content.contains("second.example.co"));
}

#[test]
fn test_init_json_output() {
    let temp = TempDir::new().unwrap();

    tasktrack()
        .env("TASKTRACK_CONFIG_DIR", temp.path())
        .args(init_args("https://xyz.example.co"))
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"));
}

#[test]
fn test_configured_commands_reach_the_transport() {
    let temp = TempDir::new().unwrap();

    // Configure an endpoint nothing listens on; commands get past the
    // config check and fail at the store boundary.
    tasktrack()
        .env("TASKTRACK_CONFIG_DIR", temp.path())
        .args(init_args("http://127.0.0.1:1"))
        .assert()
        .success();

    tasktrack()
        .env("TASKTRACK_CONFIG_DIR", temp.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("store unavailable"));

    tasktrack()
        .env("TASKTRACK_CONFIG_DIR", temp.path())
        .args(["add", "Essay draft", "--class", "English 10", "--due", "2024-06-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("store unavailable"));
}

#[test]
fn test_remind_reports_capability_without_terminal() {
    let temp = TempDir::new().unwrap();

    tasktrack()
        .env("TASKTRACK_CONFIG_DIR", temp.path())
        .args(init_args("http://127.0.0.1:1"))
        .assert()
        .success();

    // The scan still needs the store; transport failure wins here.
    tasktrack()
        .env("TASKTRACK_CONFIG_DIR", temp.path())
        .arg("remind")
        .assert()
        .failure()
        .stderr(predicate::str::contains("store unavailable"));
}
