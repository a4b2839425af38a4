use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    Command::cargo_bin("prompt-enhancer").expect("Failed to locate prompt-enhancer binary")
}

#[test]
fn help_describes_the_tool() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("more effective AI prompt"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn version_matches_manifest() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_config_file_fails_before_the_form() {
    let dir = TempDir::new().unwrap();
    cli()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to read config"));
}

#[test]
fn config_with_api_key_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[api]\napi_key = \"sk-should-not-live-here\"\n").unwrap();

    cli()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}
