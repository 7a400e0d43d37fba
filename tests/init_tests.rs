//! Integration tests for vault initialization

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_vault, jotter_cmd};

#[test]
fn test_init_creates_vault_skeleton() {
    let temp = TempDir::new().unwrap();
    let (_config, vault) = init_vault(temp.path());

    for dir in ["daily", "weekly", "monthly", "inbox", "templates"] {
        assert!(vault.join(dir).is_dir(), "missing {}", dir);
    }
}

#[test]
fn test_init_distributes_templates() {
    let temp = TempDir::new().unwrap();
    let (_config, vault) = init_vault(temp.path());

    for key in [
        "morning.md",
        "evening.md",
        "weekly-start.md",
        "weekly-end.md",
        "monthly-start.md",
        "monthly-end.md",
    ] {
        assert!(
            vault.join("templates").join(key).is_file(),
            "missing template {}",
            key
        );
    }

    let morning = fs::read_to_string(vault.join("templates").join("morning.md")).unwrap();
    assert!(morning.contains("{{date}}"));
}

#[test]
fn test_init_writes_config() {
    let temp = TempDir::new().unwrap();
    let (config, _vault) = init_vault(temp.path());

    let content = fs::read_to_string(config).unwrap();
    assert!(content.contains("vault_name = \"test-vault\""));
    assert!(content.contains("vault_path"));
    assert!(content.contains("created"));
}

#[test]
fn test_init_twice_fails() {
    let temp = TempDir::new().unwrap();
    let (config, vault) = init_vault(temp.path());

    jotter_cmd(&config)
        .arg("init")
        .arg(&vault)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Already initialized"));
}

#[test]
fn test_init_default_name_is_directory_name() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    let vault = temp.path().join("my-notes");

    jotter_cmd(&config)
        .arg("init")
        .arg(&vault)
        .assert()
        .success();

    let content = fs::read_to_string(config).unwrap();
    assert!(content.contains("vault_name = \"my-notes\""));
}

#[test]
fn test_init_reports_vault_location() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");

    jotter_cmd(&config)
        .arg("init")
        .arg(temp.path().join("v"))
        .arg("--name")
        .arg("v")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized jotter vault"));
}
