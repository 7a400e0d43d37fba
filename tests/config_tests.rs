//! Integration tests for the config command

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_vault, jotter_cmd};

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    let (config, _vault) = init_vault(temp.path());

    jotter_cmd(&config)
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("vault = "))
        .stdout(predicate::str::contains("vault-name = test-vault"))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_get_vault_name() {
    let temp = TempDir::new().unwrap();
    let (config, _vault) = init_vault(temp.path());

    jotter_cmd(&config)
        .arg("config")
        .arg("vault-name")
        .assert()
        .success()
        .stdout(predicate::str::contains("test-vault"));
}

#[test]
fn test_config_set_vault_name() {
    let temp = TempDir::new().unwrap();
    let (config, _vault) = init_vault(temp.path());

    jotter_cmd(&config)
        .arg("config")
        .arg("vault-name")
        .arg("renamed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set vault-name = renamed"));

    jotter_cmd(&config)
        .arg("config")
        .arg("vault-name")
        .assert()
        .success()
        .stdout(predicate::str::contains("renamed"));
}

#[test]
fn test_config_created_is_read_only() {
    let temp = TempDir::new().unwrap();
    let (config, _vault) = init_vault(temp.path());

    jotter_cmd(&config)
        .arg("config")
        .arg("created")
        .arg("2020-01-01T00:00:00Z")
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_config_unknown_key() {
    let temp = TempDir::new().unwrap();
    let (config, _vault) = init_vault(temp.path());

    jotter_cmd(&config)
        .arg("config")
        .arg("nope")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_no_key_shows_usage() {
    let temp = TempDir::new().unwrap();
    let (config, _vault) = init_vault(temp.path());

    jotter_cmd(&config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid keys"));
}

#[test]
fn test_missing_config_exit_code() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("nonexistent-config.toml");

    jotter_cmd(&config)
        .arg("config")
        .arg("vault")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("jotter init"));
}

#[test]
fn test_corrupt_config_distinct_from_missing() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "vault_path = [broken").unwrap();

    jotter_cmd(&config)
        .arg("config")
        .arg("vault")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("corrupt"));
}
