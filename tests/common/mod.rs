use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Command with a hermetic environment pointed at a per-test config file
pub fn jotter_cmd(config_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jotter").unwrap();
    cmd.env("JOTTER_CONFIG", config_path);
    cmd
}

/// Initialize a vault under `root`, returning (config path, vault path)
pub fn init_vault(root: &Path) -> (PathBuf, PathBuf) {
    let config_path = root.join("config.toml");
    let vault_path = root.join("vault");

    jotter_cmd(&config_path)
        .arg("init")
        .arg(&vault_path)
        .arg("--name")
        .arg("test-vault")
        .assert()
        .success();

    (config_path, vault_path)
}
