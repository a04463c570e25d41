//! Shared fixture for CLI integration tests.
//!
//! Each fixture owns a temp dir and points `--config` at a file inside it,
//! so no test reads the real user configuration.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("playkit").join("config.toml");
        Self {
            temp_dir,
            config_path,
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn write_config(&self, body: &str) {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        fs::write(&self.config_path, body).expect("Failed to write config");
    }

    fn base_command(&self, format: &str) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("playkit");
        cmd.env_remove("PLAYKIT_CONFIG")
            .arg("--config")
            .arg(&self.config_path)
            .arg("--format")
            .arg(format)
            .arg("--color")
            .arg("never");
        cmd
    }

    /// Plain-format command with logging limited to warnings
    pub fn command(&self) -> Command {
        self.base_command("plain")
    }

    pub fn json_command(&self) -> Command {
        self.base_command("json")
    }

    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .json_command()
            .args(args)
            .output()
            .expect("Failed to run playkit");
        assert!(
            output.status.success(),
            "playkit {:?} failed\nstderr: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}
