//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated data directory
//! - Command builders that clear inherited `ROOMBOOK_*` variables
//! - Helpers that create reservations and return their ids

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host settings into a test.
const ROOMBOOK_VARS: [&str; 9] = [
    "ROOMBOOK_DATA_DIR",
    "ROOMBOOK_BUSY_TIMEOUT",
    "ROOMBOOK_LOG_MODE",
    "ROOMBOOK_DEFAULT_PAGE_SIZE",
    "ROOMBOOK_MAX_PAGE_SIZE",
    "ROOMBOOK_MAXIMUM_LOCK_WAIT_SECONDS",
    "ROOMBOOK_REJECT_CLIENT_ID",
    "ROOMBOOK_DISABLE_AUTOINIT",
    "ROOMBOOK_OUTPUT_FORMAT",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the roombook data directory (created on first use)
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("roombook-data");

        Self { temp_dir, data_dir }
    }

    /// Get a command builder without `--data-dir`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("roombook").expect("Failed to find roombook binary");
        for var in ROOMBOOK_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Path of the configuration file in the data directory.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.yaml")
    }

    /// Write `contents` as the configuration file.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.config_path(), contents).expect("Failed to write config");
    }

    /// Path of the database file.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("roombook.db")
    }

    /// Data directory as a path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Create a reservation and return its id.
    ///
    /// # Panics
    /// Panics if the create command fails.
    pub fn create(&self, room: i64, user: i64, start: &str, end: &str) -> i64 {
        let output = self
            .command()
            .args(["create", "--format", "json"])
            .args(["--room", &room.to_string(), "--user", &user.to_string()])
            .args(["--start", start, "--end", end])
            .output()
            .expect("Failed to run create command");

        assert!(
            output.status.success(),
            "Create failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let value: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("Create output is not JSON");
        value["id"].as_i64().expect("Created reservation has no id")
    }

    /// Create and approve a reservation, returning its id.
    pub fn create_approved(&self, room: i64, user: i64, start: &str, end: &str) -> i64 {
        let id = self.create(room, user, start, end);
        self.command()
            .args(["approve", &id.to_string()])
            .assert()
            .success();
        id
    }

    /// Fetch a reservation as JSON.
    pub fn get_json(&self, id: i64) -> serde_json::Value {
        let output = self
            .command()
            .args(["get", &id.to_string(), "--format", "json"])
            .output()
            .expect("Failed to run get command");

        assert!(
            output.status.success(),
            "Get failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("Get output is not JSON")
    }
}
