//! Integration tests for the init command.

mod common;

use common::TestEnv;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_init_creates_data_dir_and_database() {
    let env = TestEnv::new();
    assert!(!env.data_dir().exists());

    env.command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized roombook in:"))
        .stdout(predicate::str::contains("Created data directory"))
        .stdout(predicate::str::contains("Created database"));

    assert!(env.db_path().exists());
    assert!(!env.config_path().exists());
}

#[test]
fn test_init_is_idempotent() {
    let env = TestEnv::new();
    env.command().arg("init").assert().success();
    let id = env.create(200, 100, "2025-10-26", "2025-10-28");

    env.command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database already exists"));

    // Data survives a second init
    assert_eq!(env.get_json(id)["room_id"], 200);
}

#[test]
fn test_init_overwrite_recreates_database() {
    let env = TestEnv::new();
    let id = env.create(200, 100, "2025-10-26", "2025-10-28");

    env.command()
        .args(["init", "--overwrite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recreated database"));

    env.command()
        .args(["get", &id.to_string()])
        .assert()
        .code(8);
    env.command()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn test_init_with_config_writes_defaults() {
    let env = TestEnv::new();

    env.command()
        .args(["init", "--with-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default configuration file"));

    let contents = fs::read_to_string(env.config_path()).unwrap();
    assert!(contents.contains("max_page_size: 100"));
    assert!(contents.contains("reject_client_id: true"));

    // The written file must load cleanly
    env.command().arg("list").assert().success();
}

#[test]
fn test_init_with_config_keeps_existing_file() {
    let env = TestEnv::new();
    env.write_config("output_format: json\n");

    env.command()
        .args(["init", "--with-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists (not overwritten)"));

    assert_eq!(
        fs::read_to_string(env.config_path()).unwrap(),
        "output_format: json\n"
    );
}

#[test]
fn test_init_dry_run_changes_nothing() {
    let env = TestEnv::new();

    env.command()
        .args(["init", "--dry-run", "--with-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry-run mode"))
        .stdout(predicate::str::contains("Create data directory"))
        .stdout(predicate::str::contains("Create database"))
        .stdout(predicate::str::contains("Create configuration file"));

    assert!(!env.data_dir().exists());
}

#[test]
fn test_init_dry_run_overwrite_keeps_data() {
    let env = TestEnv::new();
    let id = env.create(200, 100, "2025-10-26", "2025-10-28");

    env.command()
        .args(["init", "--dry-run", "--overwrite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recreate database"));

    env.get_json(id);
}

#[test]
fn test_init_ignores_disable_autoinit() {
    let env = TestEnv::new();

    env.command()
        .args(["--disable-autoinit", "init"])
        .assert()
        .success();

    assert!(env.db_path().exists());
}
