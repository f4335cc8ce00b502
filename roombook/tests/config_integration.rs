//! Integration tests for layered configuration and its effect on the
//! lifecycle manager.

mod common;

use std::env;
use std::fs;

use serial_test::serial;

use common::{draft, TestContext};
use roombook::config::{
    ConfigBuilder, OutputFormat, CONFIG_FILE_NAME, DEFAULT_MAX_PAGE_SIZE,
};
use roombook::operations::ManagerOptions;
use roombook::{Error, ReservationFilter, ReservationId};

const OVERRIDE_VARS: [&str; 3] = [
    "ROOMBOOK_MAX_PAGE_SIZE",
    "ROOMBOOK_REJECT_CLIENT_ID",
    "ROOMBOOK_OUTPUT_FORMAT",
];

/// Removes the overrides these tests touch, now and on drop.
struct EnvGuard;

impl EnvGuard {
    fn new() -> Self {
        for var in OVERRIDE_VARS {
            env::remove_var(var);
        }
        Self
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for var in OVERRIDE_VARS {
            env::remove_var(var);
        }
    }
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    let _guard = EnvGuard::new();
    let ctx = TestContext::new();
    fs::write(
        ctx.data_dir().join(CONFIG_FILE_NAME),
        "output_format: csv\nreject_client_id: true\n",
    )
    .unwrap();
    env::set_var("ROOMBOOK_REJECT_CLIENT_ID", "false");

    let config = ConfigBuilder::new().with_data_dir(ctx.data_dir()).build().unwrap();
    assert_eq!(config.output_format(), OutputFormat::Csv);
    assert_eq!(config.reject_client_id, Some(false));
}

#[test]
#[serial]
fn test_invalid_environment_value_fails_build() {
    let _guard = EnvGuard::new();
    env::set_var("ROOMBOOK_MAX_PAGE_SIZE", "lots");

    let err = ConfigBuilder::new().skip_files().build().unwrap_err();
    assert!(matches!(err, Error::Validation { ref field, .. } if field == "ROOMBOOK_MAX_PAGE_SIZE"));
}

#[test]
#[serial]
fn test_unknown_config_key_fails_build() {
    let _guard = EnvGuard::new();
    let ctx = TestContext::new();
    fs::write(ctx.data_dir().join(CONFIG_FILE_NAME), "ports:\n  min: 5000\n").unwrap();

    let err = ConfigBuilder::new().with_data_dir(ctx.data_dir()).build().unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
#[serial]
fn test_config_drives_manager_options() {
    let _guard = EnvGuard::new();
    let mut ctx = TestContext::new();
    fs::write(
        ctx.data_dir().join(CONFIG_FILE_NAME),
        "reject_client_id: false\npagination:\n  default_page_size: 5\n  max_page_size: 20\n",
    )
    .unwrap();

    let config = ConfigBuilder::new().with_data_dir(ctx.data_dir()).build().unwrap();
    ctx.options = ManagerOptions::from_config(&config);
    assert_eq!(ctx.options.max_page_size, 20);

    let mut manager = ctx.manager();

    // The supplied id is ignored rather than rejected
    let created = manager
        .create(&draft(200, 100, 26, 28).with_id(Some(ReservationId::new(77))))
        .unwrap();
    assert_ne!(created.id(), Some(ReservationId::new(77)));

    let err = manager
        .list(&ReservationFilter::default().with_page(21, 0))
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    manager
        .list(&ReservationFilter::default().with_page(20, 0))
        .unwrap();

    assert!(ctx
        .logger
        .captured()
        .iter()
        .any(|line| line == "WARN: client-supplied id 77 ignored"));
}

#[test]
fn test_default_options_match_default_config() {
    let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
    let options = ManagerOptions::from_config(&config);

    assert_eq!(options, ManagerOptions::default());
    assert_eq!(options.max_page_size, DEFAULT_MAX_PAGE_SIZE);
}
