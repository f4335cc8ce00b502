//! Environment variable handling for configuration overrides.
//!
//! `ROOMBOOK_*` variables take precedence over the configuration file.

use std::env;
use std::str::FromStr;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};

/// Overrides the default page size.
pub const DEFAULT_PAGE_SIZE_ENV: &str = "ROOMBOOK_DEFAULT_PAGE_SIZE";
/// Overrides the maximum page size.
pub const MAX_PAGE_SIZE_ENV: &str = "ROOMBOOK_MAX_PAGE_SIZE";
/// Overrides the lock wait.
pub const LOCK_WAIT_ENV: &str = "ROOMBOOK_MAXIMUM_LOCK_WAIT_SECONDS";
/// Overrides the client identity policy on create.
pub const REJECT_CLIENT_ID_ENV: &str = "ROOMBOOK_REJECT_CLIENT_ID";
/// Overrides automatic database initialization.
pub const DISABLE_AUTOINIT_ENV: &str = "ROOMBOOK_DISABLE_AUTOINIT";
/// Overrides the listing output format.
pub const OUTPUT_FORMAT_ENV: &str = "ROOMBOOK_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use roombook::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric page size, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_pagination_overrides(config)?;

        if let Ok(seconds) = env::var(LOCK_WAIT_ENV) {
            config.maximum_lock_wait_seconds = Some(Self::parse_number(LOCK_WAIT_ENV, &seconds)?);
        }

        if let Ok(val) = env::var(REJECT_CLIENT_ID_ENV) {
            config.reject_client_id = Some(Self::parse_bool(REJECT_CLIENT_ID_ENV, &val)?);
        }

        if let Ok(val) = env::var(DISABLE_AUTOINIT_ENV) {
            config.disable_autoinit = Some(Self::parse_bool(DISABLE_AUTOINIT_ENV, &val)?);
        }

        if let Ok(val) = env::var(OUTPUT_FORMAT_ENV) {
            let format = OutputFormat::from_str(&val).map_err(|_| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message: format!("Invalid output format: '{val}' (expected table/json/csv/tsv)"),
            })?;
            config.output_format = Some(format);
        }

        Ok(())
    }

    fn apply_pagination_overrides(config: &mut Config) -> Result<()> {
        let mut pagination = config.pagination.clone().unwrap_or_default();
        let mut modified = false;

        if let Ok(size) = env::var(DEFAULT_PAGE_SIZE_ENV) {
            pagination.default_page_size = Some(Self::parse_number(DEFAULT_PAGE_SIZE_ENV, &size)?);
            modified = true;
        }

        if let Ok(size) = env::var(MAX_PAGE_SIZE_ENV) {
            pagination.max_page_size = Some(Self::parse_number(MAX_PAGE_SIZE_ENV, &size)?);
            modified = true;
        }

        if modified {
            config.pagination = Some(pagination);
        }

        Ok(())
    }

    fn parse_number<T: FromStr>(field: &str, s: &str) -> Result<T> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be a non-negative integer (got '{s}')"),
        })
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: [&str; 6] = [
        DEFAULT_PAGE_SIZE_ENV,
        MAX_PAGE_SIZE_ENV,
        LOCK_WAIT_ENV,
        REJECT_CLIENT_ID_ENV,
        DISABLE_AUTOINIT_ENV,
        OUTPUT_FORMAT_ENV,
    ];

    /// Clears every override on creation and again on drop.
    struct EnvGuard;

    impl EnvGuard {
        fn new() -> Self {
            for var in ALL_VARS {
                env::remove_var(var);
            }
            Self
        }

        fn set(&self, var: &str, value: &str) {
            env::set_var(var, value);
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in ALL_VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_parse_bool_variants() {
        for val in ["true", "TRUE", "1", "yes", "On"] {
            assert!(EnvironmentConfig::parse_bool("f", val).unwrap());
        }
        for val in ["false", "0", "NO", "off"] {
            assert!(!EnvironmentConfig::parse_bool("f", val).unwrap());
        }
        assert!(EnvironmentConfig::parse_bool("f", "maybe").is_err());
    }

    #[test]
    fn test_parse_number_rejects_negative() {
        assert!(EnvironmentConfig::parse_number::<u32>("f", "-1").is_err());
        assert_eq!(EnvironmentConfig::parse_number::<u32>("f", " 12 ").unwrap(), 12);
    }

    #[test]
    #[serial]
    fn test_apply_overrides_no_env_vars() {
        let _guard = EnvGuard::new();
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_apply_overrides_all_vars() {
        let guard = EnvGuard::new();
        guard.set(DEFAULT_PAGE_SIZE_ENV, "15");
        guard.set(MAX_PAGE_SIZE_ENV, "40");
        guard.set(LOCK_WAIT_ENV, "2");
        guard.set(REJECT_CLIENT_ID_ENV, "no");
        guard.set(DISABLE_AUTOINIT_ENV, "1");
        guard.set(OUTPUT_FORMAT_ENV, "json");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();

        assert_eq!(config.default_page_size(), 15);
        assert_eq!(config.max_page_size(), 40);
        assert_eq!(config.maximum_lock_wait_seconds, Some(2));
        assert_eq!(config.reject_client_id, Some(false));
        assert_eq!(config.disable_autoinit, Some(true));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
    }

    #[test]
    #[serial]
    fn test_partial_pagination_override_keeps_file_value() {
        let guard = EnvGuard::new();
        guard.set(MAX_PAGE_SIZE_ENV, "60");

        let mut config: Config =
            serde_yaml::from_str("pagination:\n  default_page_size: 7\n").unwrap();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();

        assert_eq!(config.default_page_size(), 7);
        assert_eq!(config.max_page_size(), 60);
    }

    #[test]
    #[serial]
    fn test_invalid_value_names_variable() {
        let guard = EnvGuard::new();
        guard.set(OUTPUT_FORMAT_ENV, "xml");

        let err = EnvironmentConfig::apply_overrides(&mut Config::default()).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == OUTPUT_FORMAT_ENV));
    }
}
