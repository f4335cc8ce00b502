//! Configuration validation.

use crate::config::schema::{Config, PaginationConfig, DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use roombook::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for a zero page size, a default page
    /// size above the maximum, or a zero lock wait.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref pagination) = config.pagination {
            Self::validate_pagination(pagination)?;
        }

        if config.maximum_lock_wait_seconds == Some(0) {
            return Err(Error::Validation {
                field: "maximum_lock_wait_seconds".into(),
                message: "Timeout must be greater than 0".into(),
            });
        }

        Ok(())
    }

    fn validate_pagination(pagination: &PaginationConfig) -> Result<()> {
        if pagination.default_page_size == Some(0) {
            return Err(Error::Validation {
                field: "pagination.default_page_size".into(),
                message: "Page size must be greater than 0".into(),
            });
        }

        if pagination.max_page_size == Some(0) {
            return Err(Error::Validation {
                field: "pagination.max_page_size".into(),
                message: "Page size must be greater than 0".into(),
            });
        }

        let default = pagination.default_page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        let max = pagination.max_page_size.unwrap_or(DEFAULT_MAX_PAGE_SIZE);
        if default > max {
            return Err(Error::Validation {
                field: "pagination.default_page_size".into(),
                message: format!("Default page size {default} exceeds maximum {max}"),
            });
        }

        Ok(())
    }
}
