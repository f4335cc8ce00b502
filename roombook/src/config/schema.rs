//! Configuration schema definitions.
//!
//! Every field is optional so that sources can be layered; accessors on
//! [`Config`] resolve unset fields to their defaults.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Page size used when neither the request nor the configuration sets one.
pub const DEFAULT_PAGE_SIZE: u32 = crate::filter::DEFAULT_PAGE_SIZE;

/// Largest page size accepted unless configured otherwise.
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;

/// Seconds to wait for the database write lock unless configured otherwise.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use roombook::config::{Config, PaginationConfig};
///
/// let config = Config {
///     pagination: Some(PaginationConfig {
///         default_page_size: Some(25),
///         max_page_size: None,
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.default_page_size(), 25);
/// assert_eq!(config.max_page_size(), 100);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Page size settings for list operations.
    pub pagination: Option<PaginationConfig>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Reject client-supplied identities on create.
    pub reject_client_id: Option<bool>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,

    /// Output format for reservation listings.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Returns the configured default page size.
    #[must_use]
    pub fn default_page_size(&self) -> u32 {
        self.pagination
            .as_ref()
            .and_then(|p| p.default_page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Returns the configured maximum page size.
    #[must_use]
    pub fn max_page_size(&self) -> u32 {
        self.pagination
            .as_ref()
            .and_then(|p| p.max_page_size)
            .unwrap_or(DEFAULT_MAX_PAGE_SIZE)
    }

    /// Returns the configured lock wait.
    #[must_use]
    pub fn lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// Returns the configured output format.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Pagination configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PaginationConfig {
    /// Page size applied when a list request does not name one.
    pub default_page_size: Option<u32>,

    /// Largest page size a list request may ask for.
    pub max_page_size: Option<u32>,
}

/// Output format for reservation listings.
///
/// # Examples
///
/// ```
/// use roombook::config::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
    /// Human-readable table format.
    #[default]
    Table,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
            Self::Table => write!(f, "table"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "table" => Ok(Self::Table),
            _ => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("unknown output format '{s}' (expected table/json/csv/tsv)"),
            }),
        }
    }
}
