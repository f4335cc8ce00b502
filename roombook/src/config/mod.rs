//! Configuration system for roombook.
//!
//! Settings are layered, highest precedence first:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`ROOMBOOK_*`)
//! 3. `config.yaml` in the data directory
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use roombook::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_data_dir("/var/lib/roombook")
//!     .build()
//!     .unwrap();
//!
//! println!("max page size: {}", config.max_page_size());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{
    Config, OutputFormat, PaginationConfig, DEFAULT_LOCK_WAIT_SECONDS, DEFAULT_MAX_PAGE_SIZE,
    DEFAULT_PAGE_SIZE,
};
pub use validator::ConfigValidator;
