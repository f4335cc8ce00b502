//! Configuration file discovery and loading.
//!
//! The only configuration file is `config.yaml` in the data directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::Result;

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from the data directory.
///
/// # Examples
///
/// ```
/// use roombook::config::ConfigLoader;
///
/// let dir = tempfile::tempdir().unwrap();
/// std::fs::write(dir.path().join("config.yaml"), "reject_client_id: false\n").unwrap();
///
/// let sources = ConfigLoader::load_all(Some(dir.path())).unwrap();
/// assert_eq!(sources.len(), 1);
/// assert_eq!(sources[0].config.reject_client_id, Some(false));
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load every configuration file that exists, lowest precedence first.
    ///
    /// If `data_dir` is `None` the default data directory is used.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(data_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let path = match data_dir {
            Some(dir) => dir.join(CONFIG_FILE_NAME),
            None => crate::database::resolve_data_dir()?.join(CONFIG_FILE_NAME),
        };

        if !path.exists() {
            log::debug!("no configuration file at {}", path.display());
            return Ok(Vec::new());
        }

        let config = Self::load_file(&path)?;
        Ok(vec![ConfigSource {
            path,
            precedence: 1,
            config,
        }])
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(&contents)?)
    }
}
