//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, PaginationConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use roombook::config::{Config, ConfigMerger};
///
/// let low = Config { reject_client_id: Some(true), ..Default::default() };
/// let high = Config { reject_client_id: Some(false), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.reject_client_id, Some(false));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Scalar fields are replaced when the source sets them; pagination is
    /// merged field by field.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.reject_client_id.is_some() {
            target.reject_client_id = source.reject_client_id;
        }

        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_pagination) = source.pagination {
            target.pagination = Some(match &target.pagination {
                Some(target_pagination) => {
                    Self::merge_pagination(target_pagination, source_pagination)
                }
                None => source_pagination.clone(),
            });
        }
    }

    fn merge_pagination(target: &PaginationConfig, source: &PaginationConfig) -> PaginationConfig {
        PaginationConfig {
            default_page_size: source.default_page_size.or(target.default_page_size),
            max_page_size: source.max_page_size.or(target.max_page_size),
        }
    }
}
