//! Directory service configuration.
//!
//! `DirectoryConfig` represents the `config.toml` in the data directory.
//! Every field has a default so an empty or missing file is valid.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the directory service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectoryConfig {
    /// Seconds to wait between background creation attempts.
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
}

fn default_retry_delay_secs() -> u64 {
    5
}

impl DirectoryConfig {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            retry_delay_secs: default_retry_delay_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_config_default_values() {
        let config = DirectoryConfig::default();
        assert_eq!(config.retry_delay_secs, 5);
        assert_eq!(config.retry_delay(), Duration::from_secs(5));
    }

    #[test]
    fn test_directory_config_deserialize_with_defaults() {
        let config: DirectoryConfig = toml::from_str("").unwrap();
        assert_eq!(config, DirectoryConfig::default());
    }

    #[test]
    fn test_directory_config_deserialize_with_values() {
        let config: DirectoryConfig = toml::from_str("retry_delay_secs = 1").unwrap();
        assert_eq!(config.retry_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_directory_config_rejects_unknown_keys() {
        let result: Result<DirectoryConfig, _> = toml::from_str("retry_delay = 1");
        assert!(result.is_err());
    }
}
