//! Configuration loader for Rolodex.
//!
//! Reads `config.toml` from the data directory (`~/.rolodex/` by default)
//! and deserializes it into [`DirectoryConfig`]. Falls back to defaults when
//! the file is missing or malformed.

use std::path::{Path, PathBuf};

use rolodex_types::config::DirectoryConfig;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "ROLODEX_DATA_DIR";

/// Resolve the data directory.
///
/// Priority: `ROLODEX_DATA_DIR`, then `~/.rolodex`, then `./.rolodex`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".rolodex");
    }

    PathBuf::from(".rolodex")
}

/// File name of the configuration inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Load configuration from `{data_dir}/config.toml`.
///
/// A missing file yields [`DirectoryConfig::default()`]. So does a file that
/// cannot be read or parsed, after a warning naming the path.
pub async fn load_directory_config(data_dir: &Path) -> DirectoryConfig {
    let path = data_dir.join(CONFIG_FILE);

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return DirectoryConfig::default();
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "unreadable config, using defaults");
            return DirectoryConfig::default();
        }
    };

    toml::from_str(&content).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), error = %err, "invalid config, using defaults");
        DirectoryConfig::default()
    })
}
