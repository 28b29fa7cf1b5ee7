//! User configuration, read once at startup from `~/.coleta/config.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_API_BASE_URL;

/// Settings the user can override on disk. Anything missing falls back to
/// the defaults below, so a partial file is fine.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults when it is missing
    /// or unreadable. Startup never fails on a bad config.
    pub fn load() -> Config {
        let path = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".coleta")
            .join("config.yaml");
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Config {
        match fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Malformed config file, using defaults");
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.yaml"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "request_timeout_secs: 5\n").unwrap();
        let config = Config::load_from(&path);
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "api_base_url: [unclosed\n").unwrap();
        let config = Config::load_from(&path);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
