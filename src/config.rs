// src/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Remote store connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Local seen-reviews ledger settings
    #[serde(default)]
    pub ledger: LedgerConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        if !path.as_ref().exists() {
            return Self::default();
        }
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(AppError::validation("api.base_url is empty"));
        }
        Url::parse(&self.api.base_url)
            .map_err(|e| AppError::validation(format!("api.base_url is invalid: {e}")))?;
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        if self.ledger.file_name.trim().is_empty() {
            return Err(AppError::validation("ledger.file_name is empty"));
        }
        Ok(())
    }
}

/// Remote store connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the hosted REST store
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Seen-reviews ledger settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// File name of the ledger, relative to the data directory
    #[serde(default = "defaults::ledger_file")]
    pub file_name: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            file_name: defaults::ledger_file(),
        }
    }
}

mod defaults {
    pub fn base_url() -> String {
        "https://68e010a393207c4b479399ed.mockapi.io".to_string()
    }

    pub fn user_agent() -> String {
        format!("lectern/{}", env!("CARGO_PKG_VERSION"))
    }

    pub fn timeout() -> u64 {
        15
    }

    pub fn ledger_file() -> String {
        "reviewed.json".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[api]\ntimeout_secs = 5\n").unwrap();
        assert_eq!(config.api.timeout_secs, 5);
        assert!(!config.api.base_url.is_empty());
        assert_eq!(config.ledger.file_name, "reviewed.json");
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = Config::load_or_default("definitely/not/here.toml");
        assert!(config.validate().is_ok());
    }
}
