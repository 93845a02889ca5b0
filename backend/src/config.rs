//! Client configuration file support.
//!
//! This module reads the client settings (backend address, landing-page search
//! defaults, notification queue size) from a TOML file. Every section is
//! optional.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("No airbrb.toml found in standard locations")]
    NotFound,
}

/// Client configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
}

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Initial values of the landing-page range filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_bedroom_range")]
    pub bedroom_range: (usize, usize),
    #[serde(default = "default_price_range")]
    pub price_range: (f64, f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default = "default_max_queued")]
    pub max_queued: usize,
}

fn default_base_url() -> String {
    "http://localhost:5005".to_string()
}

fn default_bedroom_range() -> (usize, usize) {
    (1, 3)
}

fn default_price_range() -> (f64, f64) {
    (100.0, 300.0)
}

fn default_max_queued() -> usize {
    5
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            bedroom_range: default_bedroom_range(),
            price_range: default_price_range(),
        }
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            max_queued: default_max_queued(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(AppConfig)` if the file was read, parsed and validated
    /// * `Err(ConfigError)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `airbrb.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, ConfigError> {
        Self::from_search_paths(&[
            PathBuf::from("airbrb.toml"),
            PathBuf::from("backend/airbrb.toml"),
            PathBuf::from("../airbrb.toml"),
        ])
    }

    /// Load the first of `search_paths` that exists.
    pub fn from_search_paths(search_paths: &[PathBuf]) -> Result<Self, ConfigError> {
        for path in search_paths {
            if path.exists() {
                log::debug!("Loading configuration from {}", path.display());
                return Self::from_file(path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Settings from the default location, or built-in defaults when no file
    /// exists. A file that exists but is invalid is still an error.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Self::or_default(Self::from_default_location())
    }

    fn or_default(loaded: Result<Self, ConfigError>) -> Result<Self, ConfigError> {
        match loaded {
            Err(ConfigError::NotFound) => {
                log::debug!("No airbrb.toml found, using built-in defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api.base_url is empty".to_string()));
        }

        let (min_bed, max_bed) = self.search.bedroom_range;
        if min_bed > max_bed {
            return Err(ConfigError::Invalid(format!(
                "search.bedroom_range is inverted: [{}, {}]",
                min_bed, max_bed
            )));
        }

        let (min_price, max_price) = self.search.price_range;
        if min_price.is_nan() || max_price.is_nan() || min_price > max_price {
            return Err(ConfigError::Invalid(format!(
                "search.price_range is inverted: [{}, {}]",
                min_price, max_price
            )));
        }

        if self.notifications.max_queued == 0 {
            return Err(ConfigError::Invalid(
                "notifications.max_queued must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
