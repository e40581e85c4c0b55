//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/orgview/orgview.toml`
//! 3. Environment variables: `ORGVIEW_*` prefix (nested keys via `__`)

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::chart::ChartConfig;

/// HTTP client settings for the document fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HttpSettings {
    /// Fetch timeout in seconds
    pub timeout_secs: u64,
    /// User agent sent with the fetch
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("orgview/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Unified configuration for orgview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Default hierarchy document location (URL or file path)
    pub source: String,
    /// HTTP client settings
    pub http: HttpSettings,
    /// Chart layout configuration
    pub chart: ChartConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: "data/hierarchy.json".to_string(),
            http: HttpSettings::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl Settings {
    /// Load layered settings: defaults, then the global config file, then
    /// `ORGVIEW_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                builder = builder.add_source(File::from(path));
            }
        }

        let cfg = builder
            .add_source(Environment::with_prefix("ORGVIEW").separator("__"))
            .build()?;

        cfg.try_deserialize()
    }

    /// Location of the global config file (may not exist).
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "orgview").map(|dirs| dirs.config_dir().join("orgview.toml"))
    }
}
