//! The `showcase` configuration file.
//!
//! Resolution order for the file: `--config`, then `SHOWCASE_CONFIG`, then
//! `<config dir>/showcase/config.toml`. A missing file means defaults.
//! Environment variables are overlaid after the file is read.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use showcase_client::StoreConfig;
use showcase_client::config::{ENV_BASE_URL, ENV_BIN_ID, ENV_MASTER_KEY};
use showcase_core::DeveloperProfile;

use crate::error::{Error, Result};

/// Name used for the config directory and in help text.
pub const PROJECT_NAME: &str = "showcase";

/// Environment variable naming the config file.
pub const ENV_CONFIG: &str = "SHOWCASE_CONFIG";

/// Environment variable overriding [`LoggingConfig::level`].
pub const ENV_LOG_LEVEL: &str = "SHOWCASE_LOG_LEVEL";

/// Shown instead of secrets in exported output.
pub const REDACTED: &str = "<redacted>";

/// Logging section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `info` or `showcase_client=debug`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Document store connection
    pub store: StoreConfig,
    /// Logging
    pub logging: LoggingConfig,
    /// "About Developer" block for the full detail layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<DeveloperProfile>,
}

impl ShowcaseConfig {
    /// `<config dir>/showcase/config.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(PROJECT_NAME).join("config.toml"))
    }

    /// The file that [`Self::load`] reads.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        Self::resolve_config_path_with(explicit, |name| std::env::var(name).ok())
    }

    /// Like [`Self::resolve_config_path`] with a custom environment lookup.
    pub fn resolve_config_path_with<F>(explicit: Option<&str>, lookup: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Some(path) = lookup(ENV_CONFIG).filter(|p| !p.trim().is_empty()) {
            return Some(PathBuf::from(path));
        }
        Self::default_config_path()
    }

    /// Reads the resolved file (or defaults) and overlays the environment.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let config = match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => {
                let text =
                    std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
                tracing::debug!(path = %path.display(), "Loaded config file");
                Self::from_toml_str(&text)?
            }
            _ => Self::default(),
        };
        Ok(config.apply_env(|name| std::env::var(name).ok()))
    }

    /// Parses TOML text. Missing sections and keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::config(format!("Invalid config: {e}")))
    }

    /// Overlays `SHOWCASE_*` variables found through `lookup`.
    pub fn apply_env<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let logging = match lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
            Some(level) => LoggingConfig { level },
            None => self.logging,
        };
        Self {
            store: self.store.apply_env(&lookup),
            logging,
            developer: self.developer,
        }
    }

    /// Every settable key with a placeholder value, optional ones included.
    ///
    /// Used to learn a key's type when the file does not set it yet.
    pub fn template() -> Self {
        Self {
            store: StoreConfig::default().with_master_key(""),
            developer: Some(DeveloperProfile::new("").with_brand("")),
            ..Self::default()
        }
    }

    /// Pretty TOML for writing to disk.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Environment assignments equivalent to this config. The store key is
    /// redacted.
    pub fn to_env_vars(&self) -> Vec<(String, String)> {
        let mut vars = vec![
            (ENV_BASE_URL.to_string(), self.store.base_url.clone()),
            (ENV_BIN_ID.to_string(), self.store.bin_id.clone()),
            (ENV_LOG_LEVEL.to_string(), self.logging.level.clone()),
        ];
        if self.store.has_master_key() {
            vars.push((ENV_MASTER_KEY.to_string(), REDACTED.to_string()));
        }
        vars
    }
}
