//! Document-store connection settings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Base URL of the hosted document store.
pub const DEFAULT_BASE_URL: &str = "https://api.jsonbin.io/v3/b";

/// Bin holding the project document.
pub const DEFAULT_BIN_ID: &str = "691de48aae596e708f633441";

/// Header that carries the read key.
pub const DEFAULT_KEY_HEADER: &str = "X-Master-Key";

/// Environment variable overriding [`StoreConfig::base_url`].
pub const ENV_BASE_URL: &str = "SHOWCASE_BASE_URL";
/// Environment variable overriding [`StoreConfig::bin_id`].
pub const ENV_BIN_ID: &str = "SHOWCASE_BIN_ID";
/// Environment variable supplying [`StoreConfig::master_key`].
pub const ENV_MASTER_KEY: &str = "SHOWCASE_MASTER_KEY";

/// Where the project document lives and how to authenticate.
///
/// The read key is never compiled in: it comes from the config file or
/// [`ENV_MASTER_KEY`]. `Debug` output redacts it.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store base URL, without the bin id
    pub base_url: String,
    /// Bin (document) id
    pub bin_id: String,
    /// Name of the header carrying the key
    pub key_header: String,
    /// Read key, if the bin is private
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_key: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            bin_id: DEFAULT_BIN_ID.to_string(),
            key_header: DEFAULT_KEY_HEADER.to_string(),
            master_key: None,
        }
    }
}

impl StoreConfig {
    /// Config pointing at `base_url` / `bin_id`, without a key.
    pub fn new(base_url: impl Into<String>, bin_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bin_id: bin_id.into(),
            ..Self::default()
        }
    }

    /// Sets the read key.
    pub fn with_master_key(mut self, key: impl Into<String>) -> Self {
        self.master_key = Some(key.into());
        self
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::default().apply_env(|name| std::env::var(name).ok())
    }

    /// Overlays values found through `lookup` (normally `std::env::var`).
    ///
    /// Empty values are ignored.
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        if let Some(v) = get(ENV_BASE_URL) {
            self.base_url = v;
        }
        if let Some(v) = get(ENV_BIN_ID) {
            self.bin_id = v;
        }
        if let Some(v) = get(ENV_MASTER_KEY) {
            self.master_key = Some(v);
        }
        self
    }

    /// Full URL of the document.
    pub fn document_url(&self) -> Result<String> {
        let base = self.base_url.trim().trim_end_matches('/');
        let bin = self.bin_id.trim().trim_matches('/');
        if base.is_empty() {
            return Err(Error::config("store base_url is empty"));
        }
        if bin.is_empty() {
            return Err(Error::config("store bin_id is empty"));
        }
        Ok(format!("{base}/{bin}"))
    }

    /// Returns `true` if a non-empty key is configured.
    pub fn has_master_key(&self) -> bool {
        self.master_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("base_url", &self.base_url)
            .field("bin_id", &self.bin_id)
            .field("key_header", &self.key_header)
            .field(
                "master_key",
                &self.master_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
