//! HTTP client for the hosted document store.

use async_trait::async_trait;
use showcase_core::ProjectDocument;

use crate::config::StoreConfig;
use crate::source::ProjectSource;
use crate::{Error, Result};

/// Reads the project document with one authenticated GET per fetch.
///
/// No retry and no timeout are configured: a failed request surfaces
/// immediately, a hung one stays pending for as long as the caller awaits.
#[derive(Debug, Clone)]
pub struct DocumentStoreClient {
    http: reqwest::Client,
    config: StoreConfig,
    url: String,
}

impl DocumentStoreClient {
    /// Client for `config` with a fresh connection pool.
    pub fn new(config: StoreConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("showcase/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_http_client(config, http)
    }

    /// Client for `config` reusing an existing `reqwest::Client`.
    pub fn with_http_client(config: StoreConfig, http: reqwest::Client) -> Result<Self> {
        let url = config.document_url()?;
        if config.key_header.trim().is_empty() {
            return Err(Error::config("store key_header is empty"));
        }
        Ok(Self { http, config, url })
    }

    /// URL fetched by this client.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Configuration in use.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

#[async_trait]
impl ProjectSource for DocumentStoreClient {
    async fn fetch_document(&self) -> Result<ProjectDocument> {
        let mut request = self.http.get(&self.url);
        match self.config.master_key.as_deref() {
            Some(key) if !key.is_empty() => {
                request = request.header(self.config.key_header.as_str(), key);
            }
            _ => tracing::warn!(url = %self.url, "No store key configured; requesting anonymously"),
        }

        tracing::debug!(url = %self.url, "Fetching project document");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let document: ProjectDocument = response.json().await?;
        tracing::info!(
            url = %self.url,
            count = document.record.products.len(),
            "Fetched project document"
        );
        Ok(document)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
