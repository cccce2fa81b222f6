// crates/infra/src/http.rs
//! HTTP adapter for the collection fetcher port.

use std::time::Duration;

use async_trait::async_trait;
use feedjoin_ports::CollectionFetcher;
use feedjoin_shared_kernel::{InfraResult, InfrastructureError, Record, Resource};
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpFetcherConfig {
    /// Root of the API; collections live at `<base_url>/<resource>`.
    pub base_url: String,
    /// Whole-request timeout. `None` leaves the client default.
    pub timeout_secs: Option<u64>,
}

impl Default for HttpFetcherConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), timeout_secs: None }
    }
}

/// Fetches collections with `GET <base_url>/<resource>`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: Url,
}

impl HttpFetcher {
    pub fn new(config: &HttpFetcherConfig) -> InfraResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| InfrastructureError::ClientSetup { details: e.to_string() })?;
        Self::with_client(client, &config.base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> InfraResult<Self> {
        Ok(Self { client, base_url: parse_base_url(base_url)? })
    }

    pub fn endpoint(&self, resource: Resource) -> InfraResult<Url> {
        self.base_url
            .join(resource.path())
            .map_err(|e| InfrastructureError::InvalidEndpoint {
                url: self.base_url.to_string(),
                details: e.to_string(),
            })
    }
}

#[async_trait]
impl CollectionFetcher for HttpFetcher {
    async fn fetch(&self, resource: Resource) -> InfraResult<Vec<Record>> {
        let url = self.endpoint(resource)?;
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| InfrastructureError::Transport { resource, source: Box::new(e) })?;

        let status = response.status();
        if !status.is_success() {
            return Err(InfrastructureError::HttpStatus { resource, status: status.as_u16() });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| InfrastructureError::Transport { resource, source: Box::new(e) })?;
        let records: Vec<Record> = serde_json::from_slice(&body)
            .map_err(|e| InfrastructureError::Decode { resource, source: Box::new(e) })?;

        debug!("fetched {} {resource}", records.len());
        Ok(records)
    }
}

/// `Url::join` replaces the last path segment unless the base ends with `/`.
fn parse_base_url(raw: &str) -> InfraResult<Url> {
    let invalid = |details: String| InfrastructureError::InvalidEndpoint { url: raw.to_string(), details };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base".to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
