// src/core/net.rs
// One blocking GET per id. No retries: a failure drops that id for the run.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;

use crate::config::NetOptions;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure, including the per-request timeout.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{status} for url ({url})")]
    Status { status: StatusCode, url: String },
}

/// Anything that can hand back the raw page text for an id.
/// Shared across worker threads, so implementations must be `Send + Sync`.
pub trait PageSource: Send + Sync {
    fn fetch(&self, id: u32) -> Result<String, FetchError>;
}

pub struct HttpSource {
    client: Client,
    net: NetOptions,
}

impl HttpSource {
    pub fn new(net: &NetOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(net.timeout)
            .build()?;
        Ok(Self { client, net: net.clone() })
    }

    pub fn url_for(&self, id: u32) -> String {
        self.net.url_for(id)
    }

    fn get(&self, id: u32) -> Result<String, FetchError> {
        let url = self.url_for(id);
        logd!("GET {url}");
        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }
        Ok(resp.text()?)
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, id: u32) -> Result<String, FetchError> {
        self.get(id).inspect_err(|e| loge!("Failed to fetch id {id}: {e}"))
    }
}
