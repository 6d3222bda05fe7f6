//! Remote tip sources
//!
//! `TipSource` is the seam between the cache and the network. The HTTP
//! implementation performs a plain GET and expects a JSON array of tips.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::error::{StoryCashError, StoryCashResult};
use crate::models::Tip;

/// Something that can produce a fresh list of tips
#[async_trait]
pub trait TipSource: Send + Sync {
    /// Fetch the full list; any failure makes the cache fall back
    async fn fetch(&self) -> StoryCashResult<Vec<Tip>>;
}

/// Fetches tips over HTTP with `reqwest`
pub struct HttpTipSource {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpTipSource {
    /// Build a source for `url` whose requests give up after `timeout`
    pub fn new(url: impl Into<String>, timeout: Duration) -> StoryCashResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoryCashError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn map_request_error(&self, err: reqwest::Error) -> StoryCashError {
        if err.is_timeout() {
            StoryCashError::Timeout(self.timeout.as_secs())
        } else {
            StoryCashError::Network(format!("Request to {} failed: {}", self.url, err))
        }
    }
}

#[async_trait]
impl TipSource for HttpTipSource {
    async fn fetch(&self) -> StoryCashResult<Vec<Tip>> {
        trace!("GET {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoryCashError::Network(format!(
                "Tips request to {} failed with status {}",
                self.url, status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let tips: Vec<Tip> = serde_json::from_slice(&body)
            .map_err(|e| StoryCashError::RemoteDecode(format!("Malformed tips payload: {}", e)))?;

        debug!("Fetched {} tips from {}", tips.len(), self.url);
        Ok(tips)
    }
}
