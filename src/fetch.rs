use async_trait::async_trait;
use reqwest::{Client, header};
use tracing::debug;

use crate::error::ScrapeError;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/143.0.0.0 Safari/537.36";

/// Retrieves raw documents for the resolver.
///
/// One outbound request per call, no caching, no retries; a non-success
/// status surfaces as [`ScrapeError::RemoteFetch`]. Tests substitute an
/// implementation that serves saved fixture pages.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, ScrapeError>;
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ScrapeError>;
}

/// Plain blocking-per-call HTTP GET over reqwest.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            client: Client::builder().build()?,
        })
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, ScrapeError> {
        debug!(%url, "GET");
        let resp = self
            .client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::RemoteFetch {
                url: url.to_string(),
                status,
            });
        }
        Ok(resp)
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, ScrapeError> {
        Ok(self.get(url).await?.text().await?)
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        Ok(self.get(url).await?.bytes().await?.to_vec())
    }
}
