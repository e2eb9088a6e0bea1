//! HTTP client for the remote listing endpoint

use crate::config::RemoteConfig;
use crate::error::{Error, FetchError, Result};
use crate::retry::fetch_with_retry;
use crate::types::ItemsPage;

/// Client for the remote lecture-hosting service
///
/// Wraps a shared [`reqwest::Client`] configured with the per-request
/// timeout from [`RemoteConfig`]. One instance is built at startup and
/// reused across all requests.
pub struct RemoteClient {
    /// HTTP client for page fetches
    http_client: reqwest::Client,

    /// Remote service settings (endpoint, media host, timeout, retry)
    config: RemoteConfig,
}

impl RemoteClient {
    /// Create a new remote client
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("content-hub/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Remote service settings this client was built with.
    #[must_use]
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Fetch and decode one listing page
    ///
    /// Performs a single GET bounded by the configured timeout. When retries
    /// are enabled in the config, transient failures are retried with
    /// backoff; the default policy is exactly one attempt.
    ///
    /// # Errors
    /// Returns a [`FetchError`] carrying the collection uid and page URL on
    /// transport failure, non-success status, or an undecodable body.
    pub async fn fetch_page(
        &self,
        uid: &str,
        url: &str,
    ) -> std::result::Result<ItemsPage, FetchError> {
        fetch_with_retry(&self.config.retry, || self.fetch_page_once(uid, url)).await
    }

    /// One unconditional page fetch attempt.
    async fn fetch_page_once(
        &self,
        uid: &str,
        url: &str,
    ) -> std::result::Result<ItemsPage, FetchError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                uid: uid.to_string(),
                url: url.to_string(),
                source,
            })?;

        // Check HTTP status before trying to parse the response body
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                uid: uid.to_string(),
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<ItemsPage>()
            .await
            .map_err(|source| FetchError::Decode {
                uid: uid.to_string(),
                url: url.to_string(),
                source,
            })
    }
}
