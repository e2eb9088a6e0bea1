//! Fan-out aggregation across collection identifiers
//!
//! Drives the paginator for every requested uid, feeds each returned item
//! through the normalizer, and merges the records into one
//! [`AggregateResult`]. Collections are fetched concurrently under a
//! configured bound; output order follows uid order, then item order.

use crate::config::{AggregatorConfig, RemoteConfig};
use crate::error::{Error, Result};
use crate::normalize::normalize_item;
use crate::remote::{RemoteClient, fetch_all_items};
use crate::types::AggregateResult;
use futures::StreamExt;
use tracing::{info, warn};

/// Aggregates lecture media records across remote collections
///
/// One instance is built at startup and shared (behind an `Arc`) by all API
/// requests; it owns the remote client and the fan-out policy.
pub struct LectureAggregator {
    /// Client for the remote listing endpoint
    client: RemoteClient,

    /// Fan-out bound and request deadline
    config: AggregatorConfig,
}

impl LectureAggregator {
    /// Create a new aggregator
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn new(remote: RemoteConfig, config: AggregatorConfig) -> Result<Self> {
        Ok(Self {
            client: RemoteClient::new(remote)?,
            config,
        })
    }

    /// Fetch and normalize every lecture of every requested collection
    ///
    /// Collections are processed concurrently up to the configured bound;
    /// pagination inside each collection stays sequential. A collection
    /// whose fetch fails contributes whatever items its pagination
    /// accumulated before the failure; per-collection failures never fail
    /// the aggregation.
    ///
    /// When a request deadline is configured and expires, the records
    /// aggregated up to that point are returned as a partial result.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRequest`] when `uids` is empty; no remote
    /// call is made in that case.
    pub async fn fetch_lectures(&self, uids: &[String]) -> Result<AggregateResult> {
        if uids.is_empty() {
            return Err(Error::InvalidRequest("No UIDs provided".to_string()));
        }

        let mut result = AggregateResult::default();
        let collect = async {
            let mut collections = futures::stream::iter(uids.to_vec())
                .map(|uid| async move { self.fetch_collection(&uid).await })
                .buffered(self.config.max_concurrent_collections);

            while let Some(partial) = collections.next().await {
                result.merge(partial);
            }
        };

        match self.config.request_deadline() {
            Some(deadline) => {
                if tokio::time::timeout(deadline, collect).await.is_err() {
                    warn!(
                        deadline_secs = deadline.as_secs(),
                        "request deadline expired, returning partial result"
                    );
                }
            }
            None => collect.await,
        }

        info!(
            uids = uids.len(),
            videos = result.videos.len(),
            pdfs = result.pdfs.len(),
            "aggregation finished"
        );
        Ok(result)
    }

    /// Paginate one collection and normalize its items, in item order.
    async fn fetch_collection(&self, uid: &str) -> AggregateResult {
        if uid.is_empty() {
            warn!("skipping empty collection uid");
            return AggregateResult::default();
        }

        let items = fetch_all_items(&self.client, uid).await;

        let mut partial = AggregateResult::default();
        for item in &items {
            let normalized = normalize_item(item, self.client.config());
            if let Some(video) = normalized.video {
                partial.videos.push(video);
            }
            if let Some(pdf) = normalized.pdf {
                partial.pdfs.push(pdf);
            }
        }
        partial
    }
}
