//! Static batch catalog accessor
//!
//! Serves the nested category → batch → subject → uids mapping from a JSON
//! file on disk. The catalog is collaborator-owned data: it is returned to
//! API callers unmodified, with no validation beyond parse success. A
//! missing or unparseable file degrades to an empty object with a logged
//! error, so the API surface stays up even when the file is broken.

use crate::config::{CatalogConfig, CatalogReload};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::error;

/// Accessor for the batches JSON file
///
/// Reload semantics follow [`CatalogReload`]: `PerRequest` re-reads the
/// file on every call, `LoadOnce` caches the first successful parse for the
/// process lifetime (a failed load is not cached, so a later call retries).
pub struct Catalog {
    /// Catalog path and reload semantics
    config: CatalogConfig,

    /// Cached parse for `LoadOnce` mode
    cache: RwLock<Option<Value>>,
}

impl Catalog {
    /// Create a new catalog accessor; the file is not touched until the
    /// first [`get`](Self::get).
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            cache: RwLock::new(None),
        }
    }

    /// The raw catalog structure, or `{}` when the file is missing or
    /// unparseable.
    pub async fn get(&self) -> Value {
        if self.config.reload == CatalogReload::LoadOnce {
            if let Some(cached) = self.cache.read().await.as_ref() {
                return cached.clone();
            }
        }

        let loaded = self.load().await;

        if self.config.reload == CatalogReload::LoadOnce
            && let Some(value) = &loaded
        {
            *self.cache.write().await = Some(value.clone());
        }

        loaded.unwrap_or_else(|| Value::Object(serde_json::Map::new()))
    }

    /// One read-and-parse attempt; `None` on any failure.
    async fn load(&self) -> Option<Value> {
        let path = &self.config.path;
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to read batch catalog");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to parse batch catalog");
                None
            }
        }
    }
}
