//! # content-hub
//!
//! Backend library for aggregating lecture media from a remote collection
//! API.
//!
//! Given a set of opaque collection uids, content-hub paginates the remote
//! listing endpoint for each, extracts playable video and slide-PDF links
//! from the loosely structured items, and merges everything into one flat
//! response. A static "batches" catalog (category → batch → subject → uids)
//! is served alongside for frontends to build their navigation.
//!
//! ## Design Philosophy
//!
//! - **Partial-failure tolerant** - One bad collection never aborts an
//!   aggregation; callers get whatever succeeded
//! - **Missing-field tolerant** - Every remote field is optional; absence
//!   suppresses a record, it never raises
//! - **Bounded** - Fan-out across collections is capped, every remote call
//!   carries a timeout
//!
//! ## Quick Start
//!
//! ```no_run
//! use content_hub::{Catalog, Config, LectureAggregator};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Arc::new(Config::default());
//!     config.validate()?;
//!
//!     let aggregator = Arc::new(LectureAggregator::new(
//!         config.remote.clone(),
//!         config.aggregator.clone(),
//!     )?);
//!     let catalog = Arc::new(Catalog::new(config.catalog.clone()));
//!
//!     // Serve the API (blocks until shutdown)
//!     content_hub::api::start_api_server(aggregator, catalog, config).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Fan-out aggregation across collection identifiers
pub mod aggregator;
/// REST API module
pub mod api;
/// Static batch catalog accessor
pub mod catalog;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Per-item extraction and normalization
pub mod normalize;
/// Remote collection access (page fetcher + paginator)
pub mod remote;
/// Retry logic with exponential backoff
pub mod retry;
/// Core wire types
pub mod types;

// Re-export commonly used types
pub use aggregator::LectureAggregator;
pub use catalog::Catalog;
pub use config::{AggregatorConfig, ApiConfig, CatalogConfig, Config, RemoteConfig, RetryConfig};
pub use error::{ApiError, Error, ErrorDetail, FetchError, Result, ToHttpStatus};
pub use types::{AggregateResult, PdfRecord, VideoRecord};

/// Wait for a termination signal.
///
/// - **Unix:** listens for SIGTERM and SIGINT, with fallbacks if signal
///   registration fails.
/// - **Windows/other:** listens for Ctrl+C via `tokio::signal::ctrl_c()`.
#[cfg(unix)]
pub async fn wait_for_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    // Signal registration may fail in restricted environments (containers, tests)
    let sigterm_result = signal(SignalKind::terminate());
    let sigint_result = signal(SignalKind::interrupt());

    match (sigterm_result, sigint_result) {
        (Ok(mut sigterm), Ok(mut sigint)) => {
            tokio::select! {
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM signal");
                }
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT signal (Ctrl+C)");
                }
            }
        }
        (Err(e), _) => {
            tracing::warn!(error = %e, "Could not register SIGTERM handler, waiting for SIGINT only");
            if let Ok(mut sigint) = signal(SignalKind::interrupt()) {
                sigint.recv().await;
                tracing::info!("Received SIGINT signal (Ctrl+C)");
            } else {
                tracing::error!("Could not register any signal handlers, using ctrl_c fallback");
                tokio::signal::ctrl_c().await.ok();
            }
        }
        (_, Err(e)) => {
            tracing::warn!(error = %e, "Could not register SIGINT handler, waiting for SIGTERM only");
            if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
                sigterm.recv().await;
                tracing::info!("Received SIGTERM signal");
            } else {
                tracing::error!("Could not register any signal handlers, using ctrl_c fallback");
                tokio::signal::ctrl_c().await.ok();
            }
        }
    }
}

/// Wait for a termination signal (Ctrl+C on non-Unix platforms).
#[cfg(not(unix))]
pub async fn wait_for_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Received Ctrl+C signal");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C signal");
        }
    }
}
