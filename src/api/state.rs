//! Application state for the API server

use crate::aggregator::LectureAggregator;
use crate::catalog::Catalog;
use crate::config::Config;
use std::sync::Arc;

/// Shared application state accessible to all route handlers
///
/// Cloned for each request (cheap Arc clones); holds the aggregation
/// pipeline, the catalog accessor, and the configuration.
#[derive(Clone)]
pub struct AppState {
    /// The lecture aggregation pipeline
    pub aggregator: Arc<LectureAggregator>,

    /// The static batch catalog accessor
    pub catalog: Arc<Catalog>,

    /// Configuration (read access)
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        aggregator: Arc<LectureAggregator>,
        catalog: Arc<Catalog>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            aggregator,
            catalog,
            config,
        }
    }
}
