//! Route handlers for the REST API
//!
//! Handlers are organized by domain:
//! - [`lectures`]: lecture aggregation
//! - [`catalog`]: static batch catalog
//! - [`system`]: health and OpenAPI

use serde::{Deserialize, Serialize};

mod catalog;
mod lectures;
mod system;

// Re-export all handlers so `routes::function_name` continues to work
pub use catalog::*;
pub use lectures::*;
pub use system::*;

/// Request body for POST /api/fetch_lectures
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct FetchLecturesRequest {
    /// Collection uids to aggregate; absent is treated as empty and rejected
    #[serde(default)]
    pub uids: Vec<String>,
}
