//! Batch catalog handlers.

use crate::api::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

/// GET /api/batches_structure - Raw batch catalog
///
/// Returns the catalog JSON unmodified; the frontend builds its navigation
/// (categories, batches, subjects) from it and keeps the uids for a
/// subsequent fetch_lectures call. A missing or broken file yields `{}`.
#[utoipa::path(
    get,
    path = "/api/batches_structure",
    tag = "catalog",
    responses(
        (status = 200, description = "Nested category/batch/subject mapping with collection uids"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn batches_structure(State(state): State<AppState>) -> impl IntoResponse {
    let batches = state.catalog.get().await;
    (StatusCode::OK, Json(batches))
}
