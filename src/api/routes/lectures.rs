//! Lecture aggregation handlers.

use crate::api::AppState;
use crate::api::routes::FetchLecturesRequest;
use crate::error::Error;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// POST /api/fetch_lectures - Aggregate lecture media records
///
/// Paginates every requested collection on the remote service, extracts
/// video and slide-PDF links, and returns the merged record lists. Failing
/// collections contribute whatever was fetched before the failure; the
/// request only fails outright when the uid list is missing or empty.
#[utoipa::path(
    post,
    path = "/api/fetch_lectures",
    tag = "lectures",
    request_body = FetchLecturesRequest,
    responses(
        (status = 200, description = "Aggregated video and PDF records", body = crate::types::AggregateResult),
        (status = 400, description = "Missing or empty uid list"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn fetch_lectures(
    State(state): State<AppState>,
    Json(request): Json<FetchLecturesRequest>,
) -> Response {
    match state.aggregator.fetch_lectures(&request.uids).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        // Frontends depend on this exact 400 body shape
        Err(Error::InvalidRequest(message)) => {
            (StatusCode::BAD_REQUEST, Json(json!({"error": message}))).into_response()
        }
        Err(e) => e.into_response(),
    }
}
