//! OpenAPI documentation and schema generation
//!
//! Defines the OpenAPI specification for the content-hub REST API using
//! utoipa for compile-time spec generation.

use utoipa::OpenApi;

/// OpenAPI documentation for the content-hub REST API
///
/// The spec can be accessed via:
/// - `/api/openapi.json` - JSON format OpenAPI specification
/// - `/swagger-ui` - Interactive Swagger UI documentation (if enabled)
#[derive(OpenApi)]
#[openapi(
    info(
        title = "content-hub REST API",
        version = "0.1.0",
        description = "Aggregates lecture video and slide-PDF links from a remote collection API and serves the static batch catalog",
        license(
            name = "MIT OR Apache-2.0"
        )
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        // Lectures
        crate::api::routes::fetch_lectures,

        // Catalog
        crate::api::routes::batches_structure,

        // System
        crate::api::routes::health_check,
        crate::api::routes::openapi_spec,
    ),
    components(schemas(
        // Core types from types.rs
        crate::types::VideoRecord,
        crate::types::PdfRecord,
        crate::types::AggregateResult,

        // Config types from config.rs
        crate::config::Config,
        crate::config::RemoteConfig,
        crate::config::RetryConfig,
        crate::config::AggregatorConfig,
        crate::config::CatalogConfig,
        crate::config::CatalogReload,
        crate::config::ApiConfig,

        // API request types from routes
        crate::api::routes::FetchLecturesRequest,

        // Error types from error.rs
        crate::error::ApiError,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "lectures", description = "Lecture aggregation - Fetch and normalize media records across remote collections"),
        (name = "catalog", description = "Batch catalog - Static category/batch/subject structure"),
        (name = "system", description = "System endpoints - Health checks and OpenAPI spec"),
    )
)]
pub struct ApiDoc;
