use super::*;
use crate::config::{CatalogConfig, RemoteConfig};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use wiremock::MockServer;


/// A router wired to a wiremock remote service and a tempdir-backed catalog
struct TestApp {
    router: Router,
    remote: MockServer,
    catalog_dir: tempfile::TempDir,
}

/// Build a test application with default config pointed at a fresh mock
/// remote and an empty catalog directory.
async fn test_app() -> TestApp {
    let remote = MockServer::start().await;
    let catalog_dir = tempfile::tempdir().expect("create catalog tempdir");

    let config = Config {
        remote: RemoteConfig {
            endpoint: remote.uri(),
            timeout_secs: 5,
            ..RemoteConfig::default()
        },
        catalog: CatalogConfig {
            path: catalog_dir.path().join("batches.json"),
            ..CatalogConfig::default()
        },
        ..Config::default()
    };
    let config = Arc::new(config);

    let aggregator = Arc::new(
        LectureAggregator::new(config.remote.clone(), config.aggregator.clone())
            .expect("create aggregator"),
    );
    let catalog = Arc::new(Catalog::new(config.catalog.clone()));
    let router = create_router(aggregator, catalog, config);

    TestApp {
        router,
        remote,
        catalog_dir,
    }
}

/// POST a JSON body and return the response.
async fn post_json(router: Router, uri: &str, body: serde_json::Value) -> axum::response::Response {
    router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// GET a URI and return the response.
async fn get_uri(router: Router, uri: &str) -> axum::response::Response {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Read a response body as JSON.
async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn cors_headers_present_when_enabled() {
    let app = test_app().await;

    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("Origin", "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin"),
        "CORS header should be present when CORS is enabled"
    );
}

#[tokio::test]
async fn api_server_spawns() {
    let app = test_app().await;

    let server_config = Arc::new(Config {
        remote: RemoteConfig {
            endpoint: app.remote.uri(),
            ..RemoteConfig::default()
        },
        api: crate::config::ApiConfig {
            // Port 0 = OS assigns a free port
            bind_address: "127.0.0.1:0".parse().unwrap(),
            ..crate::config::ApiConfig::default()
        },
        ..Config::default()
    });

    let aggregator = Arc::new(
        LectureAggregator::new(
            server_config.remote.clone(),
            server_config.aggregator.clone(),
        )
        .unwrap(),
    );
    let catalog = Arc::new(Catalog::new(server_config.catalog.clone()));

    let handle = tokio::spawn(start_api_server(aggregator, catalog, server_config));

    // Give it a moment to start, then tear it down
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    handle.abort();
}
