//! Configuration types for content-hub

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use utoipa::ToSchema;

/// Remote lecture-hosting service configuration
///
/// Groups everything needed to reach the paginated listing endpoint and to
/// reconstruct direct media URLs. Used as a nested sub-config within
/// [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RemoteConfig {
    /// Base URL of the remote service (default: "https://unacademy.com")
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Host used to reconstruct direct video URLs
    /// (default: "uamedia.uacdn.net")
    ///
    /// The derived URL template `https://{media_host}/lesson-raw/{token}/output.webm`
    /// must stay bit-exact for compatibility with the media host.
    #[serde(default = "default_media_host")]
    pub media_host: String,

    /// Page size requested from the listing endpoint (default: 600)
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,

    /// Per-request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retry policy for transient per-page failures
    ///
    /// Disabled by default: a page is attempted exactly once, and a failure
    /// ends pagination for that collection only.
    #[serde(default)]
    pub retry: RetryConfig,
}

impl RemoteConfig {
    /// Per-request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Initial listing URL for one collection uid.
    #[must_use]
    pub fn listing_url(&self, uid: &str) -> String {
        format!(
            "{}/api/v3/collection/{}/items?limit={}",
            self.endpoint.trim_end_matches('/'),
            uid,
            self.page_limit
        )
    }

    /// Direct media URL for an extracted lesson token.
    #[must_use]
    pub fn media_url(&self, token: &str) -> String {
        format!("https://{}/lesson-raw/{}/output.webm", self.media_host, token)
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            media_host: default_media_host(),
            page_limit: default_page_limit(),
            timeout_secs: default_timeout_secs(),
            retry: RetryConfig::default(),
        }
    }
}

/// Retry policy for per-page fetches
///
/// `max_attempts` counts retries after the first attempt; 0 means a single
/// unconditional attempt per page.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RetryConfig {
    /// Maximum number of retries after the initial attempt (default: 0)
    #[serde(default)]
    pub max_attempts: u32,

    /// Delay before the first retry in milliseconds (default: 500)
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,

    /// Upper bound on the backoff delay in milliseconds (default: 10000)
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    /// Multiplier applied to the delay after each retry (default: 2.0)
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,

    /// Add random jitter to retry delays (default: true)
    #[serde(default = "default_true")]
    pub jitter: bool,
}

impl RetryConfig {
    /// Delay before the first retry as a [`Duration`].
    #[must_use]
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    /// Upper bound on the backoff delay as a [`Duration`].
    #[must_use]
    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 0,
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            backoff_multiplier: default_backoff_multiplier(),
            jitter: true,
        }
    }
}

/// Aggregation behavior configuration
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AggregatorConfig {
    /// Maximum collections fetched concurrently (default: 4)
    ///
    /// Pagination within one collection is always sequential; this bounds
    /// only the fan-out across collections.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_collections: usize,

    /// Overall deadline for one aggregation request in seconds
    /// (None = unbounded)
    ///
    /// On expiry the request returns whatever was aggregated so far.
    #[serde(default)]
    pub request_deadline_secs: Option<u64>,
}

impl AggregatorConfig {
    /// Overall request deadline as a [`Duration`], when configured.
    #[must_use]
    pub fn request_deadline(&self) -> Option<Duration> {
        self.request_deadline_secs.map(Duration::from_secs)
    }
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            max_concurrent_collections: default_max_concurrent(),
            request_deadline_secs: None,
        }
    }
}

/// When the static batch catalog is (re)read from disk
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CatalogReload {
    /// Read the file once and serve the cached parse for the process lifetime
    LoadOnce,
    /// Re-read the file on every request (default; picks up edits live)
    #[default]
    PerRequest,
}

/// Static batch catalog configuration
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CatalogConfig {
    /// Path to the batches JSON file (default: "batches.json")
    #[serde(default = "default_catalog_path")]
    #[schema(value_type = String)]
    pub path: PathBuf,

    /// Reload semantics (default: per_request)
    #[serde(default)]
    pub reload: CatalogReload,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            reload: CatalogReload::default(),
        }
    }
}

/// API server configuration
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiConfig {
    /// Bind address for the API server (default: 127.0.0.1:5000)
    #[serde(default = "default_bind_address")]
    #[schema(value_type = String)]
    pub bind_address: SocketAddr,

    /// Enable CORS headers (default: true)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins; "*" allows any origin (default: ["*"])
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Serve interactive Swagger UI at /swagger-ui (default: false)
    #[serde(default)]
    pub swagger_ui: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cors_enabled: true,
            cors_origins: default_cors_origins(),
            swagger_ui: false,
        }
    }
}

/// Main configuration for content-hub
///
/// Fields are organized into logical sub-configs:
/// - [`remote`](RemoteConfig): listing endpoint, media host, timeout, retry
/// - [`aggregator`](AggregatorConfig): fan-out bound, request deadline
/// - [`catalog`](CatalogConfig): batch catalog path and reload semantics
/// - [`api`](ApiConfig): bind address, CORS, Swagger UI
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct Config {
    /// Remote lecture-hosting service settings
    #[serde(default)]
    pub remote: RemoteConfig,

    /// Aggregation behavior settings
    #[serde(default)]
    pub aggregator: AggregatorConfig,

    /// Static batch catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// API server settings
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Validate the configuration, returning a [`crate::Error::Config`] for
    /// the first invalid setting found.
    pub fn validate(&self) -> crate::Result<()> {
        if self.remote.endpoint.is_empty() {
            return Err(crate::Error::Config {
                message: "remote endpoint must not be empty".to_string(),
                key: Some("remote.endpoint".to_string()),
            });
        }
        if !self.remote.endpoint.starts_with("http://")
            && !self.remote.endpoint.starts_with("https://")
        {
            return Err(crate::Error::Config {
                message: format!(
                    "remote endpoint must be an http(s) URL, got {}",
                    self.remote.endpoint
                ),
                key: Some("remote.endpoint".to_string()),
            });
        }
        if self.remote.media_host.is_empty() {
            return Err(crate::Error::Config {
                message: "media host must not be empty".to_string(),
                key: Some("remote.media_host".to_string()),
            });
        }
        if self.remote.page_limit == 0 {
            return Err(crate::Error::Config {
                message: "page limit must be at least 1".to_string(),
                key: Some("remote.page_limit".to_string()),
            });
        }
        if self.remote.timeout_secs == 0 {
            return Err(crate::Error::Config {
                message: "request timeout must be at least 1 second".to_string(),
                key: Some("remote.timeout_secs".to_string()),
            });
        }
        if self.aggregator.max_concurrent_collections == 0 {
            return Err(crate::Error::Config {
                message: "concurrency bound must be at least 1".to_string(),
                key: Some("aggregator.max_concurrent_collections".to_string()),
            });
        }
        Ok(())
    }
}

fn default_endpoint() -> String {
    "https://unacademy.com".to_string()
}

fn default_media_host() -> String {
    "uamedia.uacdn.net".to_string()
}

fn default_page_limit() -> u32 {
    600
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_initial_delay_ms() -> u64 {
    500
}

fn default_max_delay_ms() -> u64 {
    10_000
}

fn default_backoff_multiplier() -> f64 {
    2.0
}

fn default_max_concurrent() -> usize {
    4
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("batches.json")
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5000))
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_true() -> bool {
    true
}
