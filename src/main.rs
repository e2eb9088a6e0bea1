//! content-hub service entrypoint
//!
//! Loads configuration, initializes logging, and serves the REST API until
//! a termination signal arrives.

use content_hub::{Catalog, Config, LectureAggregator, Result, api, wait_for_signal};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable naming the JSON config file.
const CONFIG_ENV: &str = "CONTENT_HUB_CONFIG";

/// Config file probed when the environment variable is unset.
const DEFAULT_CONFIG_PATH: &str = "content-hub.json";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(load_config().await?);
    config.validate()?;

    let aggregator = Arc::new(LectureAggregator::new(
        config.remote.clone(),
        config.aggregator.clone(),
    )?);
    let catalog = Arc::new(Catalog::new(config.catalog.clone()));

    info!(
        endpoint = %config.remote.endpoint,
        bind = %config.api.bind_address,
        "content-hub starting"
    );

    tokio::select! {
        result = api::start_api_server(aggregator, catalog, config) => result,
        _ = wait_for_signal() => {
            info!("Shutting down");
            Ok(())
        }
    }
}

/// Load configuration from `CONTENT_HUB_CONFIG`, the default config path,
/// or built-in defaults, in that order.
async fn load_config() -> Result<Config> {
    let path = match std::env::var(CONFIG_ENV) {
        Ok(path) => path,
        Err(_) => {
            if !Path::new(DEFAULT_CONFIG_PATH).exists() {
                warn!("no config file found, using built-in defaults");
                return Ok(Config::default());
            }
            DEFAULT_CONFIG_PATH.to_string()
        }
    };

    let contents = tokio::fs::read_to_string(&path).await?;
    let config: Config = serde_json::from_str(&contents)?;
    info!(path = %path, "loaded configuration");
    Ok(config)
}
