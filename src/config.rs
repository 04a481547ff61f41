use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

use crate::schemas::AppState;
use crate::upstream::PredictionClient;

/// Settings for the `serve` command, resolved from flags and environment
#[derive(Debug, Clone)]
pub struct ServeConfig {
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// Full URL of the upstream `/predict` endpoint
    pub upstream_url: String,
    /// Per-request timeout towards the upstream
    pub upstream_timeout: Duration,
    /// Directory holding the built frontend
    pub static_dir: PathBuf,
}

/// Initialize application state from the resolved configuration
pub fn initialize_app_state(config: &ServeConfig) -> Result<AppState> {
    tracing::info!("Relaying predictions to: {}", config.upstream_url);
    tracing::info!("Serving static files from: {}", config.static_dir.display());

    if !config.static_dir.is_dir() {
        tracing::warn!(
            "Static directory {} does not exist; only the API will be served",
            config.static_dir.display()
        );
    }

    let upstream = PredictionClient::new(config.upstream_url.clone(), config.upstream_timeout)
        .context("failed to build upstream HTTP client")?;

    Ok(AppState {
        upstream,
        static_dir: config.static_dir.clone(),
    })
}
