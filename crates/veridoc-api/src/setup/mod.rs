//! Application setup and initialization
//!
//! All application wiring extracted from main.rs so tests can build the same
//! router with a substituted upstream.

pub mod routes;
pub mod server;

use crate::services::HttpUpstreamValidator;
use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use veridoc_core::Config;

/// Initialize the application with the real HTTP upstream.
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    let upstream = HttpUpstreamValidator::from_config(&config)
        .context("Failed to create upstream validator")?;

    tracing::info!(
        upstream_url = %upstream.endpoint(),
        timeout_seconds = config.upstream_timeout_seconds(),
        "Upstream validation service configured"
    );

    let state = Arc::new(AppState::new(config.clone(), Arc::new(upstream)));
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
