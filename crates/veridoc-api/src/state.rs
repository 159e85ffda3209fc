//! Application state.

use std::sync::Arc;

use veridoc_core::Config;

use crate::services::UpstreamValidator;

/// Shared state for all handlers. The endpoint is stateless per request; this
/// only carries configuration and the pluggable upstream dependency.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub upstream: Arc<dyn UpstreamValidator>,
}

impl AppState {
    pub fn new(config: Config, upstream: Arc<dyn UpstreamValidator>) -> Self {
        Self { config, upstream }
    }
}
