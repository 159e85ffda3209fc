//! Test helpers: build the router with a substituted upstream validator.
//!
//! Run from workspace root: `cargo test -p veridoc-api --test validate_docs_test`
//! or `cargo test -p veridoc-api`.

pub mod fixtures;

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use veridoc_api::services::{UpstreamError, UpstreamValidator};
use veridoc_api::setup::routes;
use veridoc_api::state::AppState;
use veridoc_core::models::{UploadedFile, ValidationResult};
use veridoc_core::Config;

/// Build a test server around the real router with the given upstream.
pub fn setup_test_app(upstream: Arc<dyn UpstreamValidator>) -> TestServer {
    let config = Config::from_env().expect("Failed to load test configuration");
    let state = Arc::new(AppState::new(config.clone(), upstream));
    let router = routes::setup_routes(&config, state).expect("Failed to build router");
    TestServer::new(router).expect("Failed to start test server")
}

/// Upstream stub that always fails to connect. Counts attempts so tests can
/// assert that invalid requests never reach the external service.
pub struct DownUpstream {
    calls: AtomicUsize,
}

impl DownUpstream {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamValidator for DownUpstream {
    async fn validate(
        &self,
        _family_id: &str,
        _files: &[UploadedFile],
    ) -> Result<ValidationResult, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(UpstreamError::SendFailed("connection refused".to_string()))
    }
}

/// Upstream stub that answers with a fixed well-formed result.
pub struct FixedUpstream {
    result: ValidationResult,
    calls: AtomicUsize,
}

impl FixedUpstream {
    pub fn new(result: ValidationResult) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamValidator for FixedUpstream {
    async fn validate(
        &self,
        _family_id: &str,
        _files: &[UploadedFile],
    ) -> Result<ValidationResult, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.result.clone())
    }
}

/// Upstream stub that reaches the service but gets an HTML error page back.
pub struct GarbageUpstream;

#[async_trait]
impl UpstreamValidator for GarbageUpstream {
    async fn validate(
        &self,
        _family_id: &str,
        _files: &[UploadedFile],
    ) -> Result<ValidationResult, UpstreamError> {
        Err(UpstreamError::UnusableBody(
            "status 502 Bad Gateway: expected value at line 1 column 1".to_string(),
        ))
    }
}
