//! Proxy services: the pluggable upstream validator and the fallback path.

pub mod mock;
pub mod proxy;
pub mod upstream;

pub use proxy::{validate_with_fallback, ValidationOutcome};
pub use upstream::{HttpUpstreamValidator, UpstreamError, UpstreamValidator};
