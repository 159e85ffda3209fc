//! API constants.

/// API base path prefix.
pub const API_PREFIX: &str = "/api";

/// Cap on the whole multipart body. Per-file limits are enforced during
/// extraction; this bound only protects the server from unbounded bodies.
pub const MAX_REQUEST_BODY_BYTES: usize = 100 * 1024 * 1024;
