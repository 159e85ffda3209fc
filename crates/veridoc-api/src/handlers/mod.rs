//! HTTP handlers.

pub mod validate_docs;
