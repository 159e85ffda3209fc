//! Veridoc API Library
//!
//! This crate provides the HTTP handlers, upstream proxy services, and
//! application setup for the document validation API.

// Module declarations
mod api_doc;
pub mod constants;
mod handlers;
pub mod services;
pub mod setup;
mod utils;

// Public modules
pub mod error;
pub mod state;

// Re-exports
pub use error::ErrorResponse;
pub use services::{UpstreamError, UpstreamValidator, ValidationOutcome};
