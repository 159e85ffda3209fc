//! Veridoc Core Library
//!
//! This crate provides the shared wire models, structural validation rules,
//! error types, and configuration used by both the Veridoc API server and its
//! clients.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{
    DocumentValidation, FraudRisk, UploadRequest, UploadedFile, ValidationResult,
};
pub use validation::{parse_validation_result, SchemaError};
