//! Shared structural validation.
//!
//! One validation contract for client and server: family-id rule, file
//! constraints, and the shape check applied to validation-service responses.
//! Everything here is pure; transport concerns stay in the callers.

use crate::constants::MAX_FILE_SIZE_BYTES;
use crate::models::ValidationResult;

/// Violation of the shared upload/response contract.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Family ID is required")]
    MissingFamilyId,

    #[error("Only image and PDF files are allowed (got '{content_type}')")]
    UnsupportedContentType { content_type: String },

    #[error("File size exceeds maximum allowed size of {} MB", MAX_FILE_SIZE_BYTES / 1024 / 1024)]
    FileTooLarge { size: usize },

    #[error("Body does not match the validation result shape: {0}")]
    MalformedResult(String),
}

/// Family id must be present and non-empty (whitespace alone does not count).
pub fn validate_family_id(family_id: &str) -> Result<(), SchemaError> {
    if family_id.trim().is_empty() {
        return Err(SchemaError::MissingFamilyId);
    }
    Ok(())
}

/// Normalize MIME type by stripping parameters (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Only `image/*` and `application/pdf` are accepted, case-insensitively.
pub fn is_allowed_content_type(content_type: &str) -> bool {
    let normalized = normalize_mime_type(content_type).to_lowercase();
    normalized.starts_with("image/") || normalized == "application/pdf"
}

pub fn validate_content_type(content_type: &str) -> Result<(), SchemaError> {
    if !is_allowed_content_type(content_type) {
        return Err(SchemaError::UnsupportedContentType {
            content_type: normalize_mime_type(content_type).to_string(),
        });
    }
    Ok(())
}

pub fn validate_file_size(size: usize) -> Result<(), SchemaError> {
    if size > MAX_FILE_SIZE_BYTES {
        return Err(SchemaError::FileTooLarge { size });
    }
    Ok(())
}

/// Shape-check a JSON value against the ValidationResult contract.
///
/// Used by the server on upstream responses and by the client on proxy
/// responses; an unrecognized or malformed body is a hard failure for both.
pub fn parse_validation_result(value: serde_json::Value) -> Result<ValidationResult, SchemaError> {
    serde_json::from_value(value).map_err(|e| SchemaError::MalformedResult(e.to_string()))
}
