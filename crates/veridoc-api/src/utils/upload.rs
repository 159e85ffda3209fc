//! Multipart extraction for the validation endpoint.

use axum::extract::Multipart;
use veridoc_core::constants::{FAMILY_ID_FIELD, FILES_FIELD};
use veridoc_core::models::UploadedFile;
use veridoc_core::validation;
use veridoc_core::AppError;

/// Extracted upload: the family id field (if present) and every accepted file.
#[derive(Debug, Default)]
pub struct ExtractedUpload {
    pub family_id: Option<String>,
    pub files: Vec<UploadedFile>,
}

/// Drain the multipart form into memory.
///
/// A file part with a content type outside the allowlist, or over the size
/// cap, fails the whole request here - before any business logic runs.
/// Unknown fields are ignored.
pub async fn extract_upload(mut multipart: Multipart) -> Result<ExtractedUpload, AppError> {
    let mut upload = ExtractedUpload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if field_name == FAMILY_ID_FIELD {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read family id: {}", e)))?;
            upload.family_id = Some(value);
        } else if field_name == FILES_FIELD {
            let file_name = field
                .file_name()
                .map(|s: &str| s.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            let content_type = field
                .content_type()
                .map(|s: &str| s.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());

            validation::validate_content_type(&content_type)
                .map_err(|e| AppError::InvalidInput(format!("{}: {}", file_name, e)))?;

            let data = field.bytes().await.map_err(|e| {
                AppError::InvalidInput(format!("Failed to read file data for {}: {}", file_name, e))
            })?;

            validation::validate_file_size(data.len())
                .map_err(|e| AppError::PayloadTooLarge(format!("{}: {}", file_name, e)))?;

            upload.files.push(UploadedFile::new(file_name, content_type, data));
        }
    }

    Ok(upload)
}
