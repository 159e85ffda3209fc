//! Domain methods for the Veridoc API client.

use anyhow::{Context, Result};
use veridoc_core::constants::{FAMILY_ID_FIELD, FILES_FIELD};
use veridoc_core::models::{UploadRequest, ValidationResult};
use veridoc_core::validation::{parse_validation_result, validate_family_id};

use crate::staging::StagedFiles;
use crate::ApiClient;

impl ApiClient {
    /// Submit staged files for validation.
    ///
    /// Fails locally (no network call) on an empty family id or an empty
    /// staging list. On the wire, each staged file becomes one `files` part
    /// with its original filename and content type. The response is
    /// shape-checked against the ValidationResult contract; a malformed body
    /// is a hard failure, not a silently accepted one. The staged collection
    /// is left untouched either way so the caller can retry on failure and
    /// reset on success.
    pub async fn validate_documents(
        &self,
        request: &UploadRequest,
        staged: &StagedFiles,
    ) -> Result<ValidationResult> {
        validate_family_id(&request.family_id)?;
        if staged.is_empty() {
            anyhow::bail!("No files selected; stage at least one file before submitting");
        }

        let mut form =
            reqwest::multipart::Form::new().text(FAMILY_ID_FIELD, request.family_id.clone());
        for file in staged.files() {
            let part = reqwest::multipart::Part::bytes(file.data.to_vec())
                .file_name(file.file_name.clone())
                .mime_str(&file.content_type)
                .with_context(|| format!("Invalid content type for {}", file.file_name))?;
            form = form.part(FILES_FIELD, part);
        }

        let body: serde_json::Value = self.post_multipart("/api/validate-docs", form).await?;
        let result = parse_validation_result(body)?;
        Ok(result)
    }
}
