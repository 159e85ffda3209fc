//! Upstream validation-service client.
//!
//! The external service is an opaque collaborator behind the
//! [`UpstreamValidator`] trait so the proxy logic stays testable without a
//! network. The HTTP implementation makes a single timeout-bounded POST per
//! request; there is no retry.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use veridoc_core::constants::{FAMILY_ID_FIELD, FILES_FIELD};
use veridoc_core::models::{UploadedFile, ValidationResult};
use veridoc_core::validation::parse_validation_result;
use veridoc_core::Config;

/// Why an upstream attempt produced no usable result. Every variant is
/// recovered by the fallback path; the distinction only drives logging.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("request to validation service failed: {0}")]
    SendFailed(String),

    #[error("validation service returned an unusable body: {0}")]
    UnusableBody(String),
}

/// One validation attempt against the external service.
#[async_trait]
pub trait UpstreamValidator: Send + Sync {
    async fn validate(
        &self,
        family_id: &str,
        files: &[UploadedFile],
    ) -> Result<ValidationResult, UpstreamError>;
}

/// HTTP implementation forwarding the upload as multipart form data.
pub struct HttpUpstreamValidator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpUpstreamValidator {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client for the validation service")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.upstream_url(),
            Duration::from_secs(config.upstream_timeout_seconds()),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl UpstreamValidator for HttpUpstreamValidator {
    async fn validate(
        &self,
        family_id: &str,
        files: &[UploadedFile],
    ) -> Result<ValidationResult, UpstreamError> {
        let mut form =
            reqwest::multipart::Form::new().text(FAMILY_ID_FIELD, family_id.to_string());
        for file in files {
            let part = reqwest::multipart::Part::bytes(file.data.to_vec())
                .file_name(file.file_name.clone())
                .mime_str(&file.content_type)
                .map_err(|e| {
                    UpstreamError::SendFailed(format!(
                        "failed to encode part '{}': {}",
                        file.file_name, e
                    ))
                })?;
            form = form.part(FILES_FIELD, part);
        }

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UpstreamError::SendFailed(e.to_string()))?;

        // The body is shape-checked regardless of status: an error page is an
        // unusable body whether it arrives with 200 or 502.
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::UnusableBody(e.to_string()))?;

        let value: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| UpstreamError::UnusableBody(format!("status {}: {}", status, e)))?;

        parse_validation_result(value).map_err(|e| UpstreamError::UnusableBody(e.to_string()))
    }
}
