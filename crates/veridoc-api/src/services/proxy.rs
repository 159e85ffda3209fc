//! Try-upstream-or-fall-back, as an explicit two-branch outcome.

use veridoc_core::models::{UploadedFile, ValidationResult};

use super::mock;
use super::upstream::UpstreamValidator;

/// Where a validation result came from. Both branches carry a complete
/// result; the branch itself only matters for logging and tests.
#[derive(Debug)]
pub enum ValidationOutcome {
    /// The external service answered with a well-formed result.
    Upstream(ValidationResult),
    /// The external service was unusable; this is the deterministic mock.
    Fallback(ValidationResult),
}

impl ValidationOutcome {
    pub fn source(&self) -> &'static str {
        match self {
            ValidationOutcome::Upstream(_) => "upstream",
            ValidationOutcome::Fallback(_) => "fallback",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ValidationOutcome::Fallback(_))
    }

    pub fn into_result(self) -> ValidationResult {
        match self {
            ValidationOutcome::Upstream(result) | ValidationOutcome::Fallback(result) => result,
        }
    }
}

/// Single-attempt proxy: one upstream call, and on any upstream error the
/// deterministic fallback result. Upstream failure is never surfaced to the
/// client; it is logged and recovered here.
pub async fn validate_with_fallback(
    upstream: &dyn UpstreamValidator,
    family_id: &str,
    files: &[UploadedFile],
) -> ValidationOutcome {
    match upstream.validate(family_id, files).await {
        Ok(result) => ValidationOutcome::Upstream(result),
        Err(err) => {
            tracing::warn!(
                error = %err,
                file_count = files.len(),
                "Validation service unusable; answering with the fallback result"
            );
            ValidationOutcome::Fallback(mock::fallback_result(family_id, files))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::upstream::UpstreamError;
    use async_trait::async_trait;
    use veridoc_core::models::FraudRisk;

    struct HealthyUpstream;

    #[async_trait]
    impl UpstreamValidator for HealthyUpstream {
        async fn validate(
            &self,
            _family_id: &str,
            files: &[UploadedFile],
        ) -> Result<ValidationResult, UpstreamError> {
            Ok(ValidationResult {
                validations: vec![],
                suggestions: vec![],
                summary: format!("{} files seen upstream", files.len()),
                storyline: String::new(),
                unclassified_files: vec![],
            })
        }
    }

    struct DownUpstream;

    #[async_trait]
    impl UpstreamValidator for DownUpstream {
        async fn validate(
            &self,
            _family_id: &str,
            _files: &[UploadedFile],
        ) -> Result<ValidationResult, UpstreamError> {
            Err(UpstreamError::SendFailed("connection refused".to_string()))
        }
    }

    fn sample_files() -> Vec<UploadedFile> {
        vec![
            UploadedFile::new("license.jpg", "image/jpeg", vec![1u8]),
            UploadedFile::new("passport.png", "image/png", vec![2u8]),
        ]
    }

    #[tokio::test]
    async fn healthy_upstream_passes_through() {
        let outcome = validate_with_fallback(&HealthyUpstream, "8480995", &sample_files()).await;
        assert_eq!(outcome.source(), "upstream");
        assert!(!outcome.is_fallback());
        assert_eq!(outcome.into_result().summary, "2 files seen upstream");
    }

    #[tokio::test]
    async fn unreachable_upstream_yields_deterministic_fallback() {
        let outcome = validate_with_fallback(&DownUpstream, "8480995", &sample_files()).await;
        assert!(outcome.is_fallback());

        let result = outcome.into_result();
        assert_eq!(result.validations.len(), 2);
        assert_eq!(result.validations[0].fraud_risk, FraudRisk::Medium);
        assert_eq!(result.validations[1].fraud_risk, FraudRisk::High);
        assert!(result.unclassified_files.is_empty());
    }
}
