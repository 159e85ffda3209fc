use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Three-level fraud assessment attached to each validated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FraudRisk {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for FraudRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FraudRisk::Low => write!(f, "low"),
            FraudRisk::Medium => write!(f, "medium"),
            FraudRisk::High => write!(f, "high"),
        }
    }
}

/// Per-document verdict from the validation service (or the fallback mock).
/// Immutable once received.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentValidation {
    /// Position of the document in the submitted file list.
    pub index: u32,
    pub file_name: String,
    /// Free-text status; conventionally carries tokens like "warning" or "review".
    pub status: String,
    /// Document category the service matched, e.g. "DriversLicense".
    pub matched_type: String,
    pub reason: String,
    pub fraud_risk: FraudRisk,
    pub fraud_notes: String,
}

/// Full validation report for one upload request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub validations: Vec<DocumentValidation>,
    pub suggestions: Vec<String>,
    pub summary: String,
    pub storyline: String,
    /// Uploaded filenames the service could not map to any known document type.
    pub unclassified_files: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraud_risk_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&FraudRisk::Low).unwrap(), "\"low\"");
        assert_eq!(
            serde_json::to_string(&FraudRisk::Medium).unwrap(),
            "\"medium\""
        );
        assert_eq!(serde_json::to_string(&FraudRisk::High).unwrap(), "\"high\"");
    }

    #[test]
    fn fraud_risk_rejects_unknown_level() {
        assert!(serde_json::from_str::<FraudRisk>("\"critical\"").is_err());
    }

    #[test]
    fn validation_result_uses_camel_case_wire_names() {
        let result = ValidationResult {
            validations: vec![DocumentValidation {
                index: 0,
                file_name: "license.jpg".to_string(),
                status: "valid".to_string(),
                matched_type: "DriversLicense".to_string(),
                reason: "All fields legible".to_string(),
                fraud_risk: FraudRisk::Low,
                fraud_notes: "No anomalies".to_string(),
            }],
            suggestions: vec!["Provide a utility bill".to_string()],
            summary: "1 document validated".to_string(),
            storyline: "A single driver's license was submitted.".to_string(),
            unclassified_files: vec![],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("unclassifiedFiles").is_some());
        let doc = &json["validations"][0];
        assert_eq!(doc["fileName"], "license.jpg");
        assert_eq!(doc["matchedType"], "DriversLicense");
        assert_eq!(doc["fraudRisk"], "low");
        assert_eq!(doc["fraudNotes"], "No anomalies");
    }
}
