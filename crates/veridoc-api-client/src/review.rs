//! Review-session state for a received validation result.
//!
//! Pure view state: default selection, badge classification, suggestion
//! classification, and the toggleable selection set. No I/O here; the CLI
//! (or any other shell) renders from these types.

use std::collections::BTreeSet;

use veridoc_core::models::{FraudRisk, ValidationResult};

/// Display badge for a validated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Warning,
    NeedsReview,
    Valid,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Warning => "Warning",
            Badge::NeedsReview => "Please Review",
            Badge::Valid => "Valid",
        }
    }
}

/// Classify a document's badge from its status text and fraud risk.
///
/// Precedence matters: a status saying "needs review" with medium risk still
/// lands on Warning because the warning branch is checked first.
pub fn badge_for(status: &str, fraud_risk: FraudRisk) -> Badge {
    let status = status.to_lowercase();
    if status.contains("warning") || fraud_risk == FraudRisk::Medium {
        Badge::Warning
    } else if status.contains("review") || fraud_risk == FraudRisk::High {
        Badge::NeedsReview
    } else {
        Badge::Valid
    }
}

/// How a suggestion string should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    /// Highlighted, actionable request for another document.
    Actionable,
    /// Parenthesized informational aside; dimmed.
    Aside,
}

pub fn suggestion_kind(suggestion: &str) -> SuggestionKind {
    if suggestion.contains('(') {
        SuggestionKind::Aside
    } else {
        SuggestionKind::Actionable
    }
}

/// Render a matched document type for display: "DriversLicense" -> "Drivers License".
pub fn spaced_type_name(matched_type: &str) -> String {
    let mut out = String::with_capacity(matched_type.len() + 4);
    for (i, c) in matched_type.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Default selection: pre-select every document that is not high risk and whose
/// status does not ask for review. A heuristic default only; the user can
/// toggle anything afterward.
pub fn default_selection(result: &ValidationResult) -> BTreeSet<usize> {
    result
        .validations
        .iter()
        .enumerate()
        .filter(|(_, doc)| {
            doc.fraud_risk != FraudRisk::High && !doc.status.to_lowercase().contains("review")
        })
        .map(|(index, _)| index)
        .collect()
}

/// One review screen's worth of state: the received result plus the selection
/// set. Dropped (with its selection) when the review closes.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    result: ValidationResult,
    selected: BTreeSet<usize>,
}

impl ReviewSession {
    /// Start a review for a freshly received result, applying the default
    /// selection rule once.
    pub fn new(result: ValidationResult) -> Self {
        let selected = default_selection(&result);
        Self { result, selected }
    }

    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Toggle one document's membership in the selection set.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.result.validations.len() {
            return;
        }
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    /// Close the review, yielding the indices the user chose to proceed with.
    pub fn proceed(self) -> Vec<usize> {
        self.selected.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veridoc_core::models::DocumentValidation;

    fn doc(index: u32, status: &str, fraud_risk: FraudRisk) -> DocumentValidation {
        DocumentValidation {
            index,
            file_name: format!("file{}.jpg", index),
            status: status.to_string(),
            matched_type: "Passport".to_string(),
            reason: String::new(),
            fraud_risk,
            fraud_notes: String::new(),
        }
    }

    fn result(docs: Vec<DocumentValidation>) -> ValidationResult {
        ValidationResult {
            validations: docs,
            suggestions: vec![],
            summary: String::new(),
            storyline: String::new(),
            unclassified_files: vec![],
        }
    }

    #[test]
    fn badge_warning_takes_precedence() {
        assert_eq!(badge_for("warning: blurry", FraudRisk::Low), Badge::Warning);
        assert_eq!(badge_for("valid", FraudRisk::Medium), Badge::Warning);
        // "review" in the status loses to medium risk — warning branch first
        assert_eq!(
            badge_for("needs review", FraudRisk::Medium),
            Badge::Warning
        );
    }

    #[test]
    fn badge_needs_review_before_valid() {
        assert_eq!(badge_for("Needs Review", FraudRisk::Low), Badge::NeedsReview);
        assert_eq!(badge_for("valid", FraudRisk::High), Badge::NeedsReview);
        assert_eq!(badge_for("valid", FraudRisk::Low), Badge::Valid);
    }

    #[test]
    fn badge_is_total() {
        for status in ["", "valid", "WARNING", "please review", "ok"] {
            for risk in [FraudRisk::Low, FraudRisk::Medium, FraudRisk::High] {
                // classification always produces exactly one badge
                let _ = badge_for(status, risk);
            }
        }
    }

    #[test]
    fn default_selection_skips_high_risk_and_review_statuses() {
        let result = result(vec![
            doc(0, "valid", FraudRisk::Low),
            doc(1, "warning: partial match", FraudRisk::Medium),
            doc(2, "needs review", FraudRisk::Low),
            doc(3, "valid", FraudRisk::High),
            doc(4, "Please REVIEW this", FraudRisk::Medium),
        ]);

        let selected = default_selection(&result);
        assert_eq!(selected.into_iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn selection_invariant_holds_for_every_document() {
        let result = result(vec![
            doc(0, "valid", FraudRisk::Low),
            doc(1, "needs review", FraudRisk::High),
            doc(2, "warning", FraudRisk::Medium),
        ]);
        let selected = default_selection(&result);

        for (i, d) in result.validations.iter().enumerate() {
            let expected =
                d.fraud_risk != FraudRisk::High && !d.status.to_lowercase().contains("review");
            assert_eq!(selected.contains(&i), expected, "document {}", i);
        }
    }

    #[test]
    fn toggling_overrides_the_default() {
        let mut session = ReviewSession::new(result(vec![
            doc(0, "valid", FraudRisk::Low),
            doc(1, "needs review", FraudRisk::High),
        ]));
        assert!(session.is_selected(0));
        assert!(!session.is_selected(1));

        session.toggle(0);
        session.toggle(1);
        assert!(!session.is_selected(0));
        assert!(session.is_selected(1));

        // out-of-range toggles are ignored
        session.toggle(9);
        assert_eq!(session.selected_indices(), vec![1]);
    }

    #[test]
    fn proceed_yields_sorted_indices() {
        let mut session = ReviewSession::new(result(vec![
            doc(0, "valid", FraudRisk::Low),
            doc(1, "valid", FraudRisk::Low),
            doc(2, "valid", FraudRisk::Low),
        ]));
        session.toggle(1);
        assert_eq!(session.proceed(), vec![0, 2]);
    }

    #[test]
    fn suggestions_with_parentheses_are_asides() {
        assert_eq!(
            suggestion_kind("Provide a recent utility bill"),
            SuggestionKind::Actionable
        );
        assert_eq!(
            suggestion_kind("Birth certificate (already on file)"),
            SuggestionKind::Aside
        );
    }

    #[test]
    fn spaced_type_name_splits_pascal_case() {
        assert_eq!(spaced_type_name("DriversLicense"), "Drivers License");
        assert_eq!(spaced_type_name("Passport"), "Passport");
        assert_eq!(spaced_type_name(""), "");
    }
}
