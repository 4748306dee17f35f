use crate::types::{Classification, ClassificationLabel};

/// Deterministic keyword classifier used when no network-backed model is
/// configured. Cheap, reproducible, and good enough to exercise every
/// downstream stage (including the risk scorer's `classifier_high_risk`
/// factor) without a trained model.
pub fn classify_by_keyword(text: &str) -> Classification {
    let upper = text.to_uppercase();

    if contains_any(&upper, &["FORGED", "TAMPERED", "FORGERY"]) {
        return Classification {
            label: ClassificationLabel::ForgerySuspected,
            confidence: 0.9,
        };
    }
    if contains_any(&upper, &["CASE NO", "WRIT PETITION", "HIGH COURT", "LITIGATION"]) {
        return Classification {
            label: ClassificationLabel::CourtCase,
            confidence: 0.85,
        };
    }
    if contains_any(&upper, &["MUTATION PENDING", "MUTATION NO"]) {
        return Classification {
            label: ClassificationLabel::MutationPending,
            confidence: 0.8,
        };
    }
    if contains_any(&upper, &["LOAN", "MORTGAGE", "CHARGE"]) {
        return Classification {
            label: ClassificationLabel::LoanDetected,
            confidence: 0.75,
        };
    }
    if upper.trim().is_empty() {
        return Classification::unknown();
    }

    Classification {
        label: ClassificationLabel::ClearTitle,
        confidence: 0.7,
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_forgery_keywords() {
        let out = classify_by_keyword("This document appears to be FORGED.");
        assert_eq!(out.label, ClassificationLabel::ForgerySuspected);
    }

    #[test]
    fn detects_court_case_keywords() {
        let out = classify_by_keyword("Pending Case No: WP-1/2020 in the High Court.");
        assert_eq!(out.label, ClassificationLabel::CourtCase);
    }

    #[test]
    fn defaults_to_clear_title() {
        let out = classify_by_keyword("Owner: Ravi Kumar, Survey 45/2A");
        assert_eq!(out.label, ClassificationLabel::ClearTitle);
    }

    #[test]
    fn empty_text_is_unknown() {
        let out = classify_by_keyword("   ");
        assert_eq!(out.label, ClassificationLabel::Unknown);
        assert_eq!(out.confidence, 0.0);
    }
}
