use serde::{Deserialize, Serialize};

/// The fixed label set the classifier is allowed to return. Anything else
/// reported by a provider collapses to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassificationLabel {
    ClearTitle,
    LoanDetected,
    CourtCase,
    MutationPending,
    ForgerySuspected,
    Unknown,
}

impl ClassificationLabel {
    /// The wire/canonical string form, matching the names used by the risk
    /// scorer's label comparisons.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassificationLabel::ClearTitle => "CLEAR_TITLE",
            ClassificationLabel::LoanDetected => "LOAN_DETECTED",
            ClassificationLabel::CourtCase => "COURT_CASE",
            ClassificationLabel::MutationPending => "MUTATION_PENDING",
            ClassificationLabel::ForgerySuspected => "FORGERY_SUSPECTED",
            ClassificationLabel::Unknown => "UNKNOWN",
        }
    }
}

/// Result of one classification call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: ClassificationLabel,
    pub confidence: f32,
}

impl Classification {
    pub fn unknown() -> Self {
        Self {
            label: ClassificationLabel::Unknown,
            confidence: 0.0,
        }
    }

    /// Applies the confidence floor: a label below it is not trustworthy
    /// enough to influence risk scoring or the fingerprint, so it collapses
    /// to `Unknown` at zero confidence.
    pub fn floored(self, confidence_floor: f32) -> Self {
        if self.confidence < confidence_floor {
            Classification::unknown()
        } else {
            self
        }
    }
}
