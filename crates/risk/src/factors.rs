use serde::{Deserialize, Serialize};

/// A condition that contributed a fixed weight to the total score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskFactor {
    pub code: &'static str,
    pub weight: u8,
    pub description: &'static str,
}

pub const LOAN_PRESENT: RiskFactor = RiskFactor {
    code: "loan_present",
    weight: 30,
    description: "a loan or mortgage charge is recorded against this property",
};
pub const LEGAL_CASE: RiskFactor = RiskFactor {
    code: "legal_case",
    weight: 15,
    description: "a pending case number is recorded against this property",
};
pub const MUTATION_PENDING: RiskFactor = RiskFactor {
    code: "mutation_pending",
    weight: 20,
    description: "a mutation (ownership change) is pending on this record",
};
pub const OWNER_MISSING: RiskFactor = RiskFactor {
    code: "owner_missing",
    weight: 15,
    description: "no owner name could be extracted from the document",
};
pub const SURVEY_MISSING: RiskFactor = RiskFactor {
    code: "survey_missing",
    weight: 15,
    description: "no survey number could be extracted from the document",
};
pub const DATA_QUALITY_LOW: RiskFactor = RiskFactor {
    code: "data_quality_low",
    weight: 10,
    description: "cleaned text is too short to support confident extraction",
};
pub const VALIDITY_EXPIRED: RiskFactor = RiskFactor {
    code: "validity_expired",
    weight: 10,
    description: "the record's validity period has expired",
};
pub const CLASSIFIER_HIGH_RISK: RiskFactor = RiskFactor {
    code: "classifier_high_risk",
    weight: 20,
    description: "the document classifier flagged this record as high risk",
};

/// Deterministic recommendation text for a fired factor, looked up by code.
pub fn recommendation_for(code: &str) -> &'static str {
    match code {
        "loan_present" => "Verify loan closure status with the lender before proceeding.",
        "legal_case" => "Obtain a certified copy of the case status from the relevant court.",
        "mutation_pending" => "Confirm the mutation has been finalized in the revenue records.",
        "owner_missing" => "Request a clearer copy of the document to confirm ownership.",
        "survey_missing" => "Request a clearer copy of the document to confirm the survey number.",
        "data_quality_low" => "Re-scan the document at a higher resolution and re-verify.",
        "validity_expired" => "Request an updated extract reflecting current validity.",
        "classifier_high_risk" => "Escalate to manual review before relying on this record.",
        _ => "Review this record manually.",
    }
}
