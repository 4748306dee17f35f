use serde_json::Value;
use uuid::Uuid;

/// Everything the Orchestrator gathers for one pipeline run, shaped for a
/// single `verify()` write without any engine-crate type leaking in here.
pub struct NewVerificationRecord {
    pub verification_id: Uuid,
    pub property_id: String,
    pub document_type: String,
    pub risk_score: i16,
    pub risk_level: String,
    pub classification_label: String,
    pub classification_confidence: f32,
    pub fingerprint: Vec<u8>,
}

pub struct NewVerificationDetail {
    pub verification_id: Uuid,
    pub owner: String,
    pub survey_number: String,
    pub hissa_number: String,
    pub village: String,
    pub taluk: String,
    pub district: String,
    pub extent_acres: i32,
    pub extent_guntas: i32,
    pub valid_from: Option<String>,
    pub valid_to: Option<String>,
    pub signed_date: Option<String>,
    pub loans: Value,
    pub mutations: Value,
    pub case_numbers: Value,
    pub dates: Value,
    pub cleaned_text_preview: String,
    pub chars_original: i32,
    pub chars_cleaned: i32,
    pub pages_processed: i32,
}

pub struct NewTamperCheck {
    pub tamper_check_id: Uuid,
    pub property_id: String,
    pub anchored_fingerprint: Option<Vec<u8>>,
    pub recomputed_fingerprint: Option<Vec<u8>>,
    pub hash_matched: bool,
    pub risk_score_delta: i32,
    pub status: String,
    pub warnings: Value,
}
