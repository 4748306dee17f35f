use chrono::{DateTime, Utc};
use extract::EntityBundle;
use risk::{RiskFactor, RiskLevel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Declared document container type, carried through from the upload
/// request and persisted on the Property row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    Rtc,
    Mr,
    Ec,
    SaleDeed,
    Unknown,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Rtc => "RTC",
            DocumentType::Mr => "MR",
            DocumentType::Ec => "EC",
            DocumentType::SaleDeed => "SALE_DEED",
            DocumentType::Unknown => "UNKNOWN",
        }
    }
}

/// Ledger-anchoring outcome attached to a [`VerificationRecord`] when
/// anchoring succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorInfo {
    pub reference: String,
    pub block_height: u64,
    pub timestamp: DateTime<Utc>,
}

/// The canonical output of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub verification_id: Uuid,
    pub property_id: String,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub classification_label: String,
    pub classification_confidence: f32,
    pub fingerprint: [u8; 32],
    pub anchor: Option<AnchorInfo>,
    pub created_at: DateTime<Utc>,
}

/// One-to-one with [`VerificationRecord`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationDetail {
    pub verification_id: Uuid,
    pub entities: EntityBundle,
    pub factors: Vec<RiskFactor>,
    pub recommendations: Vec<&'static str>,
    pub cleaned_text_preview: String,
    pub chars_original: usize,
    pub chars_cleaned: usize,
    pub pages_processed: u32,
    pub translation_warning: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TamperStatus {
    Verified,
    Tampered,
    NotFound,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TamperCheck {
    pub tamper_check_id: Uuid,
    pub property_id: String,
    pub anchored_fingerprint: Option<[u8; 32]>,
    pub recomputed_fingerprint: Option<[u8; 32]>,
    pub hash_matched: bool,
    pub risk_score_delta: i32,
    pub status: TamperStatus,
    pub warnings: Vec<String>,
    pub created_at: DateTime<Utc>,
}
