use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct PropertyRow {
    pub property_id: String,
    pub document_type: String,
    pub last_owner: Option<String>,
    pub last_survey_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct VerificationRecordRow {
    pub verification_id: Uuid,
    pub property_id: String,
    pub risk_score: i16,
    pub risk_level: String,
    pub classification_label: String,
    pub classification_confidence: f32,
    pub fingerprint: Vec<u8>,
    pub anchor_reference: Option<String>,
    pub anchor_block_height: Option<i64>,
    pub anchor_timestamp: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct VerificationDetailRow {
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
    pub loans: Json<Value>,
    pub mutations: Json<Value>,
    pub case_numbers: Json<Value>,
    pub dates: Json<Value>,
    pub cleaned_text_preview: String,
    pub chars_original: i32,
    pub chars_cleaned: i32,
    pub pages_processed: i32,
}

#[derive(Debug, Clone, FromRow)]
pub struct TamperCheckRow {
    pub tamper_check_id: Uuid,
    pub property_id: String,
    pub anchored_fingerprint: Option<Vec<u8>>,
    pub recomputed_fingerprint: Option<Vec<u8>>,
    pub hash_matched: bool,
    pub risk_score_delta: i32,
    pub status: String,
    pub warnings: Json<Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct AuditLogRow {
    pub id: i64,
    pub operation: String,
    pub property_id: Option<String>,
    pub status: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct LedgerEntryRow {
    pub block_height: i64,
    pub property_id: String,
    pub fingerprint: Vec<u8>,
    pub risk_score: i16,
    pub ledger_timestamp: DateTime<Utc>,
    pub prev_block_height: Option<i64>,
}

/// Risk-bucket counts returned by [`crate::Store::statistics`].
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    pub total_properties: i64,
    pub total_verifications: i64,
    pub low_risk_count: i64,
    pub medium_risk_count: i64,
    pub high_risk_count: i64,
}

/// Ledger connectivity snapshot returned by [`crate::Store::ledger_status`].
#[derive(Debug, Clone, Default)]
pub struct LedgerStatus {
    pub latest_block_height: Option<i64>,
    pub total_entries: i64,
}
