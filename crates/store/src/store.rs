use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::input::{NewTamperCheck, NewVerificationDetail, NewVerificationRecord};
use crate::models::{
    AuditLogRow, LedgerStatus, PropertyRow, Statistics, TamperCheckRow, VerificationDetailRow,
    VerificationRecordRow,
};

/// Connection-pooled handle over the relational schema. One `Store` per
/// process; cheap to clone (the pool is reference-counted internally).
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Opens a connection pool and applies any pending migrations.
    pub async fn connect(cfg: &StoreConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(cfg.max_connections)
            .connect(&cfg.database_url)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!(max_connections = cfg.max_connections, "store_connected");
        Ok(Self { pool })
    }

    /// Builds a `Store` around an already-open pool (for tests against a
    /// pool pointed at a scratch database).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn upsert_property(
        &self,
        property_id: &str,
        document_type: &str,
        last_owner: Option<&str>,
        last_survey_number: Option<&str>,
    ) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO properties (property_id, document_type, last_owner, last_survey_number)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (property_id) DO UPDATE
               SET document_type = EXCLUDED.document_type,
                   last_owner = EXCLUDED.last_owner,
                   last_survey_number = EXCLUDED.last_survey_number",
        )
        .bind(property_id)
        .bind(document_type)
        .bind(last_owner)
        .bind(last_survey_number)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Persists Property (upsert), VerificationRecord, and VerificationDetail
    /// atomically, per the Orchestrator's step 5.
    pub async fn insert_verification(
        &self,
        record: &NewVerificationRecord,
        detail: &NewVerificationDetail,
    ) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO properties (property_id, document_type, last_owner, last_survey_number)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (property_id) DO UPDATE
               SET last_owner = EXCLUDED.last_owner,
                   last_survey_number = EXCLUDED.last_survey_number",
        )
        .bind(&record.property_id)
        .bind(&record.document_type)
        .bind(&detail.owner)
        .bind(&detail.survey_number)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO verification_records
                (verification_id, property_id, risk_score, risk_level,
                 classification_label, classification_confidence, fingerprint)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(record.verification_id)
        .bind(&record.property_id)
        .bind(record.risk_score)
        .bind(&record.risk_level)
        .bind(&record.classification_label)
        .bind(record.classification_confidence)
        .bind(&record.fingerprint)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO verification_details
                (verification_id, owner, survey_number, hissa_number, village, taluk, district,
                 extent_acres, extent_guntas, valid_from, valid_to, signed_date,
                 loans, mutations, case_numbers, dates,
                 cleaned_text_preview, chars_original, chars_cleaned, pages_processed)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)",
        )
        .bind(detail.verification_id)
        .bind(&detail.owner)
        .bind(&detail.survey_number)
        .bind(&detail.hissa_number)
        .bind(&detail.village)
        .bind(&detail.taluk)
        .bind(&detail.district)
        .bind(detail.extent_acres)
        .bind(detail.extent_guntas)
        .bind(&detail.valid_from)
        .bind(&detail.valid_to)
        .bind(&detail.signed_date)
        .bind(Json(&detail.loans))
        .bind(Json(&detail.mutations))
        .bind(Json(&detail.case_numbers))
        .bind(Json(&detail.dates))
        .bind(&detail.cleaned_text_preview)
        .bind(detail.chars_original)
        .bind(detail.chars_cleaned)
        .bind(detail.pages_processed)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Updates a previously persisted VerificationRecord with anchor fields,
    /// in a second transaction per the Orchestrator's step 6.
    pub async fn set_anchor(
        &self,
        verification_id: Uuid,
        anchor_reference: &str,
        anchor_block_height: i64,
        anchor_timestamp: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        sqlx::query(
            "UPDATE verification_records
               SET anchor_reference = $2, anchor_block_height = $3, anchor_timestamp = $4
             WHERE verification_id = $1",
        )
        .bind(verification_id)
        .bind(anchor_reference)
        .bind(anchor_block_height)
        .bind(anchor_timestamp)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn latest_verification(
        &self,
        property_id: &str,
    ) -> Result<(VerificationRecordRow, VerificationDetailRow), StoreError> {
        let record: VerificationRecordRow = sqlx::query_as(
            "SELECT * FROM verification_records
              WHERE property_id = $1
              ORDER BY created_at DESC
              LIMIT 1",
        )
        .bind(property_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(property_id.to_string()))?;

        let detail: VerificationDetailRow = sqlx::query_as(
            "SELECT * FROM verification_details WHERE verification_id = $1",
        )
        .bind(record.verification_id)
        .fetch_one(&self.pool)
        .await?;

        Ok((record, detail))
    }

    /// Deletes a Property and every row that references it, appending an
    /// audit entry. Returns `false` if the property did not exist. Never
    /// touches the ledger.
    pub async fn delete_property_cascade(&self, property_id: &str) -> Result<bool, StoreError> {
        let mut tx = self.pool.begin().await?;

        let existed: Option<PropertyRow> =
            sqlx::query_as("SELECT * FROM properties WHERE property_id = $1")
                .bind(property_id)
                .fetch_optional(&mut *tx)
                .await?;

        if existed.is_none() {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query(
            "DELETE FROM verification_details
              WHERE verification_id IN
                (SELECT verification_id FROM verification_records WHERE property_id = $1)",
        )
        .bind(property_id)
        .execute(&mut *tx)
        .await?;
        sqlx::query("DELETE FROM verification_records WHERE property_id = $1")
            .bind(property_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM tamper_checks WHERE property_id = $1")
            .bind(property_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM properties WHERE property_id = $1")
            .bind(property_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO audit_logs (operation, property_id, status, message)
             VALUES ('DELETE', $1, 'SUCCESS', 'property and dependent rows removed')",
        )
        .bind(property_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }

    pub async fn insert_tamper_check(&self, check: &NewTamperCheck) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO tamper_checks
                (tamper_check_id, property_id, anchored_fingerprint, recomputed_fingerprint,
                 hash_matched, risk_score_delta, status, warnings)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(check.tamper_check_id)
        .bind(&check.property_id)
        .bind(&check.anchored_fingerprint)
        .bind(&check.recomputed_fingerprint)
        .bind(check.hash_matched)
        .bind(check.risk_score_delta)
        .bind(&check.status)
        .bind(Json(&check.warnings))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn append_audit_log(
        &self,
        operation: &str,
        property_id: Option<&str>,
        status: &str,
        message: &str,
    ) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO audit_logs (operation, property_id, status, message)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(operation)
        .bind(property_id)
        .bind(status)
        .bind(message)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn list_audit_logs(&self, limit: i64) -> Result<Vec<AuditLogRow>, StoreError> {
        let rows = sqlx::query_as(
            "SELECT * FROM audit_logs ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn statistics(&self) -> Result<Statistics, StoreError> {
        let properties: i64 = sqlx::query("SELECT COUNT(*) AS c FROM properties")
            .fetch_one(&self.pool)
            .await?
            .try_get("c")?;
        let verifications: i64 = sqlx::query("SELECT COUNT(*) AS c FROM verification_records")
            .fetch_one(&self.pool)
            .await?
            .try_get("c")?;
        let low: i64 = sqlx::query(
            "SELECT COUNT(*) AS c FROM verification_records WHERE risk_level = 'LOW'",
        )
        .fetch_one(&self.pool)
        .await?
        .try_get("c")?;
        let medium: i64 = sqlx::query(
            "SELECT COUNT(*) AS c FROM verification_records WHERE risk_level = 'MEDIUM'",
        )
        .fetch_one(&self.pool)
        .await?
        .try_get("c")?;
        let high: i64 = sqlx::query(
            "SELECT COUNT(*) AS c FROM verification_records WHERE risk_level = 'HIGH'",
        )
        .fetch_one(&self.pool)
        .await?
        .try_get("c")?;

        Ok(Statistics {
            total_properties: properties,
            total_verifications: verifications,
            low_risk_count: low,
            medium_risk_count: medium,
            high_risk_count: high,
        })
    }

    pub async fn ledger_status(&self) -> Result<LedgerStatus, StoreError> {
        let latest_block_height: Option<i64> =
            sqlx::query_scalar("SELECT MAX(block_height) FROM ledger_entries")
                .fetch_one(&self.pool)
                .await?;
        let total_entries: i64 = sqlx::query("SELECT COUNT(*) AS c FROM ledger_entries")
            .fetch_one(&self.pool)
            .await?
            .try_get("c")?;

        Ok(LedgerStatus {
            latest_block_height,
            total_entries,
        })
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}
