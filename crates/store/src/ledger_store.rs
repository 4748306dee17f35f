use async_trait::async_trait;
use ledger::{LedgerEntry, LedgerEntryStore, LedgerError};

use crate::models::LedgerEntryRow;
use crate::store::Store;

impl From<LedgerEntryRow> for LedgerEntry {
    fn from(row: LedgerEntryRow) -> Self {
        let mut fingerprint = [0u8; 32];
        let len = row.fingerprint.len().min(32);
        fingerprint[..len].copy_from_slice(&row.fingerprint[..len]);
        LedgerEntry {
            property_id: row.property_id,
            fingerprint,
            risk_score: row.risk_score as u8,
            block_height: row.block_height as u64,
            ledger_timestamp: row.ledger_timestamp,
            prev_block_height: row.prev_block_height.map(|h| h as u64),
        }
    }
}

fn unavailable(err: sqlx::Error) -> LedgerError {
    LedgerError::Unavailable(err.to_string())
}

#[async_trait]
impl LedgerEntryStore for Store {
    async fn append(
        &self,
        property_id: &str,
        fingerprint: [u8; 32],
        risk_score: u8,
    ) -> Result<LedgerEntry, LedgerError> {
        let mut tx = self.pool().begin().await.map_err(unavailable)?;

        let prev: Option<i64> = sqlx::query_scalar(
            "SELECT block_height FROM ledger_entries
              WHERE property_id = $1
              ORDER BY block_height DESC
              LIMIT 1
              FOR UPDATE",
        )
        .bind(property_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(unavailable)?;

        let row: LedgerEntryRow = sqlx::query_as(
            "INSERT INTO ledger_entries (property_id, fingerprint, risk_score, prev_block_height)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(property_id)
        .bind(&fingerprint[..])
        .bind(risk_score as i16)
        .bind(prev)
        .fetch_one(&mut *tx)
        .await
        .map_err(unavailable)?;

        tx.commit().await.map_err(unavailable)?;
        Ok(row.into())
    }

    async fn latest(&self, property_id: &str) -> Result<Option<LedgerEntry>, LedgerError> {
        let row: Option<LedgerEntryRow> = sqlx::query_as(
            "SELECT * FROM ledger_entries
              WHERE property_id = $1
              ORDER BY block_height DESC
              LIMIT 1",
        )
        .bind(property_id)
        .fetch_optional(self.pool())
        .await
        .map_err(unavailable)?;
        Ok(row.map(Into::into))
    }

    async fn history(&self, property_id: &str) -> Result<Vec<LedgerEntry>, LedgerError> {
        let rows: Vec<LedgerEntryRow> = sqlx::query_as(
            "SELECT * FROM ledger_entries WHERE property_id = $1 ORDER BY block_height ASC",
        )
        .bind(property_id)
        .fetch_all(self.pool())
        .await
        .map_err(unavailable)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn row_conversion_pads_short_fingerprints() {
        let row = LedgerEntryRow {
            block_height: 3,
            property_id: "prop-1".into(),
            fingerprint: vec![1, 2, 3],
            risk_score: 42,
            ledger_timestamp: Utc::now(),
            prev_block_height: Some(2),
        };
        let entry: LedgerEntry = row.into();
        assert_eq!(&entry.fingerprint[..3], &[1, 2, 3]);
        assert_eq!(&entry.fingerprint[3..], &[0u8; 29]);
        assert_eq!(entry.risk_score, 42);
    }
}
