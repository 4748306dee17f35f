use async_trait::async_trait;
use tracing::info;

use crate::error::LedgerError;
use crate::store_trait::LedgerEntryStore;
use crate::types::{LedgerEntry, PutHandle};
use crate::Ledger;

/// Local, deterministic ledger backed by whatever [`LedgerEntryStore`] the
/// caller supplies. Satisfies the same semantics as a remote chain client:
/// total order within a `property_id` via monotonically increasing
/// `block_height`, append-only history, no in-place mutation.
pub struct LocalLedger<S> {
    store: S,
}

impl<S: LedgerEntryStore> LocalLedger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: LedgerEntryStore> Ledger for LocalLedger<S> {
    async fn put(
        &self,
        property_id: &str,
        fingerprint: [u8; 32],
        risk_score: u8,
    ) -> Result<PutHandle, LedgerError> {
        let entry = self.store.append(property_id, fingerprint, risk_score).await?;
        info!(
            property_id,
            block_height = entry.block_height,
            "ledger_entry_appended"
        );
        Ok(PutHandle {
            block_height: entry.block_height,
        })
    }

    async fn get(&self, property_id: &str) -> Result<LedgerEntry, LedgerError> {
        self.store
            .latest(property_id)
            .await?
            .ok_or_else(|| LedgerError::NotFound(property_id.to_string()))
    }

    async fn history(&self, property_id: &str) -> Result<Vec<LedgerEntry>, LedgerError> {
        let mut entries = self.store.history(property_id).await?;
        if !entries.is_empty() {
            entries.pop();
        }
        Ok(entries)
    }

    async fn verify(&self, property_id: &str, fingerprint: [u8; 32]) -> Result<bool, LedgerError> {
        match self.get(property_id).await {
            Ok(entry) => Ok(entry.fingerprint == fingerprint),
            Err(LedgerError::NotFound(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::Utc;

    use super::*;

    #[derive(Default)]
    struct InMemoryStore {
        entries: Mutex<Vec<LedgerEntry>>,
    }

    #[async_trait]
    impl LedgerEntryStore for InMemoryStore {
        async fn append(
            &self,
            property_id: &str,
            fingerprint: [u8; 32],
            risk_score: u8,
        ) -> Result<LedgerEntry, LedgerError> {
            let mut entries = self.entries.lock().unwrap();
            let prev = entries
                .iter()
                .filter(|e| e.property_id == property_id)
                .last()
                .map(|e| e.block_height);
            let block_height = prev.map_or(1, |h| h + 1);
            let entry = LedgerEntry {
                property_id: property_id.to_string(),
                fingerprint,
                risk_score,
                block_height,
                ledger_timestamp: Utc::now(),
                prev_block_height: prev,
            };
            entries.push(entry.clone());
            Ok(entry)
        }

        async fn latest(&self, property_id: &str) -> Result<Option<LedgerEntry>, LedgerError> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.property_id == property_id)
                .last()
                .cloned())
        }

        async fn history(&self, property_id: &str) -> Result<Vec<LedgerEntry>, LedgerError> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.property_id == property_id)
                .cloned()
                .collect())
        }
    }

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let ledger = LocalLedger::new(InMemoryStore::default());
        let handle = ledger.put("prop-1", [1u8; 32], 10).await.unwrap();
        assert_eq!(handle.block_height, 1);

        let entry = ledger.get("prop-1").await.unwrap();
        assert_eq!(entry.fingerprint, [1u8; 32]);
        assert_eq!(entry.block_height, 1);
    }

    #[tokio::test]
    async fn get_missing_property_is_not_found() {
        let ledger = LocalLedger::new(InMemoryStore::default());
        let err = ledger.get("missing").await.unwrap_err();
        assert_eq!(err, LedgerError::NotFound("missing".to_string()));
    }

    #[tokio::test]
    async fn second_put_pushes_prior_fingerprint_onto_history() {
        let ledger = LocalLedger::new(InMemoryStore::default());
        ledger.put("prop-1", [1u8; 32], 10).await.unwrap();
        ledger.put("prop-1", [2u8; 32], 20).await.unwrap();

        let latest = ledger.get("prop-1").await.unwrap();
        assert_eq!(latest.fingerprint, [2u8; 32]);
        assert_eq!(latest.block_height, 2);

        let history = ledger.history("prop-1").await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].fingerprint, [1u8; 32]);
    }

    #[tokio::test]
    async fn verify_checks_against_latest() {
        let ledger = LocalLedger::new(InMemoryStore::default());
        ledger.put("prop-1", [1u8; 32], 10).await.unwrap();
        assert!(ledger.verify("prop-1", [1u8; 32]).await.unwrap());
        assert!(!ledger.verify("prop-1", [9u8; 32]).await.unwrap());
    }

    #[tokio::test]
    async fn verify_against_unknown_property_is_false_not_error() {
        let ledger = LocalLedger::new(InMemoryStore::default());
        assert!(!ledger.verify("missing", [0u8; 32]).await.unwrap());
    }

    #[tokio::test]
    async fn equal_consecutive_puts_are_not_collapsed() {
        let ledger = LocalLedger::new(InMemoryStore::default());
        ledger.put("prop-1", [7u8; 32], 10).await.unwrap();
        ledger.put("prop-1", [7u8; 32], 10).await.unwrap();

        let history = ledger.history("prop-1").await.unwrap();
        assert_eq!(history.len(), 1);
        let latest = ledger.get("prop-1").await.unwrap();
        assert_eq!(latest.block_height, 2);
    }
}
