use async_trait::async_trait;

use crate::error::LedgerError;
use crate::types::LedgerEntry;

/// Capability boundary the local ledger backend needs from whatever holds
/// its rows. Implemented by the persistence crate against the
/// `ledger_entries` table so the ledger shares the same connection pool and
/// transactional guarantees as the rest of persisted state, rather than
/// running a second embedded store alongside it.
#[async_trait]
pub trait LedgerEntryStore: Send + Sync {
    /// Appends a new entry. `prev_block_height` is the height of the entry
    /// being superseded, if any; the store is responsible for allocating the
    /// next `block_height` atomically.
    async fn append(
        &self,
        property_id: &str,
        fingerprint: [u8; 32],
        risk_score: u8,
    ) -> Result<LedgerEntry, LedgerError>;

    /// Latest entry for `property_id`, if one exists.
    async fn latest(&self, property_id: &str) -> Result<Option<LedgerEntry>, LedgerError>;

    /// All entries for `property_id`, oldest first.
    async fn history(&self, property_id: &str) -> Result<Vec<LedgerEntry>, LedgerError>;
}
