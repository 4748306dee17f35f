use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One appended entry in a property's anchoring history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub property_id: String,
    pub fingerprint: [u8; 32],
    pub risk_score: u8,
    pub block_height: u64,
    pub ledger_timestamp: DateTime<Utc>,
    pub prev_block_height: Option<u64>,
}

/// Handle returned by [`crate::Ledger::put`], identifying the entry just
/// appended without requiring a second round trip to read it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PutHandle {
    pub block_height: u64,
}
