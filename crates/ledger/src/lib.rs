//! Backend-agnostic anchoring ledger.
//!
//! [`Ledger`] is the capability boundary the orchestrator anchors fingerprints
//! through. [`local::LocalLedger`] is the reference implementation, backed by
//! whatever [`store_trait::LedgerEntryStore`] the persistence layer provides;
//! [`remote::RemoteLedger`] is the shape a real chain client would fill in.
//! Both satisfy identical semantics: total order within a `property_id` via
//! monotonically increasing `block_height`, append-only history, no in-place
//! mutation of a past entry.

mod config;
mod error;
pub mod local;
pub mod remote;
mod store_trait;
mod types;

use async_trait::async_trait;

pub use crate::config::LedgerBackendConfig;
pub use crate::error::LedgerError;
pub use crate::local::LocalLedger;
pub use crate::remote::RemoteLedger;
pub use crate::store_trait::LedgerEntryStore;
pub use crate::types::{LedgerEntry, PutHandle};

/// A document fingerprint's anchoring history for one property.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Appends a new entry, pushing any prior entry for `property_id` onto
    /// history. Equal consecutive puts are not collapsed: every call appends.
    async fn put(
        &self,
        property_id: &str,
        fingerprint: [u8; 32],
        risk_score: u8,
    ) -> Result<PutHandle, LedgerError>;

    /// The latest entry for `property_id`.
    async fn get(&self, property_id: &str) -> Result<LedgerEntry, LedgerError>;

    /// Prior entries for `property_id`, oldest first, excluding the latest.
    async fn history(&self, property_id: &str) -> Result<Vec<LedgerEntry>, LedgerError>;

    /// Convenience equality check against the latest entry. `false` (not an
    /// error) when `property_id` has no entry at all.
    async fn verify(&self, property_id: &str, fingerprint: [u8; 32]) -> Result<bool, LedgerError>;
}
