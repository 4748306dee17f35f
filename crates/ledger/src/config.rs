use serde::{Deserialize, Serialize};

/// Selects which [`crate::Ledger`] implementation to build, mirroring the
/// teacher's `BackendConfig` (`InMemory | Redb { path }`) shape with the two
/// variants this system actually needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LedgerBackendConfig {
    /// Entries live in the relational store's `ledger_entries` table.
    Local,
    /// Entries are anchored on an external chain or service.
    Remote { endpoint: String, identity: String },
}

impl Default for LedgerBackendConfig {
    fn default() -> Self {
        LedgerBackendConfig::Local
    }
}
