use async_trait::async_trait;

use crate::error::LedgerError;
use crate::types::{LedgerEntry, PutHandle};
use crate::Ledger;

/// Client for an external chain or anchoring service. Out of scope beyond
/// the trait shape: a real deployment supplies its own implementation of
/// [`Ledger`] over whatever wire protocol that service speaks.
pub struct RemoteLedger {
    pub endpoint: String,
    pub identity: String,
}

impl RemoteLedger {
    pub fn new(endpoint: impl Into<String>, identity: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            identity: identity.into(),
        }
    }
}

#[async_trait]
impl Ledger for RemoteLedger {
    async fn put(
        &self,
        _property_id: &str,
        _fingerprint: [u8; 32],
        _risk_score: u8,
    ) -> Result<PutHandle, LedgerError> {
        Err(LedgerError::Unavailable(format!(
            "remote ledger client for {} not implemented",
            self.endpoint
        )))
    }

    async fn get(&self, _property_id: &str) -> Result<LedgerEntry, LedgerError> {
        Err(LedgerError::Unavailable(format!(
            "remote ledger client for {} not implemented",
            self.endpoint
        )))
    }

    async fn history(&self, _property_id: &str) -> Result<Vec<LedgerEntry>, LedgerError> {
        Err(LedgerError::Unavailable(format!(
            "remote ledger client for {} not implemented",
            self.endpoint
        )))
    }

    async fn verify(&self, _property_id: &str, _fingerprint: [u8; 32]) -> Result<bool, LedgerError> {
        Err(LedgerError::Unavailable(format!(
            "remote ledger client for {} not implemented",
            self.endpoint
        )))
    }
}
