use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("ledger unavailable: {0}")]
    Unavailable(String),

    #[error("ledger rejected the request: {0}")]
    Rejected(String),

    #[error("no ledger entry for property {0}")]
    NotFound(String),
}
