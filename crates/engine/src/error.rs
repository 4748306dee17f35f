use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Extraction(#[from] extraction::ExtractionError),

    #[error(transparent)]
    Store(#[from] store::StoreError),

    #[error("{stage} did not complete within its deadline")]
    Timeout { stage: &'static str },

    #[error("operation cancelled")]
    Cancelled,

    #[error("ledger unavailable: {0}")]
    LedgerUnavailable(String),

    #[error("ledger rejected the request: {0}")]
    LedgerRejected(String),

    #[error(transparent)]
    Normalize(#[from] normalize::NormalizeError),
}
