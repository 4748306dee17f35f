use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("classifier unavailable: {0}")]
    Unavailable(String),

    #[error("classifier circuit open, requests are not currently allowed")]
    CircuitOpen,
}
