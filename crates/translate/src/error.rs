use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("translation provider unavailable: {0}")]
    Unavailable(String),

    #[error("translation provider rejected the request: {0}")]
    Rejected(String),
}
