use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FingerprintError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
