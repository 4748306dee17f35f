use thiserror::Error;

/// Errors produced while cleaning extracted text.
///
/// All variants are client-side: a well-formed, non-empty input under a
/// valid configuration never fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("input text empty after normalization")]
    EmptyInput,
}
