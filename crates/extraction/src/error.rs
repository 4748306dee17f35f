use thiserror::Error;

/// Errors surfaced by the extraction stage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    #[error("OCR provider unavailable: {0}")]
    ExternalUnavailable(String),

    #[error("document bytes are not valid text: {0}")]
    InvalidUtf8(String),
}
