//! OCR extraction adapter: the first stage of the verification pipeline.
//!
//! Wraps an external OCR capability behind [`OcrProvider`] and returns a
//! typed [`ExtractionOutput`] instead of raw vendor output. An empty result
//! is a success (an unreadable document, not an error); unsupported input
//! and provider outages are the only failure modes.

mod config;
mod error;
mod provider;
mod types;

use std::time::Instant;

use tracing::{info, warn, Level};

pub use crate::config::ExtractionConfig;
pub use crate::error::ExtractionError;
pub use crate::provider::{FixtureOcrProvider, OcrProvider, StubOcrProvider};
pub use crate::types::{DocumentFormat, ExtractionOutput, RawDocument};

/// Runs OCR over `document` via `provider`, enforcing the configured input
/// size ceiling and emitting structured success/failure logs.
pub fn extract(
    document: RawDocument,
    provider: &dyn OcrProvider,
    cfg: &ExtractionConfig,
) -> Result<ExtractionOutput, ExtractionError> {
    let start = Instant::now();
    let span = tracing::span!(Level::INFO, "extraction.extract", format = ?document.format);
    let _guard = span.enter();

    match extract_inner(document, provider, cfg) {
        Ok(output) => {
            info!(
                pages_processed = output.pages_processed,
                chars_original = output.chars_original,
                elapsed_micros = start.elapsed().as_micros(),
                "extraction_success"
            );
            Ok(output)
        }
        Err(err) => {
            warn!(
                error = %err,
                elapsed_micros = start.elapsed().as_micros(),
                "extraction_failure"
            );
            Err(err)
        }
    }
}

fn extract_inner(
    document: RawDocument,
    provider: &dyn OcrProvider,
    cfg: &ExtractionConfig,
) -> Result<ExtractionOutput, ExtractionError> {
    if document.bytes.len() > cfg.max_input_bytes {
        return Err(ExtractionError::UnsupportedInput(format!(
            "document size {} exceeds limit of {}",
            document.bytes.len(),
            cfg.max_input_bytes
        )));
    }

    let chars_original = document.bytes.len();
    let language_hint = document.language_hint.clone();
    let pages = provider.extract_pages(&document)?;
    let pages_processed = pages.len() as u32;

    Ok(ExtractionOutput {
        pages,
        pages_processed,
        chars_original,
        language_hint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_via_stub_provider() {
        let doc = RawDocument {
            bytes: b"RTC record text".to_vec(),
            format: DocumentFormat::Image,
            language_hint: Some("en".into()),
        };
        let out = extract(doc, &StubOcrProvider, &ExtractionConfig::default()).unwrap();
        assert_eq!(out.pages_processed, 1);
        assert_eq!(out.joined_text(), "RTC record text");
        assert_eq!(out.language_hint.as_deref(), Some("en"));
    }

    #[test]
    fn rejects_oversized_input() {
        let doc = RawDocument {
            bytes: vec![0u8; 32],
            format: DocumentFormat::Pdf,
            language_hint: None,
        };
        let cfg = ExtractionConfig {
            max_input_bytes: 16,
            ..ExtractionConfig::default()
        };
        let res = extract(doc, &StubOcrProvider, &cfg);
        assert!(matches!(res, Err(ExtractionError::UnsupportedInput(_))));
    }

    #[test]
    fn empty_document_is_a_successful_empty_result() {
        let doc = RawDocument {
            bytes: vec![],
            format: DocumentFormat::Image,
            language_hint: None,
        };
        let out = extract(doc, &StubOcrProvider, &ExtractionConfig::default()).unwrap();
        assert_eq!(out.pages_processed, 0);
        assert_eq!(out.chars_original, 0);
    }
}
