use std::collections::HashMap;

use sha2::{Digest, Sha256};

use crate::error::ExtractionError;
use crate::types::RawDocument;

/// Capability boundary for the external OCR vendor. Production deployments
/// plug in a real implementation; this crate ships only deterministic
/// stand-ins so the rest of the pipeline is fully exercisable offline.
pub trait OcrProvider: Send + Sync {
    /// Returns one string per recognized page. An empty `Vec` is a valid,
    /// successful result (an unreadable but not malformed document).
    fn extract_pages(&self, document: &RawDocument) -> Result<Vec<String>, ExtractionError>;
}

/// Decodes the raw bytes as UTF-8 (lossily) and returns them as a single
/// page. Stands in for a real OCR call when no vendor is configured; useful
/// for tests that supply already-recognized text as input bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubOcrProvider;

impl OcrProvider for StubOcrProvider {
    fn extract_pages(&self, document: &RawDocument) -> Result<Vec<String>, ExtractionError> {
        if document.bytes.is_empty() {
            return Ok(Vec::new());
        }
        let text = String::from_utf8_lossy(&document.bytes).into_owned();
        Ok(vec![text])
    }
}

/// Replays canned page text keyed by the SHA-256 digest of the input bytes.
/// Used in integration tests that need deterministic, realistic OCR output
/// (including noise) without invoking a real vendor.
#[derive(Debug, Default, Clone)]
pub struct FixtureOcrProvider {
    fixtures: HashMap<String, Vec<String>>,
}

impl FixtureOcrProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers fixture pages for the exact bytes `input`; later calls to
    /// `extract_pages` with those same bytes return `pages`.
    pub fn register(&mut self, input: &[u8], pages: Vec<String>) -> &mut Self {
        self.fixtures.insert(digest_hex(input), pages);
        self
    }

    fn lookup(&self, input: &[u8]) -> Option<&Vec<String>> {
        self.fixtures.get(&digest_hex(input))
    }
}

impl OcrProvider for FixtureOcrProvider {
    fn extract_pages(&self, document: &RawDocument) -> Result<Vec<String>, ExtractionError> {
        match self.lookup(&document.bytes) {
            Some(pages) => Ok(pages.clone()),
            None => Err(ExtractionError::UnsupportedInput(
                "no fixture registered for this document".to_string(),
            )),
        }
    }
}

fn digest_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocumentFormat;

    #[test]
    fn stub_decodes_bytes_as_one_page() {
        let doc = RawDocument {
            bytes: b"Owner: Ravi Kumar".to_vec(),
            format: DocumentFormat::Image,
            language_hint: None,
        };
        let pages = StubOcrProvider.extract_pages(&doc).unwrap();
        assert_eq!(pages, vec!["Owner: Ravi Kumar".to_string()]);
    }

    #[test]
    fn stub_empty_bytes_yield_no_pages() {
        let doc = RawDocument {
            bytes: vec![],
            format: DocumentFormat::Pdf,
            language_hint: None,
        };
        assert_eq!(StubOcrProvider.extract_pages(&doc).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn fixture_replays_registered_pages() {
        let mut provider = FixtureOcrProvider::new();
        let bytes = b"fixture-input".to_vec();
        provider.register(&bytes, vec!["page one".to_string()]);

        let doc = RawDocument {
            bytes: bytes.clone(),
            format: DocumentFormat::Image,
            language_hint: None,
        };
        assert_eq!(provider.extract_pages(&doc).unwrap(), vec!["page one".to_string()]);

        let other = RawDocument {
            bytes: b"unregistered".to_vec(),
            format: DocumentFormat::Image,
            language_hint: None,
        };
        assert!(provider.extract_pages(&other).is_err());
    }
}
