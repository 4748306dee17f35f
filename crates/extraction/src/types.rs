use serde::{Deserialize, Serialize};

/// Declared container format for an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    Image,
    Pdf,
}

/// A document as it arrives at the boundary of the system: opaque bytes plus
/// the caller's declared format and an optional language hint forwarded from
/// the upload request.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Vec<u8>,
    pub format: DocumentFormat,
    pub language_hint: Option<String>,
}

/// What the extraction stage hands to the normalizer: page text plus enough
/// bookkeeping for the risk scorer's data-quality factor and for audit logs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractionOutput {
    pub pages: Vec<String>,
    pub pages_processed: u32,
    pub chars_original: usize,
    pub language_hint: Option<String>,
}

impl ExtractionOutput {
    /// Concatenates all pages with a blank line between them, the input the
    /// normalizer expects.
    pub fn joined_text(&self) -> String {
        self.pages.join("\n\n")
    }
}
