//! Configuration for the cleaning pipeline.

use serde::{Deserialize, Serialize};

/// Controls how raw extracted text is cleaned before downstream stages see it.
///
/// `version` is included in every fingerprint discriminator upstream in the
/// `fingerprint` crate; bumping it is how a published change to the
/// confusables table or the boilerplate pattern set is made auditable rather
/// than a silent behavior change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Version of the cleaning rules in effect. Must be >= 1.
    pub version: u32,
    /// Maximum number of bytes kept after cleaning; longer text is truncated.
    pub max_bytes: usize,
    /// If true, repeated page header/footer lines are stripped.
    pub strip_boilerplate: bool,
    /// If true, digit/letter OCR confusables are corrected in numeric contexts.
    pub fix_confusables: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            max_bytes: 1024 * 1024,
            strip_boilerplate: true,
            fix_confusables: true,
        }
    }
}
