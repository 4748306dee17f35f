use async_trait::async_trait;

use crate::error::ClassifyError;
use crate::stub::classify_by_keyword;
use crate::types::Classification;

/// Capability boundary for the trained document-classifier model.
#[async_trait]
pub trait ClassifierProvider: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Classification, ClassifyError>;
}

/// Deterministic keyword classifier. The default provider when no
/// network-backed model is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubClassifier;

#[async_trait]
impl ClassifierProvider for StubClassifier {
    async fn classify(&self, text: &str) -> Result<Classification, ClassifyError> {
        Ok(classify_by_keyword(text))
    }
}

/// Always fails. Used in tests exercising the degraded path where the
/// classifier is unavailable and the pipeline must fall back to `UNKNOWN`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysFailingClassifier;

#[async_trait]
impl ClassifierProvider for AlwaysFailingClassifier {
    async fn classify(&self, _text: &str) -> Result<Classification, ClassifyError> {
        Err(ClassifyError::Unavailable("no vendor configured".into()))
    }
}
