use async_trait::async_trait;

use crate::error::TranslateError;

/// Capability boundary for the external machine-translation vendor.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate(&self, text: &str, language_hint: &str) -> Result<String, TranslateError>;
}

/// Returns the input unchanged. The default provider when no vendor is
/// configured, or when the declared language hint is already English.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughTranslator;

#[async_trait]
impl TranslationProvider for PassthroughTranslator {
    async fn translate(&self, text: &str, _language_hint: &str) -> Result<String, TranslateError> {
        Ok(text.to_string())
    }
}

/// Always fails. Used in tests exercising the degraded-pipeline path where
/// translation is unavailable but the pipeline must still produce a record.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysFailingTranslator;

#[async_trait]
impl TranslationProvider for AlwaysFailingTranslator {
    async fn translate(&self, _text: &str, _language_hint: &str) -> Result<String, TranslateError> {
        Err(TranslateError::Unavailable("no vendor configured".into()))
    }
}
