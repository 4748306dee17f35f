//! Translation adapter: optionally routes non-English cleaned text through
//! an external translator before entity extraction and classification.
//!
//! Translation failure is non-fatal: the orchestrator receives the original
//! cleaned text back plus a `translated: false` flag, and the caller attaches
//! a `translation_unavailable` warning rather than aborting the pipeline.

mod cache;
mod config;
mod error;
mod provider;

use tracing::warn;

pub use crate::cache::TranslationCache;
pub use crate::config::TranslateConfig;
pub use crate::error::TranslateError;
pub use crate::provider::{AlwaysFailingTranslator, PassthroughTranslator, TranslationProvider};

/// Outcome of one translation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOutcome {
    pub text: String,
    pub translated: bool,
    pub warning: Option<String>,
}

/// Translates `text` if `language_hint` is not English, retrying transient
/// failures with doubling backoff, and caching successful results by content
/// hash. On exhausted retries, returns the original text with a warning
/// instead of propagating an error.
pub async fn translate(
    text: &str,
    language_hint: &str,
    provider: &dyn TranslationProvider,
    cache: &TranslationCache,
    cfg: &TranslateConfig,
) -> TranslationOutcome {
    if language_hint.eq_ignore_ascii_case("en") || language_hint.is_empty() {
        return TranslationOutcome {
            text: text.to_string(),
            translated: false,
            warning: None,
        };
    }

    if let Some(cached) = cache.get(text, language_hint) {
        return TranslationOutcome {
            text: cached,
            translated: true,
            warning: None,
        };
    }

    let mut delay = cfg.base_delay;
    let mut last_err = None;
    for attempt in 0..=cfg.max_retries {
        match provider.translate(text, language_hint).await {
            Ok(translated) => {
                cache.put(text, language_hint, translated.clone());
                return TranslationOutcome {
                    text: translated,
                    translated: true,
                    warning: None,
                };
            }
            Err(err) => {
                warn!(attempt, error = %err, "translation_attempt_failed");
                last_err = Some(err);
                if attempt < cfg.max_retries {
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }

    TranslationOutcome {
        text: text.to_string(),
        translated: false,
        warning: Some(format!(
            "translation_unavailable: {}",
            last_err.expect("loop ran at least once")
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn english_hint_is_passthrough_without_calling_provider() {
        let cache = TranslationCache::new(4);
        let cfg = TranslateConfig::default();
        let out = translate("hello", "en", &AlwaysFailingTranslator, &cache, &cfg).await;
        assert_eq!(out.text, "hello");
        assert!(!out.translated);
        assert!(out.warning.is_none());
    }

    #[tokio::test]
    async fn successful_translation_is_cached() {
        let cache = TranslationCache::new(4);
        let cfg = TranslateConfig::default();
        let out = translate("hello", "kn", &PassthroughTranslator, &cache, &cfg).await;
        assert!(out.translated);
        assert_eq!(cache.get("hello", "kn").as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn exhausted_retries_degrade_with_warning() {
        let cache = TranslationCache::new(4);
        let cfg = TranslateConfig {
            max_retries: 1,
            base_delay: std::time::Duration::from_millis(1),
            ..TranslateConfig::default()
        };
        let out = translate("hello", "kn", &AlwaysFailingTranslator, &cache, &cfg).await;
        assert!(!out.translated);
        assert_eq!(out.text, "hello");
        assert!(out.warning.unwrap().contains("translation_unavailable"));
    }
}
