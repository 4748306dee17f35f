//! Document classification adapter.
//!
//! Wraps an external classifier behind [`ClassifierProvider`], guarded by a
//! [`CircuitBreaker`](resilience::CircuitBreaker) and a content-hash cache.
//! A result below the configured confidence floor collapses to `UNKNOWN`
//! before it ever reaches the risk scorer or the fingerprint, so model drift
//! below the floor can never perturb either.

mod cache;
mod config;
mod error;
mod provider;
pub mod resilience;
mod stub;
mod types;

use tracing::warn;

pub use crate::cache::ClassificationCache;
pub use crate::config::ClassifyConfig;
pub use crate::error::ClassifyError;
pub use crate::provider::{AlwaysFailingClassifier, ClassifierProvider, StubClassifier};
pub use crate::resilience::CircuitBreaker;
pub use crate::types::{Classification, ClassificationLabel};

/// Classifies `text`, applying caching, the circuit breaker, and the
/// confidence floor. A provider failure or an open circuit degrades to
/// `Classification::unknown()` rather than propagating, matching the
/// non-fatal failure policy for this adapter.
pub async fn classify(
    text: &str,
    provider: &dyn ClassifierProvider,
    cache: &ClassificationCache,
    breaker: &CircuitBreaker,
    cfg: &ClassifyConfig,
) -> Classification {
    if let Some(cached) = cache.get(text) {
        return cached;
    }

    if !breaker.allow_request() {
        warn!("classifier_circuit_open");
        return Classification::unknown();
    }

    match provider.classify(text).await {
        Ok(result) => {
            breaker.record_success();
            let floored = result.floored(cfg.confidence_floor);
            cache.put(text, floored.clone());
            floored
        }
        Err(err) => {
            breaker.record_failure();
            warn!(error = %err, "classification_failed");
            Classification::unknown()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harness() -> (ClassificationCache, CircuitBreaker, ClassifyConfig) {
        let cfg = ClassifyConfig::default();
        (
            ClassificationCache::new(cfg.cache_capacity),
            CircuitBreaker::new(cfg.circuit_breaker),
            cfg,
        )
    }

    #[tokio::test]
    async fn classifies_and_caches() {
        let (cache, breaker, cfg) = harness();
        let out = classify("Owner: Ravi Kumar", &StubClassifier, &cache, &breaker, &cfg).await;
        assert_eq!(out.label, ClassificationLabel::ClearTitle);
        assert!(cache.get("Owner: Ravi Kumar").is_some());
    }

    #[tokio::test]
    async fn provider_failure_degrades_to_unknown() {
        let (cache, breaker, cfg) = harness();
        let out = classify(
            "anything",
            &AlwaysFailingClassifier,
            &cache,
            &breaker,
            &cfg,
        )
        .await;
        assert_eq!(out.label, ClassificationLabel::Unknown);
        assert_eq!(out.confidence, 0.0);
    }

    #[tokio::test]
    async fn open_circuit_short_circuits_to_unknown() {
        let (cache, breaker, cfg) = harness();
        for _ in 0..cfg.circuit_breaker.failure_threshold {
            breaker.record_failure();
        }
        let out = classify("text", &StubClassifier, &cache, &breaker, &cfg).await;
        assert_eq!(out.label, ClassificationLabel::Unknown);
    }
}
