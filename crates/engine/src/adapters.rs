use std::sync::Arc;

use classify::{CircuitBreaker as ClassifyCircuitBreaker, ClassificationCache, ClassifierProvider};
use extract::EntityModel;
use extraction::OcrProvider;
use ledger::Ledger;
use risk::Clock;
use translate::{TranslationCache, TranslationProvider};

/// Every injected capability the Orchestrator and Tamper Checker depend on.
/// Built once at startup and shared (via `Arc`) across concurrent requests;
/// the only mutable shared state inside is the translation/classification
/// caches and the classifier's circuit breaker, each already internally
/// synchronized.
#[derive(Clone)]
pub struct Adapters {
    pub ocr: Arc<dyn OcrProvider>,
    pub translator: Arc<dyn TranslationProvider>,
    pub translation_cache: Arc<TranslationCache>,
    pub entity_model: Arc<dyn EntityModel>,
    pub classifier: Arc<dyn ClassifierProvider>,
    pub classification_cache: Arc<ClassificationCache>,
    pub classification_breaker: Arc<ClassifyCircuitBreaker>,
    pub clock: Arc<dyn Clock>,
    pub ledger: Arc<dyn Ledger>,
}
