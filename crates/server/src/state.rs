use std::sync::Arc;

use classify::resilience::CircuitBreakerConfig;
use classify::{CircuitBreaker, ClassificationCache, StubClassifier};
use dashmap::DashMap;
use engine::{Adapters, Engine, EngineConfig};
use extract::NullEntityModel;
use ledger::LocalLedger;
use risk::SystemClock;
use store::{Store, StoreConfig};
use translate::{PassthroughTranslator, TranslationCache};

use crate::config::ServerConfig;
use crate::error::ServerResult;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Rate limit tracking: API key -> (count, window_start)
    pub rate_limiter: Arc<DashMap<String, (u32, std::time::Instant)>>,

    /// Verification orchestrator and tamper checker (shared across requests)
    pub engine: Arc<Engine>,

    /// Relational persistence handle, used directly by routes that don't
    /// need the full pipeline (lookup, delete, statistics, ledger status).
    pub store: Store,
}

impl ServerState {
    /// Create new server state: opens the store's connection pool, wires
    /// the default production adapters, and builds the orchestrator.
    pub async fn new(config: ServerConfig) -> ServerResult<Self> {
        let store_cfg = StoreConfig {
            database_url: config.database_url.clone(),
            ..StoreConfig::default()
        };
        let store = Store::connect(&store_cfg).await?;

        let ledger = Arc::new(LocalLedger::new(store.clone()));
        let adapters = Adapters {
            ocr: Arc::new(extraction::StubOcrProvider),
            translator: Arc::new(PassthroughTranslator),
            translation_cache: Arc::new(TranslationCache::new(1024)),
            entity_model: Arc::new(NullEntityModel),
            classifier: Arc::new(StubClassifier),
            classification_cache: Arc::new(ClassificationCache::new(1024)),
            classification_breaker: Arc::new(CircuitBreaker::new(CircuitBreakerConfig::default())),
            clock: Arc::new(SystemClock),
            ledger,
        };

        let engine = Engine::new(adapters, EngineConfig::default(), store.clone());

        Ok(Self {
            config: Arc::new(config),
            rate_limiter: Arc::new(DashMap::new()),
            engine: Arc::new(engine),
            store,
        })
    }

    /// Check if API key is valid
    pub fn is_valid_api_key(&self, key: &str) -> bool {
        self.config.api_keys.contains(key)
    }

    /// Check rate limit for API key
    pub fn check_rate_limit(&self, key: &str) -> bool {
        let now = std::time::Instant::now();
        let window = std::time::Duration::from_secs(60);
        let limit = self.config.rate_limit_per_minute;

        let mut entry = self.rate_limiter.entry(key.to_string()).or_insert((0, now));
        let (count, window_start) = entry.value_mut();

        // Reset if window has passed
        if now.duration_since(*window_start) > window {
            *count = 0;
            *window_start = now;
        }

        // Check limit
        if *count >= limit {
            return false;
        }

        *count += 1;
        true
    }
}
