//! Wires the extraction, normalization, translation, entity-extraction,
//! classification, risk-scoring, fingerprinting, and ledger-anchoring stages
//! into the two operations this system exposes over HTTP: verifying a
//! document and checking an anchored property for tampering.
//!
//! Pipeline position: the last crate before `server`. Everything upstream is
//! pure or adapter-bound; this crate is where deadlines, cancellation, and
//! persistence enter the picture.

mod adapters;
mod config;
mod engine;
mod error;
mod types;

pub use crate::adapters::Adapters;
pub use crate::config::EngineConfig;
pub use crate::engine::{CancellationSignal, Engine};
pub use crate::error::EngineError;
pub use crate::types::{
    AnchorInfo, DocumentType, TamperCheck, TamperStatus, VerificationDetail, VerificationRecord,
};

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use classify::resilience::CircuitBreakerConfig;
    use classify::{AlwaysFailingClassifier, CircuitBreaker, ClassificationCache};
    use extract::NullEntityModel;
    use ledger::{LedgerBackendConfig, LocalLedger, RemoteLedger};
    use risk::{FixedClock, RiskLevel};
    use sqlx::PgPool;
    use store::Store;
    use tokio::sync::watch;
    use translate::{PassthroughTranslator, TranslationCache};

    use super::*;

    fn no_cancel() -> CancellationSignal {
        watch::channel(false).1
    }

    fn fixed_clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
    }

    fn test_engine(pool: PgPool) -> Engine {
        let store = Store::from_pool(pool);
        let ledger = Arc::new(LocalLedger::new(store.clone()));

        let adapters = Adapters {
            ocr: Arc::new(extraction::StubOcrProvider),
            translator: Arc::new(PassthroughTranslator),
            translation_cache: Arc::new(TranslationCache::new(64)),
            entity_model: Arc::new(NullEntityModel),
            classifier: Arc::new(AlwaysFailingClassifier),
            classification_cache: Arc::new(ClassificationCache::new(64)),
            classification_breaker: Arc::new(CircuitBreaker::new(CircuitBreakerConfig::default())),
            clock: Arc::new(fixed_clock()),
            ledger,
        };

        Engine::new(adapters, EngineConfig::default(), store)
    }

    fn engine_with_offline_ledger(pool: PgPool) -> Engine {
        let store = Store::from_pool(pool);
        let adapters = Adapters {
            ocr: Arc::new(extraction::StubOcrProvider),
            translator: Arc::new(PassthroughTranslator),
            translation_cache: Arc::new(TranslationCache::new(64)),
            entity_model: Arc::new(NullEntityModel),
            classifier: Arc::new(AlwaysFailingClassifier),
            classification_cache: Arc::new(ClassificationCache::new(64)),
            classification_breaker: Arc::new(CircuitBreaker::new(CircuitBreakerConfig::default())),
            clock: Arc::new(fixed_clock()),
            ledger: Arc::new(RemoteLedger::new("https://offline.example", "test-node")),
        };
        let mut cfg = EngineConfig::default();
        cfg.ledger_backend = LedgerBackendConfig::Remote {
            endpoint: "https://offline.example".to_string(),
            identity: "test-node".to_string(),
        };
        Engine::new(adapters, cfg, store)
    }

    const FILLER: &str = "This record was issued by the revenue department after due process \
        and verification of survey documents held at the taluk office archive.";

    #[sqlx::test(migrations = "../store/migrations")]
    async fn scenario_1_happy_path_low_risk(pool: PgPool) {
        let engine = test_engine(pool);
        let text = format!(
            "Owner: RAVI KUMAR\nSurvey No: 45/2A\nVillage: HEBBAL\n2 Acres 10 Guntas\n{FILLER}"
        );

        let (record, detail) = engine
            .verify(
                text.into_bytes(),
                DocumentType::Rtc,
                extraction::DocumentFormat::Image,
                None,
                None,
                false,
                &no_cancel(),
            )
            .await
            .unwrap();

        assert_eq!(record.risk_score, 0);
        assert_eq!(record.risk_level, RiskLevel::Low);
        assert!(detail.factors.is_empty());
        assert_ne!(record.fingerprint, [0u8; 32]);
    }

    #[sqlx::test(migrations = "../store/migrations")]
    async fn scenario_2_loan_present_stays_low(pool: PgPool) {
        let engine = test_engine(pool);
        let text = format!(
            "Owner: RAVI KUMAR\nSurvey No: 45/2A\nVillage: HEBBAL\n2 Acres 10 Guntas\n\
             There is a loan of Rs. 500000 from SBI against this property.\n{FILLER}"
        );

        let (record, detail) = engine
            .verify(
                text.into_bytes(),
                DocumentType::Rtc,
                extraction::DocumentFormat::Image,
                None,
                None,
                false,
                &no_cancel(),
            )
            .await
            .unwrap();

        assert_eq!(record.risk_score, 30);
        assert_eq!(record.risk_level, RiskLevel::Low);
        assert!(detail.factors.iter().any(|f| f.code == "loan_present"));
    }

    #[sqlx::test(migrations = "../store/migrations")]
    async fn scenario_3_multiple_factors_reach_high(pool: PgPool) {
        let engine = test_engine(pool);
        let text = "Owner: RAVI KUMAR\nLoan of Rs. 200000 from HDFC. Case No: WP-99/2023 pending.";

        let (record, detail) = engine
            .verify(
                text.as_bytes().to_vec(),
                DocumentType::Rtc,
                extraction::DocumentFormat::Image,
                None,
                None,
                false,
                &no_cancel(),
            )
            .await
            .unwrap();

        assert!(detail.chars_cleaned < 200);
        assert_eq!(record.risk_score, 70);
        assert_eq!(record.risk_level, RiskLevel::High);
        let codes: Vec<&str> = detail.factors.iter().map(|f| f.code).collect();
        assert!(codes.contains(&"loan_present"));
        assert!(codes.contains(&"legal_case"));
        assert!(codes.contains(&"survey_missing"));
        assert!(codes.contains(&"data_quality_low"));
    }

    #[sqlx::test(migrations = "../store/migrations")]
    async fn scenario_4_anchored_then_reverified_unchanged(pool: PgPool) {
        let engine = test_engine(pool);
        let text = format!("Owner: RAVI KUMAR\nSurvey No: 45/2A\nVillage: HEBBAL\n{FILLER}");
        let bytes = text.into_bytes();

        let (record, _) = engine
            .verify(
                bytes.clone(),
                DocumentType::Rtc,
                extraction::DocumentFormat::Image,
                None,
                None,
                true,
                &no_cancel(),
            )
            .await
            .unwrap();
        assert!(record.anchor.is_some());

        let check = engine
            .check_tamper(
                &record.property_id,
                bytes,
                DocumentType::Rtc,
                extraction::DocumentFormat::Image,
                &no_cancel(),
            )
            .await
            .unwrap();

        assert_eq!(check.status, TamperStatus::Verified);
        assert!(check.hash_matched);
        assert_eq!(check.risk_score_delta, 0);
        assert_eq!(check.anchored_fingerprint, Some(record.fingerprint));
        assert_eq!(check.recomputed_fingerprint, Some(record.fingerprint));
    }

    #[sqlx::test(migrations = "../store/migrations")]
    async fn scenario_5_anchored_then_tampered(pool: PgPool) {
        let engine = test_engine(pool);
        let original = format!("Owner: RAVI KUMAR\nSurvey No: 45/2A\nVillage: HEBBAL\n{FILLER}");
        let tampered = format!("Owner: RAVI KUMAS\nSurvey No: 45/2A\nVillage: HEBBAL\n{FILLER}");

        let (record, _) = engine
            .verify(
                original.into_bytes(),
                DocumentType::Rtc,
                extraction::DocumentFormat::Image,
                None,
                None,
                true,
                &no_cancel(),
            )
            .await
            .unwrap();

        let check = engine
            .check_tamper(
                &record.property_id,
                tampered.into_bytes(),
                DocumentType::Rtc,
                extraction::DocumentFormat::Image,
                &no_cancel(),
            )
            .await
            .unwrap();

        assert_eq!(check.status, TamperStatus::Tampered);
        assert!(!check.hash_matched);
    }

    #[sqlx::test(migrations = "../store/migrations")]
    async fn scenario_6_ledger_unavailable_degrades_anchor(pool: PgPool) {
        let audit_store = Store::from_pool(pool.clone());
        let engine = engine_with_offline_ledger(pool);
        let text = format!("Owner: RAVI KUMAR\nSurvey No: 45/2A\nVillage: HEBBAL\n{FILLER}");

        let (record, _) = engine
            .verify(
                text.into_bytes(),
                DocumentType::Rtc,
                extraction::DocumentFormat::Image,
                None,
                None,
                true,
                &no_cancel(),
            )
            .await
            .unwrap();

        assert!(record.anchor.is_none());

        let logs = audit_store.list_audit_logs(10).await.unwrap();
        assert!(logs.iter().any(|l| l.operation == "LEDGER_FAILURE"));

        let (queried_record, _) = audit_store.latest_verification(&record.property_id).await.unwrap();
        assert_eq!(queried_record.property_id, record.property_id);
    }

    #[sqlx::test(migrations = "../store/migrations")]
    async fn tamper_check_for_unknown_property_is_not_found(pool: PgPool) {
        let engine = test_engine(pool);
        let check = engine
            .check_tamper(
                "never-verified",
                b"anything".to_vec(),
                DocumentType::Rtc,
                extraction::DocumentFormat::Image,
                &no_cancel(),
            )
            .await
            .unwrap();

        assert_eq!(check.status, TamperStatus::NotFound);
        assert!(check.anchored_fingerprint.is_none());
    }

    #[sqlx::test(migrations = "../store/migrations")]
    async fn degraded_pipeline_reports_translation_warning(pool: PgPool) {
        let store = Store::from_pool(pool);
        let ledger = Arc::new(LocalLedger::new(store.clone()));
        let adapters = Adapters {
            ocr: Arc::new(extraction::StubOcrProvider),
            translator: Arc::new(translate::AlwaysFailingTranslator),
            translation_cache: Arc::new(TranslationCache::new(64)),
            entity_model: Arc::new(NullEntityModel),
            classifier: Arc::new(AlwaysFailingClassifier),
            classification_cache: Arc::new(ClassificationCache::new(64)),
            classification_breaker: Arc::new(CircuitBreaker::new(CircuitBreakerConfig::default())),
            clock: Arc::new(fixed_clock()),
            ledger,
        };
        let mut cfg = EngineConfig::default();
        cfg.translate.max_retries = 0;
        let engine = Engine::new(adapters, cfg, store);

        let text = format!("Owner: RAVI KUMAR\nSurvey No: 45/2A\n{FILLER}");
        let (_, detail) = engine
            .verify(
                text.into_bytes(),
                DocumentType::Rtc,
                extraction::DocumentFormat::Image,
                None,
                Some("kn".to_string()),
                false,
                &no_cancel(),
            )
            .await
            .unwrap();

        assert!(detail.translation_warning.is_some());
        assert!(detail
            .translation_warning
            .as_deref()
            .unwrap()
            .contains("translation_unavailable"));
    }
}
