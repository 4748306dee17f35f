//! End-to-end router tests driven through Axum's service interface directly,
//! so no real TCP listener or connecting client is needed.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use classify::resilience::CircuitBreakerConfig;
use classify::{CircuitBreaker, ClassificationCache, StubClassifier};
use dashmap::DashMap;
use engine::{Adapters, Engine, EngineConfig};
use extract::NullEntityModel;
use http_body_util::BodyExt;
use ledger::LocalLedger;
use risk::SystemClock;
use server::{build_router, ServerConfig, ServerState};
use sqlx::PgPool;
use store::Store;
use tower::ServiceExt;
use translate::{PassthroughTranslator, TranslationCache};

const API_KEY: &str = "test-key";

fn test_state(pool: PgPool) -> Arc<ServerState> {
    let store = Store::from_pool(pool);
    let ledger = Arc::new(LocalLedger::new(store.clone()));

    let adapters = Adapters {
        ocr: Arc::new(extraction::StubOcrProvider),
        translator: Arc::new(PassthroughTranslator),
        translation_cache: Arc::new(TranslationCache::new(64)),
        entity_model: Arc::new(NullEntityModel),
        classifier: Arc::new(StubClassifier),
        classification_cache: Arc::new(ClassificationCache::new(64)),
        classification_breaker: Arc::new(CircuitBreaker::new(CircuitBreakerConfig::default())),
        clock: Arc::new(SystemClock),
        ledger,
    };
    let engine = Engine::new(adapters, EngineConfig::default(), store.clone());

    let mut config = ServerConfig::default();
    config.api_keys.insert(API_KEY.to_string());

    Arc::new(ServerState {
        config: Arc::new(config),
        rate_limiter: Arc::new(DashMap::new()),
        engine: Arc::new(engine),
        store,
    })
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn multipart_body(boundary: &str, text: &str, document_type: &str, store_on_ledger: bool) -> String {
    format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"record.txt\"\r\n\
         Content-Type: text/plain\r\n\r\n{text}\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"document_type\"\r\n\r\n{document_type}\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"store_on_ledger\"\r\n\r\n{store_on_ledger}\r\n\
         --{boundary}--\r\n"
    )
}

#[sqlx::test(migrations = "../store/migrations")]
async fn health_check_is_public(pool: PgPool) {
    let app = build_router(test_state(pool));

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../store/migrations")]
async fn protected_route_without_key_is_rejected(pool: PgPool) {
    let app = build_router(test_state(pool));

    let response = app
        .oneshot(Request::get("/statistics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../store/migrations")]
async fn verify_upload_then_lookup_and_delete(pool: PgPool) {
    let app = build_router(test_state(pool));
    let boundary = "X-BOUNDARY-1";
    let text = "Owner: RAVI KUMAR\nSurvey No: 45/2A\nVillage: HEBBAL\n2 Acres 10 Guntas";

    let response = app
        .clone()
        .oneshot(
            Request::post("/verify/upload")
                .header("X-API-Key", API_KEY)
                .header(
                    "Content-Type",
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(multipart_body(boundary, text, "RTC", true)))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let property_id = body["property_id"].as_str().unwrap().to_string();
    assert!(body["ledger"]["stored"].as_bool().unwrap());

    let response = app
        .clone()
        .oneshot(
            Request::get(format!("/verification/{property_id}"))
                .header("X-API-Key", API_KEY)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["property_id"], property_id);

    let response = app
        .clone()
        .oneshot(
            Request::delete(format!("/verification/{property_id}"))
                .header("X-API-Key", API_KEY)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::get(format!("/verification/{property_id}"))
                .header("X-API-Key", API_KEY)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../store/migrations")]
async fn ledger_status_reflects_anchored_entries(pool: PgPool) {
    let app = build_router(test_state(pool));
    let boundary = "X-BOUNDARY-2";
    let text = "Owner: RAVI KUMAR\nSurvey No: 12/1\nVillage: MYSURU";

    app.clone()
        .oneshot(
            Request::post("/verify/upload")
                .header("X-API-Key", API_KEY)
                .header(
                    "Content-Type",
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(multipart_body(boundary, text, "RTC", true)))
                .unwrap(),
        )
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::get("/ledger/status")
                .header("X-API-Key", API_KEY)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["connected"].as_bool().unwrap());
    assert!(body["total_entries"].as_i64().unwrap() >= 1);
}
