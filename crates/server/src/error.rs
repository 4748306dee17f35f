use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Request timeout")]
    Timeout,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload too large: max {0}MB allowed")]
    PayloadTooLarge(usize),

    #[error("Engine error: {0}")]
    Engine(#[from] engine::EngineError),

    #[error("Store error: {0}")]
    Store(#[from] store::StoreError),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ServerError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            ServerError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Engine(err) => match err {
                engine::EngineError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                engine::EngineError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
                engine::EngineError::Cancelled => StatusCode::REQUEST_TIMEOUT,
                engine::EngineError::LedgerUnavailable(_) => StatusCode::BAD_GATEWAY,
                engine::EngineError::LedgerRejected(_) => StatusCode::CONFLICT,
                engine::EngineError::Normalize(_) => StatusCode::UNPROCESSABLE_ENTITY,
                engine::EngineError::Extraction(_) | engine::EngineError::Store(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
            },
            ServerError::Store(store::StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ServerError::Store(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::Internal(_) | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    fn error_code(&self) -> &'static str {
        match self {
            ServerError::Authentication(_) => "AUTH_FAILED",
            ServerError::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            ServerError::Timeout => "REQUEST_TIMEOUT",
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            ServerError::Engine(engine::EngineError::InvalidInput(_)) => "BAD_INPUT",
            ServerError::Engine(engine::EngineError::Timeout { .. }) => "DEADLINE_EXCEEDED",
            ServerError::Engine(engine::EngineError::Cancelled) => "CANCELLED",
            ServerError::Engine(engine::EngineError::LedgerUnavailable(_)) => {
                "EXTERNAL_UNAVAILABLE"
            }
            ServerError::Engine(engine::EngineError::LedgerRejected(_)) => "LEDGER_REJECTED",
            ServerError::Engine(_) => "ENGINE_ERROR",
            ServerError::Store(store::StoreError::NotFound(_)) => "NOT_FOUND",
            ServerError::Store(_) => "PERSISTENCE_FAILED",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::NotFound => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code().to_string();
        let message = self.to_string();

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::Config(format!("Invalid address: {err}"))
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::BadRequest(format!("JSON parse error: {err}"))
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}

// Display is automatically derived by thiserror::Error
