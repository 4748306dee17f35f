//! API route handlers
//!
//! This module contains all HTTP endpoint implementations for the property
//! verification server. Routes are organized by functionality:
//!
//! - `health`: Health checks, readiness, and metrics
//! - `verify`: Document upload and verification
//! - `tamper`: Tamper detection against an anchored fingerprint
//! - `verification`: Lookup and cascade delete of a property's latest record
//! - `ledger`: Ledger connectivity and latest block height
//! - `statistics`: Aggregate counts and risk-bucket histogram

pub mod health;
pub mod ledger;
pub mod statistics;
pub mod tamper;
pub mod verification;
pub mod verify;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /) and requires no authentication.
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "PropTrust Server",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "endpoints": [
            "/verify/upload",
            "/tamper/check",
            "/verification/{property_id}",
            "/ledger/status",
            "/statistics",
            "/health",
            "/ready",
            "/metrics"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
