use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::error::ServerResult;
use crate::state::ServerState;

/// Aggregate counts and the risk-bucket histogram across all persisted
/// verifications.
pub async fn statistics(State(state): State<Arc<ServerState>>) -> ServerResult<impl IntoResponse> {
    let stats = state.store.statistics().await?;

    Ok(Json(json!({
        "total_properties": stats.total_properties,
        "total_verifications": stats.total_verifications,
        "risk_histogram": {
            "low": stats.low_risk_count,
            "medium": stats.medium_risk_count,
            "high": stats.high_risk_count,
        },
    })))
}
