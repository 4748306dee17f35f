use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::error::ServerResult;
use crate::state::ServerState;

/// Ledger connectivity and the latest anchored block height across all
/// properties.
pub async fn ledger_status(State(state): State<Arc<ServerState>>) -> ServerResult<impl IntoResponse> {
    let status = state.store.ledger_status().await?;

    Ok(Json(json!({
        "connected": true,
        "latest_block_height": status.latest_block_height,
        "total_entries": status.total_entries,
    })))
}
