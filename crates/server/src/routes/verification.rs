use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;

/// Fetch the latest VerificationRecord + Detail persisted for a property.
pub async fn get_verification(
    State(state): State<Arc<ServerState>>,
    Path(property_id): Path<String>,
) -> ServerResult<impl IntoResponse> {
    let (record, detail) = state.store.latest_verification(&property_id).await?;

    Ok(Json(json!({
        "verification_id": record.verification_id,
        "property_id": record.property_id,
        "risk_score": record.risk_score,
        "risk_level": record.risk_level,
        "classification_label": record.classification_label,
        "classification_confidence": record.classification_confidence,
        "fingerprint_hex": hex_of(&record.fingerprint),
        "anchor_reference": record.anchor_reference,
        "anchor_block_height": record.anchor_block_height,
        "anchor_timestamp": record.anchor_timestamp,
        "created_at": record.created_at,
        "detail": {
            "owner": detail.owner,
            "survey_number": detail.survey_number,
            "hissa_number": detail.hissa_number,
            "village": detail.village,
            "taluk": detail.taluk,
            "district": detail.district,
            "extent_acres": detail.extent_acres,
            "extent_guntas": detail.extent_guntas,
            "valid_from": detail.valid_from,
            "valid_to": detail.valid_to,
            "signed_date": detail.signed_date,
            "loans": detail.loans.0,
            "mutations": detail.mutations.0,
            "case_numbers": detail.case_numbers.0,
            "dates": detail.dates.0,
            "cleaned_text_preview": detail.cleaned_text_preview,
            "chars_original": detail.chars_original,
            "chars_cleaned": detail.chars_cleaned,
            "pages_processed": detail.pages_processed,
        },
    })))
}

/// Cascade-delete every row tied to a property. Never touches the ledger.
pub async fn delete_verification(
    State(state): State<Arc<ServerState>>,
    Path(property_id): Path<String>,
) -> ServerResult<impl IntoResponse> {
    let existed = state.store.delete_property_cascade(&property_id).await?;
    if !existed {
        return Err(ServerError::NotFound);
    }

    Ok(Json(json!({
        "property_id": property_id,
        "status": "deleted",
    })))
}

fn hex_of(bytes: &[u8]) -> String {
    let mut fingerprint = [0u8; 32];
    let len = bytes.len().min(32);
    fingerprint[..len].copy_from_slice(&bytes[..len]);
    fingerprint::to_hex(&fingerprint)
}
