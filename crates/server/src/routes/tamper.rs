use std::sync::Arc;

use axum::extract::{Multipart, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::watch;

use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use engine::DocumentType;
use extraction::DocumentFormat;

#[derive(Debug, Deserialize)]
pub struct TamperCheckQuery {
    property_id: String,
}

fn parse_document_type(raw: &str) -> DocumentType {
    match raw.to_ascii_uppercase().as_str() {
        "RTC" => DocumentType::Rtc,
        "MR" => DocumentType::Mr,
        "EC" => DocumentType::Ec,
        "SALE_DEED" | "SALE-DEED" | "SALEDEED" => DocumentType::SaleDeed,
        _ => DocumentType::Unknown,
    }
}

fn parse_document_format(raw: &str) -> DocumentFormat {
    match raw.to_ascii_uppercase().as_str() {
        "PDF" => DocumentFormat::Pdf,
        _ => DocumentFormat::Image,
    }
}

/// Check whether a previously-anchored property's document has been tampered
/// with. Accepts `multipart/form-data` with field `file`, and the
/// `property_id` as a query parameter.
pub async fn tamper_check(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<TamperCheckQuery>,
    mut multipart: Multipart,
) -> ServerResult<impl IntoResponse> {
    let mut file_bytes: Option<Vec<u8>> = None;
    let mut document_type = DocumentType::Unknown;
    let mut document_format = DocumentFormat::Image;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::BadRequest(e.to_string()))?
    {
        match field.name().unwrap_or_default() {
            "file" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ServerError::BadRequest(e.to_string()))?;
                file_bytes = Some(bytes.to_vec());
            }
            "document_type" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ServerError::BadRequest(e.to_string()))?;
                document_type = parse_document_type(&text);
            }
            "document_format" | "format" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ServerError::BadRequest(e.to_string()))?;
                document_format = parse_document_format(&text);
            }
            _ => {}
        }
    }

    let bytes = file_bytes
        .ok_or_else(|| ServerError::BadRequest("multipart field 'file' is required".to_string()))?;

    let cancel = watch::channel(false).1;
    let check = state
        .engine
        .check_tamper(&query.property_id, bytes, document_type, document_format, &cancel)
        .await?;

    Ok(Json(json!({
        "tamper_check_id": check.tamper_check_id,
        "property_id": check.property_id,
        "status": check.status,
        "hash_matched": check.hash_matched,
        "anchored_fingerprint_hex": check.anchored_fingerprint.map(|f| fingerprint::to_hex(&f)),
        "recomputed_fingerprint_hex": check.recomputed_fingerprint.map(|f| fingerprint::to_hex(&f)),
        "risk_score_delta": check.risk_score_delta,
        "warnings": check.warnings,
    })))
}
