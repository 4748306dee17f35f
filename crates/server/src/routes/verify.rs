use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::json;
use tokio::sync::watch;

use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use engine::DocumentType;
use extraction::DocumentFormat;

#[derive(Debug, Serialize)]
struct LedgerOutcome {
    stored: bool,
    fingerprint_hex: String,
    reference: Option<String>,
    block_height: Option<u64>,
}

fn parse_document_type(raw: &str) -> engine::DocumentType {
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

/// Verify an uploaded document.
///
/// Accepts `multipart/form-data` with fields `file` (the document bytes),
/// `document_type` (one of RTC, MR, EC, SALE_DEED), `document_format` (IMAGE
/// or PDF, defaults to IMAGE), and the optional boolean `store_on_ledger`.
/// Runs the full verification pipeline and returns the resulting risk
/// assessment, extracted entities, and ledger outcome.
pub async fn verify_upload(
    State(state): State<Arc<ServerState>>,
    mut multipart: Multipart,
) -> ServerResult<impl IntoResponse> {
    let mut file_bytes: Option<Vec<u8>> = None;
    let mut document_type = DocumentType::Unknown;
    let mut document_format = DocumentFormat::Image;
    let mut store_on_ledger = false;
    let mut property_id: Option<String> = None;

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
            "store_on_ledger" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ServerError::BadRequest(e.to_string()))?;
                store_on_ledger = text.trim().eq_ignore_ascii_case("true") || text.trim() == "1";
            }
            "property_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ServerError::BadRequest(e.to_string()))?;
                if !text.trim().is_empty() {
                    property_id = Some(text);
                }
            }
            _ => {}
        }
    }

    let bytes = file_bytes
        .ok_or_else(|| ServerError::BadRequest("multipart field 'file' is required".to_string()))?;

    let cancel = watch::channel(false).1;
    let (record, detail) = state
        .engine
        .verify(
            bytes,
            document_type,
            document_format,
            property_id,
            None,
            store_on_ledger,
            &cancel,
        )
        .await?;

    let ledger_outcome = LedgerOutcome {
        stored: record.anchor.is_some(),
        fingerprint_hex: fingerprint::to_hex(&record.fingerprint),
        reference: record.anchor.as_ref().map(|a| a.reference.clone()),
        block_height: record.anchor.as_ref().map(|a| a.block_height),
    };

    Ok(Json(json!({
        "property_id": record.property_id,
        "verification_id": record.verification_id,
        "risk_score": record.risk_score,
        "risk_level": record.risk_level,
        "entities": detail.entities,
        "classification": {
            "label": record.classification_label,
            "confidence": record.classification_confidence,
        },
        "factors": detail.factors,
        "recommendations": detail.recommendations,
        "translation_warning": detail.translation_warning,
        "ledger": ledger_outcome,
    })))
}
