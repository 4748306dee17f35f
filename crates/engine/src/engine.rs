use std::collections::HashSet;

use chrono::Utc;
use extract::EntityBundle;
use extraction::{DocumentFormat, RawDocument};
use fingerprint::{CanonicalLoan, CanonicalProjection};
use store::{NewTamperCheck, NewVerificationDetail, NewVerificationRecord, Store};
use tokio::sync::watch;
use tracing::{info, warn};
use uuid::Uuid;

use crate::adapters::Adapters;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::types::{
    AnchorInfo, DocumentType, TamperCheck, TamperStatus, VerificationDetail, VerificationRecord,
};

/// A one-shot "has the caller asked us to stop" signal, checked between
/// pipeline stages. `true` means cancelled.
pub type CancellationSignal = watch::Receiver<bool>;

fn is_cancelled(signal: &CancellationSignal) -> bool {
    *signal.borrow()
}

/// Wires every stage into the two public operations this system exposes:
/// [`Engine::verify`] and [`Engine::check_tamper`]. Holds `Arc`-shared
/// adapters and a config, the same shape the teacher's matcher used for its
/// own `run_*_pipeline` composition.
#[derive(Clone)]
pub struct Engine {
    adapters: Adapters,
    config: EngineConfig,
    store: Store,
}

impl Engine {
    pub fn new(adapters: Adapters, config: EngineConfig, store: Store) -> Self {
        Self {
            adapters,
            config,
            store,
        }
    }

    /// Runs the full verification pipeline over `document_bytes` and
    /// persists the result. Anchors to the ledger when `anchor` is true.
    pub async fn verify(
        &self,
        document_bytes: Vec<u8>,
        declared_type: DocumentType,
        document_format: DocumentFormat,
        property_id: Option<String>,
        language_hint: Option<String>,
        anchor: bool,
        cancel: &CancellationSignal,
    ) -> Result<(VerificationRecord, VerificationDetail), EngineError> {
        if is_cancelled(cancel) {
            return Err(EngineError::Cancelled);
        }

        let property_id = property_id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let verification_id = Uuid::new_v4();

        let document = RawDocument {
            bytes: document_bytes,
            format: document_format,
            language_hint: language_hint.clone(),
        };

        let extraction_output = self.run_extraction(document).await?;
        if is_cancelled(cancel) {
            return Err(EngineError::Cancelled);
        }

        let cleaned = self.run_normalize(&extraction_output.joined_text())?;
        let chars_cleaned = cleaned.chars().count();

        let hint = language_hint.unwrap_or_default();
        let translation = self.run_translate(&cleaned, &hint).await;
        if is_cancelled(cancel) {
            return Err(EngineError::Cancelled);
        }

        let (entities, classification) = self.run_extract_and_classify(&translation.text).await;

        let assessment = self.score_entities(
            &entities,
            classification.label.as_str(),
            classification.confidence,
            chars_cleaned,
        );

        let classification_label_for_fingerprint =
            if classification.confidence >= self.config.risk.classifier_confidence_floor {
                classification.label.as_str().to_string()
            } else {
                String::new()
            };

        let projection = build_projection(
            &property_id,
            &entities,
            assessment.score,
            &classification_label_for_fingerprint,
        );
        let fp = fingerprint::fingerprint_of(&projection);

        let mut record = VerificationRecord {
            verification_id,
            property_id: property_id.clone(),
            risk_score: assessment.score,
            risk_level: assessment.level,
            classification_label: classification.label.as_str().to_string(),
            classification_confidence: classification.confidence,
            fingerprint: fp,
            anchor: None,
            created_at: Utc::now(),
        };

        let detail = VerificationDetail {
            verification_id,
            entities: entities.clone(),
            factors: assessment.factors.clone(),
            recommendations: assessment.recommendations.clone(),
            cleaned_text_preview: preview(&cleaned, 500),
            chars_original: extraction_output.chars_original,
            chars_cleaned,
            pages_processed: extraction_output.pages_processed,
            translation_warning: translation.warning.clone(),
        };

        self.run_persist(declared_type, &record, &detail).await?;

        if anchor {
            if is_cancelled(cancel) {
                self.store
                    .append_audit_log(
                        "VERIFY",
                        Some(&property_id),
                        "FAILURE",
                        "cancelled before anchoring",
                    )
                    .await?;
                return Err(EngineError::Cancelled);
            }
            match self.run_anchor(&property_id, &record).await {
                Ok(anchor_info) => {
                    self.store
                        .set_anchor(
                            verification_id,
                            &anchor_info.reference,
                            anchor_info.block_height as i64,
                            anchor_info.timestamp,
                        )
                        .await?;
                    record.anchor = Some(anchor_info);
                }
                Err(err) => {
                    warn!(property_id = %property_id, error = %err, "ledger_anchor_failed");
                    self.store
                        .append_audit_log(
                            "LEDGER_FAILURE",
                            Some(&property_id),
                            "FAILURE",
                            &format!("anchoring failed: {err}"),
                        )
                        .await?;
                }
            }
        }

        self.store
            .append_audit_log("VERIFY", Some(&property_id), "SUCCESS", "verification complete")
            .await?;

        info!(
            property_id = %property_id,
            verification_id = %verification_id,
            risk_score = record.risk_score,
            "verification_complete"
        );

        Ok((record, detail))
    }

    /// Re-verifies `document_bytes` against the anchored fingerprint for
    /// `property_id` without touching the ledger.
    pub async fn check_tamper(
        &self,
        property_id: &str,
        document_bytes: Vec<u8>,
        declared_type: DocumentType,
        document_format: DocumentFormat,
        cancel: &CancellationSignal,
    ) -> Result<TamperCheck, EngineError> {
        let anchored = match self.adapters.ledger.get(property_id).await {
            Ok(entry) => entry,
            Err(ledger::LedgerError::NotFound(_)) => {
                let check = TamperCheck {
                    tamper_check_id: Uuid::new_v4(),
                    property_id: property_id.to_string(),
                    anchored_fingerprint: None,
                    recomputed_fingerprint: None,
                    hash_matched: false,
                    risk_score_delta: 0,
                    status: TamperStatus::NotFound,
                    warnings: Vec::new(),
                    created_at: Utc::now(),
                };
                self.persist_tamper_check(&check).await?;
                return Ok(check);
            }
            Err(ledger::LedgerError::Rejected(msg)) => return Err(EngineError::LedgerRejected(msg)),
            Err(err) => return Err(EngineError::LedgerUnavailable(err.to_string())),
        };

        let prior = self.store.latest_verification(property_id).await.ok();

        let (new_record, new_detail) = self
            .verify(
                document_bytes,
                declared_type,
                document_format,
                Some(property_id.to_string()),
                None,
                false,
                cancel,
            )
            .await?;

        let recomputed_fingerprint = new_record.fingerprint;
        let hash_matched = recomputed_fingerprint == anchored.fingerprint;
        let mut warnings = Vec::new();
        let mut status = if hash_matched {
            TamperStatus::Verified
        } else {
            TamperStatus::Tampered
        };

        let prior_factors: Vec<risk::RiskFactor> = if let Some((prior_record, prior_detail)) = &prior
        {
            if !hash_matched {
                let new_label = if new_record.classification_confidence
                    >= self.config.risk.classifier_confidence_floor
                {
                    new_record.classification_label.clone()
                } else {
                    String::new()
                };
                let new_projection = build_projection(
                    property_id,
                    &new_detail.entities,
                    new_record.risk_score,
                    &new_label,
                );
                let new_comparison = fingerprint::comparison_fingerprint_of(&new_projection);

                let prior_entities = entities_from_row(prior_detail);
                let prior_label = if prior_record.classification_confidence
                    >= self.config.risk.classifier_confidence_floor
                {
                    prior_record.classification_label.clone()
                } else {
                    String::new()
                };
                let prior_projection = build_projection(
                    property_id,
                    &prior_entities,
                    prior_record.risk_score as u8,
                    &prior_label,
                );
                let prior_comparison = fingerprint::comparison_fingerprint_of(&prior_projection);

                if prior_comparison == new_comparison {
                    warnings.push("RISK_SCORE_CHANGED".to_string());
                    status = TamperStatus::Tampered;
                }
            }

            let prior_entities = entities_from_row(prior_detail);
            let prior_assessment = self.score_entities(
                &prior_entities,
                &prior_record.classification_label,
                prior_record.classification_confidence,
                prior_detail.chars_cleaned as usize,
            );
            prior_assessment.factors
        } else {
            Vec::new()
        };

        let prior_codes: HashSet<&'static str> = prior_factors.iter().map(|f| f.code).collect();
        let new_codes: HashSet<&'static str> = new_detail.factors.iter().map(|f| f.code).collect();
        for added in new_codes.difference(&prior_codes) {
            warnings.push(format!("FACTOR_ADDED:{added}"));
        }
        for removed in prior_codes.difference(&new_codes) {
            warnings.push(format!("FACTOR_REMOVED:{removed}"));
        }

        let risk_score_delta = new_record.risk_score as i32 - anchored.risk_score as i32;

        let check = TamperCheck {
            tamper_check_id: Uuid::new_v4(),
            property_id: property_id.to_string(),
            anchored_fingerprint: Some(anchored.fingerprint),
            recomputed_fingerprint: Some(recomputed_fingerprint),
            hash_matched,
            risk_score_delta,
            status,
            warnings,
            created_at: Utc::now(),
        };

        self.persist_tamper_check(&check).await?;
        Ok(check)
    }

    async fn persist_tamper_check(&self, check: &TamperCheck) -> Result<(), EngineError> {
        let input = NewTamperCheck {
            tamper_check_id: check.tamper_check_id,
            property_id: check.property_id.clone(),
            anchored_fingerprint: check.anchored_fingerprint.map(|f| f.to_vec()),
            recomputed_fingerprint: check.recomputed_fingerprint.map(|f| f.to_vec()),
            hash_matched: check.hash_matched,
            risk_score_delta: check.risk_score_delta,
            status: tamper_status_str(check.status).to_string(),
            warnings: serde_json::to_value(&check.warnings).unwrap_or(serde_json::Value::Null),
        };
        self.store.insert_tamper_check(&input).await?;
        self.store
            .append_audit_log(
                "TAMPER_CHECK",
                Some(&check.property_id),
                "SUCCESS",
                tamper_status_str(check.status),
            )
            .await?;
        Ok(())
    }

    async fn run_extraction(
        &self,
        document: RawDocument,
    ) -> Result<extraction::ExtractionOutput, EngineError> {
        let provider = self.adapters.ocr.clone();
        let cfg = self.config.extraction.clone();
        let timeout_dur = self.config.extraction_timeout;

        let handle = tokio::task::spawn_blocking(move || {
            extraction::extract(document, provider.as_ref(), &cfg)
        });

        match tokio::time::timeout(timeout_dur, handle).await {
            Ok(Ok(Ok(output))) => Ok(output),
            Ok(Ok(Err(err))) => Err(EngineError::from(err)),
            Ok(Err(_join_err)) => Err(EngineError::Timeout { stage: "extraction" }),
            Err(_elapsed) => Err(EngineError::Timeout { stage: "extraction" }),
        }
    }

    fn run_normalize(&self, text: &str) -> Result<String, EngineError> {
        Ok(normalize::normalize(text, &self.config.normalize)?)
    }

    async fn run_translate(&self, text: &str, hint: &str) -> translate::TranslationOutcome {
        let fut = translate::translate(
            text,
            hint,
            self.adapters.translator.as_ref(),
            &self.adapters.translation_cache,
            &self.config.translate,
        );
        match tokio::time::timeout(self.config.translation_timeout, fut).await {
            Ok(outcome) => outcome,
            Err(_) => translate::TranslationOutcome {
                text: text.to_string(),
                translated: false,
                warning: Some("translation_unavailable: deadline exceeded".to_string()),
            },
        }
    }

    async fn run_extract_and_classify(
        &self,
        text: &str,
    ) -> (EntityBundle, classify::Classification) {
        let entity_model = self.adapters.entity_model.clone();
        let extract_cfg = self.config.extract.clone();
        let text_owned = text.to_string();

        let entities_fut =
            async move { extract::extract_entities(&text_owned, entity_model.as_ref(), &extract_cfg) };
        let classify_fut = async {
            match tokio::time::timeout(
                self.config.classification_timeout,
                classify::classify(
                    text,
                    self.adapters.classifier.as_ref(),
                    &self.adapters.classification_cache,
                    &self.adapters.classification_breaker,
                    &self.config.classify,
                ),
            )
            .await
            {
                Ok(classification) => classification,
                Err(_) => classify::Classification::unknown(),
            }
        };

        tokio::join!(entities_fut, classify_fut)
    }

    fn score_entities(
        &self,
        entities: &EntityBundle,
        classification_label: &str,
        classification_confidence: f32,
        chars_cleaned: usize,
    ) -> risk::RiskAssessment {
        let valid_to = entities
            .valid_to
            .as_deref()
            .and_then(|s| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());

        let risk_input = risk::RiskInput {
            owner: &entities.owner,
            survey_number: &entities.survey_number,
            has_loans: !entities.loans.is_empty(),
            has_case_numbers: !entities.case_numbers.is_empty(),
            has_mutations: !entities.mutations.is_empty(),
            classification_label,
            classification_confidence,
            chars_cleaned,
            valid_to,
        };

        risk::score(&risk_input, self.adapters.clock.as_ref(), &self.config.risk)
    }

    async fn run_persist(
        &self,
        declared_type: DocumentType,
        record: &VerificationRecord,
        detail: &VerificationDetail,
    ) -> Result<(), EngineError> {
        let new_record = NewVerificationRecord {
            verification_id: record.verification_id,
            property_id: record.property_id.clone(),
            document_type: declared_type.as_str().to_string(),
            risk_score: record.risk_score as i16,
            risk_level: risk_level_str(record.risk_level).to_string(),
            classification_label: record.classification_label.clone(),
            classification_confidence: record.classification_confidence,
            fingerprint: record.fingerprint.to_vec(),
        };

        let new_detail = NewVerificationDetail {
            verification_id: detail.verification_id,
            owner: detail.entities.owner.clone(),
            survey_number: detail.entities.survey_number.clone(),
            hissa_number: detail.entities.hissa_number.clone(),
            village: detail.entities.village.clone(),
            taluk: detail.entities.taluk.clone(),
            district: detail.entities.district.clone(),
            extent_acres: detail.entities.extent_acres as i32,
            extent_guntas: detail.entities.extent_guntas as i32,
            valid_from: detail.entities.valid_from.clone(),
            valid_to: detail.entities.valid_to.clone(),
            signed_date: detail.entities.signed_date.clone(),
            loans: serde_json::to_value(&detail.entities.loans).unwrap_or(serde_json::Value::Null),
            mutations: serde_json::to_value(&detail.entities.mutations)
                .unwrap_or(serde_json::Value::Null),
            case_numbers: serde_json::to_value(&detail.entities.case_numbers)
                .unwrap_or(serde_json::Value::Null),
            dates: serde_json::to_value(&detail.entities.dates).unwrap_or(serde_json::Value::Null),
            cleaned_text_preview: detail.cleaned_text_preview.clone(),
            chars_original: detail.chars_original as i32,
            chars_cleaned: detail.chars_cleaned as i32,
            pages_processed: detail.pages_processed as i32,
        };

        self.store.insert_verification(&new_record, &new_detail).await?;
        Ok(())
    }

    async fn run_anchor(
        &self,
        property_id: &str,
        record: &VerificationRecord,
    ) -> Result<AnchorInfo, EngineError> {
        let fut = self
            .adapters
            .ledger
            .put(property_id, record.fingerprint, record.risk_score);
        match tokio::time::timeout(self.config.ledger_timeout, fut).await {
            Ok(Ok(handle)) => Ok(AnchorInfo {
                reference: format!("block:{}", handle.block_height),
                block_height: handle.block_height,
                timestamp: Utc::now(),
            }),
            Ok(Err(ledger::LedgerError::Rejected(msg))) => Err(EngineError::LedgerRejected(msg)),
            Ok(Err(err)) => Err(EngineError::LedgerUnavailable(err.to_string())),
            Err(_elapsed) => Err(EngineError::Timeout { stage: "ledger" }),
        }
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn risk_level_str(level: risk::RiskLevel) -> &'static str {
    match level {
        risk::RiskLevel::Low => "LOW",
        risk::RiskLevel::Medium => "MEDIUM",
        risk::RiskLevel::High => "HIGH",
    }
}

fn tamper_status_str(status: TamperStatus) -> &'static str {
    match status {
        TamperStatus::Verified => "VERIFIED",
        TamperStatus::Tampered => "TAMPERED",
        TamperStatus::NotFound => "NOT_FOUND",
        TamperStatus::Error => "ERROR",
    }
}

fn build_projection(
    property_id: &str,
    entities: &EntityBundle,
    risk_score: u8,
    classification_label: &str,
) -> CanonicalProjection {
    CanonicalProjection {
        property_id: property_id.to_string(),
        owner: entities.owner.clone(),
        survey_number: entities.survey_number.clone(),
        hissa_number: entities.hissa_number.clone(),
        village: entities.village.clone(),
        taluk: entities.taluk.clone(),
        district: entities.district.clone(),
        extent_acres: entities.extent_acres,
        extent_guntas: entities.extent_guntas,
        loans: entities
            .loans
            .iter()
            .map(|l| CanonicalLoan {
                amount: l.amount,
                bank: l.bank.clone(),
            })
            .collect(),
        case_numbers: entities.case_numbers.clone(),
        risk_score,
        classification_label: classification_label.to_string(),
    }
}

fn entities_from_row(detail: &store::VerificationDetailRow) -> EntityBundle {
    EntityBundle {
        owner: detail.owner.clone(),
        survey_number: detail.survey_number.clone(),
        hissa_number: detail.hissa_number.clone(),
        village: detail.village.clone(),
        taluk: detail.taluk.clone(),
        district: detail.district.clone(),
        extent_acres: detail.extent_acres as u32,
        extent_guntas: detail.extent_guntas as u32,
        valid_from: detail.valid_from.clone(),
        valid_to: detail.valid_to.clone(),
        signed_date: detail.signed_date.clone(),
        loans: serde_json::from_value(detail.loans.0.clone()).unwrap_or_default(),
        mutations: serde_json::from_value(detail.mutations.0.clone()).unwrap_or_default(),
        case_numbers: serde_json::from_value(detail.case_numbers.0.clone()).unwrap_or_default(),
        dates: serde_json::from_value(detail.dates.0.clone()).unwrap_or_default(),
    }
}
