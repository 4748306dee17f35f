use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::config::RiskConfig;
use crate::factors::{
    recommendation_for, RiskFactor, CLASSIFIER_HIGH_RISK, DATA_QUALITY_LOW, LEGAL_CASE,
    LOAN_PRESENT, MUTATION_PENDING, OWNER_MISSING, SURVEY_MISSING, VALIDITY_EXPIRED,
};

/// Document-classifier labels that the scorer treats as high risk when
/// present above the confidence floor.
const HIGH_RISK_LABELS: &[&str] = &["COURT_CASE", "FORGERY_SUSPECTED"];
const MUTATION_PENDING_LABEL: &str = "MUTATION_PENDING";

/// Everything the scorer needs, gathered from the extraction and
/// classification stages. Intentionally flat and string/primitive typed so
/// this crate never depends on `extract` or `classify`.
#[derive(Debug, Clone)]
pub struct RiskInput<'a> {
    pub owner: &'a str,
    pub survey_number: &'a str,
    pub has_loans: bool,
    pub has_case_numbers: bool,
    pub has_mutations: bool,
    pub classification_label: &'a str,
    pub classification_confidence: f32,
    pub chars_cleaned: usize,
    pub valid_to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn of(score: u8) -> Self {
        match score {
            0..=30 => RiskLevel::Low,
            31..=60 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskAssessment {
    pub score: u8,
    pub level: RiskLevel,
    pub factors: Vec<RiskFactor>,
    pub recommendations: Vec<&'static str>,
}

/// Computes the additive, clamped risk score for `input`.
///
/// Pure: given the same input and clock reading, always returns the same
/// assessment. Factor order in the returned list matches the weight table's
/// declaration order, not input-dependent order, so two runs over equivalent
/// documents produce byte-identical factor lists.
pub fn score(input: &RiskInput, clock: &dyn Clock, cfg: &RiskConfig) -> RiskAssessment {
    let mut fired: Vec<RiskFactor> = Vec::new();

    if input.has_loans {
        fired.push(LOAN_PRESENT);
    }
    if input.has_case_numbers {
        fired.push(LEGAL_CASE);
    }
    if input.has_mutations || input.classification_label == MUTATION_PENDING_LABEL {
        fired.push(MUTATION_PENDING);
    }
    if input.owner.trim().is_empty() {
        fired.push(OWNER_MISSING);
    }
    if input.survey_number.trim().is_empty() {
        fired.push(SURVEY_MISSING);
    }
    if input.chars_cleaned < cfg.data_quality_chars_floor {
        fired.push(DATA_QUALITY_LOW);
    }
    if let Some(valid_to) = input.valid_to {
        if valid_to < clock.today() {
            fired.push(VALIDITY_EXPIRED);
        }
    }
    if input.classification_confidence >= cfg.classifier_confidence_floor
        && HIGH_RISK_LABELS.contains(&input.classification_label)
    {
        fired.push(CLASSIFIER_HIGH_RISK);
    }

    let raw_total: u32 = fired.iter().map(|f| f.weight as u32).sum();
    let score = raw_total.min(100) as u8;
    let level = RiskLevel::of(score);
    let recommendations = fired.iter().map(|f| recommendation_for(f.code)).collect();

    RiskAssessment {
        score,
        level,
        factors: fired,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn base_input() -> RiskInput<'static> {
        RiskInput {
            owner: "RAVI KUMAR",
            survey_number: "45/2A",
            has_loans: false,
            has_case_numbers: false,
            has_mutations: false,
            classification_label: "CLEAR_TITLE",
            classification_confidence: 0.9,
            chars_cleaned: 400,
            valid_to: None,
        }
    }

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
    }

    #[test]
    fn happy_path_scores_zero() {
        let out = score(&base_input(), &clock(), &RiskConfig::default());
        assert_eq!(out.score, 0);
        assert_eq!(out.level, RiskLevel::Low);
        assert!(out.factors.is_empty());
    }

    #[test]
    fn loan_present_scores_thirty_and_stays_low() {
        let mut input = base_input();
        input.has_loans = true;
        let out = score(&input, &clock(), &RiskConfig::default());
        assert_eq!(out.score, 30);
        assert_eq!(out.level, RiskLevel::Low);
        assert_eq!(out.factors, vec![LOAN_PRESENT]);
    }

    #[test]
    fn multiple_factors_sum_to_seventy_and_high() {
        let mut input = base_input();
        input.survey_number = "";
        input.has_loans = true;
        input.has_case_numbers = true;
        input.chars_cleaned = 120;
        let out = score(&input, &clock(), &RiskConfig::default());
        assert_eq!(out.score, 70);
        assert_eq!(out.level, RiskLevel::High);
    }

    #[test]
    fn score_is_clamped_to_one_hundred() {
        let mut input = base_input();
        input.owner = "";
        input.survey_number = "";
        input.has_loans = true;
        input.has_case_numbers = true;
        input.has_mutations = true;
        input.chars_cleaned = 10;
        input.valid_to = Some(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        input.classification_label = "FORGERY_SUSPECTED";
        let out = score(&input, &clock(), &RiskConfig::default());
        assert_eq!(out.score, 100);
        assert_eq!(out.level, RiskLevel::High);
    }

    #[test]
    fn low_confidence_classification_never_contributes() {
        let mut input = base_input();
        input.classification_label = "FORGERY_SUSPECTED";
        input.classification_confidence = 0.1;
        let out = score(&input, &clock(), &RiskConfig::default());
        assert_eq!(out.score, 0);
    }

    #[test]
    fn expired_validity_uses_injected_clock() {
        let mut input = base_input();
        input.valid_to = Some(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let out = score(&input, &clock(), &RiskConfig::default());
        assert_eq!(out.score, 10);
        assert_eq!(out.factors, vec![VALIDITY_EXPIRED]);
    }
}
