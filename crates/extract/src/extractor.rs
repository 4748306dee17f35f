use unicode_normalization::UnicodeNormalization;

use crate::config::ExtractConfig;
use crate::model::{Candidate, EntityModel, SingletonField};
use crate::rules;
use crate::schema::{EntityBundle, Loan, Mutation};

/// Extracts the fixed field schema from cleaned document text.
///
/// Resolution order per field, per the external contract: a rule match
/// always wins; the model only fills a singleton field the rules missed,
/// and only above `cfg.model_confidence_floor`. List fields union rule and
/// model output, de-duplicated, ordered by first appearance in `text`.
pub fn extract_entities(text: &str, model: &dyn EntityModel, cfg: &ExtractConfig) -> EntityBundle {
    let owner = resolve_singleton(text, &rules::OWNER, model, SingletonField::Owner, cfg);
    let survey_number = resolve_singleton(
        text,
        &rules::SURVEY_NUMBER,
        model,
        SingletonField::SurveyNumber,
        cfg,
    );
    let hissa_number = resolve_singleton(
        text,
        &rules::HISSA_NUMBER,
        model,
        SingletonField::HissaNumber,
        cfg,
    );
    let village = resolve_singleton(text, &rules::VILLAGE, model, SingletonField::Village, cfg);
    let taluk = resolve_singleton(text, &rules::TALUK, model, SingletonField::Taluk, cfg);
    let district = resolve_singleton(text, &rules::DISTRICT, model, SingletonField::District, cfg);

    let (extent_acres, extent_guntas) = rules::EXTENT
        .captures(text)
        .map(|c| {
            let acres = c.get(1).and_then(|m| m.as_str().parse::<u32>().ok()).unwrap_or(0);
            let guntas = c.get(2).and_then(|m| m.as_str().parse::<u32>().ok()).unwrap_or(0);
            (acres, guntas)
        })
        .unwrap_or((0, 0));

    let valid_from = rules::VALID_FROM.captures(text).and_then(extract_group1);
    let valid_to = rules::VALID_TO.captures(text).and_then(extract_group1);
    let signed_date = rules::SIGNED_DATE.captures(text).and_then(extract_group1);

    let loans = extract_loans(text);
    let mutations = extract_mutations(text);
    let case_numbers = extract_case_numbers(text);
    let dates = extract_dates(text);

    EntityBundle {
        owner,
        survey_number,
        hissa_number,
        village,
        taluk,
        district,
        extent_acres,
        extent_guntas,
        valid_from,
        valid_to,
        signed_date,
        loans,
        mutations,
        case_numbers,
        dates,
    }
}

fn resolve_singleton(
    text: &str,
    rule: &regex::Regex,
    model: &dyn EntityModel,
    field: SingletonField,
    cfg: &ExtractConfig,
) -> String {
    if let Some(m) = rule.captures(text).and_then(extract_group1) {
        return clean(&m);
    }

    let best_model: Option<Candidate> = model
        .singleton_candidates(field, text)
        .into_iter()
        .filter(|c| c.confidence >= cfg.model_confidence_floor)
        .max_by(|a, b| a.confidence.total_cmp(&b.confidence));

    best_model.map(|c| clean(&c.text)).unwrap_or_default()
}

fn extract_group1(caps: regex::Captures) -> Option<String> {
    caps.get(1).map(|m| m.as_str().to_string())
}

fn clean(s: &str) -> String {
    s.trim().nfc().collect::<String>()
}

fn parse_amount_paise(raw: &str) -> Option<i64> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().ok().map(|rupees| rupees * 100)
}

fn extract_loans(text: &str) -> Vec<Loan> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for caps in rules::LOAN.captures_iter(text) {
        let Some(amount) = caps.get(1).and_then(|m| parse_amount_paise(m.as_str())) else {
            continue;
        };
        let bank = caps
            .get(2)
            .map(|m| clean(m.as_str()).to_uppercase())
            .unwrap_or_default();
        let context = clean(caps.get(0).map(|m| m.as_str()).unwrap_or_default());
        let key = (amount, bank.clone());
        if seen.insert(key) {
            out.push(Loan { amount, bank, context });
        }
    }
    out
}

fn extract_mutations(text: &str) -> Vec<Mutation> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for caps in rules::MUTATION.captures_iter(text) {
        let Some(record_number) = caps.get(1).map(|m| clean(m.as_str())) else {
            continue;
        };
        let description = caps.get(2).map(|m| clean(m.as_str())).unwrap_or_default();
        if seen.insert(record_number.clone()) {
            out.push(Mutation {
                record_number,
                description,
            });
        }
    }
    out
}

fn extract_case_numbers(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for caps in rules::CASE_NUMBER.captures_iter(text) {
        let value = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| clean(m.as_str()));
        if let Some(v) = value {
            if !v.is_empty() && seen.insert(v.clone()) {
                out.push(v);
            }
        }
    }
    out
}

fn extract_dates(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for caps in rules::GENERIC_DATE.captures_iter(text) {
        if let Some(d) = caps.get(1).map(|m| m.as_str().to_string()) {
            if seen.insert(d.clone()) {
                out.push(d);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NullEntityModel;

    #[test]
    fn extracts_owner_survey_and_extent() {
        let text = "Owner: RAVI KUMAR\nSurvey No: 45/2A\nVillage: HEBBAL\n2 Acres 10 Guntas";
        let bundle = extract_entities(text, &NullEntityModel, &ExtractConfig::default());
        assert_eq!(bundle.owner, "RAVI KUMAR");
        assert_eq!(bundle.survey_number, "45/2A");
        assert_eq!(bundle.village, "HEBBAL");
        assert_eq!(bundle.extent_acres, 2);
        assert_eq!(bundle.extent_guntas, 10);
    }

    #[test]
    fn absent_fields_stay_empty() {
        let bundle = extract_entities("no structured content here", &NullEntityModel, &ExtractConfig::default());
        assert!(bundle.owner.is_empty());
        assert!(bundle.survey_number.is_empty());
        assert!(bundle.loans.is_empty());
    }

    #[test]
    fn extracts_loan_amount_in_paise() {
        let text = "There is a loan of Rs. 5,00,000 from SBI against this property.";
        let bundle = extract_entities(text, &NullEntityModel, &ExtractConfig::default());
        assert_eq!(bundle.loans.len(), 1);
        assert_eq!(bundle.loans[0].amount, 50_000_000);
        assert_eq!(bundle.loans[0].bank, "SBI");
    }

    #[test]
    fn extracts_case_number() {
        let text = "Pending litigation under Case No: WP-1234/2023 in the High Court.";
        let bundle = extract_entities(text, &NullEntityModel, &ExtractConfig::default());
        assert_eq!(bundle.case_numbers, vec!["WP-1234/2023".to_string()]);
    }

    #[test]
    fn deduplicates_repeated_case_numbers() {
        let text = "Case No: WP-1/2020. Later mentions Case No: WP-1/2020 again.";
        let bundle = extract_entities(text, &NullEntityModel, &ExtractConfig::default());
        assert_eq!(bundle.case_numbers.len(), 1);
    }
}
