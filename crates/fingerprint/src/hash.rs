//! Versioned SHA-256 fingerprinting of a canonical projection.
//!
//! ```text
//! SHA-256(schema_version.to_be_bytes() || discriminator || canonical_json_bytes)
//! ```
//!
//! `discriminator` is `0x00` for the standard fingerprint and `0x01` for the
//! comparison fingerprint, so the two can never collide even for an
//! identical projection.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::projection::{CanonicalProjection, ComparisonProjection};

const SCHEMA_VERSION: u32 = 1;
const DISCRIMINATOR_STANDARD: u8 = 0x00;
const DISCRIMINATOR_COMPARISON: u8 = 0x01;

/// Computes the 32-byte fingerprint used for ledger anchoring.
///
/// Reproducible across processes and machines for an identical projection;
/// see [`CanonicalProjection::ordered`] for how extraction-order dependent
/// fields (loans, case numbers) are made order-independent first.
pub fn fingerprint_of(projection: &CanonicalProjection) -> [u8; 32] {
    let ordered = projection.ordered();
    let bytes = canonical_json_bytes(&ordered);
    hash_with_discriminator(DISCRIMINATOR_STANDARD, &bytes)
}

/// Computes the comparison fingerprint, identical to [`fingerprint_of`]
/// except `risk_score` never participates. Used by the tamper checker to
/// distinguish a genuine content change from a score recomputed under a
/// revised risk table.
pub fn comparison_fingerprint_of(projection: &CanonicalProjection) -> [u8; 32] {
    let ordered = projection.ordered();
    let comparison: ComparisonProjection = (&ordered).into();
    let bytes = canonical_json_bytes(&comparison);
    hash_with_discriminator(DISCRIMINATOR_COMPARISON, &bytes)
}

/// Serializes `value` with every JSON object's keys sorted alphabetically,
/// recursively, so the resulting bytes depend only on field names and
/// values, never on struct declaration order or serde_json's
/// `preserve_order` feature. An independent implementation following this
/// rule reproduces identical bytes for an identical projection.
fn canonical_json_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    let value = serde_json::to_value(value).expect("canonical projection is always encodable");
    let sorted = sort_keys(value);
    serde_json::to_vec(&sorted).expect("sorted value is always encodable")
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> = map.into_iter().map(|(k, v)| (k, sort_keys(v))).collect();
            serde_json::to_value(sorted).expect("BTreeMap<String, Value> is always encodable")
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

fn hash_with_discriminator(discriminator: u8, bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(SCHEMA_VERSION.to_be_bytes());
    hasher.update([discriminator]);
    hasher.update(bytes);
    hasher.finalize().into()
}

/// Renders a fingerprint as a lowercase hex string for transport in JSON
/// responses and logs.
pub fn to_hex(fingerprint: &[u8; 32]) -> String {
    hex::encode(fingerprint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::CanonicalLoan;

    fn sample() -> CanonicalProjection {
        CanonicalProjection {
            property_id: "P-1".into(),
            owner: "RAVI KUMAR".into(),
            survey_number: "45/2A".into(),
            hissa_number: String::new(),
            village: "HEBBAL".into(),
            taluk: String::new(),
            district: String::new(),
            extent_acres: 2,
            extent_guntas: 10,
            loans: vec![],
            case_numbers: vec![],
            risk_score: 0,
            classification_label: String::new(),
        }
    }

    #[test]
    fn stable_across_calls() {
        let p = sample();
        assert_eq!(fingerprint_of(&p), fingerprint_of(&p));
    }

    #[test]
    fn sensitive_to_owner_change() {
        let a = sample();
        let mut b = sample();
        b.owner = "RAVI KUMAF".into();
        assert_ne!(fingerprint_of(&a), fingerprint_of(&b));
    }

    #[test]
    fn order_independent_loans_and_cases() {
        let mut a = sample();
        a.loans = vec![
            CanonicalLoan { amount: 100, bank: "SBI".into() },
            CanonicalLoan { amount: 500, bank: "HDFC".into() },
        ];
        a.case_numbers = vec!["C2".into(), "C1".into()];

        let mut b = sample();
        b.loans = vec![
            CanonicalLoan { amount: 500, bank: "HDFC".into() },
            CanonicalLoan { amount: 100, bank: "SBI".into() },
        ];
        b.case_numbers = vec!["C1".into(), "C2".into()];

        assert_eq!(fingerprint_of(&a), fingerprint_of(&b));
    }

    #[test]
    fn comparison_fingerprint_ignores_risk_score() {
        let mut a = sample();
        a.risk_score = 10;
        let mut b = sample();
        b.risk_score = 70;

        assert_eq!(comparison_fingerprint_of(&a), comparison_fingerprint_of(&b));
        assert_ne!(fingerprint_of(&a), fingerprint_of(&b));
    }

    #[test]
    fn standard_and_comparison_never_collide() {
        let p = sample();
        assert_ne!(fingerprint_of(&p), comparison_fingerprint_of(&p));
    }
}
