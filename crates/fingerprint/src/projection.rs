use serde::Serialize;

/// One normalized loan entry as it appears in the canonical projection.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct CanonicalLoan {
    /// Amount in base integer units (paise, not rupees) so no floating point
    /// ever enters the canonical bytes.
    pub amount: i64,
    pub bank: String,
}

/// The subset of a verification record that participates in fingerprinting.
///
/// Every field here is reproducible: no timestamps, no generated ids, no
/// confidence scores, no OCR statistics. Adding a field to this struct is a
/// breaking change to every fingerprint ever produced and must come with a
/// schema version bump in the caller.
#[derive(Debug, Clone, Serialize)]
pub struct CanonicalProjection {
    pub property_id: String,
    pub owner: String,
    pub survey_number: String,
    pub hissa_number: String,
    pub village: String,
    pub taluk: String,
    pub district: String,
    pub extent_acres: u32,
    pub extent_guntas: u32,
    pub loans: Vec<CanonicalLoan>,
    pub case_numbers: Vec<String>,
    pub risk_score: u8,
    /// Empty string when the classifier's confidence was below the
    /// configured floor; a low-confidence label must never perturb the
    /// fingerprint.
    pub classification_label: String,
}

impl CanonicalProjection {
    /// Returns a copy with `loans` ordered by amount descending, ties broken
    /// by bank name, and `case_numbers` sorted lexically. This is what makes
    /// the projection order-independent with respect to extraction order.
    pub fn ordered(&self) -> Self {
        let mut loans = self.loans.clone();
        loans.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.bank.cmp(&b.bank)));

        let mut case_numbers = self.case_numbers.clone();
        case_numbers.sort();

        Self {
            loans,
            case_numbers,
            ..self.clone()
        }
    }
}

/// The same shape as [`CanonicalProjection`] but without `risk_score`, used
/// for the comparison fingerprint described in the external interfaces.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ComparisonProjection {
    pub property_id: String,
    pub owner: String,
    pub survey_number: String,
    pub hissa_number: String,
    pub village: String,
    pub taluk: String,
    pub district: String,
    pub extent_acres: u32,
    pub extent_guntas: u32,
    pub loans: Vec<CanonicalLoan>,
    pub case_numbers: Vec<String>,
    pub classification_label: String,
}

impl From<&CanonicalProjection> for ComparisonProjection {
    fn from(p: &CanonicalProjection) -> Self {
        Self {
            property_id: p.property_id.clone(),
            owner: p.owner.clone(),
            survey_number: p.survey_number.clone(),
            hissa_number: p.hissa_number.clone(),
            village: p.village.clone(),
            taluk: p.taluk.clone(),
            district: p.district.clone(),
            extent_acres: p.extent_acres,
            extent_guntas: p.extent_guntas,
            loans: p.loans.clone(),
            case_numbers: p.case_numbers.clone(),
            classification_label: p.classification_label.clone(),
        }
    }
}
