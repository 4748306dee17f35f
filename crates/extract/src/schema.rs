use serde::{Deserialize, Serialize};

/// One loan reference found in the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Loan {
    /// Amount in base integer units (paise), never a float.
    pub amount: i64,
    pub bank: String,
    /// The sentence or clause the loan was extracted from, kept for audit.
    pub context: String,
}

/// One mutation (change-of-ownership) register entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mutation {
    pub record_number: String,
    pub description: String,
}

/// The fixed schema of fields the extractor ever populates. An absent field
/// is empty, never a guess.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityBundle {
    pub owner: String,
    pub survey_number: String,
    pub hissa_number: String,
    pub village: String,
    pub taluk: String,
    pub district: String,
    pub extent_acres: u32,
    pub extent_guntas: u32,
    pub valid_from: Option<String>,
    pub valid_to: Option<String>,
    pub signed_date: Option<String>,
    pub loans: Vec<Loan>,
    pub mutations: Vec<Mutation>,
    pub case_numbers: Vec<String>,
    pub dates: Vec<String>,
}
