use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskConfig {
    /// Cleaned-text length below which `data_quality_low` fires.
    pub data_quality_chars_floor: usize,
    /// Classifier confidence below which its label cannot influence risk.
    pub classifier_confidence_floor: f32,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            data_quality_chars_floor: 200,
            classifier_confidence_floor: 0.5,
        }
    }
}
