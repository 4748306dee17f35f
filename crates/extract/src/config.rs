use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractConfig {
    /// Minimum model confidence for a singleton-field candidate to be used
    /// when no rule matched.
    pub model_confidence_floor: f32,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            model_confidence_floor: 0.5,
        }
    }
}
