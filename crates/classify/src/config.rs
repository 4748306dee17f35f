use serde::{Deserialize, Serialize};

use crate::resilience::CircuitBreakerConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyConfig {
    pub confidence_floor: f32,
    pub cache_capacity: usize,
    pub circuit_breaker: CircuitBreakerConfig,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            confidence_floor: 0.5,
            cache_capacity: 1024,
            circuit_breaker: CircuitBreakerConfig::default(),
        }
    }
}
