use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslateConfig {
    /// Capacity of the content-hash LRU cache.
    pub cache_capacity: usize,
    /// Retry attempts before the translator is treated as failed.
    pub max_retries: u32,
    /// Base delay between retries, doubled on every attempt.
    #[serde(with = "duration_millis")]
    pub base_delay: Duration,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 1024,
            max_retries: 2,
            base_delay: Duration::from_millis(100),
        }
    }
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(d)?))
    }
}
