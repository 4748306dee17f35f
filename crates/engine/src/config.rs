use std::time::Duration;

use serde::{Deserialize, Serialize};

use classify::ClassifyConfig;
use extract::ExtractConfig;
use extraction::ExtractionConfig;
use ledger::LedgerBackendConfig;
use normalize::NormalizeConfig;
use risk::RiskConfig;
use translate::TranslateConfig;

/// Every per-stage tunable the Orchestrator and Tamper Checker read,
/// gathered in one place so a caller can load it once from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub extraction: ExtractionConfig,
    pub normalize: NormalizeConfig,
    pub translate: TranslateConfig,
    pub extract: ExtractConfig,
    pub classify: ClassifyConfig,
    pub risk: RiskConfig,
    pub ledger_backend: LedgerBackendConfig,
    #[serde(with = "duration_millis")]
    pub extraction_timeout: Duration,
    #[serde(with = "duration_millis")]
    pub translation_timeout: Duration,
    #[serde(with = "duration_millis")]
    pub classification_timeout: Duration,
    #[serde(with = "duration_millis")]
    pub ledger_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            normalize: NormalizeConfig::default(),
            translate: TranslateConfig::default(),
            extract: ExtractConfig::default(),
            classify: ClassifyConfig::default(),
            risk: RiskConfig::default(),
            ledger_backend: LedgerBackendConfig::default(),
            extraction_timeout: Duration::from_secs(60),
            translation_timeout: Duration::from_secs(30),
            classification_timeout: Duration::from_secs(20),
            ledger_timeout: Duration::from_secs(30),
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
