use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Rejects input larger than this many bytes with `UnsupportedInput`
    /// before ever calling the provider.
    pub max_input_bytes: usize,
    /// Per-call deadline enforced by the orchestrator, carried here so a
    /// caller constructing the config in one place can read it back.
    pub timeout_ms: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: 25 * 1024 * 1024,
            timeout_ms: 60_000,
        }
    }
}
