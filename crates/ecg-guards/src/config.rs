use serde::{Deserialize, Serialize};
use tracing::warn;
use triage_core::RiskPolicy;

use crate::envelope::FileSizeEnvelope;

pub const STRICT_ENV: &str = "ECG_TRIAGE_STRICT";
pub const SEED_ENV: &str = "ECG_TRIAGE_SEED";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalyzerConfig {
    pub envelope: FileSizeEnvelope,
    pub policy: RiskPolicy,
    /// Enforce file-type and full patient-profile checks before scoring.
    pub strict_intake: bool,
    /// Fixed seed for the probability jitter; fresh entropy when unset.
    pub seed: Option<u64>,
}

impl AnalyzerConfig {
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(STRICT_ENV) {
            self.strict_intake = parse_flag(&raw);
        }
        if let Some(raw) = lookup(SEED_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(err) => warn!(value = %raw, error = %err, "ignoring unparsable {}", SEED_ENV),
            }
        }
        self
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
