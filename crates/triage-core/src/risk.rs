use serde::{Deserialize, Serialize};

use crate::outcome::Prediction;

/// Adds `weight` to the score when the attribute is strictly above `above`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RiskTier {
    pub above: f64,
    pub weight: f64,
}

/// Weights and cut-offs of the risk proxy.
///
/// Tier lists are ordered from the highest threshold down; the first tier the
/// attribute exceeds is the only one that counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskPolicy {
    pub age_tiers: Vec<RiskTier>,
    pub systolic_tiers: Vec<RiskTier>,
    pub jitter_scale: f64,
    pub score_cap: f64,
    pub silent_mi_threshold: f64,
    pub acute_mi_threshold: f64,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            age_tiers: vec![
                RiskTier {
                    above: 60.0,
                    weight: 0.3,
                },
                RiskTier {
                    above: 50.0,
                    weight: 0.15,
                },
            ],
            systolic_tiers: vec![
                RiskTier {
                    above: 140.0,
                    weight: 0.25,
                },
                RiskTier {
                    above: 130.0,
                    weight: 0.1,
                },
            ],
            jitter_scale: 0.2,
            score_cap: 0.9,
            silent_mi_threshold: 0.3,
            acute_mi_threshold: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RiskComponents {
    pub age: f64,
    pub blood_pressure: f64,
    pub signal_jitter: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RiskScore {
    pub value: f64,
    pub components: RiskComponents,
}

impl RiskScore {
    pub fn from_components(components: RiskComponents, cap: f64) -> Self {
        let value = components.age + components.blood_pressure + components.signal_jitter;
        Self {
            value: value.min(cap),
            components,
        }
    }
}

fn tier_weight(tiers: &[RiskTier], x: f64) -> f64 {
    tiers
        .iter()
        .find(|t| x > t.above)
        .map_or(0.0, |t| t.weight)
}

impl RiskPolicy {
    pub fn components(&self, age: f64, systolic_bp: f64, byte_len: u64) -> RiskComponents {
        RiskComponents {
            age: tier_weight(&self.age_tiers, age),
            blood_pressure: tier_weight(&self.systolic_tiers, systolic_bp),
            signal_jitter: (byte_len % 100) as f64 / 100.0 * self.jitter_scale,
        }
    }

    pub fn score(&self, age: f64, systolic_bp: f64, byte_len: u64) -> RiskScore {
        RiskScore::from_components(self.components(age, systolic_bp, byte_len), self.score_cap)
    }

    pub fn classify(&self, score: f64) -> Prediction {
        if score < self.silent_mi_threshold {
            Prediction::Normal
        } else if score < self.acute_mi_threshold {
            Prediction::SilentMi
        } else {
            Prediction::AcuteMi
        }
    }
}
