use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prediction {
    Normal,
    SilentMi,
    AcuteMi,
}

impl Prediction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prediction::Normal => "normal",
            Prediction::SilentMi => "silent_mi",
            Prediction::AcuteMi => "acute_mi",
        }
    }

    /// Label shown on the results panel.
    pub fn label(&self) -> &'static str {
        match self {
            Prediction::Normal => "Normal",
            Prediction::SilentMi => "Silent MI Detected",
            Prediction::AcuteMi => "Acute MI Detected",
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityDetails {
    #[serde(rename = "normalProbability")]
    pub normal: f64,
    #[serde(rename = "silentMIProbability")]
    pub silent_mi: f64,
    #[serde(rename = "acuteMIProbability")]
    pub acute_mi: f64,
}

fn jitter<R: Rng>(rng: &mut R, span: f64) -> f64 {
    rng.gen_range(0.0..span)
}

impl ProbabilityDetails {
    /// Un-normalized draw around the base profile of `prediction`.
    /// Draw order is normal, silent MI, acute MI.
    pub fn draw<R: Rng>(prediction: Prediction, rng: &mut R) -> Self {
        let (normal, silent_mi, acute_mi) = match prediction {
            Prediction::Normal => {
                let normal = 0.85 + jitter(rng, 0.1);
                let silent_mi = 0.10 - jitter(rng, 0.05);
                let acute_mi = 0.05 - jitter(rng, 0.02);
                (normal, silent_mi, acute_mi)
            }
            Prediction::SilentMi => {
                let normal = 0.30 + jitter(rng, 0.1);
                let silent_mi = 0.60 + jitter(rng, 0.15);
                let acute_mi = 0.10 - jitter(rng, 0.05);
                (normal, silent_mi, acute_mi)
            }
            Prediction::AcuteMi => {
                let normal = 0.20 + jitter(rng, 0.1);
                let silent_mi = 0.25 + jitter(rng, 0.1);
                let acute_mi = 0.55 + jitter(rng, 0.2);
                (normal, silent_mi, acute_mi)
            }
        };
        Self {
            normal,
            silent_mi,
            acute_mi,
        }
    }

    pub fn total(&self) -> f64 {
        self.normal + self.silent_mi + self.acute_mi
    }

    pub fn normalized(self) -> Self {
        let total = self.total();
        Self {
            normal: self.normal / total,
            silent_mi: self.silent_mi / total,
            acute_mi: self.acute_mi / total,
        }
    }

    pub fn confidence(&self) -> f64 {
        self.normal.max(self.silent_mi).max(self.acute_mi)
    }

    pub fn get(&self, prediction: Prediction) -> f64 {
        match prediction {
            Prediction::Normal => self.normal,
            Prediction::SilentMi => self.silent_mi,
            Prediction::AcuteMi => self.acute_mi,
        }
    }
}
