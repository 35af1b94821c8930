//! Upload-time validation: accepted file types and the full patient profile.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use triage_core::{IntakeError, PatientInfo};

pub const ALLOWED_EXTENSIONS: [&str; 3] = ["dat", "hea", "csv"];

pub fn check_extension(path: &Path) -> Result<(), IntakeError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(IntakeError::UnsupportedExtension(ext))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// Fully specified patient record, as the intake form requires it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub age: f64,
    pub gender: Gender,
    /// cm
    pub height: f64,
    /// kg
    pub weight: f64,
    #[serde(rename = "systolicBP")]
    pub systolic_bp: f64,
    #[serde(rename = "diastolicBP")]
    pub diastolic_bp: f64,
}

fn bounded(info: &PatientInfo, field: &'static str, min: f64, max: f64) -> Result<f64, IntakeError> {
    let value = info
        .get(field)
        .ok_or(IntakeError::MissingField(field))?
        .as_f64()
        .ok_or(IntakeError::NotANumber(field))?;
    if value < min || value > max {
        return Err(IntakeError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(value)
}

impl PatientProfile {
    pub fn from_patient(info: &PatientInfo) -> Result<Self, IntakeError> {
        let age = bounded(info, "age", 1.0, 120.0)?;
        let gender = match info.get("gender") {
            None => return Err(IntakeError::MissingField("gender")),
            Some(Value::String(raw)) => {
                Gender::parse(raw).ok_or_else(|| IntakeError::InvalidGender(raw.clone()))?
            }
            Some(other) => return Err(IntakeError::InvalidGender(other.to_string())),
        };
        Ok(Self {
            age,
            gender,
            height: bounded(info, "height", 50.0, 300.0)?,
            weight: bounded(info, "weight", 10.0, 500.0)?,
            systolic_bp: bounded(info, "systolicBP", 50.0, 300.0)?,
            diastolic_bp: bounded(info, "diastolicBP", 30.0, 200.0)?,
        })
    }
}
