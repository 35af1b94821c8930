use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AnalysisError;
use crate::outcome::{Prediction, ProbabilityDetails};
use crate::patient::PatientInfo;

pub const FAILURE_MESSAGE: &str = "Failed to analyze ECG file";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub timestamp: String,
    pub patient_info: PatientInfo,
    pub prediction: Prediction,
    pub confidence: f64,
    pub details: ProbabilityDetails,
}

impl AnalysisRecord {
    /// Stamps a fresh id and the current UTC time onto normalized details.
    pub fn assemble(
        patient_info: PatientInfo,
        prediction: Prediction,
        details: ProbabilityDetails,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: utc_timestamp(Utc::now()),
            patient_info,
            prediction,
            confidence: details.confidence(),
            details,
        }
    }
}

/// ISO-8601 with a literal `Z`; the fractional part is dropped when it is zero.
pub fn utc_timestamp(at: DateTime<Utc>) -> String {
    if at.nanosecond() / 1_000 == 0 {
        at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    } else {
        at.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    pub error: String,
    pub message: String,
}

impl From<&AnalysisError> for AnalysisFailure {
    fn from(err: &AnalysisError) -> Self {
        Self {
            error: err.to_string(),
            message: err.message().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Success(AnalysisRecord),
    Failure(AnalysisFailure),
}

impl AnalysisResult {
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisResult::Success(_))
    }

    pub fn record(&self) -> Option<&AnalysisRecord> {
        match self {
            AnalysisResult::Success(record) => Some(record),
            AnalysisResult::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&AnalysisFailure> {
        match self {
            AnalysisResult::Success(_) => None,
            AnalysisResult::Failure(failure) => Some(failure),
        }
    }
}

impl From<Result<AnalysisRecord, AnalysisError>> for AnalysisResult {
    fn from(result: Result<AnalysisRecord, AnalysisError>) -> Self {
        match result {
            Ok(record) => AnalysisResult::Success(record),
            Err(err) => AnalysisResult::Failure(AnalysisFailure::from(&err)),
        }
    }
}
