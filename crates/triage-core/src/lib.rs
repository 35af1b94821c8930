//! Shared data model for the ECG risk-proxy triage analyzer.

pub mod error;
pub mod outcome;
pub mod patient;
pub mod result;
pub mod risk;


pub use error::{AnalysisError, IntakeError};
pub use outcome::{Prediction, ProbabilityDetails};
pub use patient::{json_kind, PatientInfo, DEFAULT_AGE, DEFAULT_SYSTOLIC_BP};
pub use result::{AnalysisFailure, AnalysisRecord, AnalysisResult, FAILURE_MESSAGE};
pub use risk::{RiskComponents, RiskPolicy, RiskScore, RiskTier};
