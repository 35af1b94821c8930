use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::result::FAILURE_MESSAGE;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("ECG file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("ECG file is empty")]
    Empty,
    #[error("ECG file too small - may be corrupted")]
    TooSmall { len: u64 },
    #[error("ECG file too large")]
    TooLarge { len: u64 },
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("patient field '{field}' must be a number")]
    InvalidField { field: &'static str },
    #[error("patient info must be a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },
    #[error(transparent)]
    Intake(#[from] IntakeError),
}

impl AnalysisError {
    /// Caller-facing summary paired with the error text in a failure document.
    pub fn message(&self) -> &'static str {
        match self {
            AnalysisError::Intake(IntakeError::UnsupportedExtension(_)) => {
                "Unsupported ECG file type"
            }
            AnalysisError::Intake(_) => "Invalid patient information",
            _ => FAILURE_MESSAGE,
        }
    }
}

/// Upload-time checks applied only when strict intake is switched on.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IntakeError {
    #[error("Invalid file type '{0}'. Only .dat, .hea, and .csv files are allowed.")]
    UnsupportedExtension(String),
    #[error("patient field '{0}' is required")]
    MissingField(&'static str),
    #[error("patient field '{0}' must be a number")]
    NotANumber(&'static str),
    #[error("patient field '{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("patient field 'gender' must be one of male, female, other, got {0:?}")]
    InvalidGender(String),
}
