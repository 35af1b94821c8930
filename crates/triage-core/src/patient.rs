use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AnalysisError;

pub const DEFAULT_AGE: f64 = 50.0;
pub const DEFAULT_SYSTOLIC_BP: f64 = 120.0;

/// Patient demographics as supplied by the caller.
///
/// Only `age` and `systolicBP` feed the risk score. Every other key is kept
/// untouched, in its original order, and echoed back in the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientInfo(Map<String, Value>);

impl PatientInfo {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Returns `None` when the value is not a JSON object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Numeric lookup. Absent keys are `Ok(None)`; booleans count as 0/1;
    /// anything else that is not a JSON number is rejected.
    pub fn number(&self, field: &'static str) -> Result<Option<f64>, AnalysisError> {
        match self.0.get(field) {
            None => Ok(None),
            Some(Value::Bool(flag)) => Ok(Some(if *flag { 1.0 } else { 0.0 })),
            Some(value) => value
                .as_f64()
                .map(Some)
                .ok_or(AnalysisError::InvalidField { field }),
        }
    }

    pub fn age(&self) -> Result<f64, AnalysisError> {
        Ok(self.number("age")?.unwrap_or(DEFAULT_AGE))
    }

    pub fn systolic_bp(&self) -> Result<f64, AnalysisError> {
        Ok(self.number("systolicBP")?.unwrap_or(DEFAULT_SYSTOLIC_BP))
    }
}

/// JSON type name of `value`, for rejecting non-object patient input.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<Map<String, Value>> for PatientInfo {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
