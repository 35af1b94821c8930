use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, info_span, warn};
use serde_json::Value;
use triage_core::{
    json_kind, AnalysisError, AnalysisRecord, AnalysisResult, PatientInfo, ProbabilityDetails,
};

use crate::config::AnalyzerConfig;
use crate::intake::{check_extension, PatientProfile};

/// Heuristic stand-in for a trained ECG classifier.
///
/// The recording is only read for size validation; the outcome comes from
/// age, systolic pressure and the byte length, plus bounded random jitter on
/// the reported probabilities.
#[derive(Debug, Clone, Default)]
pub struct RiskProxyAnalyzer {
    config: AnalyzerConfig,
}

impl RiskProxyAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn analyze(&self, path: &Path, patient: PatientInfo) -> AnalysisResult {
        match self.config.seed {
            Some(seed) => self.analyze_with_rng(path, patient, &mut StdRng::seed_from_u64(seed)),
            None => self.analyze_with_rng(path, patient, &mut rand::thread_rng()),
        }
    }

    /// Like [`analyze`](Self::analyze), for patient input that has only been
    /// parsed as JSON. Anything other than an object fails in-band once the
    /// file itself has passed validation.
    pub fn analyze_value(&self, path: &Path, patient: Value) -> AnalysisResult {
        match self.config.seed {
            Some(seed) => {
                self.analyze_value_with_rng(path, patient, &mut StdRng::seed_from_u64(seed))
            }
            None => self.analyze_value_with_rng(path, patient, &mut rand::thread_rng()),
        }
    }

    /// Never fails: errors come back as the failure-shaped result.
    pub fn analyze_with_rng<R: Rng>(
        &self,
        path: &Path,
        patient: PatientInfo,
        rng: &mut R,
    ) -> AnalysisResult {
        fold(path, self.try_analyze(path, patient, rng))
    }

    pub fn analyze_value_with_rng<R: Rng>(
        &self,
        path: &Path,
        patient: Value,
        rng: &mut R,
    ) -> AnalysisResult {
        fold(path, self.try_analyze_value(path, patient, rng))
    }

    pub fn try_analyze_value<R: Rng>(
        &self,
        path: &Path,
        patient: Value,
        rng: &mut R,
    ) -> Result<AnalysisRecord, AnalysisError> {
        let kind = json_kind(&patient);
        if let Some(patient) = PatientInfo::from_value(patient) {
            return self.try_analyze(path, patient, rng);
        }
        if self.config.strict_intake {
            check_extension(path)?;
        }
        self.config.envelope.read(path)?;
        Err(AnalysisError::NotAnObject { kind })
    }

    pub fn try_analyze<R: Rng>(
        &self,
        path: &Path,
        patient: PatientInfo,
        rng: &mut R,
    ) -> Result<AnalysisRecord, AnalysisError> {
        let span = info_span!("analyze_ecg", path = %path.display());
        let _enter = span.enter();

        if self.config.strict_intake {
            check_extension(path)?;
            PatientProfile::from_patient(&patient)?;
        }

        let bytes = self.config.envelope.read(path)?;
        let age = patient.age()?;
        let systolic_bp = patient.systolic_bp()?;

        let policy = &self.config.policy;
        let score = policy.score(age, systolic_bp, bytes.len() as u64);
        debug!(
            bytes = bytes.len(),
            age = score.components.age,
            blood_pressure = score.components.blood_pressure,
            signal_jitter = score.components.signal_jitter,
            score = score.value,
            "risk score computed"
        );

        let prediction = policy.classify(score.value);
        let details = ProbabilityDetails::draw(prediction, rng).normalized();
        let record = AnalysisRecord::assemble(patient, prediction, details);

        info!(
            id = %record.id,
            prediction = %record.prediction,
            confidence = record.confidence,
            "ECG analysis complete"
        );
        Ok(record)
    }
}

fn fold(path: &Path, result: Result<AnalysisRecord, AnalysisError>) -> AnalysisResult {
    if let Err(err) = &result {
        warn!(path = %path.display(), error = %err, "ECG analysis failed");
    }
    AnalysisResult::from(result)
}

/// One-shot analysis with the default configuration.
pub fn analyze(path: &Path, patient: PatientInfo) -> AnalysisResult {
    RiskProxyAnalyzer::default().analyze(path, patient)
}
