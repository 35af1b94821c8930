pub mod analyzer;
pub mod config;
pub mod envelope;
pub mod intake;
pub mod store;


pub use analyzer::{analyze, RiskProxyAnalyzer};
pub use config::AnalyzerConfig;
pub use envelope::{FileSizeEnvelope, MAX_ECG_BYTES, MIN_ECG_BYTES};
pub use intake::{check_extension, Gender, PatientProfile, ALLOWED_EXTENSIONS};
pub use store::{AnalysisStore, MemStore};
