use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use triage_core::AnalysisError;

pub const MIN_ECG_BYTES: u64 = 100;
pub const MAX_ECG_BYTES: u64 = 50 * 1024 * 1024;

/// Byte-length bounds a recording must fall within before it is scored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileSizeEnvelope {
    pub min_bytes: u64,
    pub max_bytes: u64,
}

impl Default for FileSizeEnvelope {
    fn default() -> Self {
        Self {
            min_bytes: MIN_ECG_BYTES,
            max_bytes: MAX_ECG_BYTES,
        }
    }
}

impl FileSizeEnvelope {
    pub fn check(&self, len: u64) -> Result<(), AnalysisError> {
        if len == 0 {
            Err(AnalysisError::Empty)
        } else if len < self.min_bytes {
            Err(AnalysisError::TooSmall { len })
        } else if len > self.max_bytes {
            Err(AnalysisError::TooLarge { len })
        } else {
            Ok(())
        }
    }

    /// Reads the whole recording and checks it against the envelope.
    pub fn read(&self, path: &Path) -> Result<Vec<u8>, AnalysisError> {
        if !path.exists() {
            return Err(AnalysisError::NotFound(path.to_path_buf()));
        }

        // Skip the read entirely when the declared size is already out of bounds.
        let declared = fs::metadata(path).map_err(|e| io_error(path, e))?.len();
        if declared > self.max_bytes {
            return Err(AnalysisError::TooLarge { len: declared });
        }

        let bytes = fs::read(path).map_err(|e| io_error(path, e))?;
        self.check(bytes.len() as u64)?;
        Ok(bytes)
    }
}

fn io_error(path: &Path, err: io::Error) -> AnalysisError {
    match err.kind() {
        io::ErrorKind::NotFound => AnalysisError::NotFound(path.to_path_buf()),
        _ => AnalysisError::Io(err),
    }
}
