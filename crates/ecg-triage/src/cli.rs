use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use serde_json::Value;
use thiserror::Error;

/// Exactly two positionals; every other shape is rejected as a whole.
#[derive(Debug, Parser)]
#[command(
    name = "analyze-ecg",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    #[arg(value_parser = clap::value_parser!(OsString))]
    pub ecg_file: OsString,
    pub patient_info: String,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid arguments")]
    InvalidArguments,
    #[error("{0}")]
    MalformedInput(#[from] serde_json::Error),
}

impl Cli {
    pub fn parse_args<I, T>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() != 3 {
            return Err(CliError::InvalidArguments);
        }
        // Both operands are taken verbatim, even when they look like options.
        args.insert(1, OsString::from("--"));
        Cli::try_parse_from(args).map_err(|_| CliError::InvalidArguments)
    }

    pub fn ecg_path(&self) -> PathBuf {
        PathBuf::from(&self.ecg_file)
    }

    /// Any well-formed JSON value; shape checks belong to the analyzer.
    pub fn patient(&self) -> Result<Value, CliError> {
        Ok(serde_json::from_str(&self.patient_info)?)
    }
}
