//! `analyze-ecg <ecg_file_path> <patient_info_json>`
//!
//! Writes exactly one JSON document to stdout. Analysis failures are reported
//! in-band with exit status 0; bad invocations exit with status 1.

mod cli;
mod logging;
mod output;

#[cfg(test)]
mod tests;

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use ecg_guards::{AnalyzerConfig, RiskProxyAnalyzer};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, error};
use triage_core::AnalysisResult;

use crate::cli::{Cli, CliError};

fn main() -> ExitCode {
    logging::init_tracing();
    match run(std::env::args_os()) {
        Ok(code) => code,
        Err(err) => {
            error!(error = %format!("{err:#}"), "could not emit result document");
            ExitCode::from(1)
        }
    }
}

fn run<I, T>(args: I) -> anyhow::Result<ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match invoke(args) {
        Ok(result) => {
            emit(&mut out, &result)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            debug!(error = %err, "rejected invocation");
            emit(&mut out, &json!({ "error": err.to_string() }))?;
            Ok(ExitCode::from(1))
        }
    }
}

fn invoke<I, T>(args: I) -> Result<AnalysisResult, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_args(args)?;
    let patient = cli.patient()?;
    let analyzer = RiskProxyAnalyzer::new(AnalyzerConfig::from_env());
    Ok(analyzer.analyze_value(&cli.ecg_path(), patient))
}

fn emit<W, T>(out: &mut W, document: &T) -> anyhow::Result<()>
where
    W: Write,
    T: ?Sized + Serialize,
{
    let bytes = output::to_python_json(document).context("serializing result document")?;
    out.write_all(&bytes)
        .and_then(|_| out.write_all(b"\n"))
        .and_then(|_| out.flush())
        .context("writing result document to stdout")
}
