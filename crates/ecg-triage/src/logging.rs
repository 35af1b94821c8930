use std::io;
use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "ECG_TRIAGE_LOG";
pub const LOG_FORMAT_ENV: &str = "ECG_TRIAGE_LOG_FORMAT";

static INIT: Once = Once::new();

/// Installs the stderr subscriber. Stdout is reserved for the result document.
///
/// `ECG_TRIAGE_LOG` takes an `EnvFilter` directive (default `off`);
/// `ECG_TRIAGE_LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
        let json = std::env::var(LOG_FORMAT_ENV)
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let registry = tracing_subscriber::registry().with(filter);
        let installed = if json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_ansi(false)
                        .with_writer(io::stderr),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_ansi(false)
                        .with_writer(io::stderr),
                )
                .try_init()
        };
        if let Err(err) = installed {
            eprintln!("analyze-ecg: tracing already initialized: {err}");
        }
    });
}
