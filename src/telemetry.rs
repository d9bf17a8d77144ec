use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FAIRFOUND_LOG";

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("invalid log filter '{value}': {source}")]
    EnvFilter { value: String, source: ParseError },

    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Level implied by the CLI flags when `FAIRFOUND_LOG` is unset.
pub fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "warn";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

pub fn init(verbose: u8, quiet: bool) -> Result<(), TelemetryError> {
    let value = std::env::var(LOG_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default_level(verbose, quiet).to_string());
    let env_filter = EnvFilter::try_new(&value)
        .map_err(|source| TelemetryError::EnvFilter { value, source })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
