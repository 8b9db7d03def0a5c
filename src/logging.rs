//! Logging setup for the command-line tools.
//!
//! Library code only emits `tracing` events; binaries call [`init_logging`]
//! once at startup. Output goes to stderr so exported documents on stdout
//! stay clean.

use std::str::FromStr;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "ETHCONFIG_LOG";

/// Output format for log events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {} (expected text or json)", other)),
        }
    }
}

/// Build the event filter: `ETHCONFIG_LOG` wins over `level`.
pub fn build_env_filter(level: &str) -> Result<EnvFilter, String> {
    match std::env::var(LOG_ENV) {
        Ok(directives) if !directives.is_empty() => EnvFilter::try_new(&directives)
            .map_err(|e| format!("invalid {} value '{}': {}", LOG_ENV, directives, e)),
        _ => EnvFilter::try_new(level).map_err(|e| format!("invalid log level '{}': {}", level, e)),
    }
}

/// Install the global subscriber.
pub fn init_logging(level: &str, format: LogFormat) -> Result<(), String> {
    let filter = build_env_filter(level)?;
    let registry = Registry::default().with(filter);

    let result = match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| format!("failed to initialise logging: {}", e))
}
