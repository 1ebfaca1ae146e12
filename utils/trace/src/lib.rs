//! Tracing subscriber setup shared by the binaries.

use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

/// Output layout of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TraceFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl FromStr for TraceFormat {
    type Err = ParseTraceFormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ParseTraceFormatError { value: value.to_owned() }),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown log format {value:?}, expected compact, pretty or json")]
pub struct ParseTraceFormatError {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceSettings {
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,
    pub format: TraceFormat,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self { level: "info".to_owned(), format: TraceFormat::default() }
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over `settings.level`.
pub fn init(settings: &TraceSettings) -> Result<(), TracingInitError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|source| TracingInitError::InvalidFilter { source })?;

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match settings.format {
        TraceFormat::Compact => fmt::layer().compact().boxed(),
        TraceFormat::Pretty => fmt::layer().pretty().boxed(),
        TraceFormat::Json => fmt::layer().json().boxed(),
    };

    let subscriber = tracing_subscriber::registry().with(layer).with(filter);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| TracingInitError::SetGlobalDefault { source })?;

    Ok(())
}

#[derive(Debug, Error)]
pub enum TracingInitError {
    #[error("Invalid filter config: {source}")]
    InvalidFilter {
        #[from]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to set global default subscriber: {source}")]
    SetGlobalDefault {
        #[from]
        source: tracing::subscriber::SetGlobalDefaultError,
    },
}
