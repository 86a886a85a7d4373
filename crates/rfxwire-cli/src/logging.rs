//! Log setup for the `rfxwire` binary.
//!
//! Logs always go to stderr. Stdout carries only decoded JSON or encoded hex,
//! so output can be piped while `--log-level trace` is on.
//!
//! `RFXWIRE_LOG` takes `tracing` filter directives (for example
//! `rfxwire_core=trace`) and replaces `--log-level` when it parses.

use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "RFXWIRE_LOG";

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Where the active filter came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSource {
    Flag,
    Env,
    /// `RFXWIRE_LOG` was set but did not parse; holds the parse error.
    InvalidEnv(String),
}

fn build_filter(level: LogLevel, directives: Option<&str>) -> (EnvFilter, FilterSource) {
    let from_flag = || EnvFilter::default().add_directive(LevelFilter::from(level).into());

    match directives.map(str::trim).filter(|value| !value.is_empty()) {
        None => (from_flag(), FilterSource::Flag),
        Some(value) => match EnvFilter::try_new(value) {
            Ok(filter) => (filter, FilterSource::Env),
            Err(err) => (from_flag(), FilterSource::InvalidEnv(err.to_string())),
        },
    }
}

/// Install the stderr subscriber once per process.
pub fn init_logging(format: LogFormat, level: LogLevel) -> FilterSource {
    let directives = std::env::var(LOG_ENV).ok();
    let (filter, source) = build_filter(level, directives.as_deref());

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(source == FilterSource::Env);

    match format {
        LogFormat::Text => {
            let _ = builder.try_init();
        }
        LogFormat::Json => {
            let _ = builder.json().try_init();
        }
    }

    if let FilterSource::InvalidEnv(err) = &source {
        tracing::warn!(%err, "ignoring {LOG_ENV}, using --log-level");
    }
    source
}

#[cfg(test)]
mod tests {
    use super::{FilterSource, LogLevel, build_filter};

    #[test]
    fn flag_level_applies_without_env() {
        let (filter, source) = build_filter(LogLevel::Info, None);
        assert_eq!(source, FilterSource::Flag);
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn env_directives_replace_flag_level() {
        let (filter, source) = build_filter(LogLevel::Warn, Some("rfxwire_core=trace"));
        assert_eq!(source, FilterSource::Env);
        assert_eq!(filter.to_string(), "rfxwire_core=trace");
    }

    #[test]
    fn blank_env_is_ignored() {
        let (_, source) = build_filter(LogLevel::Warn, Some("  "));
        assert_eq!(source, FilterSource::Flag);
    }

    #[test]
    fn unparsable_env_falls_back_to_flag() {
        let (filter, source) = build_filter(LogLevel::Error, Some("rfxwire_core=loud"));
        assert!(matches!(source, FilterSource::InvalidEnv(_)));
        assert_eq!(filter.to_string(), "error");
    }
}
