//! Process-wide `tracing` setup driven by the `[logging]` config section.
//!
//! [`Logger::from_config`] installs one subscriber with an [`EnvFilter`]
//! (the configured level, extra directives such as `encontra_venues=debug`,
//! and `RUST_LOG` when no directives are set), a compact console layer and,
//! when `directory` is set, a non-blocking rolling file layer in plain text
//! or JSON.
//!
//! ```rust
//! use encontra_domain::config::LoggingConfig;
//! use encontra_logger::Logger;
//!
//! let _logger = Logger::from_config("encontra-probe", &LoggingConfig::default()).unwrap();
//! tracing::info!(region = "tdf", "ready");
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};

use encontra_domain::config::{LogRotation, LoggingConfig};
use std::fs;
use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_SUFFIX: &str = "log";

/// Keeps the file writer alive. Drop it only on shutdown so buffered lines
/// reach the disk.
#[must_use = "dropping the logger stops the background file writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Installs the global subscriber. `name` prefixes rolling files, e.g.
    /// `encontra-probe.2026-03-14.log`.
    ///
    /// # Errors
    /// * [`LoggerError::Settings`] for a blank name, an unknown level, invalid
    ///   filter directives, `max_files = 0` with a directory, or no output at all.
    /// * [`LoggerError::Directory`] / [`LoggerError::Appender`] if the log
    ///   directory or file cannot be prepared.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn from_config(name: &str, config: &LoggingConfig) -> Result<Self, LoggerError> {
        check(name, config)?;
        let filter = env_filter(config)?;

        let console = config.console.then(|| layer().compact().with_ansi(true).boxed());
        let (file, guard) = match &config.directory {
            Some(directory) => {
                let (writer, guard) = file_writer(name, directory, config)?;
                let file = layer().with_writer(writer).with_ansi(false);
                let file = if config.json { file.json().boxed() } else { file.boxed() };
                (Some(file), Some(guard))
            },
            None => (None, None),
        };

        tracing_subscriber::registry().with(filter).with(console).with(file).try_init()?;
        Ok(Self { guard })
    }

    /// Whether a file layer was installed.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing log files");
        }
    }
}

fn check(name: &str, config: &LoggingConfig) -> Result<(), LoggerError> {
    let problem = if name.trim().is_empty() {
        Some("logger name must not be blank")
    } else if !config.console && config.directory.is_none() {
        Some("enable console output or set a log directory")
    } else if config.directory.is_some() && config.max_files == 0 {
        Some("max_files must be greater than zero")
    } else {
        None
    };
    problem.map_or(Ok(()), |message| {
        Err(LoggerError::Settings { message: message.into(), context: None })
    })
}

fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    level.trim().parse::<LevelFilter>().map_err(|e| LoggerError::Settings {
        message: e.to_string().into(),
        context: Some(format!("level {level:?}").into()),
    })
}

fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(parse_level(&config.level)?.into());
    match &config.filter {
        Some(directives) => builder.parse(directives).map_err(|e| LoggerError::Settings {
            message: e.to_string().into(),
            context: Some(format!("filter {directives:?}").into()),
        }),
        None => Ok(builder.from_env_lossy()),
    }
}

fn file_writer(
    name: &str,
    directory: &Path,
    config: &LoggingConfig,
) -> Result<(NonBlocking, WorkerGuard), LoggerError> {
    fs::create_dir_all(directory).context(directory.display().to_string())?;
    let appender = RollingFileAppender::builder()
        .rotation(rotation(config.rotation))
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(config.max_files)
        .build(directory)?;
    Ok(tracing_appender::non_blocking(appender))
}

const fn rotation(rotation: LogRotation) -> Rotation {
    match rotation {
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Never => Rotation::NEVER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level(" WARN ").unwrap(), LevelFilter::WARN);
        assert!(matches!(parse_level("loud"), Err(LoggerError::Settings { .. })));
    }

    #[test]
    fn settings_are_checked_before_any_output_is_built() {
        let quiet = LoggingConfig { console: false, ..LoggingConfig::default() };
        let err = check("encontra-probe", &quiet).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid logging settings: enable console output or set a log directory"
        );

        assert!(check(" ", &LoggingConfig::default()).is_err());

        let no_files = LoggingConfig {
            directory: Some("/tmp/encontra-logs".into()),
            max_files: 0,
            ..LoggingConfig::default()
        };
        assert!(check("encontra-probe", &no_files).is_err());
        assert!(check("encontra-probe", &LoggingConfig::default()).is_ok());
    }

    #[test]
    fn bad_filter_directives_are_reported() {
        let config = LoggingConfig { filter: Some("=[".to_owned()), ..LoggingConfig::default() };
        assert!(matches!(env_filter(&config), Err(LoggerError::Settings { .. })));
    }

    #[test]
    fn rotation_follows_config() {
        assert_eq!(rotation(LogRotation::Hourly), Rotation::HOURLY);
        assert_eq!(rotation(LogRotation::Never), Rotation::NEVER);
    }
}
