//! Logging setup for the rowcheck binary.
//!
//! Diagnostics go through `tracing`; the subscriber is installed once at
//! startup from the CLI flags. By default only warnings and errors are
//! shown, and `RUST_LOG` may override the filter when no explicit level
//! was given on the command line.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// How log lines are formatted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line human format, no timestamps.
    #[default]
    Pretty,
    /// Single-line format, no timestamps.
    Compact,
    /// One JSON object per line, with timestamps and span close events.
    Json,
}

/// Subscriber configuration assembled from the CLI flags.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level for the rowcheck crates; external crates stay at warn.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` override the filter when it is set.
    pub use_env_filter: bool,
    /// ANSI colors in pretty and compact output.
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Append log lines to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error when the log file cannot be opened.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        // &File is Write, so a shared Arc<File> serves as the writer
        init_logging_with_writer(config, Arc::new(file));
    } else {
        init_logging_with_writer(config, io::stderr);
    }
    Ok(())
}

/// Install the global subscriber with a specific writer.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(env_filter(config));
    match config.format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(false)
                    .without_time(),
            )
            .init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(false)
                    .without_time(),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_span_events(fmt::format::FmtSpan::CLOSE),
            )
            .init(),
    }
}

/// Level directives for the filter.
///
/// `RUST_LOG` wins only when the user gave no explicit level, so `-v` and
/// `--log-level` always mean what they say.
fn env_filter(config: &LogConfig) -> EnvFilter {
    let level = config.level_filter.to_string().to_lowercase();
    let directives = format!(
        "warn,rowcheck_cli={level},rowcheck_ingest={level},\
         rowcheck_model={level},rowcheck_validate={level}"
    );

    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directives))
    } else {
        EnvFilter::new(&directives)
    }
}
