use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Sink for diagnostic messages. Nothing in the comparison depends on it.
pub trait Logger: Send + Sync {
    fn log(&self, message: &str, level: Level);
}

/// Forwards messages to the global `tracing` dispatcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str, level: Level) {
        if level == Level::ERROR {
            tracing::error!("{message}");
        } else if level == Level::WARN {
            tracing::warn!("{message}");
        } else if level == Level::INFO {
            tracing::info!("{message}");
        } else if level == Level::DEBUG {
            tracing::debug!("{message}");
        } else {
            tracing::trace!("{message}");
        }
    }
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Human,
    /// One JSON object per event
    Json,
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set. Otherwise a log file gets `info` and above, the
/// console only `warn` and above so it does not clutter the report.
pub fn init(format: LogFormat, log_file: Option<&Path>) -> Result<()> {
    let default_directive = if log_file.is_some() {
        "sortdiff=info"
    } else {
        "sortdiff=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match (format, log_file) {
        (LogFormat::Human, None) => builder.with_writer(io::stderr).try_init(),
        (LogFormat::Json, None) => builder.json().with_writer(io::stderr).try_init(),
        (LogFormat::Human, Some(path)) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(open_log_file(path)?))
            .try_init(),
        (LogFormat::Json, Some(path)) => builder
            .json()
            .with_writer(Mutex::new(open_log_file(path)?))
            .try_init(),
    };
    installed.map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

/// Open `path` for appending, creating it and its parent directory.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}
