//! Tracing subscriber setup for the `tagscan` binary.

use crate::error::Result;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive, e.g. `tagscan_core=debug`.
pub const LOG_ENV: &str = "TAGSCAN_LOG";

/// Where and how scan logs are written.
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Directory receiving the daily log files.
    pub dir: PathBuf,
    /// File prefix; files are named `<prefix>.<date>`.
    pub file_prefix: String,
    /// Mirror events to stderr.
    pub to_stderr: bool,
    /// Filter used when [`LOG_ENV`] is unset or invalid.
    pub default_filter: String,
}

impl LogOptions {
    pub fn new(file_prefix: impl Into<String>) -> Self {
        Self {
            dir: default_log_dir(),
            file_prefix: file_prefix.into(),
            to_stderr: false,
            default_filter: "info".to_string(),
        }
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    pub fn with_stderr(mut self, to_stderr: bool) -> Self {
        self.to_stderr = to_stderr;
        self
    }
}

/// `~/.tagscan/logs`, or `./.tagscan/logs` without a home directory.
pub fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tagscan")
        .join("logs")
}

/// Install the global subscriber. Keep the returned guard alive until exit,
/// dropping it flushes the file writer.
pub fn init_logging(options: &LogOptions) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&options.dir)?;

    let file_appender = tracing_appender::rolling::daily(&options.dir, &options.file_prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&options.default_filter));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);
    let stderr_layer = options.to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TagscanError;

    #[test]
    fn test_options_builder() {
        let options = LogOptions::new("scan").with_dir("/var/log/tagscan").with_stderr(true);
        assert_eq!(options.dir, PathBuf::from("/var/log/tagscan"));
        assert_eq!(options.file_prefix, "scan");
        assert!(options.to_stderr);
        assert_eq!(options.default_filter, "info");
        assert!(LogOptions::new("cli").dir.ends_with(".tagscan/logs"));
    }

    #[test]
    fn test_init_creates_log_file_once() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("nested/logs");
        let options = LogOptions::new("unit").with_dir(&dir);

        let guard = init_logging(&options).unwrap();
        tracing::info!("logging initialised");
        drop(guard);

        let created: Vec<_> = std::fs::read_dir(&dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert!(created.iter().any(|name| name.starts_with("unit")));

        let err = init_logging(&options).unwrap_err();
        assert!(matches!(err, TagscanError::Logging(_)));
    }
}
