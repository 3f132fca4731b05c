//! Logging setup
//!
//! Installs a `tracing` subscriber with text, JSON or compact output on
//! stderr, optionally mirrored to a daily-rolling file. Stdout is left to
//! command results so JSON output stays machine-readable.
//!
//! ```rust,no_run
//! use npos_inflation::logging::{init_logging, LogFormat, LoggingConfig};
//!
//! init_logging(&LoggingConfig::new().with_debug(true).with_format(LogFormat::Compact));
//! ```

pub mod format;

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Once, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub use format::{CompactFormatter, TextFormatter};

static INIT: Once = Once::new();

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Keeps the non-blocking file writer flushing for the life of the process
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// `YYYY-MM-DD HH:MM:SS | LEVEL | target | message`
    #[default]
    Text,
    /// Newline-delimited JSON for log aggregation
    Json,
    /// `[LEVEL] message`
    Compact,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Compact => write!(f, "compact"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(format!(
                "Invalid log format '{}'. Valid options: text, json, compact",
                s
            )),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level DEBUG
    pub debug: bool,
    /// Minimum level TRACE, overrides `debug`
    pub trace: bool,
    /// Also write to a daily-rolling file under `logging_dir`
    pub record_log: bool,
    /// Log directory, `~` expands to the home directory
    pub logging_dir: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            debug: false,
            trace: false,
            record_log: false,
            logging_dir: "~/.npos/logs".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn with_file_logging(mut self, enabled: bool) -> Self {
        self.record_log = enabled;
        self
    }

    pub fn with_logging_dir(mut self, dir: impl Into<String>) -> Self {
        self.logging_dir = dir.into();
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Load configuration from environment variables
    ///
    /// - `NPOS_DEBUG`: enable debug level (any value)
    /// - `NPOS_TRACE`: enable trace level (any value)
    /// - `NPOS_LOG_FORMAT`: text, json or compact
    /// - `NPOS_LOG_DIR`: log directory, enables file logging
    /// - `RUST_LOG`: standard filter, takes precedence at init time
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if std::env::var("NPOS_DEBUG").is_ok() || std::env::var("NPOS_TRACE").is_ok() {
            config.debug = true;
        }

        if std::env::var("NPOS_TRACE").is_ok() {
            config.trace = true;
        }

        if let Ok(format) = std::env::var("NPOS_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                config.format = f;
            }
        }

        if let Ok(dir) = std::env::var("NPOS_LOG_DIR") {
            config.logging_dir = dir;
            config.record_log = true;
        }

        config
    }

    fn get_level(&self) -> Level {
        if self.trace {
            Level::TRACE
        } else if self.debug {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    fn expand_path(&self) -> PathBuf {
        let path = &self.logging_dir;
        if let Some(stripped) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        PathBuf::from(path)
    }

    fn filter_directive(&self) -> String {
        format!(
            "{},jsonrpsee=warn,soketto=warn,subxt=warn",
            self.get_level()
        )
    }
}

/// Initialize the logging system. Only the first call has any effect.
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        init_logging_internal(config);
        INITIALIZED.store(true, Ordering::SeqCst);
    });
}

/// Initialize logging at INFO level with text output
pub fn init_default_logging() {
    init_logging(&LoggingConfig::default());
}

pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::SeqCst)
}

/// Console sink for log events. Never stdout: that carries command output.
fn console_writer() -> io::Stderr {
    io::stderr()
}

fn file_writer(config: &LoggingConfig) -> Option<NonBlocking> {
    if !config.record_log {
        return None;
    }

    let log_dir = config.expand_path();
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!(
            "Warning: Failed to create log directory {:?}: {}",
            log_dir, e
        );
        return None;
    }

    let appender = tracing_appender::rolling::daily(&log_dir, "npos.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    let _ = FILE_GUARD.set(guard);
    Some(non_blocking)
}

fn init_logging_internal(config: &LoggingConfig) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(config.filter_directive())
    };

    let file = file_writer(config);
    let ansi = io::stderr().is_terminal();
    let registry = tracing_subscriber::registry().with(env_filter);

    // Option<Layer> is itself a layer, so the file sink is simply absent when disabled
    let result = match config.format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .event_format(TextFormatter)
                    .with_writer(console_writer)
                    .with_ansi(ansi),
            )
            .with(file.map(|w| {
                fmt::layer()
                    .event_format(TextFormatter)
                    .with_writer(w)
                    .with_ansi(false)
            }))
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(console_writer)
                    .with_ansi(ansi),
            )
            .with(file.map(|w| fmt::layer().json().with_writer(w).with_ansi(false)))
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .event_format(CompactFormatter)
                    .with_writer(console_writer)
                    .with_ansi(ansi),
            )
            .with(file.map(|w| {
                fmt::layer()
                    .event_format(CompactFormatter)
                    .with_writer(w)
                    .with_ansi(false)
            }))
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("Warning: Failed to install log subscriber: {}", e);
    }
}
