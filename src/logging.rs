//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The TUI owns the terminal, so there is no console output. Logs are written
//! to a file only when one is requested with `--log-file` or
//! `SWATCHTUI_LOG_FILE`; otherwise no subscriber is installed and events are
//! dropped.
//!
//! # Log Levels
//!
//! - `error`: export failures
//! - `warn`: clipboard and preference write failures, malformed palette values
//! - `info`: startup, palette load, theme resolution, exports
//! - `debug`: format changes, copies, search filtering

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive.
pub const FILTER_ENV: &str = "SWATCHTUI_LOG";
/// Environment variable naming a log file.
pub const FILE_ENV: &str = "SWATCHTUI_LOG_FILE";

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level for this crate when `SWATCHTUI_LOG` is not set.
    pub level: Level,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    /// Log file path. Nothing is logged when `None`.
    pub log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_target: true,
            log_file: None,
        }
    }
}

impl LogConfig {
    /// Builds the config from the `--log-file` argument, falling back to
    /// `SWATCHTUI_LOG_FILE`.
    pub fn from_env(log_file_arg: Option<PathBuf>) -> Self {
        let from_env = std::env::var_os(FILE_ENV).map(PathBuf::from);
        Self {
            log_file: resolve_log_file(log_file_arg, from_env),
            ..Default::default()
        }
    }
}

/// The argument wins over the environment. Empty paths count as unset.
fn resolve_log_file(arg: Option<PathBuf>, env: Option<PathBuf>) -> Option<PathBuf> {
    arg.or(env).filter(|p| !p.as_os_str().is_empty())
}

/// Installs the global subscriber if a log file is configured.
///
/// Returns whether logging was enabled.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already set.
pub fn init_logging(config: &LogConfig) -> io::Result<bool> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(config.with_target);

    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .try_init()
        .map_err(io::Error::other)?;
    Ok(true)
}

/// Build an `EnvFilter` from the given level, respecting `SWATCHTUI_LOG`.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(level)))
}

/// Dependencies stay at warn to reduce noise.
fn default_directive(level: Level) -> String {
    format!("warn,swatchtui={}", level.as_str().to_lowercase())
}
