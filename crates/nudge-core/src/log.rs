//! File logger with size-based rotation and optional stderr echo.
//!
//! Logs are written to `~/.config/nudge/logs/nudge.log`. When the file
//! exceeds the configured max size, it is rotated to `nudge.log.1`
//! (one backup kept). Foreground runs also echo every line to stderr.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "nudge.log";
const BACKUP_FILE_NAME: &str = "nudge.log.1";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Parses a level name. Unknown names fall back to `Info`.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

struct Logger {
    file: Option<LogFile>,
    echo: bool,
    min_level: Level,
}

struct LogFile {
    file: File,
    path: PathBuf,
    max_bytes: u64,
    written: u64,
}

/// Initialises the global logger. Call once at startup.
///
/// With `echo` set, lines are also written to stderr. Does nothing if
/// file logging is disabled and `echo` is off.
pub fn init(config: &LogConfig, echo: bool) {
    let file = if config.enabled {
        open_log_file(config.max_file_mb)
    } else {
        None
    };

    if file.is_none() && !echo {
        return;
    }

    let logger = Logger {
        file,
        echo,
        min_level: Level::parse(&config.level),
    };

    let _ = LOGGER.set(Mutex::new(logger));
}

/// Returns the log file path: `~/.config/nudge/logs/nudge.log`.
pub fn log_path() -> Option<PathBuf> {
    crate::config::config_dir().map(|d| d.join("logs").join(LOG_FILE_NAME))
}

fn open_log_file(max_file_mb: u64) -> Option<LogFile> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;
    let written = file.metadata().map(|m| m.len()).unwrap_or(0);

    Some(LogFile {
        file,
        path,
        max_bytes: max_file_mb * 1024 * 1024,
        written,
    })
}

/// Writes a log line if the level is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = LOGGER.get() else {
        return;
    };
    let Ok(mut logger) = mutex.lock() else {
        return;
    };
    if level < logger.min_level {
        return;
    }
    let line = format!("{} [{}] {args}\n", timestamp(), level.as_str());

    if logger.echo {
        eprint!("{line}");
    }
    if let Some(log_file) = logger.file.as_mut() {
        log_file.append(&line);
    }
}

impl LogFile {
    fn append(&mut self, line: &str) {
        let _ = self.file.write_all(line.as_bytes());
        self.written += line.len() as u64;

        if self.max_bytes > 0 && self.written >= self.max_bytes {
            self.rotate();
        }
    }

    fn rotate(&mut self) {
        let backup = self.path.with_file_name(BACKUP_FILE_NAME);
        let _ = fs::rename(&self.path, &backup);
        if let Ok(f) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            self.file = f;
        }
        self.written = 0;
    }
}

fn timestamp() -> String {
    // UTC wall clock, hours:minutes:seconds.
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = dur.as_secs();
    let (h, m, s) = (secs / 3600 % 24, secs / 60 % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parse_is_case_insensitive() {
        assert_eq!(Level::parse("DEBUG"), Level::Debug);
        assert_eq!(Level::parse("Warn"), Level::Warn);
        assert_eq!(Level::parse("error"), Level::Error);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(Level::parse("verbose"), Level::Info);
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn write_without_init_is_a_no_op() {
        crate::log_info!("nothing listens to {}", "this");
    }
}
