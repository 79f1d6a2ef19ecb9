//! Soft3D engine facade: process-wide logging state
//!
//! The renderer itself holds no global state: cameras, scenes and mesh
//! providers are passed explicitly. The only singleton is the logger, guarded
//! by an `RwLock` so any thread may log.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Minimum severity forwarded to the logger
static LOG_LEVEL: OnceLock<RwLock<LogSeverity>> = OnceLock::new();

const DEFAULT_LOG_LEVEL: LogSeverity = LogSeverity::Info;

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

fn level() -> &'static RwLock<LogSeverity> {
    LOG_LEVEL.get_or_init(|| RwLock::new(DEFAULT_LOG_LEVEL))
}

// ===== PUBLIC API =====

/// Engine facade for logging configuration
///
/// # Example
///
/// ```no_run
/// use soft3d_engine::soft3d::{Engine, log::LogSeverity};
///
/// Engine::set_log_level(LogSeverity::Trace);
/// Engine::log(LogSeverity::Info, "soft3d::demo", "starting".to_string());
/// Engine::reset_logger();
/// ```
pub struct Engine;

impl Engine {
    /// Replace the default logger with a custom implementation
    pub fn set_logger<L: Logger + 'static>(logger_impl: L) {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(logger_impl);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Set the minimum severity; entries below it are dropped
    pub fn set_log_level(severity: LogSeverity) {
        if let Ok(mut lock) = level().write() {
            *lock = severity;
        }
    }

    /// Current minimum severity
    pub fn log_level() -> LogSeverity {
        level().read().map(|lock| *lock).unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Whether an entry of this severity would reach the logger
    pub fn is_enabled(severity: LogSeverity) -> bool {
        severity >= Self::log_level()
    }

    /// Log a message without file:line
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if !Self::is_enabled(severity) {
            return;
        }
        if let Ok(lock) = logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Log a message with file:line information (used by engine_error!)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if !Self::is_enabled(severity) {
            return;
        }
        if let Ok(lock) = logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}
