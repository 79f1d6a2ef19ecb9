//! Internal logging system for the Soft3D engine
//!
//! - Customizable logger via the `Logger` trait
//! - Severity levels (Trace, Debug, Info, Warn, Error) with a minimum level filter
//! - Colored console output by default
//! - File and line information for ERROR logs

use colored::*;
use std::fmt;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// # Example
///
/// ```no_run
/// use soft3d_engine::soft3d::log::{Logger, LogEntry};
///
/// struct FrameStatsLogger;
///
/// impl Logger for FrameStatsLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Forward to an in-editor console...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "soft3d::Camera3D", "soft3d::Scene")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-frame details (render stats, skipped faces)
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Potential issues
    Warn,

    /// Errors, logged with file:line
    Error,
}

impl LogSeverity {
    /// Fixed-width label used by the default logger
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl DefaultLogger {
    /// Format an entry as a plain (uncolored) line
    pub fn format_plain(entry: &LogEntry) -> String {
        Self::format_line(entry, entry.severity.label(), &entry.source)
    }

    fn format_line(entry: &LogEntry, severity: impl fmt::Display, source: impl fmt::Display) -> String {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f");

        match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity, source, entry.message, file, line
            ),
            _ => format!("[{}] [{}] [{}] {}", timestamp, severity, source, entry.message),
        }
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let label = entry.severity.label();
        let severity = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };

        println!("{}", Self::format_line(entry, severity, entry.source.bright_blue()));
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (per-frame details)
///
/// ```no_run
/// # use soft3d_engine::engine_trace;
/// engine_trace!("soft3d::Camera3D", "frame rendered: {} faces", 12);
/// ```
#[macro_export]
macro_rules! engine_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::soft3d::Engine::log(
            $crate::soft3d::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
///
/// ```no_run
/// # use soft3d_engine::engine_debug;
/// engine_debug!("soft3d::Camera3D", "render texture resized to {}x{}", 640, 480);
/// ```
#[macro_export]
macro_rules! engine_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::soft3d::Engine::log(
            $crate::soft3d::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
///
/// ```no_run
/// # use soft3d_engine::engine_info;
/// engine_info!("soft3d::demo", "wrote {}", "zbuffer.png");
/// ```
#[macro_export]
macro_rules! engine_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::soft3d::Engine::log(
            $crate::soft3d::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
///
/// ```no_run
/// # use soft3d_engine::engine_warn;
/// engine_warn!("soft3d::Camera3D", "camera activated without a render texture");
/// ```
#[macro_export]
macro_rules! engine_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::soft3d::Engine::log(
            $crate::soft3d::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// ```no_run
/// # use soft3d_engine::engine_error;
/// engine_error!("soft3d::Camera3D", "Failed to decode camera state: {}", "eof");
/// ```
#[macro_export]
macro_rules! engine_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::soft3d::Engine::log_detailed(
            $crate::soft3d::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
