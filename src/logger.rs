//! Custom logging module.
//!
//! This module provides a logger that captures log entries into a bounded
//! buffer so the logs page can display them inside the terminal.

use crate::error::AppError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Number of entries kept for the logs page.
///
const LOG_CAPACITY: usize = 500;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {:<5} {}", timestamp, level_str, record.args())
}

/// Shared, bounded buffer of formatted log lines.
///
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        LogBuffer::default()
    }

    pub fn push(&self, entry: String) {
        // A poisoned lock only loses log lines.
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() >= LOG_CAPACITY {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    /// Return up to `count` of the newest entries, oldest first.
    ///
    pub fn latest(&self, count: usize) -> Vec<String> {
        match self.entries.lock() {
            Ok(entries) => {
                let skip = entries.len().saturating_sub(count);
                entries.iter().skip(skip).cloned().collect()
            }
            Err(_) => vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Custom logger that captures logs to a buffer
///
pub struct CustomLogger {
    buffer: LogBuffer,
    level: LevelFilter,
}

impl CustomLogger {
    pub fn new(buffer: LogBuffer, level: LevelFilter) -> Self {
        CustomLogger { buffer, level }
    }

    /// Install as the global logger.
    ///
    pub fn init(buffer: LogBuffer, level: LevelFilter) -> Result<(), AppError> {
        let logger: &'static CustomLogger = Box::leak(Box::new(CustomLogger::new(buffer, level)));
        log::set_logger(logger).map_err(|e| AppError::Logger(e.to_string()))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer.push(format_log(record));
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_is_bounded() {
        let buffer = LogBuffer::new();
        for i in 0..(LOG_CAPACITY + 10) {
            buffer.push(format!("entry {}", i));
        }
        assert_eq!(buffer.len(), LOG_CAPACITY);
        let latest = buffer.latest(2);
        assert_eq!(
            latest,
            vec![
                format!("entry {}", LOG_CAPACITY + 8),
                format!("entry {}", LOG_CAPACITY + 9)
            ]
        );
    }

    #[test]
    fn test_logger_filters_by_level() {
        let buffer = LogBuffer::new();
        let logger = CustomLogger::new(buffer.clone(), LevelFilter::Info);
        logger.log(
            &Record::builder()
                .args(format_args!("navigated"))
                .level(Level::Info)
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("noise"))
                .level(Level::Trace)
                .build(),
        );
        let entries = buffer.latest(10);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains("INFO"));
        assert!(entries[0].contains("navigated"));
    }
}
