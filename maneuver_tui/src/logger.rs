//! In-app log sink
//!
//! The TUI owns the terminal, so log records go into a shared buffer that
//! the log panel draws instead of stderr.

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Most recent lines kept for the log panel
const MAX_LINES: usize = 200;

#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push_back(line);
            while lines.len() > MAX_LINES {
                lines.pop_front();
            }
        }
    }

    /// Last `n` lines, oldest first
    pub fn tail(&self, n: usize) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().skip(lines.len().saturating_sub(n)).cloned().collect(),
            Err(_) => Vec::new(),
        }
    }
}

struct BufferLogger {
    buffer: LogBuffer,
    level: LevelFilter,
}

impl Log for BufferLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer.push(format!("[{}] {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

/// Install the buffer logger. Level comes from `MANEUVER_LOG` (default `info`).
pub fn init() -> Result<LogBuffer, SetLoggerError> {
    let level = std::env::var("MANEUVER_LOG")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::Info);

    let buffer = LogBuffer::new();
    log::set_boxed_logger(Box::new(BufferLogger {
        buffer: buffer.clone(),
        level,
    }))?;
    log::set_max_level(level);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_caps_lines() {
        let buffer = LogBuffer::new();
        for i in 0..(MAX_LINES + 10) {
            buffer.push(format!("line {}", i));
        }
        let tail = buffer.tail(MAX_LINES + 50);
        assert_eq!(tail.len(), MAX_LINES);
        assert_eq!(tail[0], "line 10");
    }

    #[test]
    fn test_tail_is_oldest_first() {
        let buffer = LogBuffer::new();
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        buffer.push("c".to_string());
        assert_eq!(buffer.tail(2), vec!["b", "c"]);
    }

    #[test]
    fn test_logger_filters_level() {
        let logger = BufferLogger {
            buffer: LogBuffer::new(),
            level: LevelFilter::Warn,
        };
        logger.log(
            &Record::builder()
                .level(log::Level::Info)
                .args(format_args!("quiet"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(log::Level::Error)
                .args(format_args!("loud"))
                .build(),
        );
        assert_eq!(logger.buffer.tail(10), vec!["[ERROR] loud"]);
    }
}
