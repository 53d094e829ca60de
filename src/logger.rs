//! Custom logging module.
//!
//! This module provides a logger that writes timestamped entries to stderr,
//! away from the labels and formatted records printed on stdout, and can
//! forward each entry to a capture callback.

use crate::error::AppError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

type LogCallback = Box<dyn Fn(String) + Send + Sync>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Logger writing to stderr, with an optional capture callback.
///
pub struct BenchLogger {
    level: LevelFilter,
    echo: bool,
    log_callback: Arc<Mutex<Option<LogCallback>>>,
}

impl BenchLogger {
    pub fn new(level: LevelFilter) -> Self {
        BenchLogger {
            level,
            echo: true,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    /// Stop writing entries to stderr; the callback still receives them.
    ///
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    pub fn set_log_callback(&self, callback: LogCallback) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
        // A poisoned lock only loses the capture; stderr output continues
    }
}

impl Log for BenchLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let formatted = format_log(record);
        if let Ok(callback) = self.log_callback.lock() {
            if let Some(ref cb) = *callback {
                cb(formatted.clone());
            }
        }
        if self.echo {
            eprintln!("{}", formatted);
        }
    }

    fn flush(&self) {
        // No-op
    }
}

/// Level for the command line: info, or debug when verbose.
///
pub fn cli_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install a [`BenchLogger`] as the global logger.
///
pub fn init(level: LevelFilter) -> Result<(), AppError> {
    let logger: &'static BenchLogger = Box::leak(Box::new(BenchLogger::new(level)));
    log::set_logger(logger).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(logger: &BenchLogger) -> Arc<Mutex<Vec<String>>> {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lines);
        logger.set_log_callback(Box::new(move |line| {
            sink.lock().unwrap().push(line);
        }));
        lines
    }

    #[test]
    fn test_format_log() {
        let formatted = format_log(
            &Record::builder()
                .args(format_args!("decoded {} codes", 10))
                .level(Level::Warn)
                .build(),
        );
        assert!(formatted.ends_with(" WARN decoded 10 codes"));
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = BenchLogger::new(LevelFilter::Info).quiet();
        let lines = capture(&logger);

        logger.log(
            &Record::builder()
                .args(format_args!("kept"))
                .level(Level::Info)
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("dropped"))
                .level(Level::Debug)
                .build(),
        );

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("INFO kept"));
    }

    #[test]
    fn test_cli_level_shows_info() {
        let logger = BenchLogger::new(cli_level(false));
        assert!(logger.enabled(&Metadata::builder().level(Level::Info).build()));
        assert!(!logger.enabled(&Metadata::builder().level(Level::Debug).build()));
        assert_eq!(cli_level(true), LevelFilter::Debug);
    }

    #[test]
    fn test_logger_enabled() {
        let logger = BenchLogger::new(LevelFilter::Warn);
        assert!(logger.enabled(&Metadata::builder().level(Level::Error).build()));
        assert!(!logger.enabled(&Metadata::builder().level(Level::Info).build()));
    }
}
