use std::{
    io::Write as _,
    sync::{OnceLock, PoisonError, RwLock},
};

use colored::{Color, Colorize as _};
use log::{Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(log::Level::Warn))
}

/// Installs the logger, calling it more than once only updates the level.
pub fn init(level: log::Level) {
    let logger = get_logger();
    logger.set_min_level(level);

    if log::set_logger(logger).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub level: log::Level,
    pub message: String,
    pub source: String,
}

impl Message {
    fn from_record(record: &Record) -> Self {
        Message {
            level: record.level(),
            message: record.args().to_string(),
            source: record.module_path().unwrap_or("unknown").to_string(),
        }
    }

    fn level_color(&self) -> Color {
        match self.level {
            log::Level::Error => Color::Red,
            log::Level::Warn => Color::Yellow,
            log::Level::Info => Color::White,
            log::Level::Debug => Color::Blue,
            log::Level::Trace => Color::BrightBlack,
        }
    }

    pub fn format(&self) -> String {
        format!(
            "{:>5} {} -> {}",
            self.level.as_str().color(self.level_color()),
            self.source.dimmed(),
            self.message
        )
    }
}

/// Writes log records to stderr.
pub struct AppLogger {
    min_level: RwLock<log::Level>,
}

impl AppLogger {
    fn new(min_level: log::Level) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> log::Level {
        *self.min_level.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_min_level(&self, level: log::Level) {
        *self.min_level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = Message::from_record(record).format();
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_filter() {
        let logger = AppLogger::new(log::Level::Info);
        let meta = |level| Metadata::builder().level(level).build();

        assert!(logger.enabled(&meta(log::Level::Warn)));
        assert!(logger.enabled(&meta(log::Level::Info)));
        assert!(!logger.enabled(&meta(log::Level::Debug)));

        logger.set_min_level(log::Level::Trace);
        assert!(logger.enabled(&meta(log::Level::Trace)));
    }

    #[test]
    fn message_format() {
        colored::control::set_override(false);
        let message = Message {
            level: log::Level::Warn,
            message: "no path".to_string(),
            source: "mazesolver::solver".to_string(),
        };
        assert_eq!(message.format(), " WARN mazesolver::solver -> no path");
    }
}
