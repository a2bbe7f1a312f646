use std::{
    io::Write as _,
    sync::{OnceLock, RwLock},
};

use log::{Log, Metadata, Record};

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

pub fn get_logger() -> &'static StderrLogger {
    // default configuration
    LOGGER.get_or_init(|| StderrLogger::new(log::Level::Warn))
}

/// Installs the logger, messages below `level` are dropped.
pub fn init(level: log::Level) -> Result<(), log::SetLoggerError> {
    let logger = get_logger();
    logger.set_min_level(level);

    log::set_logger(logger)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

pub struct StderrLogger {
    min_level: RwLock<log::Level>,
}

impl StderrLogger {
    fn new(min_level: log::Level) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> log::Level {
        // poisoned lock still holds a valid level
        *self.min_level.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_min_level(&self, level: log::Level) {
        *self.min_level.write().unwrap_or_else(|e| e.into_inner()) = level;
    }

    pub fn format(record: &Record) -> String {
        format!(
            "[{} {}] {}",
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", Self::format(record));
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_filtering() {
        let logger = StderrLogger::new(log::Level::Info);
        let meta = |level| Metadata::builder().level(level).target("mazart").build();

        assert!(logger.enabled(&meta(log::Level::Warn)));
        assert!(logger.enabled(&meta(log::Level::Info)));
        assert!(!logger.enabled(&meta(log::Level::Debug)));

        logger.set_min_level(log::Level::Trace);
        assert!(logger.enabled(&meta(log::Level::Trace)));
    }

    #[test]
    fn record_format() {
        assert_eq!(
            StderrLogger::format(
                &Record::builder()
                    .args(format_args!("Path found, length = {}", 12))
                    .level(log::Level::Info)
                    .target("mazart::app")
                    .build()
            ),
            "[INFO mazart::app] Path found, length = 12"
        );
    }
}
