//! Logging subsystem for the tools.
use std::sync::{Mutex, RwLock};

use lazy_static::lazy_static;
use slog::{o, Drain, Level, Record};

lazy_static! {
    static ref LEVEL: RwLock<Level> = RwLock::new(Level::Warning);
    static ref LOGGER: slog::Logger = slog::Logger::root(
        Mutex::new(slog_json::Json::default(std::io::stderr()))
            .filter(enabled)
            .map(slog::Fuse),
        o!()
    );
}

/// Sets the most verbose level that is still logged.
pub fn set_level(level: Level) {
    if let Ok(mut current) = LEVEL.write() {
        *current = level;
    }
}

/// Returns the most verbose level that is still logged.
pub fn level() -> Level {
    LEVEL.read().map(|level| *level).unwrap_or(Level::Warning)
}

fn enabled(record: &Record) -> bool {
    record.level().is_at_least(level())
}

/// Get the logger.
pub fn get_logger(module: &'static str) -> slog::Logger {
    LOGGER.new(o!("module" => module))
}

#[cfg(test)]
mod tests {
    use slog::Level;

    use super::{level, set_level};

    #[test]
    fn test_level() {
        set_level(Level::Debug);
        assert_eq!(level(), Level::Debug);
        assert!(Level::Info.is_at_least(level()));

        set_level(Level::Error);
        assert!(!Level::Warning.is_at_least(level()));
    }
}
