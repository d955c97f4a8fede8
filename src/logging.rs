#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Environment variable holding the default log level.
pub const LOG_ENV: &str = "STARTUP_BUST_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Pick the effective level: an explicit override wins, then the value of
/// `STARTUP_BUST_LOG`, then `warn`.
pub fn resolve_level(explicit: Option<LevelFilter>, env_value: Option<&str>) -> LevelFilter {
    explicit
        .or_else(|| env_value.and_then(|lvl| lvl.parse().ok()))
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger so log lines stay off the game transcript.
/// Calling it twice keeps the first logger.
pub fn init_logging(explicit: Option<LevelFilter>) {
    let env_value = env::var(LOG_ENV).ok();
    let level = resolve_level(explicit, env_value.as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
