use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;

use crate::types::LogLevel;

/// Writes log records to stderr so stdout stays clean for JSON and CSV
struct StderrLogger {
    color: bool,
}

impl StderrLogger {
    fn label(&self, level: Level) -> String {
        let text = level.as_str().to_lowercase();
        if !self.color {
            return text;
        }
        match level {
            Level::Error => text.red().bold().to_string(),
            Level::Warn => text.yellow().bold().to_string(),
            Level::Info => text.green().to_string(),
            Level::Debug => text.blue().to_string(),
            Level::Trace => text.dimmed().to_string(),
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if record.level() >= Level::Debug {
            eprintln!(
                "[{}] {}: {}",
                self.label(record.level()),
                record.target(),
                record.args()
            );
        } else {
            eprintln!("[{}] {}", self.label(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}

/// Installs the stderr logger. Later calls keep the first logger and only
/// adjust the level.
pub fn init(level: LogLevel, color: bool) {
    let filter: LevelFilter = level.into();
    let _ = log::set_boxed_logger(Box::new(StderrLogger { color }));
    log::set_max_level(filter);
}
