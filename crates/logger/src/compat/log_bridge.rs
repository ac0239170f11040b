//! Bridge from the `log` crate to the console

use crate::{ACTIVE, CallSite, Facility, Level, Record};
use log::{LevelFilter, Log, Metadata, Record as LogRecord};

static BRIDGE: LogBridge = LogBridge;

/// `log::Log` implementation that forwards to [`ACTIVE`]
#[derive(Debug)]
pub struct LogBridge;

impl Log for LogBridge {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        ACTIVE.is_enabled()
    }

    fn log(&self, record: &LogRecord) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let call_site = CallSite::new(
            record.file().unwrap_or("<unknown>"),
            record.line().unwrap_or(0),
            record.target(),
        );
        ACTIVE.emit(&Record::new(map_level(record.level()), *record.args(), call_site));
    }

    fn flush(&self) {}
}

/// Map log levels to our levels
const fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warning,
        log::Level::Info => Level::Info,
        log::Level::Debug => Level::Debug,
        log::Level::Trace => Level::Trace,
    }
}

/// Route the `log` crate's macros to the console.
///
/// # Example
/// ```no_run
/// use dave_logs::compat::log_bridge::init_log_bridge;
///
/// init_log_bridge().expect("Failed to set log bridge");
/// log::info!("now printed by dave-logs");
/// ```
pub fn init_log_bridge() -> crate::Result<()> {
    log::set_logger(&BRIDGE)?;

    let max_level = if ACTIVE.is_enabled() {
        LevelFilter::Trace
    } else {
        LevelFilter::Off
    };
    log::set_max_level(max_level);
    Ok(())
}
