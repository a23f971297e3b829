//! `log` backend that forwards records to defmt over RTT.

use defmt::{debug, error, info, trace, warn, Display2Format};
use defmt_rtt as _;
use log::{Level, Metadata, Record, SetLoggerError};

struct DefmtLogger;

static LOGGER: DefmtLogger = DefmtLogger;

pub fn init(level: Level) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    set_level(level);
    Ok(())
}

pub fn set_level(level: Level) {
    log::set_max_level(level.to_level_filter());
}

impl log::Log for DefmtLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let args = Display2Format(record.args());
            match record.metadata().level() {
                Level::Trace => trace!("{}", args),
                Level::Debug => debug!("{}", args),
                Level::Info => info!("{}", args),
                Level::Warn => warn!("{}", args),
                Level::Error => error!("{}", args),
            }
        }
    }

    fn flush(&self) {}
}
