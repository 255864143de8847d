use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;
use log::LevelFilter;

use crate::error::SimError;

// ISO 8601 timestamp and color coded level tag
const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

/// Install the global console logger. May only be called once per process.
pub fn init_logging(level: LevelFilter) -> Result<(), SimError> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .map_err(|e| SimError::Logging(e.to_string()))?;

    log4rs::init_config(config)
        .map(|_handle| ())
        .map_err(|e| SimError::Logging(e.to_string()))
}
