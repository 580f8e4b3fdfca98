use crate::domains::logger::{DomainLogger, DynLogger};
use std::sync::Arc;

/// Fans every diagnostic out to each attached sink, in order.
pub struct MultiLogger {
    sinks: Vec<DynLogger>,
}

impl MultiLogger {
    pub fn new(sinks: Vec<DynLogger>) -> Self {
        Self { sinks }
    }
}

impl DomainLogger for MultiLogger {
    fn info(&self, msg: &str) {
        self.sinks.iter().for_each(|s| s.info(msg));
    }

    fn warn(&self, msg: &str) {
        self.sinks.iter().for_each(|s| s.warn(msg));
    }

    fn error(&self, msg: &str) {
        self.sinks.iter().for_each(|s| s.error(msg));
    }
}

/// Console logger, plus a fast_log file sink when `path` is given and the
/// file logger can be installed.
pub fn init_combined_logger(path: Option<&str>) -> DynLogger {
    let console = crate::adapters::outbound::init_console_logger();
    let Some(path) = path else {
        return console;
    };
    match crate::adapters::outbound::file_logger::init_file_logger(path) {
        Ok(file_logger) => Arc::new(MultiLogger::new(vec![console, file_logger])) as DynLogger,
        Err(e) => {
            console.warn(&e);
            console
        }
    }
}
