use crate::domains::logger::DomainLogger;
use std::sync::Arc;

struct Console;

impl DomainLogger for Console {
    fn info(&self, msg: &str) { eprintln!("{}", msg); }
    fn warn(&self, msg: &str) { eprintln!("{}", msg); }
    fn error(&self, msg: &str) { eprintln!("{}", msg); }
}

/// Diagnostics straight to stderr, keeping stdout for the goal map and megaverse reports.
pub fn init_console_logger() -> Arc<dyn DomainLogger> {
    Arc::new(Console {})
}
