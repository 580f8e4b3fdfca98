use chrono::Utc;
use std::sync::Arc;

use crate::domains::logger::DomainLogger;

/// Forwards diagnostics into the `log` facade, which fast_log appends to a file.
struct FastLogBridge;

impl DomainLogger for FastLogBridge {
    fn info(&self, msg: &str) {
        log::info!("{} - {}", Utc::now().to_rfc3339(), msg);
    }

    fn warn(&self, msg: &str) {
        log::warn!("{} - {}", Utc::now().to_rfc3339(), msg);
    }

    fn error(&self, msg: &str) {
        log::error!("{} - {}", Utc::now().to_rfc3339(), msg);
    }
}

/// Install fast_log as the global `log` backend writing to `path` and return
/// a logger that feeds it. Fails if a global logger is already installed.
pub fn init_file_logger(path: &str) -> Result<Arc<dyn DomainLogger>, String> {
    fast_log::init(
        fast_log::config::Config::new()
            .file(path)
            .level(log::LevelFilter::Info),
    )
    .map_err(|e| format!("Failed to initialize fast_log at {}: {}", path, e))?;
    Ok(Arc::new(FastLogBridge {}))
}

/// Block until fast_log has written everything queued so far.
/// A no-op when no `log` backend is installed.
pub fn flush_file_logger() {
    log::logger().flush();
}
