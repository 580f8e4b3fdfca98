use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber as the global tracing dispatcher.
///
/// The `log` facade is left unclaimed so the fast_log file sink can still be
/// installed afterwards; `SubscriberInitExt::init` would take it via `LogTracer`.
pub fn init_tracing(default_filter: &str) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| format!("Failed to install tracing subscriber: {}", e))
}
