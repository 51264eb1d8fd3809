use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for embedding applications.
///
/// Defaults to `info`; `RUST_LOG` overrides the filter. Safe to call
/// multiple times; subsequent calls are no-ops for the global subscriber.
pub fn init_default() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
