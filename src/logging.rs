use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so that stdout only carries the reports. `RUST_LOG`
/// wins over `default_level` when set.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
