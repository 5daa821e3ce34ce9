use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. Filtering comes from `TASKCAST_LOG`,
/// defaulting to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("TASKCAST_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
