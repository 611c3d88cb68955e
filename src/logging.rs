use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber. `RUST_LOG` takes precedence over `level`.
/// Calling this more than once is harmless.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
