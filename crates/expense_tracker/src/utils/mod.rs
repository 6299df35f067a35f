use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

/// Installs the global tracing subscriber. Logs go to stderr; `RUST_LOG`
/// refines the default `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
