//! Diagnostic logging setup.

/// Installs the stderr tracing subscriber at `level`.
///
/// The filter comes from the CLI flags only; `RUST_LOG` is not consulted.
pub(crate) fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::new(level);
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}
