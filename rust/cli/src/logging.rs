//! Logging setup for the `war_game` binary.

/// Installs a stderr subscriber filtered by `WARSIM_LOG` (default `warn`).
///
/// Narration owns stdout, so diagnostics never share a stream with it. Calling
/// this twice is harmless; the second subscriber is simply not installed.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;

    let filter = EnvFilter::try_from_env("WARSIM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
