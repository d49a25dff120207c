use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `draft_synergy=trace`)
pub const LOG_ENV: &str = "DRAFT_SYNERGY_LOG";

/// Install the stderr log subscriber. Defaults to `warn` when the filter is unset.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
