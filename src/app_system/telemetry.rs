use crate::app_system::SystemConfig;

/// Installs the global `tracing` subscriber.
///
/// The filter comes from [`SystemConfig::log_filter`], e.g.
///
/// ```text
/// RUST_LOG=debug inventory                     # every request
/// RUST_LOG=inventory_ledger::inventory_actor=debug,info inventory
/// ```
///
/// Calling it again once a subscriber is installed does nothing.
pub fn setup_tracing(config: &SystemConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
