use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter (e.g. `debug`, `unindent_io=trace`).
pub const LOG_ENV: &str = "UNINDENT_LOG";

/// Install a stderr logger. Stdout carries the unindented text and must stay byte-exact.
pub fn setup_logger() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
