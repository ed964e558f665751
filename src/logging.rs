//! file: logging.rs
//! author: Jacob Xie
//! date: 2025/12/21 10:05:40 Sunday
//! brief:

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the stderr subscriber. Reads `RUST_LOG`, defaults to `warn`.
///
/// ```bash
/// RUST_LOG=unique_walker=trace cargo run --features viewer
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
