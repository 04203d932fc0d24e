use std::io;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Diagnostics go to stderr, stdout is reserved for records.
pub fn init(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let _ = Registry::default()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new(default_level)))
        .try_init();
}
