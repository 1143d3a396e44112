use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. Events go to stderr so converted values on
/// stdout stay machine-readable.
///
/// `RUST_LOG` wins over `level` when set.
pub fn init(level: &str) {
    let env_filter = std::env::var("RUST_LOG").map_or_else(
        |_| EnvFilter::new(format!("measureit={}", level)),
        EnvFilter::new,
    );

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .compact();

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
