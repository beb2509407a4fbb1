//! Logging configuration using tracing
//!
//! The server logs to stdout. Log level is controlled by the `NUWE_LOG`
//! environment variable, falling back to the configured default.
//!
//! # Examples
//! ```bash
//! NUWE_LOG=debug nuwe-server
//! ```

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging subsystem.
pub fn init(default_level: &str) {
    let env_filter = EnvFilter::try_from_env("NUWE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "nuwe_server={default_level},tower_http={default_level},warn"
        ))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();
}
