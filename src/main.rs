//! NUWE site server - binary entry point
//!
//! Boot order is deliberate: configuration is resolved first, and a missing
//! required value aborts the process before logging, the database pool, or
//! the HTTP listener come up. There is no degraded mode.

use std::path::PathBuf;

use clap::Parser;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use nuwe_core::prelude::*;

mod config;
mod db;
mod logging;

use config::ServerConfig;

/// NUWE site server - serves the built marketing site
#[derive(Parser, Debug)]
#[command(name = "nuwe-server")]
#[command(about = "Serves the NUWE marketing site", long_about = None)]
struct Args {
    /// Directory holding the built website (overrides NUWE_SITE_DIR)
    #[arg(long, value_name = "DIR")]
    site_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Fail-fast: a configuration fault surfaces before any other component
    // starts.
    let mut config = ServerConfig::from_env()?;
    if let Some(site_dir) = args.site_dir {
        config.site_dir = site_dir;
    }

    logging::init(&config.log_level);

    info!(bind = %config.bind_addr, site_dir = %config.site_dir.display(), "NUWE site server starting");

    // Placeholder persistence collaborator: nothing queries the pool yet,
    // but a failed connection must still abort startup.
    let pool = db::connect(&config).await?;

    let app = axum::Router::new()
        .fallback_service(ServeDir::new(&config.site_dir))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("NUWE site server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        return;
    }
    info!("shutdown signal received");
}
