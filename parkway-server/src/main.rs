//! HTTP adapter over the park routing engine.
//!
//! Thin by design: every request resolves a wait snapshot through the
//! cached feed and calls into `parkway_core`; no planning logic lives here.

mod error;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use parkway_core::feed::{CachedFeed, CsvWaitFeed, WaitTimeSource};
use parkway_core::loading::{ParkModelConfig, create_park_model};

use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "parkway-server", about = "Park route optimization API")]
struct Args {
    /// TOML configuration with the catalog and feed paths
    #[arg(long, default_value = "demos/park/parkway.toml")]
    config: PathBuf,
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let raw = std::fs::read_to_string(&args.config)?;
    let config: ParkModelConfig = toml::from_str(&raw)?;

    let model = create_park_model(&config)?;
    let source: Box<dyn WaitTimeSource> = Box::new(CsvWaitFeed::new(&config.wait_times_path));
    let feed = CachedFeed::new(source, model.meta.feed_ttl, model.meta.default_wait);

    let app = routes::router(Arc::new(AppState::new(model, feed)));

    let listener = tokio::net::TcpListener::bind(args.listen).await?;
    info!("listening on {}", args.listen);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to install ctrl-c handler: {err}");
    }
}
